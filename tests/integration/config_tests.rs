use dirsim::cli::OutputFormat;
use dirsim::config::Config;
use dirsim::scanner::DigestAlgorithm;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all DIRSIM_* environment variables to avoid interference.
fn clear_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with("DIRSIM_") {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn test_config_load_from_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "digest = \"blake3\"\noutput = \"json\"\n").unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.digest, DigestAlgorithm::Blake3);
    assert_eq!(config.output, OutputFormat::Json);
    assert!(!config.sort_listing);
}

#[test]
fn test_config_env_overrides_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "output = \"json\"\nsort_listing = false\n").unwrap();

    std::env::set_var("DIRSIM_OUTPUT", "csv");
    std::env::set_var("DIRSIM_SORT_LISTING", "true");
    let config = Config::load_from_path(&path).unwrap();
    clear_env();

    assert_eq!(config.output, OutputFormat::Csv);
    assert!(config.sort_listing);
}

#[test]
fn test_config_env_only() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    std::env::set_var("DIRSIM_DIGEST", "blake3");
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("DIRSIM_"))
        .extract()
        .unwrap();
    clear_env();

    assert_eq!(config.digest, DigestAlgorithm::Blake3);
}

#[test]
fn test_config_invalid_value_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "digest = \"md5\"\n").unwrap();

    assert!(Config::load_from_path(&path).is_err());
}

#[test]
fn test_config_invalid_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is not [valid toml").unwrap();

    let config = Config::load(Some(&path));
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = tempdir().unwrap();

    let config = Config::load(Some(&dir.path().join("absent.toml")));
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_unknown_keys_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "threshold = 90\nsort_listing = true\n").unwrap();

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .extract()
        .unwrap();
    assert!(config.sort_listing);
}
