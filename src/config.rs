//! Application configuration management.
//!
//! Settings are merged in layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config PATH`, or `config.toml` in the platform config dir)
//! 3. `DIRSIM_*` environment variables (e.g. `DIRSIM_DIGEST=blake3`)
//! 4. CLI flags
//!
//! The threshold and directories are never configured here; they are part of
//! each invocation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, OutputFormat};
use crate::compare::CompareConfig;
use crate::scanner::DigestAlgorithm;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DIRSIM_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content digest used for the identity check.
    pub digest: DigestAlgorithm,
    /// Report format.
    pub output: OutputFormat,
    /// Sort directory listings by file name.
    pub sort_listing: bool,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A file that cannot be parsed is reported and defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    log::warn!("Config file {} not found, using defaults", p.display());
                }
                Some(p.to_path_buf())
            }
            None => Self::config_path(),
        };

        match Self::figment(path.as_deref()).extract::<Self>() {
            Ok(config) => {
                log::debug!("Loaded configuration: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific TOML file plus environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment variable holds an
    /// invalid value.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config = Self::figment(Some(path)).extract()?;
        Ok(config)
    }

    /// Defaults, then the optional TOML file, then the environment.
    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Apply CLI overrides on top of the loaded configuration.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(digest) = cli.digest {
            self.digest = digest;
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        if cli.sort {
            self.sort_listing = true;
        }
    }

    /// Comparison settings derived from this configuration.
    #[must_use]
    pub fn compare_config(&self) -> CompareConfig {
        CompareConfig::default()
            .with_digest(self.digest)
            .with_sorted_listing(self.sort_listing)
    }

    /// Get the default platform-specific configuration path.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "dirsim", "dirsim").map(|d| d.config_dir().join("config.toml"))
    }
}
