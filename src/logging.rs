//! stderr logging for dirsim.
//!
//! Uses the `log` facade with an `env_logger` backend. stdout is reserved for
//! the report, so every record goes to stderr.
//!
//! The filter comes from `RUST_LOG` when it is set. Otherwise `-q` keeps
//! errors only, and each `-v` raises the level one step from `info`.
//!
//! ```rust,no_run
//! dirsim::logging::init_logging(2, false);
//! log::trace!("histogram built");
//! ```

use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(verbose: u8, quiet: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();

    let mut builder = Builder::new();
    builder.target(Target::Stderr);
    match &rust_log {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => {
            builder.filter_level(level_from_flags(verbose, quiet));
        }
    }

    // Debug builds stamp each record; -v adds the emitting module
    let timestamps = cfg!(debug_assertions);
    let module_path = timestamps && verbose > 0;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        if timestamps {
            let ts = buf.timestamp_seconds();
            write!(buf, "{ts} ")?;
        }
        write!(buf, "{style}{:<5}{style:#} ", record.level())?;
        if module_path {
            write!(buf, "[{}] ", record.module_path().unwrap_or("?"))?;
        }
        writeln!(buf, "{}", record.args())
    });

    if builder.try_init().is_ok() {
        match rust_log {
            Some(filter) => log::debug!("Log filter from RUST_LOG: {}", filter),
            None => log::debug!("Log level: {}", level_from_flags(verbose, quiet)),
        }
    }
}

fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}
