//! Logger initialization.
//!
//! The player owns the alternate screen, so anything written to stderr while
//! the cube is spinning would land on top of the frame. Logs go to a file when
//! one is configured and are held at `warn` on stderr otherwise.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "ascii_cube::driver=trace").
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub file: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let default_level = if config.file.is_some() {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        };

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(default_level);
        }

        if let Some(path) = &config.file {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                    builder.write_style(env_logger::WriteStyle::Never);
                }
                Err(e) => eprintln!("Warning: cannot open log file {} ({e})", path.display()),
            }
        }

        // Another logger may already be installed (tests, embedding apps).
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
}
