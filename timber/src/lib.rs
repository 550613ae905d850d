use log::{Level, LevelFilter};
use simplelog::{CombinedLogger, SharedLogger, WriteLogger};
use std::fs::File;
use std::str::FromStr;
use timber_config::LoggingConfig;

pub mod error;
pub mod event;
pub mod feller;
pub mod item;
pub mod notify;
pub mod thread;
pub mod tool;
pub mod world;

pub use error::TreeFellerError;
pub use feller::{FellOutcome, FellerSettings, TreeFeller};

/// Builds the console logger, plus a file logger if one is configured.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `None` when logging
/// is disabled.
pub fn build_logger(config: &LoggingConfig) -> Option<(Box<CombinedLogger>, LevelFilter)> {
    if !config.enabled {
        return None;
    }

    let mut builder = simplelog::ConfigBuilder::new();

    if config.timestamp {
        builder.set_time_format_custom(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));
        builder.set_time_level(LevelFilter::Trace);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }

    if config.threads {
        builder.set_thread_level(LevelFilter::Info);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }

    // The file never gets colors
    let file_config = builder.build();

    if config.color {
        // We are technically logging to a file-like object.
        builder.set_write_log_enable_colors(true);
    } else {
        for level in Level::iter() {
            builder.set_level_color(level, None);
        }
    }

    let level = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(LevelFilter::from_str)
        .and_then(Result::ok)
        .or_else(|| LevelFilter::from_str(&config.level).ok())
        .unwrap_or(LevelFilter::Info);

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(WriteLogger::new(level, builder.build(), std::io::stdout()));

    if !config.file.is_empty() {
        match File::create(&config.file) {
            Ok(file) => loggers.push(WriteLogger::new(level, file_config, file)),
            // No logger is installed yet
            Err(e) => eprintln!("Failed to open log file {}: {e}", config.file),
        }
    }

    Some((CombinedLogger::new(loggers), level))
}

#[macro_export]
macro_rules! init_log {
    ($config:expr) => {
        if let Some((logger, level)) = $crate::build_logger($config) {
            if log::set_boxed_logger(logger).is_ok() {
                log::set_max_level(level);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::build_logger;
    use timber_config::LoggingConfig;

    #[test]
    fn disabled_logging_builds_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(build_logger(&config).is_none());
    }

    #[test]
    fn unwritable_file_still_logs_to_console() {
        let config = LoggingConfig {
            file: "/this/directory/does/not/exist/timber.log".to_string(),
            color: false,
            ..Default::default()
        };
        assert!(build_logger(&config).is_some());
    }
}
