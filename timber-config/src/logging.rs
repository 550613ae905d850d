use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Used when `RUST_LOG` is not set.
    pub level: String,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
    /// Also write the log to this file. Empty disables the file log.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            threads: false,
            color: true,
            timestamp: true,
            file: String::new(),
        }
    }
}
