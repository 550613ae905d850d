use log::{info, warn};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{fs, io, path::Path};
use thiserror::Error;

mod logging;
mod tree_feller;

pub use logging::LoggingConfig;
pub use tree_feller::TreeFellerConfig;

/// Above this the leaf sweep touches more than 4913 blocks per felled log.
const LARGE_LEAF_RADIUS: u32 = 8;

#[derive(Error, Debug)]
pub enum LoadConfigurationError {
    #[error("couldn't read configuration file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("couldn't parse configuration file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimberConfig {
    pub tree_feller: TreeFellerConfig,
    pub logging: LoggingConfig,
}

pub trait LoadConfiguration {
    /// Reads the configuration from `config_dir`, writing the defaults there first
    /// if no file exists yet.
    fn load(config_dir: &Path) -> Result<Self, LoadConfigurationError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content =
                fs::read_to_string(&path).map_err(|source| LoadConfigurationError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
            toml::from_str(&file_content).map_err(|source| LoadConfigurationError::Parse {
                path: path.display().to_string(),
                source,
            })?
        } else {
            let content = Self::default();
            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::create_dir_all(config_dir)
                        .and_then(|()| fs::write(&path, serialized))
                    {
                        warn!(
                            "Couldn't write default config to {}. Reason: {err}",
                            path.display()
                        );
                    } else {
                        info!("Wrote default configuration to {}", path.display());
                    }
                }
                Err(err) => warn!("Couldn't serialize default config: {err}"),
            }
            content
        };

        config.validate();
        Ok(config)
    }

    fn get_path() -> &'static Path;

    /// Logs suspicious but usable values. Nothing here is fatal.
    fn validate(&self);
}

impl LoadConfiguration for TimberConfig {
    fn get_path() -> &'static Path {
        Path::new("timber.toml")
    }

    fn validate(&self) {
        let feller = &self.tree_feller;
        if feller.tools.is_empty() {
            warn!("No tree feller tools are configured, trees will never be felled");
        }
        if feller.log_limit < 0 {
            warn!(
                "tree_feller.log_limit is negative ({}), using {}",
                feller.log_limit,
                feller.log_limit.unsigned_abs()
            );
        }
        if feller.leaf_radius < 0 {
            warn!(
                "tree_feller.leaf_radius is negative ({}), using {}",
                feller.leaf_radius,
                feller.leaf_radius.unsigned_abs()
            );
        }
        if feller.pop_leaves && feller.leaf_radius.unsigned_abs() > LARGE_LEAF_RADIUS {
            warn!(
                "tree_feller.leaf_radius {} is very large, felling will be slow",
                feller.leaf_radius
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadConfiguration, LoadConfigurationError, TimberConfig};
    use std::fs;

    #[test]
    fn writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = TimberConfig::load(dir.path()).unwrap();
        assert_eq!(config, TimberConfig::default());

        let written = fs::read_to_string(dir.path().join("timber.toml")).unwrap();
        assert!(written.contains("[tree_feller]"));
        assert!(written.contains("\"minecraft:golden_axe\""));
        assert!(written.contains("log_limit = 250"));
        assert!(written.contains("leaf_radius = 3"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("timber.toml"),
            "[tree_feller]\nlog_limit = -40\ntools = [\"minecraft:shears\"]\n",
        )
        .unwrap();

        let config = TimberConfig::load(dir.path()).unwrap();
        assert_eq!(config.tree_feller.log_limit, -40);
        assert_eq!(config.tree_feller.tools, vec!["minecraft:shears".to_string()]);
        assert!(config.tree_feller.pop_leaves);
        assert_eq!(config.tree_feller.leaf_radius, 3);
        assert!(config.logging.enabled);
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("timber.toml"), "[tree_feller\nlog_limit = ").unwrap();

        let result = TimberConfig::load(dir.path());
        assert!(matches!(result, Err(LoadConfigurationError::Parse { .. })));
    }

    #[test]
    fn defaults_survive_a_round_trip() {
        let config = TimberConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: TimberConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
