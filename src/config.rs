//! Chaincode configuration.
//!
//! Loaded from an optional `asset_ledger.toml` next to the process, then
//! overridden by `ASSET_LEDGER__*` environment variables, e.g.
//! `ASSET_LEDGER__CAR_RANGE__END=CAR99`.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Default configuration file stem.
pub const CONFIG_FILE: &str = "asset_ledger";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ASSET_LEDGER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub car_range: KeyRange,
}

/// Half-open key range `[start, end)`, compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRange {
    #[serde(default = "default_car_start")]
    pub start: String,
    #[serde(default = "default_car_end")]
    pub end: String,
}

fn default_name() -> String {
    "fabcar".to_string()
}

fn default_car_start() -> String {
    "CAR0".to_string()
}

// Literal string bound, not an asset count.
fn default_car_end() -> String {
    "CAR999".to_string()
}

impl Default for KeyRange {
    fn default() -> Self {
        Self {
            start: default_car_start(),
            end: default_car_end(),
        }
    }
}

impl KeyRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            car_range: KeyRange::default(),
        }
    }
}

impl ChaincodeConfig {
    /// Load from `asset_ledger.toml` (optional) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from the named file (optional, any format `config` understands)
    /// and the environment.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::Message("name must not be empty".to_string()));
        }
        if self.car_range.start >= self.car_range.end {
            return Err(ConfigError::Message(format!(
                "car_range start {:?} must sort before end {:?}",
                self.car_range.start, self.car_range.end
            )));
        }
        Ok(())
    }
}
