//! Armament configuration with documented defaults
//!
//! Values here drive the command-line rearm driver. The ammo state machine
//! itself takes everything it needs from the weapon rules.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{ArmamentError, Result};

/// Configuration for a rearm run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmamentConfig {
    /// File or directory holding weapon and item rules (TOML)
    ///
    /// A directory is searched recursively for `.toml` files.
    pub rules_path: PathBuf,

    /// Seed for the rearm random source
    ///
    /// `None` draws a fresh seed per run. Set it to replay the exact
    /// sequence of statistical bullet saving rolls.
    pub seed: Option<u64>,

    /// Upper bound on rearm ticks for a single craft
    ///
    /// A craft whose supply runs dry stops rearming on its own; this only
    /// guards against rules with absurd capacities.
    pub max_rearm_ticks: u64,

    /// `tracing-subscriber` filter directive
    pub log_filter: String,
}

impl Default for ArmamentConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from("data/craft_weapons.toml"),
            seed: None,
            max_rearm_ticks: 1000,
            log_filter: "craft_armament=info".to_string(),
        }
    }
}

impl ArmamentConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ArmamentConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded armament config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_rearm_ticks == 0 {
            return Err(ArmamentError::InvalidConfig(
                "max_rearm_ticks must be at least 1".into(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ArmamentError::InvalidConfig("log_filter must not be empty".into()));
        }

        if self.rules_path.as_os_str().is_empty() {
            return Err(ArmamentError::InvalidConfig("rules_path must not be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArmamentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ArmamentConfig = toml::from_str("seed = 42\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_rearm_ticks, 1000);
        assert_eq!(config.log_filter, "craft_armament=info");
    }

    #[test]
    fn test_zero_ticks_rejected() {
        let config = ArmamentConfig {
            max_rearm_ticks: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ArmamentError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_shipped_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/armament.toml");
        let config = ArmamentConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(1999));
        assert_eq!(config.rules_path, PathBuf::from("data/craft_weapons.toml"));
    }
}
