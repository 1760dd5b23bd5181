//! Registry configuration

use serde::Deserialize;

use domain_claims::MIN_PROOF_LENGTH;
use domain_matching::MatchingConfig;
use crate::error::RegistryError;

/// Prefix for environment variables read by [`RegistryConfig::from_env`]
pub const ENV_PREFIX: &str = "LOSTFOUND";

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Shortest ownership proof accepted with a claim
    pub min_proof_length: usize,
    /// Matching weights and threshold
    pub matching: MatchingConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            min_proof_length: MIN_PROOF_LENGTH,
            matching: MatchingConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from `LOSTFOUND__*` environment variables
    ///
    /// Nested fields use a double underscore, e.g.
    /// `LOSTFOUND__MATCHING__MIN_SCORE=50`. Unset fields keep their defaults.
    pub fn from_env() -> Result<Self, RegistryError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, RegistryError> {
        let config: RegistryConfig = config::Config::builder()
            .add_source(environment.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the registry cannot work with
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.matching.date_window_days < 0 {
            return Err(RegistryError::Configuration(format!(
                "matching.date_window_days must not be negative, got {}",
                self.matching.date_window_days
            )));
        }
        Ok(())
    }
}
