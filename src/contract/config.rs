//! Contract configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::project::{ports::composite_key, services::DEFAULT_INDEX_NAMESPACE};

/// Errors raised while loading a [`ContractConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this type.
    #[error("invalid contract configuration: {0}")]
    Parse(String),

    /// The index namespace is empty.
    #[error("index namespace must not be empty")]
    EmptyIndexNamespace,

    /// The index namespace cannot be used in a composite key.
    #[error("invalid index namespace: {0}")]
    InvalidIndexNamespace(String),
}

/// Tunable settings for [`super::ProjectContract`].
///
/// # Examples
///
/// ```
/// use clearance::contract::ContractConfig;
///
/// let config = ContractConfig::default();
/// assert_eq!(config.index_namespace, "project~name");
///
/// let custom = ContractConfig::from_json(r#"{"log_history_payload": true}"#)
///     .expect("valid configuration");
/// assert!(custom.log_history_payload);
/// assert_eq!(custom.index_namespace, "project~name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Namespace of the `(location, name)` composite index.
    pub index_namespace: String,
    /// Whether rendered history payloads are logged at debug level.
    pub log_history_payload: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            index_namespace: DEFAULT_INDEX_NAMESPACE.to_owned(),
            log_history_payload: false,
        }
    }
}

impl ContractConfig {
    /// Parses a configuration from JSON, filling omitted fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or the first error
    /// reported by [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the contract cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyIndexNamespace`] when the namespace is
    /// blank or [`ConfigError::InvalidIndexNamespace`] when it contains a
    /// character reserved by composite keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_namespace.trim().is_empty() {
            return Err(ConfigError::EmptyIndexNamespace);
        }
        composite_key(&self.index_namespace, &[])
            .map_err(|err| ConfigError::InvalidIndexNamespace(err.to_string()))?;
        Ok(())
    }
}
