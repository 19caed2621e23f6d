//! Classifier defaults: the chain and token assumed when a payload omits them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{normalize_evm_address, AddressValidationError};

/// Base mainnet.
pub const BASE_CHAIN_ID: u64 = 8453;
/// USDC on Base.
pub const BASE_USDC_ADDRESS: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse classifier config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("default_chain_id must be greater than 0")]
    ZeroChainId,
    #[error("default_token is not a valid EVM address: {0}")]
    InvalidToken(#[from] AddressValidationError),
}

/// Network and token assumed for EVM payloads that do not name them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub default_chain_id: u64,
    pub default_token: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_chain_id: BASE_CHAIN_ID,
            default_token: BASE_USDC_ADDRESS.to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validated()
    }

    /// Check the values and checksum the default token.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.default_chain_id == 0 {
            return Err(ConfigError::ZeroChainId);
        }
        self.default_token = normalize_evm_address(&self.default_token)?;
        Ok(self)
    }
}
