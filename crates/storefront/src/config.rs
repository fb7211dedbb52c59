//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults give a working local setup.
//!
//! - `LUBEMART_DATA_DIR` - Directory for persisted state (default: `.lubemart`)
//! - `LUBEMART_SIMULATED_LATENCY_MS` - Simulated network latency for login,
//!   signup, and checkout, in milliseconds (default: 1000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".lubemart";
const DEFAULT_LATENCY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file-backed storage writes its documents into.
    pub data_dir: PathBuf,
    /// Artificial delay applied to login, signup, and checkout, standing in
    /// for the network round-trip a real backend would cost. Without it the
    /// pending states would never be observable.
    pub simulated_latency: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LUBEMART_DATA_DIR", DEFAULT_DATA_DIR));

        let latency_ms = match std::env::var("LUBEMART_SIMULATED_LATENCY_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "LUBEMART_SIMULATED_LATENCY_MS".to_string(),
                    e.to_string(),
                )
            })?,
            Err(_) => DEFAULT_LATENCY_MS,
        };

        Ok(Self {
            data_dir,
            simulated_latency: Duration::from_millis(latency_ms),
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            simulated_latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".lubemart"));
        assert_eq!(config.simulated_latency, Duration::from_millis(1000));
    }
}
