use std::time::Duration;

const ENV_ENDPOINT: &str = "CLAIMGUARD_ENDPOINT";
const ENV_TIMEOUT_SECS: &str = "CLAIMGUARD_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "https://claimguard-v1.onrender.com/predict";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prediction endpoint (receives the POST)
    pub endpoint: String,
    /// Client timeout. `None` leaves the transport defaults alone.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(ENV_ENDPOINT).ok(),
            std::env::var(ENV_TIMEOUT_SECS).ok(),
        )
    }

    /// Build from raw variable values. Blank or invalid values fall back to defaults.
    pub fn from_vars(endpoint: Option<String>, timeout_secs: Option<String>) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = timeout_secs
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self { endpoint, timeout }
    }
}
