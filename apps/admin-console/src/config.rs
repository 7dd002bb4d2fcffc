//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Currency symbol used when rendering hourly rates.
    pub currency: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            currency: env::var("CURRENCY").unwrap_or_else(|_| "₹".to_string()),
        }
    }
}
