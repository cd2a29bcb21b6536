//! Server configuration from environment variables.

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the catalog CSV loaded once at startup.
    pub dataset_path: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            dataset_path: std::env::var("ORRERY_DATASET")
                .unwrap_or_else(|_| "cleaned_planets.csv".to_string()),
            port: std::env::var("ORRERY_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid ORRERY_PORT")?,
        })
    }
}
