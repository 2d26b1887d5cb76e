//! Configuration module for the facility dashboard.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the facility API the four reads are issued against
    pub upstream_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let upstream_url = env::var("DASHBOARD_UPSTREAM_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string())
            .trim_end_matches('/')
            .to_string();
        if upstream_url.is_empty() {
            return Err(AppError::Config(
                "DASHBOARD_UPSTREAM_URL must not be empty".to_string(),
            ));
        }

        let bind_addr = env::var("DASHBOARD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid DASHBOARD_BIND_ADDR format: {}", e)))?;

        let log_level = env::var("DASHBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = match env::var("DASHBOARD_LOG_FORMAT") {
            Ok(format) if format.eq_ignore_ascii_case("json") => true,
            Ok(format) if format.eq_ignore_ascii_case("text") => false,
            Ok(format) => {
                return Err(AppError::Config(format!(
                    "Invalid DASHBOARD_LOG_FORMAT {} (expected text or json)",
                    format
                )))
            }
            Err(_) => false,
        };

        Ok(Self {
            upstream_url,
            bind_addr,
            log_level,
            log_json,
        })
    }
}
