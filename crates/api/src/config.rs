//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the RoomBook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Timeout for incoming and backend requests (default: 30)
//! - `BOOKING_BACKEND_URL`: Base URL of the booking REST backend (required)
//! - `BOOKING_BACKEND_TOKEN`: Service token used when a request carries none
//! - `BOOKING_OPEN_HOUR` / `BOOKING_CLOSE_HOUR`: First and last slot hour (default: 5 and 23)

use eyre::{Result, WrapErr, eyre};
use roombook_core::hours::{DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR, OperatingHours};
use std::env;
use tracing::Level;

/// Configuration for the RoomBook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use roombook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Base URL of the booking backend
    pub backend_url: String,

    /// Token sent to the backend when the incoming request has none
    pub backend_token: Option<String>,

    /// Bookable window of the day
    pub hours: OperatingHours,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The BOOKING_BACKEND_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The opening hours cannot be parsed or are out of range
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        // Backend settings
        let backend_url = lookup("BOOKING_BACKEND_URL")
            .ok_or_else(|| eyre!("BOOKING_BACKEND_URL environment variable must be set"))?;
        let backend_token = lookup("BOOKING_BACKEND_TOKEN").filter(|token| !token.is_empty());

        // Operating hours
        let open_hour = parse_hour(&lookup, "BOOKING_OPEN_HOUR", DEFAULT_OPEN_HOUR)?;
        let close_hour = parse_hour(&lookup, "BOOKING_CLOSE_HOUR", DEFAULT_CLOSE_HOUR)?;
        let hours = OperatingHours::new(open_hour, close_hour)
            .map_err(|e| eyre!("Invalid operating hours: {}", e))?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            backend_url,
            backend_token,
            hours,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_hour<F>(lookup: &F, key: &str, default: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value", key)),
        None => Ok(default),
    }
}
