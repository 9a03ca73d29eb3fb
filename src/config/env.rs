// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8002)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Base URL of the geocoding provider (Nominatim-compatible)
    pub geocoding_base_url: String,

    /// Base URL of the map-data provider (Overpass-compatible)
    pub overpass_base_url: String,

    /// User-Agent sent with every outbound provider request
    pub user_agent: String,

    /// Per-call timeout for upstream requests, in seconds
    pub upstream_timeout_secs: u64,

    /// Search radius around the resolved town center, in meters
    pub search_radius_m: u32,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env.local or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env.local file if it exists
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8002".to_string())
                .parse()
                .unwrap_or(8002),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            geocoding_base_url: env::var("GEOCODING_BASE_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),

            overpass_base_url: env::var("OVERPASS_BASE_URL")
                .unwrap_or_else(|_| "https://overpass-api.de".to_string()),

            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| "ExploreTownApp/1.0".to_string()),

            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            search_radius_m: env::var("SEARCH_RADIUS_M")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.geocoding_base_url.is_empty() {
            return Err("GEOCODING_BASE_URL is required".to_string());
        }

        if self.overpass_base_url.is_empty() {
            return Err("OVERPASS_BASE_URL is required".to_string());
        }

        if self.upstream_timeout_secs == 0 {
            return Err("UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string());
        }

        if self.search_radius_m == 0 {
            return Err("SEARCH_RADIUS_M must be greater than zero".to_string());
        }

        Ok(())
    }
}
