//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `BASE_URL` - Public base for generated short links
//!   (default: `http://localhost:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - When `true`/`1`, the client address for click events
//!   is read from `X-Forwarded-For` / `X-Real-IP`. Enable only behind a
//!   trusted reverse proxy.
//! - `DEFAULT_VALIDITY_MINUTES` - Validity window applied when a request
//!   omits one (default: 30)
//! - `MAX_GENERATION_ATTEMPTS` - Collision retry budget for generated
//!   shortcodes (default: 10)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, click tracking reads the client IP from
    /// X-Forwarded-For / X-Real-IP headers.
    pub behind_proxy: bool,
    /// Validity window in minutes applied when a create request omits one.
    pub default_validity_minutes: i64,
    /// How many random codes the generator may try before giving up.
    pub max_generation_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let max_generation_attempts = env::var("MAX_GENERATION_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            behind_proxy,
            default_validity_minutes,
            max_generation_attempts,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `default_validity_minutes` is not positive
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.default_validity_minutes < 1 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be at least 1, got {}",
                self.default_validity_minutes
            );
        }

        if self.max_generation_attempts == 0 || self.max_generation_attempts > 1000 {
            anyhow::bail!(
                "MAX_GENERATION_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_generation_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!(
            "  Max generation attempts: {}",
            self.max_generation_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8000".to_string(),
            base_url: "http://localhost:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            default_validity_minutes: 30,
            max_generation_attempts: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:8000".to_string();

        config.base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://s.example.com".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.default_validity_minutes = 0;
        assert!(config.validate().is_err());
        config.default_validity_minutes = 30;

        config.max_generation_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("LOG_FORMAT");
            env::remove_var("BEHIND_PROXY");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
            env::remove_var("MAX_GENERATION_ATTEMPTS");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.log_format, "text");
        assert!(!config.behind_proxy);
        assert_eq!(config.default_validity_minutes, 30);
        assert_eq!(config.max_generation_attempts, 10);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("BEHIND_PROXY", "true");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "5");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.base_url, "https://s.example.com");
        assert!(config.behind_proxy);
        assert_eq!(config.default_validity_minutes, 5);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("BEHIND_PROXY");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_validity_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DEFAULT_VALIDITY_MINUTES", "soon");
        }

        let config = Config::from_env();
        assert_eq!(config.default_validity_minutes, 30);

        unsafe {
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
        }
    }
}
