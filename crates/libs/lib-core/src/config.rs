//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! to fail fast if misconfigured.
//!
//! Configuration is passed explicitly through the application state rather
//! than exposed as an ambient global, so handlers and services declare the
//! config they depend on.
//!
//! ## Environment Variables
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `KELO_ENV` | no | `development` |
//! | `KELO_IDENTITY_URL` | yes | - |
//! | `KELO_WALLET_URL` | yes | - |
//! | `KELO_AUTH_COOKIE` | no | `kelo_auth_token` |
//! | `KELO_MPESA_SHORTCODE` | yes | - |
//! | `KELO_MPESA_PASSKEY` | yes | - |
//!
//! The M-Pesa gateway credentials are deliberately sourced from the
//! environment and never stored as in-repo literals.

use crate::error::{AppError, Result};
use lib_utils::{get_env, get_env_or, validate_not_empty};
use std::str::FromStr;

/// Deployment environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(AppError::Config(format!(
                "KELO_ENV must be development or production, got: {}",
                other
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Deployment environment; controls cookie security attributes and
    /// which connector chains are offered.
    pub environment: Environment,

    /// Base URL of the external identity service that validates session tokens.
    pub identity_service_url: String,

    /// Base URL of the external smart-wallet service.
    pub wallet_service_url: String,

    /// Name of the session cookie cleared on logout.
    pub auth_cookie_name: String,

    /// M-Pesa paybill shortcode for the payment gateway.
    pub mpesa_shortcode: String,

    /// M-Pesa STK-push passkey for the payment gateway.
    pub mpesa_passkey: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let environment: Environment = get_env_or("KELO_ENV", "development").parse()?;

        let identity_service_url = get_env("KELO_IDENTITY_URL")
            .map_err(|e| AppError::Config(e.to_string()))?;
        let wallet_service_url = get_env("KELO_WALLET_URL")
            .map_err(|e| AppError::Config(e.to_string()))?;

        let auth_cookie_name = get_env_or("KELO_AUTH_COOKIE", "kelo_auth_token");

        let mpesa_shortcode = get_env("KELO_MPESA_SHORTCODE")
            .map_err(|e| AppError::Config(e.to_string()))?;
        let mpesa_passkey = get_env("KELO_MPESA_PASSKEY")
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            environment,
            identity_service_url,
            wallet_service_url,
            auth_cookie_name,
            mpesa_shortcode,
            mpesa_passkey,
        })
    }

    /// Validate configuration values against deployment rules.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("KELO_IDENTITY_URL", &self.identity_service_url),
            ("KELO_WALLET_URL", &self.wallet_service_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Config(format!("{} must be an http(s) URL", name)));
            }
        }

        validate_not_empty(&self.auth_cookie_name, "KELO_AUTH_COOKIE")
            .map_err(AppError::Config)?;

        if self.is_production()
            && (self.mpesa_shortcode.trim().is_empty() || self.mpesa_passkey.trim().is_empty())
        {
            return Err(AppError::Config(
                "M-Pesa gateway credentials must be set in production".to_string(),
            ));
        }

        Ok(())
    }

    /// True when running in the production environment.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes the tests that mutate KELO_* environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn valid_config() -> Config {
        Config {
            environment: Environment::Development,
            identity_service_url: "https://identity.kelo.test".to_string(),
            wallet_service_url: "https://wallets.kelo.test".to_string(),
            auth_cookie_name: "kelo_auth_token".to_string(),
            mpesa_shortcode: "174379".to_string(),
            mpesa_passkey: "test-passkey".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = valid_config();
        config.identity_service_url = "ftp://identity.kelo.test".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_gateway_secrets_in_production() {
        let mut config = valid_config();
        config.environment = Environment::Production;
        config.mpesa_passkey = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_gateway_secrets_allowed_in_development() {
        let mut config = valid_config();
        config.mpesa_passkey = "".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_fails_fast_when_identity_url_is_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("KELO_IDENTITY_URL");
        std::env::set_var("KELO_WALLET_URL", "https://wallets.kelo.test");
        std::env::set_var("KELO_MPESA_SHORTCODE", "174379");
        std::env::set_var("KELO_MPESA_PASSKEY", "test-passkey");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("KELO_IDENTITY_URL"));
    }

    #[test]
    fn test_from_env_loads_complete_environment_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("KELO_IDENTITY_URL", "https://identity.kelo.test");
        std::env::set_var("KELO_WALLET_URL", "https://wallets.kelo.test");
        std::env::set_var("KELO_MPESA_SHORTCODE", "174379");
        std::env::set_var("KELO_MPESA_PASSKEY", "test-passkey");
        std::env::remove_var("KELO_ENV");
        std::env::remove_var("KELO_AUTH_COOKIE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.auth_cookie_name, "kelo_auth_token");
        assert_eq!(config.identity_service_url, "https://identity.kelo.test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "dev".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert!("staging".parse::<Environment>().is_err());
    }
}
