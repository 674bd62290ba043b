//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional (all have defaults suitable for local development)
//! - `MORRIS_HOST` - Bind address (default: 127.0.0.1)
//! - `MORRIS_PORT` - Listen port (default: 3000)
//! - `MORRIS_DATA_DIR` - Directory for the JSON ledgers (default: ./data)
//! - `ORDER_INTAKE_URL` - Order notification form endpoint
//! - `ORDER_INTAKE_TIMEOUT_SECS` - Intake request timeout (default: 10)
//! - `WHATSAPP_NUMBER` - Number the order receipt is handed off to
//! - `ADMIN_PASSPHRASE` - Passphrase for the admin overview (a plain string
//!   compare, explicitly not a security boundary)
//! - `CHECKOUT_POLICY` - `blocking` or `best-effort` (default: blocking)
//! - `GEMINI_API_KEY` - Enables the cake consultation service
//! - `GEMINI_MODEL` - Consultation model (default: gemini-3-flash-preview)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Policy for a failed order-intake notification during checkout.
///
/// The local ledger commit always precedes the intake call and is never
/// rolled back; the policy only decides what happens after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPolicy {
    /// Intake failure fails the checkout: the cart is kept so the customer
    /// can retry, and no messaging handoff happens.
    #[default]
    Blocking,
    /// Intake is fire-and-forget: failure is logged and the checkout
    /// proceeds to the messaging handoff.
    BestEffort,
}

impl std::str::FromStr for CheckoutPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blocking" => Ok(Self::Blocking),
            "best-effort" => Ok(Self::BestEffort),
            _ => Err(format!(
                "invalid checkout policy: {s} (expected 'blocking' or 'best-effort')"
            )),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the persisted JSON ledgers
    pub data_dir: PathBuf,
    /// Order intake configuration
    pub intake: IntakeConfig,
    /// WhatsApp number for the order receipt handoff (with leading `+`)
    pub whatsapp_number: String,
    /// Admin overview passphrase
    pub admin_passphrase: String,
    /// What a failed intake call does to the checkout
    pub checkout_policy: CheckoutPolicy,
    /// Cake consultation configuration
    pub consult: ConsultConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Order intake endpoint configuration.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Form endpoint that receives the order notification POST
    pub endpoint: String,
    /// Request timeout; a timeout counts as an intake failure
    pub timeout: Duration,
}

/// Cake consultation (recommendation) configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ConsultConfig {
    /// Gemini API key; without one the canned fallback is always served
    pub api_key: Option<SecretString>,
    /// Model used for consultations
    pub model: String,
}

impl std::fmt::Debug for ConsultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsultConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .finish()
    }
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

        let host = get_env_or_default("MORRIS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MORRIS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MORRIS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MORRIS_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("MORRIS_DATA_DIR", "./data"));

        let intake = IntakeConfig::from_env()?;
        let whatsapp_number = get_env_or_default("WHATSAPP_NUMBER", "+256764875008");
        let admin_passphrase = get_env_or_default("ADMIN_PASSPHRASE", "morris123");
        let checkout_policy = get_env_or_default("CHECKOUT_POLICY", "blocking")
            .parse::<CheckoutPolicy>()
            .map_err(|e| ConfigError::InvalidEnvVar("CHECKOUT_POLICY".to_string(), e))?;
        let consult = ConsultConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            data_dir,
            intake,
            whatsapp_number,
            admin_passphrase,
            checkout_policy,
            consult,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl IntakeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let endpoint = get_env_or_default("ORDER_INTAKE_URL", "https://formspree.io/f/maqwvpja");
        let timeout_secs = get_env_or_default("ORDER_INTAKE_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_INTAKE_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl ConsultConfig {
    fn from_env() -> Self {
        Self {
            api_key: get_optional_env("GEMINI_API_KEY").map(SecretString::from),
            model: get_env_or_default("GEMINI_MODEL", "gemini-3-flash-preview"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
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
    fn test_checkout_policy_parse() {
        assert_eq!(
            "blocking".parse::<CheckoutPolicy>().unwrap(),
            CheckoutPolicy::Blocking
        );
        assert_eq!(
            "best-effort".parse::<CheckoutPolicy>().unwrap(),
            CheckoutPolicy::BestEffort
        );
        assert!("besteffort".parse::<CheckoutPolicy>().is_err());
        assert!("".parse::<CheckoutPolicy>().is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_dir: PathBuf::from("./data"),
            intake: IntakeConfig {
                endpoint: "https://formspree.io/f/test".to_string(),
                timeout: Duration::from_secs(10),
            },
            whatsapp_number: "+256764875008".to_string(),
            admin_passphrase: "morris123".to_string(),
            checkout_policy: CheckoutPolicy::default(),
            consult: ConsultConfig {
                api_key: None,
                model: "gemini-3-flash-preview".to_string(),
            },
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_consult_config_debug_redacts_api_key() {
        let config = ConsultConfig {
            api_key: Some(SecretString::from("super-secret-gemini-key")),
            model: "gemini-3-flash-preview".to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-gemini-key"));
    }
}
