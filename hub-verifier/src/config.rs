//! Configuration module for environment variable parsing.
//!
//! Everything is read once at startup and held read-only for the lifetime of
//! the process.

use std::env;
use std::fmt;

use tracing::{error, warn};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

/// Expected-token configuration for the verification handshake.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VerificationConfig {
    expected_token: Option<String>,
}

impl VerificationConfig {
    /// Build a configuration from an optional token.
    ///
    /// Blank tokens are treated as missing so that an empty `hub.verify_token`
    /// can never satisfy the check.
    pub fn new(expected_token: Option<String>) -> Self {
        Self {
            expected_token: expected_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Configuration with a known token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(Some(token.into()))
    }

    /// Configuration with no token at all.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn expected_token(&self) -> Option<&str> {
        self.expected_token.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.expected_token.is_some()
    }
}

impl fmt::Debug for VerificationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationConfig")
            .field(
                "expected_token",
                &self.expected_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Route the verification handler is mounted on
    pub webhook_path: String,

    /// Shared secret the provider sends back as `hub.verify_token`
    pub verification: VerificationConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let verification = VerificationConfig::new(lookup("VERIFY_TOKEN"));
        if !verification.is_configured() {
            error!(env_var = "VERIFY_TOKEN", "verify_token_not_configured");
        }

        Config {
            port: parse_port(lookup("PORT")),
            webhook_path: parse_path(lookup("WEBHOOK_PATH")),
            verification,
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_PORT;
    };

    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            warn!(env_var = "PORT", value = %raw, "Invalid port, using default");
            DEFAULT_PORT
        }
    }
}

fn parse_path(raw: Option<String>) -> String {
    match raw {
        Some(path) if path.starts_with('/') => path,
        Some(path) => {
            warn!(env_var = "WEBHOOK_PATH", value = %path, "Invalid path, using default");
            DEFAULT_WEBHOOK_PATH.to_string()
        }
        None => DEFAULT_WEBHOOK_PATH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.webhook_path, "/webhook");
        assert!(!config.verification.is_configured());
    }

    #[test]
    fn test_from_lookup_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("VERIFY_TOKEN", "s3cret"),
            ("PORT", "9000"),
            ("WEBHOOK_PATH", "/hooks/meta"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.webhook_path, "/hooks/meta");
        assert_eq!(config.verification.expected_token(), Some("s3cret"));
    }

    #[test]
    fn test_blank_token_is_unconfigured() {
        let config = Config::from_lookup(lookup_from(&[("VERIFY_TOKEN", "   ")]));
        assert!(!config.verification.is_configured());
        assert!(!VerificationConfig::new(Some(String::new())).is_configured());
    }

    #[test]
    fn test_invalid_port_and_path_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("WEBHOOK_PATH", "webhook"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.webhook_path, "/webhook");
        assert_eq!(parse_port(Some("0".to_string())), 8080);
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", VerificationConfig::with_token("s3cret"));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
