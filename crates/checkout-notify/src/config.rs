//! # Notifier Configuration
//!
//! Everything the notification adapter needs from outside: transport
//! endpoint and credentials, who receives order notices, how messages look,
//! and how hard to retry.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_MAIL_HOST=smtp.example.com                                │
//! │     CHECKOUT_MANAGERS=ops@example.com,lead@example.com                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/checkout/checkout.toml (Linux)                           │
//! │     ~/Library/Application Support/com.checkout.checkout/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [transport]
//! host = "smtp.example.com"
//! port = 587
//! username = "orders"
//! password = "from-your-secret-store"
//! from = "orders@example.com"
//!
//! [recipients]
//! managers = ["ops@example.com"]
//!
//! [message]
//! subject_prefix = "[Shop]"
//! format = "text"  # text | json
//!
//! [retry]
//! max_attempts = 3
//! initial_backoff_ms = 200
//! max_backoff_ms = 5000
//! ```
//!
//! Credentials are read here and handed to the transport. They never reach
//! checkout-core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{NotifyError, NotifyResult};

// =============================================================================
// Message Format
// =============================================================================

/// Body format for order notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageFormat {
    /// Human-readable plain text.
    #[default]
    Text,
    /// Machine-readable JSON summary.
    Json,
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageFormat::Text => write!(f, "text"),
            MessageFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for MessageFormat {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(MessageFormat::Text),
            "json" => Ok(MessageFormat::Json),
            other => Err(NotifyError::InvalidConfig(format!(
                "Unknown message format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Transport Settings
// =============================================================================

/// Where and as whom to deliver. Consumed by the `Mailer` implementation.
#[derive(Clone, Serialize, Deserialize)]
pub struct TransportSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Sender address.
    #[serde(default = "default_from")]
    pub from: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    25
}

fn default_from() -> String {
    "orders@localhost".to_string()
}

impl Default for TransportSettings {
    fn default() -> Self {
        TransportSettings {
            host: default_host(),
            port: default_port(),
            username: None,
            password: None,
            from: default_from(),
        }
    }
}

impl TransportSettings {
    /// Returns `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Password is never printed.
impl fmt::Debug for TransportSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("from", &self.from)
            .finish()
    }
}

// =============================================================================
// Recipients
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientSettings {
    /// Addresses that receive every order notice.
    #[serde(default)]
    pub managers: Vec<String>,
}

// =============================================================================
// Message Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSettings {
    /// Prepended to every subject line.
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,

    #[serde(default)]
    pub format: MessageFormat,
}

fn default_subject_prefix() -> String {
    "[Orders]".to_string()
}

impl Default for MessageSettings {
    fn default() -> Self {
        MessageSettings {
            subject_prefix: default_subject_prefix(),
            format: MessageFormat::default(),
        }
    }
}

// =============================================================================
// Retry Settings
// =============================================================================

/// Retry policy for transient delivery failures.
///
/// `max_attempts = 1` means a single attempt and no retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_initial_backoff")]
    pub initial_backoff_ms: u64,

    #[serde(default = "default_max_backoff")]
    pub max_backoff_ms: u64,
}

fn default_max_attempts() -> u32 {
    1
}
fn default_initial_backoff() -> u64 {
    200
}
fn default_max_backoff() -> u64 {
    5_000
}

impl Default for RetrySettings {
    fn default() -> Self {
        RetrySettings {
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff(),
            max_backoff_ms: default_max_backoff(),
        }
    }
}

impl RetrySettings {
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete notifier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default)]
    pub transport: TransportSettings,

    #[serde(default)]
    pub recipients: RecipientSettings,

    #[serde(default)]
    pub message: MessageSettings,

    #[serde(default)]
    pub retry: RetrySettings,
}

impl NotifyConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (checkout.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> NotifyResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading notifier config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> NotifyResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| NotifyError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Notifier config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> NotifyResult<()> {
        if self.transport.host.trim().is_empty() {
            return Err(NotifyError::InvalidConfig(
                "transport.host must not be empty".into(),
            ));
        }

        if self.recipients.managers.is_empty() {
            return Err(NotifyError::InvalidConfig(
                "at least one manager recipient is required".into(),
            ));
        }

        if let Some(bad) = self.recipients.managers.iter().find(|m| !m.contains('@')) {
            return Err(NotifyError::InvalidConfig(format!(
                "manager recipient '{}' is not an email address",
                bad
            )));
        }

        if self.retry.max_attempts == 0 {
            return Err(NotifyError::InvalidConfig(
                "retry.max_attempts must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a key lookup (the process environment in
    /// `load`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CHECKOUT_MAIL_HOST") {
            debug!(host = %host, "Overriding mail host from environment");
            self.transport.host = host;
        }

        if let Some(port) = lookup("CHECKOUT_MAIL_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.transport.port = p,
                Err(_) => warn!(port = %port, "Ignoring invalid CHECKOUT_MAIL_PORT"),
            }
        }

        if let Some(username) = lookup("CHECKOUT_MAIL_USERNAME") {
            self.transport.username = Some(username);
        }

        if let Some(password) = lookup("CHECKOUT_MAIL_PASSWORD") {
            debug!("Overriding mail password from environment");
            self.transport.password = Some(password);
        }

        if let Some(from) = lookup("CHECKOUT_MAIL_FROM") {
            self.transport.from = from;
        }

        if let Some(managers) = lookup("CHECKOUT_MANAGERS") {
            self.recipients.managers = managers
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(format) = lookup("CHECKOUT_MESSAGE_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.message.format = parsed,
                Err(_) => warn!(format = %format, "Unknown message format in environment"),
            }
        }

        if let Some(attempts) = lookup("CHECKOUT_RETRY_MAX_ATTEMPTS") {
            match attempts.parse::<u32>() {
                Ok(n) => self.retry.max_attempts = n,
                Err(_) => warn!(attempts = %attempts, "Ignoring invalid CHECKOUT_RETRY_MAX_ATTEMPTS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "checkout")
            .map(|dirs| dirs.config_dir().join("checkout.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn valid_config() -> NotifyConfig {
        let mut config = NotifyConfig::default();
        config.recipients.managers = vec!["ops@example.com".to_string()];
        config
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("checkout-notify-{}-{}", std::process::id(), name))
            .join("checkout.toml")
    }

    #[test]
    fn test_message_format_parsing() {
        assert_eq!("text".parse::<MessageFormat>().unwrap(), MessageFormat::Text);
        assert_eq!("JSON".parse::<MessageFormat>().unwrap(), MessageFormat::Json);
        assert!("xml".parse::<MessageFormat>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = NotifyConfig::default();
        assert_eq!(config.transport.address(), "localhost:25");
        assert_eq!(config.message.format, MessageFormat::Text);
        assert_eq!(config.retry.max_attempts, 1);
    }

    #[test]
    fn test_config_validation() {
        let mut config = NotifyConfig::default();
        // No recipients
        assert!(config.validate().is_err());

        config.recipients.managers = vec!["not-an-address".to_string()];
        assert!(config.validate().is_err());

        config.recipients.managers = vec!["ops@example.com".to_string()];
        assert!(config.validate().is_ok());

        config.retry.max_attempts = 0;
        assert!(config.validate().is_err());

        config.retry.max_attempts = 1;
        config.transport.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("CHECKOUT_MAIL_HOST", "smtp.example.com"),
            ("CHECKOUT_MAIL_PORT", "587"),
            ("CHECKOUT_MAIL_PASSWORD", "s3cret"),
            ("CHECKOUT_MANAGERS", "a@example.com, b@example.com,"),
            ("CHECKOUT_MESSAGE_FORMAT", "json"),
            ("CHECKOUT_RETRY_MAX_ATTEMPTS", "3"),
        ]);

        let mut config = NotifyConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.transport.address(), "smtp.example.com:587");
        assert_eq!(config.transport.password.as_deref(), Some("s3cret"));
        assert_eq!(
            config.recipients.managers,
            vec!["a@example.com".to_string(), "b@example.com".to_string()]
        );
        assert_eq!(config.message.format, MessageFormat::Json);
        assert_eq!(config.retry.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = NotifyConfig::default();
        config.apply_overrides(|key| match key {
            "CHECKOUT_MAIL_PORT" => Some("not-a-port".to_string()),
            "CHECKOUT_MESSAGE_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.transport.port, 25);
        assert_eq!(config.message.format, MessageFormat::Text);
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut config = valid_config();
        config.transport.password = Some("hunter2".to_string());

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let path = temp_path("round-trip");
        let mut config = valid_config();
        config.message.subject_prefix = "[Shop]".to_string();
        config.retry.max_attempts = 4;

        config.save(Some(path.clone())).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[transport]"));
        assert!(contents.contains("[recipients]"));

        let loaded: NotifyConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded.message.subject_prefix, "[Shop]");
        assert_eq!(loaded.retry.max_attempts, 4);
        assert_eq!(loaded.recipients.managers, config.recipients.managers);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    /// Writes `contents` to a fresh temp file and loads it.
    fn load_from(name: &str, contents: &str) -> NotifyResult<NotifyConfig> {
        let path = temp_path(name);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(&path, contents).unwrap();

        let result = NotifyConfig::load(Some(path.clone()));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
        result
    }

    #[test]
    fn test_load_valid_file() {
        let config = load_from(
            "load-valid",
            r#"
            [transport]
            host = "smtp.example.com"
            port = 2525

            [recipients]
            managers = ["ops@example.com", "lead@example.com"]

            [retry]
            max_attempts = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.recipients.managers.len(), 2);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.message.subject_prefix, "[Orders]");
    }

    #[test]
    fn test_load_without_managers_fails_validation() {
        let err = load_from(
            "load-no-managers",
            r#"
            [transport]
            host = "smtp.example.com"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, NotifyError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let err = load_from("load-malformed", "[recipients\nmanagers = = 3").unwrap_err();
        assert!(matches!(err, NotifyError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        // Defaults have no managers, so the loaded config fails validation
        // rather than the file read.
        let err = NotifyConfig::load(Some(temp_path("load-missing"))).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidConfig(_)));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: NotifyConfig = toml::from_str(
            r#"
            [recipients]
            managers = ["ops@example.com"]
            "#,
        )
        .unwrap();

        assert_eq!(config.transport.port, 25);
        assert_eq!(config.message.subject_prefix, "[Orders]");
        assert!(config.validate().is_ok());
    }
}
