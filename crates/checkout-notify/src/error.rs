//! # Notify Error Types
//!
//! Errors raised while loading configuration or rendering messages.
//! Delivery failures are not here: they cross the core boundary as
//! `checkout_core::NotificationError`.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────┐  ┌─────────────────────┐                      │
//! │  │   Configuration     │  │     Rendering       │                      │
//! │  │                     │  │                     │                      │
//! │  │  InvalidConfig      │  │  RenderFailed       │                      │
//! │  │  ConfigLoadFailed   │  │                     │                      │
//! │  │  ConfigSaveFailed   │  │                     │                      │
//! │  └─────────────────────┘  └─────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for notify operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

#[derive(Debug, Error)]
pub enum NotifyError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration is present but unusable.
    #[error("Invalid notifier configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Rendering Errors
    // =========================================================================
    /// Order summary could not be rendered.
    #[error("Failed to render order message: {0}")]
    RenderFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for NotifyError {
    fn from(err: std::io::Error) -> Self {
        NotifyError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for NotifyError {
    fn from(err: toml::de::Error) -> Self {
        NotifyError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for NotifyError {
    fn from(err: toml::ser::Error) -> Self {
        NotifyError::ConfigSaveFailed(err.to_string())
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        NotifyError::RenderFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NotifyError::InvalidConfig("no recipients".into()).to_string(),
            "Invalid notifier configuration: no recipients"
        );
    }

    #[test]
    fn test_toml_error_maps_to_load_failure() {
        let err: NotifyError = toml::from_str::<toml::Value>("not = = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, NotifyError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_io_error_maps_to_load_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: NotifyError = io.into();
        assert!(matches!(err, NotifyError::ConfigLoadFailed(_)));
    }
}
