//! # Mailer Transport
//!
//! The outbound channel behind `ManagerNotifier`. Real transports (SMTP,
//! SMS gateway, push service) are provided by the host application and
//! built from `TransportSettings`; this module only defines the seam and a
//! development transport that logs instead of sending.

use thiserror::Error;
use tracing::info;

use crate::config::TransportSettings;

/// A rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub subject: String,
    pub body: String,
}

/// Transport-level delivery failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailerError {
    /// The remote end refused the message (bad recipient, auth failure).
    #[error("Message rejected: {0}")]
    Rejected(String),

    /// The remote end could not be reached (DNS, connect, timeout).
    #[error("Transport unreachable: {0}")]
    Unreachable(String),
}

/// Delivers a message to the configured manager recipients.
///
/// Host transports are built from `TransportSettings`: `address()` is the
/// server to connect to, `username`/`password` the optional credentials and
/// `from` the sender. The settings never leave this crate.
pub trait Mailer: Send + Sync {
    fn send_to_managers(&self, message: &OutgoingMessage) -> Result<(), MailerError>;
}

/// Development transport: writes each message to the log.
#[derive(Debug, Clone)]
pub struct TracingMailer {
    server: String,
    authenticated: bool,
    from: String,
    managers: Vec<String>,
}

impl TracingMailer {
    pub fn new(transport: &TransportSettings, managers: Vec<String>) -> Self {
        TracingMailer {
            server: transport.address(),
            authenticated: transport.username.is_some() && transport.password.is_some(),
            from: transport.from.clone(),
            managers,
        }
    }

    /// The `host:port` a real transport would connect to.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// True when both username and password are configured.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl Mailer for TracingMailer {
    fn send_to_managers(&self, message: &OutgoingMessage) -> Result<(), MailerError> {
        if self.managers.is_empty() {
            return Err(MailerError::Rejected("no manager recipients".into()));
        }

        info!(
            server = %self.server,
            authenticated = self.authenticated,
            from = %self.from,
            to = ?self.managers,
            subject = %message.subject,
            body = %message.body,
            "Order notification (not delivered, logging transport)"
        );
        Ok(())
    }
}
