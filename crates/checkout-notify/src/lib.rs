//! # checkout-notify: Order Notification Adapter
//!
//! Tells store managers about new orders. This crate is the only place that
//! knows about transports and credentials; `checkout-core` sees nothing but
//! its `NotificationService` trait.
//!
//! ## Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NotifyConfig::load(None)        checkout.toml + CHECKOUT_* env vars    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ManagerNotifier<M: Mailer>      render ──► send ──► retry transient    │
//! │         │                                                               │
//! │         ▼  Arc<dyn NotificationService>                                 │
//! │  checkout_core::Cart::new(calculator, notifier)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - `NotifyConfig` loading, validation, env overrides
//! - [`message`] - order summary rendering (text or JSON)
//! - [`mailer`] - `Mailer` transport seam and the logging transport
//! - [`notifier`] - `ManagerNotifier`
//! - [`error`] - `NotifyError`

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod mailer;
pub mod message;
pub mod notifier;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{MessageFormat, NotifyConfig};
pub use error::{NotifyError, NotifyResult};
pub use mailer::{Mailer, MailerError, OutgoingMessage, TracingMailer};
pub use notifier::ManagerNotifier;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info,checkout=debug`. Calling this
/// twice, or after the host installed its own subscriber, is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,checkout=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
