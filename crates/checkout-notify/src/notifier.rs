//! # Manager Notifier
//!
//! `NotificationService` implementation that renders an order summary and
//! sends it to the store managers through a `Mailer`.
//!
//! ## Delivery Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  send_order_notification(order, total)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  render(order, total) ── RenderFailed ──► NotificationError::Rejected   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mailer.send_to_managers ──► Ok ──────────────────────────► Ok(())     │
//! │       │                                                                 │
//! │       ├── Rejected    ──────────────────► NotificationError::Rejected   │
//! │       │                                   (never retried)               │
//! │       └── Unreachable ──► attempts left? ──► sleep(backoff), try again  │
//! │                                │                                        │
//! │                                └── no ──► NotificationError::Unreachable│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With the default `max_attempts = 1` there is exactly one attempt.

use backoff::backoff::Backoff;
use backoff::ExponentialBackoff;
use checkout_core::{Money, NotificationError, NotificationService, Order};
use tracing::{debug, error, warn};

use crate::config::{MessageSettings, NotifyConfig, RetrySettings};
use crate::mailer::{Mailer, MailerError, TracingMailer};
use crate::message::render;

impl From<MailerError> for NotificationError {
    fn from(err: MailerError) -> Self {
        match err {
            MailerError::Rejected(reason) => NotificationError::Rejected(reason),
            MailerError::Unreachable(reason) => NotificationError::Unreachable(reason),
        }
    }
}

/// Notifies managers about new orders.
pub struct ManagerNotifier<M> {
    mailer: M,
    message: MessageSettings,
    retry: RetrySettings,
}

impl<M: Mailer> ManagerNotifier<M> {
    pub fn new(mailer: M, message: MessageSettings, retry: RetrySettings) -> Self {
        ManagerNotifier {
            mailer,
            message,
            retry,
        }
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Creates the exponential backoff configuration.
    fn create_backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            initial_interval: self.retry.initial_backoff(),
            max_interval: self.retry.max_backoff(),
            multiplier: 2.0,
            max_elapsed_time: None, // bounded by max_attempts instead
            ..Default::default()
        }
    }
}

impl ManagerNotifier<TracingMailer> {
    /// Builds a notifier on the logging transport from a loaded config.
    pub fn from_config(config: &NotifyConfig) -> Self {
        let mailer = TracingMailer::new(&config.transport, config.recipients.managers.clone());
        ManagerNotifier::new(mailer, config.message.clone(), config.retry.clone())
    }
}

impl<M: Mailer> NotificationService for ManagerNotifier<M> {
    fn send_order_notification(
        &self,
        order: &Order,
        total_price: Money,
    ) -> Result<(), NotificationError> {
        let message = render(order, total_price, &self.message)
            .map_err(|e| NotificationError::Rejected(e.to_string()))?;

        let mut backoff = self.create_backoff();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let err = match self.mailer.send_to_managers(&message) {
                Ok(()) => {
                    debug!(order_id = %order.id(), attempt, "Order notification delivered");
                    return Ok(());
                }
                Err(err @ MailerError::Rejected(_)) => {
                    warn!(order_id = %order.id(), error = %err, "Order notification rejected");
                    return Err(err.into());
                }
                Err(err) => err,
            };

            if attempt >= self.retry.max_attempts {
                error!(
                    order_id = %order.id(),
                    attempts = attempt,
                    error = %err,
                    "Order notification failed, giving up"
                );
                return Err(err.into());
            }

            match backoff.next_backoff() {
                Some(delay) => {
                    warn!(
                        order_id = %order.id(),
                        attempt,
                        ?delay,
                        error = %err,
                        "Order notification failed, retrying"
                    );
                    std::thread::sleep(delay);
                }
                None => return Err(err.into()),
            }
        }
    }
}
