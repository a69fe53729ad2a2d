//! # certhub-notify
//!
//! Notification collaborator for CertHub. Two [`Notifier`] implementations:
//!
//! - `relay` — posts messages to an HTTP mail relay (production)
//! - `log` — writes messages to the log (development and tests)
//!
//! Delivery is asynchronous and fire-once: failures are reported to the
//! caller but never retried here.
//!
//! [`Notifier`]: certhub_core::traits::Notifier

pub mod log;
pub mod provider;
pub mod relay;

pub use log::LogNotifier;
pub use provider::build_notifier;
pub use relay::RelayNotifier;
