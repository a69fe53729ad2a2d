//! Notification collaborator trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for out-of-band notification delivery (email).
///
/// Implementations deliver asynchronously. Failures are reported to the
/// caller but never retried here — retry policy belongs to the client.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a message to the given recipient address.
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()>;
}
