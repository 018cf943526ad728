//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// The wrapped local logger. The application never assumes more than these
/// three operations; calls are assumed infallible.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    fn fatal(&self, message: &str);
}

/// Remote notification gateway. One best-effort delivery per call; no retry,
/// no backoff.
#[async_trait::async_trait]
pub trait RemoteNotifier: Send + Sync {
    /// Deliver a single pre-formatted message (may include simple markup).
    async fn send(&self, text: &str) -> Result<(), DomainError>;
}
