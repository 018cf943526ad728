//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Transport-level delivery failure: connection error, DNS, timeout.
    #[error("could not send message to Telegram: {0}")]
    Transport(String),

    /// The remote endpoint answered with something other than HTTP 200.
    #[error("unexpected status code from Telegram: {0}")]
    UnexpectedStatus(u16),

    #[error("configuration error: {0}")]
    Config(String),
}
