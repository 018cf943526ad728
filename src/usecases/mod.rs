//! Application use cases. Orchestrate domain logic via ports.

pub mod notifying_logger;

pub use notifying_logger::{NotifyingLogger, Shutdown};
