//! Local sink adapter backed by `tracing`.

use crate::ports::LogSink;
use tracing::{error, info};

/// Default local collaborator. Forwards lines to the process-wide `tracing`
/// subscriber.
///
/// `tracing` has no fatal level; `fatal` lines go to `error!`. Termination is
/// the caller's concern, not the sink's.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }

    fn fatal(&self, message: &str) {
        error!("{message}");
    }
}
