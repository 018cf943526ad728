//! Local log sink adapters.

pub mod tracing_sink;

pub use tracing_sink::TracingSink;
