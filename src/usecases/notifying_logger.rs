//! Notifying logger. Forwards every event to the local sink, then mirrors it
//! to the remote chat best-effort.
//!
//! - Local delivery is unconditional and happens first
//! - Remote failures are logged through the sink and swallowed
//! - Fatal returns a [`Shutdown`] signal instead of exiting in place

use crate::domain::{LogEvent, RemoteStyle, Severity};
use crate::ports::{LogSink, RemoteNotifier};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Terminal signal produced by [`NotifyingLogger::fatal`] after both delivery
/// attempts. The top-level runner converts it into a process exit.
#[must_use = "fatal severity terminates the process; call exit()"]
#[derive(Debug, PartialEq, Eq)]
pub struct Shutdown {
    code: i32,
}

impl Shutdown {
    fn new(code: i32) -> Self {
        Self { code }
    }

    /// Exit status the process must terminate with. Always non-zero.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Terminate the process. Immediate and unconditional.
    pub fn exit(self) -> ! {
        std::process::exit(self.code)
    }
}

/// Wraps a local [`LogSink`] and mirrors every event to a [`RemoteNotifier`].
///
/// Constructed once at startup, immutable afterwards. Remote delivery is
/// best-effort: failures are reported through the sink's `error` operation
/// and never reach the caller.
pub struct NotifyingLogger {
    sink: Arc<dyn LogSink>,
    remote: Arc<dyn RemoteNotifier>,
    style: RemoteStyle,
}

impl NotifyingLogger {
    pub fn new(
        sink: Arc<dyn LogSink>,
        remote: Arc<dyn RemoteNotifier>,
        style: RemoteStyle,
    ) -> Self {
        Self {
            sink,
            remote,
            style,
        }
    }

    /// Log at info severity, locally and to the remote chat.
    ///
    /// `#[track_caller]` does not propagate through an `async fn`, so the call
    /// site is captured before the future is built.
    #[track_caller]
    pub fn info<M: fmt::Display>(&self, message: M) -> impl Future<Output = ()> + Send + '_ {
        let event = LogEvent::capture(Severity::Info, message.to_string());
        self.dispatch(event)
    }

    /// Log at error severity, locally and to the remote chat.
    #[track_caller]
    pub fn error<M: fmt::Display>(&self, message: M) -> impl Future<Output = ()> + Send + '_ {
        let event = LogEvent::capture(Severity::Error, message.to_string());
        self.dispatch(event)
    }

    /// Log at fatal severity and return the terminal [`Shutdown`] signal.
    ///
    /// Both deliveries are attempted before the signal is returned; a remote
    /// failure never cancels termination.
    #[track_caller]
    pub fn fatal<M: fmt::Display>(&self, message: M) -> impl Future<Output = Shutdown> + Send + '_ {
        let event = LogEvent::capture(Severity::Fatal, message.to_string());
        async move {
            self.dispatch(event).await;
            Shutdown::new(1)
        }
    }

    /// Deliver one event: local sink first, then exactly one remote attempt.
    async fn dispatch(&self, event: LogEvent) {
        let line = event.local_line();
        match event.severity {
            Severity::Info => self.sink.info(&line),
            Severity::Error | Severity::Fatal => self.sink.error(&line),
        }

        if let Err(e) = self.remote.send(&self.style.render(&event)).await {
            self.sink.error(&format!("ERROR: could not send to Telegram: {e}"));
        }
    }
}
