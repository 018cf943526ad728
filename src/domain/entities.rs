//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — those stay in the adapters.

use crate::domain::errors::DomainError;
use std::fmt;
use std::panic::Location;
use std::str::FromStr;

/// Log severity. Determines the message marker, which sink operation receives
/// the local line, and whether a shutdown signal is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Fatal,
}

impl Severity {
    /// Prefix for the local log line ("INFO: ...").
    pub fn local_prefix(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            other => Err(DomainError::Config(format!("unknown severity: {other}"))),
        }
    }
}

/// Call site of a log invocation.
///
/// Resolved through `#[track_caller]` propagation, so frames belonging to the
/// logger itself never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerLocation {
    file: &'static str,
    line: u32,
}

impl CallerLocation {
    #[track_caller]
    pub fn capture() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }

    /// Sentinel for events built without call-site information.
    pub const fn unknown() -> Self {
        Self { file: "", line: 0 }
    }

    pub fn is_unknown(&self) -> bool {
        self.file.is_empty()
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "unknown location")
        } else {
            write!(f, "{}:{}", self.file, self.line)
        }
    }
}

/// Telegram text-formatting mode.
///
/// The markup embedded in outgoing messages must match this flag, so bold
/// styling is derived from it as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Html,
    MarkdownV2,
}

impl ParseMode {
    /// Wire value for the `parse_mode` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Html => "HTML",
            ParseMode::MarkdownV2 => "MarkdownV2",
        }
    }

    /// Wrap `text` in this mode's bold markup.
    pub fn bold(self, text: &str) -> String {
        match self {
            ParseMode::Html => format!("<b>{text}</b>"),
            ParseMode::MarkdownV2 => format!("*{text}*"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(ParseMode::Html),
            "markdownv2" | "markdown_v2" => Ok(ParseMode::MarkdownV2),
            other => Err(DomainError::Config(format!("unknown parse mode: {other}"))),
        }
    }
}

/// Per-severity markers prepended to remote messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub info: String,
    pub error: String,
    pub fatal: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            info: "ℹ️".to_string(),
            error: "❗".to_string(),
            fatal: "🚨".to_string(),
        }
    }
}

impl Markers {
    pub fn for_severity(&self, severity: Severity) -> &str {
        match severity {
            Severity::Info => &self.info,
            Severity::Error => &self.error,
            Severity::Fatal => &self.fatal,
        }
    }
}

/// A single log event. Transient; one per invocation.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub severity: Severity,
    pub message: String,
    pub caller: CallerLocation,
}

impl LogEvent {
    pub fn new(severity: Severity, message: String, caller: CallerLocation) -> Self {
        Self {
            severity,
            message,
            caller,
        }
    }

    /// Build an event, capturing the caller's location.
    #[track_caller]
    pub fn capture(severity: Severity, message: String) -> Self {
        Self::new(severity, message, CallerLocation::capture())
    }

    /// Local log line: `PREFIX: message [caller]`.
    pub fn local_line(&self) -> String {
        format!(
            "{}: {} [{}]",
            self.severity.local_prefix(),
            self.message,
            self.caller
        )
    }
}

/// Formatting rules for remote messages.
///
/// Markers, markup mode and the optional service label are explicit
/// configuration fields, not globals. Fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct RemoteStyle {
    pub parse_mode: ParseMode,
    pub markers: Markers,
    pub service_name: Option<String>,
}

impl RemoteStyle {
    /// Remote message: `marker bold(service): message [caller]`.
    ///
    /// The service segment is omitted when no service name is configured.
    pub fn render(&self, event: &LogEvent) -> String {
        let marker = self.markers.for_severity(event.severity);
        match &self.service_name {
            Some(name) => format!(
                "{} {}: {} [{}]",
                marker,
                self.parse_mode.bold(name),
                event.message,
                event.caller
            ),
            None => format!("{} {} [{}]", marker, event.message, event.caller),
        }
    }
}
