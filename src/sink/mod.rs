/// Sink layer: log destinations and the console formatter.
pub mod console;
pub mod severity;

pub use console::ConsoleSink;
pub use severity::{LabelMap, Severity, Verbosity, VerbosityMap};

/// A named destination for log messages.
///
/// Sinks receive every record dispatched through the registry and decide
/// for themselves whether and how to emit it. Logging is best-effort: a
/// sink must not panic or abort the command on a write failure.
pub trait Sink {
    /// Handle one log record.
    fn log(&mut self, severity: Severity, message: &str);
}
