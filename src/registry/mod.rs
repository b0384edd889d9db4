/// The logger registry: named sinks the logging facade dispatches to.
use std::collections::BTreeMap;

use crate::sink::{ConsoleSink, Severity, Sink};

/// Process-wide set of named, active log sinks for one command invocation.
///
/// Owned by the host and passed by mutable reference to anything that needs
/// to reconfigure logging, so there is no ambient global state. Every
/// dispatched record goes to every active sink.
#[derive(Default)]
pub struct LoggerRegistry {
    sinks: BTreeMap<String, Box<dyn Sink>>,
}

impl LoggerRegistry {
    /// An empty registry with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The host's default registry: a single `stdout` console sink.
    #[must_use]
    pub fn with_default_console() -> Self {
        let mut registry = Self::new();
        registry.add("stdout", Box::new(ConsoleSink::stdout()));
        registry
    }

    /// Register a sink under `name`, replacing any sink of the same name.
    pub fn add(&mut self, name: impl Into<String>, sink: Box<dyn Sink>) {
        self.sinks.insert(name.into(), sink);
    }

    /// Remove every sink. Subsequent records go nowhere until `add` is
    /// called again.
    pub fn reset(&mut self) {
        self.sinks.clear();
    }

    /// Dispatch one record to every active sink.
    pub fn log(&mut self, severity: Severity, message: &str) {
        for sink in self.sinks.values_mut() {
            sink.log(severity, message);
        }
    }

    /// Self-diagnostics channel: dispatch a warning record.
    pub fn warning(&mut self, message: &str) {
        self.log(Severity::Warning, message);
    }

    /// Whether a sink is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sinks.contains_key(name)
    }

    /// Names of the active sinks, sorted.
    #[must_use]
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.keys().map(String::as_str).collect()
    }

    /// Number of active sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no sink is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records everything dispatched to it, for assertions.
    struct RecordingSink(Rc<RefCell<Vec<(Severity, String)>>>);

    impl Sink for RecordingSink {
        fn log(&mut self, severity: Severity, message: &str) {
            self.0.borrow_mut().push((severity, message.to_owned()));
        }
    }

    fn recording() -> (Rc<RefCell<Vec<(Severity, String)>>>, Box<dyn Sink>) {
        let records = Rc::new(RefCell::new(Vec::new()));
        (Rc::clone(&records), Box::new(RecordingSink(Rc::clone(&records))))
    }

    #[test]
    fn test_dispatches_to_every_sink() {
        let (a_records, a) = recording();
        let (b_records, b) = recording();
        let mut registry = LoggerRegistry::new();
        registry.add("a", a);
        registry.add("b", b);

        registry.log(Severity::Notice, "hello");

        assert_eq!(a_records.borrow().len(), 1);
        assert_eq!(b_records.borrow().len(), 1);
        assert_eq!(a_records.borrow()[0], (Severity::Notice, "hello".to_owned()));
    }

    #[test]
    fn test_warning_uses_warning_severity() {
        let (records, sink) = recording();
        let mut registry = LoggerRegistry::new();
        registry.add("a", sink);

        registry.warning("careful");

        assert_eq!(records.borrow()[0].0, Severity::Warning);
    }

    #[test]
    fn test_reset_removes_all_sinks() {
        let (records, sink) = recording();
        let mut registry = LoggerRegistry::new();
        registry.add("a", sink);

        registry.reset();
        registry.log(Severity::Error, "lost");

        assert!(registry.is_empty());
        assert!(records.borrow().is_empty());
    }

    #[test]
    fn test_add_replaces_same_name() {
        let (old_records, old) = recording();
        let (new_records, new) = recording();
        let mut registry = LoggerRegistry::new();
        registry.add("a", old);
        registry.add("a", new);

        registry.log(Severity::Info, "once");

        assert_eq!(registry.len(), 1);
        assert!(old_records.borrow().is_empty());
        assert_eq!(new_records.borrow().len(), 1);
    }

    #[test]
    fn test_default_console_registers_stdout() {
        let registry = LoggerRegistry::with_default_console();
        assert_eq!(registry.sink_names(), ["stdout"]);
    }
}
