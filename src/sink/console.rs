/// Console formatter: writes `[label] message` lines to any stream.
use std::io::{self, Write};

use super::Sink;
use super::severity::{LabelMap, Severity, Verbosity, VerbosityMap, maps_with_success};

/// A sink that formats records as `[label] message` lines on a stream.
///
/// Construction mirrors the host's standard console formatter: a writer
/// plus a severity-to-verbosity map and a severity-to-label map. A record
/// is emitted only when its severity has an entry in the verbosity map and
/// that entry does not exceed the sink's configured verbosity (default
/// [`Verbosity::Normal`]). Unmapped severities are dropped silently.
pub struct ConsoleSink<W: Write> {
    writer: W,
    verbosity: Verbosity,
    verbosity_map: VerbosityMap,
    label_map: LabelMap,
}

impl<W: Write> ConsoleSink<W> {
    /// Create a sink over `writer` with the given mapping tables.
    #[must_use]
    pub fn new(writer: W, verbosity_map: VerbosityMap, label_map: LabelMap) -> Self {
        Self {
            writer,
            verbosity: Verbosity::Normal,
            verbosity_map,
            label_map,
        }
    }

    /// Set the sink's configured output verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl ConsoleSink<io::Stdout> {
    /// The host's default console sink: stdout with the standard tables
    /// plus the success addition.
    #[must_use]
    pub fn stdout() -> Self {
        let (verbosity_map, label_map) = maps_with_success();
        Self::new(io::stdout(), verbosity_map, label_map)
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn log(&mut self, severity: Severity, message: &str) {
        let Some(required) = self.verbosity_map.get(&severity) else {
            return;
        };
        if *required > self.verbosity {
            return;
        }
        let label = self
            .label_map
            .get(&severity)
            .copied()
            .unwrap_or_else(|| severity.name());
        // Best-effort: a failed write must not abort the command.
        let _ = writeln!(self.writer, "[{label}] {message}");
    }
}
