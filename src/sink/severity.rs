/// Severity levels and their verbosity/label mapping tables.
use std::collections::BTreeMap;

use clap::ValueEnum;

/// Log severity of a single record.
///
/// The first eight levels are the standard syslog-style set the console
/// formatter knows natively. `Success` is a custom addition with no native
/// mapping; sinks only emit it when their maps carry an entry for it
/// (see [`maps_with_success`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Severity {
    /// System is unusable.
    Emergency,
    /// Action must be taken immediately.
    Alert,
    /// Critical conditions.
    Critical,
    /// Error conditions.
    Error,
    /// Warning conditions.
    Warning,
    /// Normal but significant events.
    Notice,
    /// Informational messages.
    Info,
    /// Debug-level messages.
    Debug,
    /// An operation completed successfully (custom level).
    Success,
}

impl Severity {
    /// Canonical lowercase name, used as the fallback output label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Success => "success",
        }
    }
}

/// Output verbosity tiers, ordered from quietest to loudest.
///
/// A sink configured at tier `v` emits a record only when the record's
/// required tier is `<= v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Suppress everything.
    Quiet,
    /// Default output.
    Normal,
    /// `-v` equivalent.
    Verbose,
    /// `-vv` equivalent.
    VeryVerbose,
    /// `-vvv` equivalent.
    Debug,
}

/// Required verbosity tier per severity.
pub type VerbosityMap = BTreeMap<Severity, Verbosity>;

/// Output label per severity.
pub type LabelMap = BTreeMap<Severity, &'static str>;

/// The standard console formatter's severity-to-verbosity table.
///
/// Covers the eight standard severities; `Success` is deliberately absent.
#[must_use]
pub fn default_verbosity_map() -> VerbosityMap {
    VerbosityMap::from([
        (Severity::Emergency, Verbosity::Normal),
        (Severity::Alert, Verbosity::Normal),
        (Severity::Critical, Verbosity::Normal),
        (Severity::Error, Verbosity::Normal),
        (Severity::Warning, Verbosity::Normal),
        (Severity::Notice, Verbosity::Normal),
        (Severity::Info, Verbosity::Verbose),
        (Severity::Debug, Verbosity::Debug),
    ])
}

/// The standard console formatter's severity-to-label table.
#[must_use]
pub fn default_label_map() -> LabelMap {
    LabelMap::from([
        (Severity::Emergency, "emergency"),
        (Severity::Alert, "alert"),
        (Severity::Critical, "critical"),
        (Severity::Error, "error"),
        (Severity::Warning, "warning"),
        (Severity::Notice, "notice"),
        (Severity::Info, "info"),
        (Severity::Debug, "debug"),
    ])
}

/// The default tables extended with the custom success level:
/// `Success` maps to normal verbosity and the `info` label.
#[must_use]
pub fn maps_with_success() -> (VerbosityMap, LabelMap) {
    let mut verbosity = default_verbosity_map();
    verbosity.insert(Severity::Success, Verbosity::Normal);
    let mut labels = default_label_map();
    labels.insert(Severity::Success, "info");
    (verbosity, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::VeryVerbose);
        assert!(Verbosity::VeryVerbose < Verbosity::Debug);
    }

    #[test]
    fn test_defaults_omit_success() {
        assert!(!default_verbosity_map().contains_key(&Severity::Success));
        assert!(!default_label_map().contains_key(&Severity::Success));
    }

    #[test]
    fn test_success_addition() {
        let (verbosity, labels) = maps_with_success();
        assert_eq!(verbosity.get(&Severity::Success), Some(&Verbosity::Normal));
        assert_eq!(labels.get(&Severity::Success), Some(&"info"));
        // Standard entries are untouched.
        assert_eq!(verbosity.get(&Severity::Error), Some(&Verbosity::Normal));
        assert_eq!(labels.get(&Severity::Error), Some(&"error"));
    }
}
