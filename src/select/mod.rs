/// The logger selector: turns the parsed options into an active sink set.
pub mod errors;

pub use errors::SelectError;

use std::collections::BTreeSet;
use std::fs::OpenOptions;

use crate::cli::LoggerArgs;
use crate::registry::LoggerRegistry;
use crate::sink::ConsoleSink;
use crate::sink::severity::maps_with_success;

/// The closed set of sinks a command can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SinkKind {
    /// The host's default console sink.
    Stdout,
    /// An append-mode log file.
    File,
}

impl SinkKind {
    /// The sink's registry name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::File => "file",
        }
    }

    /// Parse one `--logger` token. Unrecognized tokens yield `None` and
    /// are dropped by the caller.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "stdout" => Some(Self::Stdout),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

/// Split a `--logger` value on commas and keep the recognized sinks.
fn parse_requested(logger: Option<&str>) -> BTreeSet<SinkKind> {
    logger
        .unwrap_or_default()
        .split(',')
        .filter_map(SinkKind::from_token)
        .collect()
}

/// Reconfigure the registry's sink set from the parsed options.
///
/// Runs once per invocation, after option parsing and before the command's
/// main logic. Inconsistent flag combinations degrade to a warning on the
/// registry's own warning channel plus a safe fallback; when no override is
/// requested (the common case) the registry is left untouched.
///
/// # Errors
///
/// Returns [`SelectError::OpenLogFile`] when the file logger is requested
/// and the path cannot be opened for appending. The host should treat this
/// as a fatal startup error.
pub fn configure(args: &LoggerArgs, registry: &mut LoggerRegistry) -> Result<(), SelectError> {
    let mut requested = parse_requested(args.logger.as_deref());
    let path = args.log_file_path();

    if !requested.contains(&SinkKind::File) && path.is_some() {
        registry.warning(
            "The --log-file-path option is ignored as the file logger \
             is not listed in the --logger option.",
        );
    }

    if requested.contains(&SinkKind::File) && path.is_none() {
        registry.warning(
            "The --log-file-path option is mandatory when the file logger \
             is used. Falling back to the default logger.",
        );
        requested.remove(&SinkKind::File);
    }

    // No override requested: leave the default sink set alone.
    if requested.is_empty() || requested == BTreeSet::from([SinkKind::Stdout]) {
        return Ok(());
    }

    // The default console sink was not requested: drop it.
    if !requested.contains(&SinkKind::Stdout) {
        registry.reset();
    }

    if requested.contains(&SinkKind::File) {
        // `path` is always present here: a missing path removed File above.
        if let Some(path) = path {
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map_err(|source| SelectError::OpenLogFile {
                    path: path.to_owned(),
                    source,
                })?;
            let (verbosity_map, label_map) = maps_with_success();
            registry.add(
                SinkKind::File.as_str(),
                Box::new(ConsoleSink::new(file, verbosity_map, label_map)),
            );
        }
    }

    Ok(())
}
