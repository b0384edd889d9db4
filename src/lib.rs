#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! logsel — select per-invocation logging sinks from CLI options.
//!
//! Two options, `--logger=<csv>` and `--log-file-path=<path>`, decide which
//! of two fixed sinks (`stdout`, `file`) receive log messages for the
//! current command invocation. The host wires this in two phases:
//!
//! 1. Flatten [`LoggerArgs`] into its own clap `Parser` so the options are
//!    declared on every command.
//! 2. After parsing, call [`select::configure`] with the parsed options and
//!    a mutable [`LoggerRegistry`]; the registry's active sink set is the
//!    result for the rest of the invocation.

pub mod cli;
pub mod registry;
pub mod select;
pub mod sink;

pub use cli::LoggerArgs;
pub use registry::LoggerRegistry;
pub use select::{SelectError, SinkKind, configure};
pub use sink::{ConsoleSink, Severity, Sink, Verbosity};
