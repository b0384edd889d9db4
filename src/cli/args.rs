/// CLI option definitions via clap derive.
use std::path::PathBuf;

use clap::Args;
use clap::builder::TypedValueParser as _;

/// The logger-selection options, added to every command of the host.
///
/// Flatten this into the host's `Parser` with `#[command(flatten)]`. Both
/// options take a required value; when `--logger` is absent, logging stays
/// on the host's default stdout sink.
#[derive(Debug, Clone, Args)]
pub struct LoggerArgs {
    /// The logger(s) to use for the command (stdout, file).
    /// Separate by a comma if multiple loggers. Default is stdout.
    #[arg(long, global = true, value_name = "SINKS")]
    pub logger: Option<String>,

    /// The path to the log file, opened in append mode when the file
    /// logger is requested.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub log_file_path: Option<PathBuf>,
}

impl LoggerArgs {
    /// The `--log-file-path` value, with an empty string counting as absent.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&std::path::Path> {
        self.log_file_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
