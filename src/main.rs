#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! logsel — log a message through the sinks selected on the command line.
//!
//! A minimal host for the logger-selection options: phase one declares the
//! options by flattening [`LoggerArgs`] into the parser, phase two runs
//! [`configure`] against the registry before the command logic executes.

use clap::Parser;

use logsel::{LoggerArgs, LoggerRegistry, Severity, configure};

/// logsel — log a message through the selected sinks.
#[derive(Debug, Parser)]
#[command(
    name = "logsel",
    about = "Log a message through the sinks selected via --logger",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// The message to log.
    message: String,

    /// Severity to log the message at.
    #[arg(long, value_name = "SEVERITY", default_value = "notice")]
    level: Severity,

    #[command(flatten)]
    logger: LoggerArgs,
}

fn main() {
    let cli = Cli::parse();

    let mut registry = LoggerRegistry::with_default_console();
    match configure(&cli.logger, &mut registry) {
        Ok(()) => {}
        Err(err) => {
            let code = err.exit_code();
            eprintln!("logsel: {:#}", anyhow::Error::new(err));
            std::process::exit(code);
        }
    }

    registry.log(cli.level, &cli.message);
}
