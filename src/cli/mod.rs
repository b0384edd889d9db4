/// CLI layer: declaration of the logger-selection options.
pub mod args;

pub use args::LoggerArgs;
