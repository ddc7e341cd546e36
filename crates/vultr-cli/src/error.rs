//! CLI error types and the single place they are reported.

use std::io::Write;

use thiserror::Error;
use vultr_api::ApiError;

/// Errors that end a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file, output mode, or credentials are unusable.
    #[error("{0}")]
    Config(String),

    /// The command was invoked with the wrong positional arguments.
    #[error("{message}")]
    Usage {
        /// One-line diagnostic.
        message: String,
        /// Usage text of the offending command.
        usage: String,
    },

    /// A flag value was accepted by the parser but is not meaningful.
    #[error("invalid value for --{flag}: {reason}")]
    FlagParse {
        /// Long flag name.
        flag: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    /// Command-line parsing failed.
    #[error(transparent)]
    Clap(#[from] clap::Error),

    /// An API call failed.
    #[error("{context}: {source}")]
    Api {
        /// Phrase naming the operation that failed.
        context: &'static str,
        /// Underlying API error.
        #[source]
        source: ApiError,
    },

    /// The invocation was interrupted.
    #[error("operation cancelled")]
    Cancelled,

    /// Output could not be serialized.
    #[error("format error: {0}")]
    Format(String),

    /// Writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `err` to `stderr` and return the process exit status.
///
/// Parser errors are already rendered by clap with their own `error:`
/// prefix and usage hint; everything else gets one `error: ` line.
pub fn report<W: Write>(err: &CliError, stderr: &mut W) -> u8 {
    // Nothing sensible can be done if stderr itself is gone.
    let _ = match err {
        CliError::Clap(e) => write!(stderr, "{}", e.render()),
        CliError::Usage { message, usage } => writeln!(stderr, "error: {message}\n\n{usage}"),
        other => writeln!(stderr, "error: {other}"),
    };
    1
}
