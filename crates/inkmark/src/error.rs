//! CLI error types.

use std::path::PathBuf;

/// Error from a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the input file failed.
    #[error("failed to read {}", path.display())]
    ReadInput {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading stdin failed.
    #[error("failed to read stdin")]
    ReadStdin(#[source] std::io::Error),

    /// Writing the output failed.
    #[error("failed to write {}", path.display())]
    WriteOutput {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed.
    #[error("failed to write stdout")]
    WriteStdout(#[source] std::io::Error),
}
