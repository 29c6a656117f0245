//! Error types for nordtray.
//!
//! Almost nothing the external client prints is an error here: failed
//! commands fold into `false`, unparseable output into default snapshots.
//! What remains is the inability to run the client at all and config I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for nordtray.
#[derive(Error, Debug)]
pub enum Error {
    /// The external client could not be spawned.
    #[error("Failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An empty argument vector was handed to the runner.
    #[error("No program given to run")]
    EmptyCommand,

    /// The config file exists but is not valid TOML for [`crate::config::AppConfig`].
    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
