//! Error types for the bisect CLI
//!
//! Every variant is a usage, input, or configuration problem and maps to
//! exit code 2. Not finding a target is not an error.

use bisect_core::SearchError;
use std::path::PathBuf;

/// Exit status for any reported error
pub(crate) const ERROR_EXIT_CODE: u8 = 2;

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    /// A list token could not be parsed
    #[error("invalid value '{token}' at position {position}: {reason}")]
    InvalidValue {
        token: String,
        position: usize,
        reason: String,
    },

    /// The search target could not be parsed
    #[error("invalid target '{token}': {reason}")]
    InvalidTarget { token: String, reason: String },

    /// Neither `--values` nor `--file` was given
    #[error("no input: pass --values or --file")]
    MissingInput,

    /// IO error reading an input or config file
    #[error("io error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration file
    #[error("invalid config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Unrecognised log level in configuration
    #[error("invalid log level '{0}': expected off, error, warn, info, debug or trace")]
    InvalidLogLevel(String),

    /// Checked search rejected the input
    #[error(transparent)]
    Search(#[from] SearchError),

    /// JSON rendering failed
    #[error("failed to render json")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Create IO error for path
    pub(crate) fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    #[inline]
    #[must_use]
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidValue { .. }
            | Self::InvalidTarget { .. }
            | Self::MissingInput
            | Self::Io { .. }
            | Self::Config { .. }
            | Self::InvalidLogLevel(_)
            | Self::Search(_)
            | Self::Render(_) => ERROR_EXIT_CODE,
        }
    }
}
