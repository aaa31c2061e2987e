//! CLI-level errors (wraps library errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::{OutlineError, RenderError, SettingsError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Outline(#[from] OutlineError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Input { .. } => crate::exitcode::NOINPUT,
            CliError::Outline(_) => crate::exitcode::DATAERR,
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Render(e) => match e {
                RenderError::UnsupportedOrientation(_) => crate::exitcode::USAGE,
                RenderError::TooDeep { .. } => crate::exitcode::DATAERR,
                RenderError::LabelMarker(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
