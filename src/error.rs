//! Error types for the osbconfig CLI.
//!
//! Uses thiserror for derive macros. Fatal conditions carry their original
//! cause as a `source` so the full chain survives up to `main`.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for osbconfig operations.
#[derive(Error, Debug)]
pub enum OsbConfigError {
    /// User provided invalid arguments or unreadable seed properties.
    #[error("{0}")]
    UserError(String),

    /// The settings post-process pass could not complete.
    #[error("failed to post process settings: {0}")]
    Resolve(String),

    /// Work directories or the settings file are not usable.
    #[error("{0}")]
    Layout(String),

    /// configjar could not be started or did not complete.
    #[error("failed to run configjar")]
    Launch(#[source] std::io::Error),

    /// configjar ran but did not report success.
    #[error("configjar exited with {0}")]
    ToolExit(std::process::ExitStatus),
}

impl OsbConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            OsbConfigError::UserError(_) => exit_codes::USER_ERROR,
            OsbConfigError::Resolve(_) => exit_codes::RESOLVE_FAILURE,
            OsbConfigError::Layout(_) => exit_codes::LAYOUT_FAILURE,
            OsbConfigError::Launch(_) => exit_codes::LAUNCH_FAILURE,
            OsbConfigError::ToolExit(_) => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Result type alias for osbconfig operations.
pub type Result<T> = std::result::Result<T, OsbConfigError>;
