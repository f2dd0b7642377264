//! Error types for question conversion.

use crate::diagnostics;
use examiner_error_reporting::DiagnosticMessage;
use std::path::PathBuf;
use thiserror::Error;

/// A weight tag that does not decode to a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{marker}` is not an answer weight")]
pub struct FractionError {
    pub marker: String,
}

/// Errors that stop the conversion of a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The outline has no top-level heading to take the category from.
    #[error("The outline is empty: expected a category heading")]
    EmptyOutline,

    /// A question could not be classified and the failure policy is abort.
    #[error("Error parsing question: {heading}")]
    UnrecognizedQuestion { heading: String },
}

impl ConvertError {
    /// Convert this error to a DiagnosticMessage with its E-2-* code.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            ConvertError::EmptyOutline => diagnostics::empty_outline(),
            ConvertError::UnrecognizedQuestion { heading } => {
                diagnostics::unrecognized_question(heading)
            }
        }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}
