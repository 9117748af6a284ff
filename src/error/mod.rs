//! Error types and handling for applyspec
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`document`]: Spec document shape and parse errors
//! - [`fs`]: Spec file reading errors

pub mod document;
pub mod fs;

// Re-export convenience constructors from submodules
pub use document::{
    job_name_missing, not_a_mapping as section_not_a_mapping,
    not_a_sequence as section_not_a_sequence,
};
pub use fs::{not_found as spec_file_not_found, read_failed as spec_file_read_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for applyspec operations
#[derive(Error, Diagnostic, Debug)]
pub enum ApplySpecError {
    // Document shape errors
    #[error("Spec section '{section}' must be a mapping")]
    #[diagnostic(
        code(applyspec::document::not_a_mapping),
        help("Check the structure of the section in the spec document")
    )]
    SectionNotAMapping { section: String },

    #[error("Spec section '{section}' must be a sequence")]
    #[diagnostic(code(applyspec::document::not_a_sequence))]
    SectionNotASequence { section: String },

    #[error("Job section declares no template name")]
    #[diagnostic(
        code(applyspec::document::job_name_missing),
        help(
            "Legacy job sections must carry a non-empty 'template' field; modern sections declare a 'templates' list"
        )
    )]
    JobNameMissing,

    #[error("Failed to parse spec document: {reason}")]
    #[diagnostic(code(applyspec::document::parse_failed))]
    DocumentParseFailed { reason: String },

    // File system errors
    #[error("Spec file not found: {path}")]
    #[diagnostic(
        code(applyspec::fs::not_found),
        help("Check that the spec file path is correct")
    )]
    SpecFileNotFound { path: String },

    #[error("Failed to read spec file: {path}")]
    #[diagnostic(code(applyspec::fs::read_failed))]
    SpecFileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(applyspec::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ApplySpecError {
    fn from(err: std::io::Error) -> Self {
        ApplySpecError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ApplySpecError {
    fn from(err: serde_yaml::Error) -> Self {
        ApplySpecError::DocumentParseFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApplySpecError {
    fn from(err: serde_json::Error) -> Self {
        ApplySpecError::DocumentParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ApplySpecError>;
