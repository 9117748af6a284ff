//! File system errors

use super::ApplySpecError;

/// Creates a spec file not found error
pub fn not_found(path: impl Into<String>) -> ApplySpecError {
    ApplySpecError::SpecFileNotFound { path: path.into() }
}

/// Creates a spec file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ApplySpecError {
    ApplySpecError::SpecFileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
