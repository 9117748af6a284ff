//! Spec document errors

use super::ApplySpecError;

/// Creates an error for a section that should be a mapping but is not
pub fn not_a_mapping(section: impl Into<String>) -> ApplySpecError {
    ApplySpecError::SectionNotAMapping {
        section: section.into(),
    }
}

/// Creates an error for a section that should be a sequence but is not
pub fn not_a_sequence(section: impl Into<String>) -> ApplySpecError {
    ApplySpecError::SectionNotASequence {
        section: section.into(),
    }
}

/// Creates an error for a legacy job section with no usable template name
pub fn job_name_missing() -> ApplySpecError {
    ApplySpecError::JobNameMissing
}
