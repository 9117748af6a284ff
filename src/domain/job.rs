//! Job record

use serde::Serialize;

use crate::domain::Source;

/// A service template to be materialized on the host
///
/// Recreated from the spec document on every apply cycle; never mutated
/// after resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Job {
    /// Resolved job identity (the `template` field in legacy documents)
    pub name: String,

    /// Version string, opaque
    pub version: String,

    /// Fetchable template archive
    pub source: Source,
}
