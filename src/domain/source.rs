//! Artifact source record

use serde::Serialize;

/// Provenance of a fetchable artifact
///
/// Both fields are opaque to the resolver: checksum verification and blob
/// retrieval are collaborator concerns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Source {
    /// Content checksum
    pub sha1: String,

    /// Locator used by the blob-fetching collaborator
    pub blobstore_id: String,
}
