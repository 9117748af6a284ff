//! Package record

use serde::Serialize;

use crate::domain::Source;

/// An installable unit the host must carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Package name, unique among all packages in one resolved spec
    pub name: String,

    /// Version string, opaque
    pub version: String,

    /// Fetchable package archive
    pub source: Source,
}
