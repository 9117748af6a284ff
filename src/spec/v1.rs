//! V1 apply spec resolution
//!
//! The v1 document carries two historical job shapes. Modern documents list
//! service templates under `job.templates`; legacy documents describe a
//! single job whose effective identity is the `template` field, with the
//! `name` field holding an unrelated historical value. Both shapes resolve
//! to the same model so downstream convergence logic never sees the
//! difference.

use serde_json::{Map, Value};

use crate::domain::{Job, Package, Source};
use crate::error::{
    Result, job_name_missing, section_not_a_mapping, section_not_a_sequence,
};
use crate::spec::document;
use crate::spec::properties::PropertyPath;

/// Log rotation threshold applied when the spec does not configure one
const DEFAULT_MAX_LOG_FILE_SIZE: &str = "50M";

const MAX_LOG_FILE_SIZE: PropertyPath<'static> =
    PropertyPath::new(&["logging", "max_log_file_size"]);

/// A resolved v1 apply spec
///
/// Owns the typed model for one apply cycle. Construction is all-or-nothing:
/// a malformed document yields an error and no partial aggregate. Accessors
/// hand out shared references, so the aggregate stays read-only for its
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct V1ApplySpec {
    jobs: Vec<Job>,
    packages: Vec<Package>,
    properties: Value,
}

impl V1ApplySpec {
    /// Resolve a raw spec document into the typed model
    ///
    /// # Errors
    ///
    /// Returns an error when a section that must be a mapping or sequence
    /// has a different shape, or when a legacy job section declares no
    /// usable template name. Absent optional sections are never errors.
    pub fn from_value(document: &Value) -> Result<Self> {
        let root = document
            .as_object()
            .ok_or_else(|| section_not_a_mapping("spec"))?;

        Ok(Self {
            jobs: resolve_jobs(root)?,
            packages: resolve_packages(root)?,
            properties: root.get("properties").cloned().unwrap_or(Value::Null),
        })
    }

    /// Resolve a spec document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(&document::from_json(json)?)
    }

    /// Resolve a spec document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_value(&document::from_yaml(yaml)?)
    }

    /// Jobs to materialize, in document order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Packages to install, in document order
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Log rotation threshold, defaulting to `"50M"` when unset
    ///
    /// Configured values are returned verbatim; unit and format validation
    /// is a downstream concern.
    pub fn max_log_file_size(&self) -> String {
        MAX_LOG_FILE_SIZE.string_or(&self.properties, DEFAULT_MAX_LOG_FILE_SIZE)
    }

    /// Resolve an optional property by path, falling back to `default`
    ///
    /// Absence at any level of the path is equivalent to absence at the
    /// leaf.
    pub fn property(&self, path: &[&str], default: &str) -> String {
        PropertyPath::new(path).string_or(&self.properties, default)
    }
}

fn resolve_jobs(root: &Map<String, Value>) -> Result<Vec<Job>> {
    let job = match root.get("job") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value
            .as_object()
            .ok_or_else(|| section_not_a_mapping("job"))?,
    };

    match job.get("templates") {
        None | Some(Value::Null) => Ok(vec![legacy_job(job)?]),
        Some(value) => {
            let templates = value
                .as_array()
                .ok_or_else(|| section_not_a_sequence("job.templates"))?;
            if templates.is_empty() {
                return Ok(vec![legacy_job(job)?]);
            }
            templates.iter().map(templated_job).collect()
        }
    }
}

/// Legacy single-job form
///
/// The `template` field carries the effective job name; the section's own
/// `name` and `release` fields hold historical values that must be ignored.
fn legacy_job(job: &Map<String, Value>) -> Result<Job> {
    let name = string_field(job, "template");
    if name.is_empty() {
        return Err(job_name_missing());
    }

    Ok(Job {
        name,
        version: string_field(job, "version"),
        source: source_fields(job),
    })
}

fn templated_job(entry: &Value) -> Result<Job> {
    let template = entry
        .as_object()
        .ok_or_else(|| section_not_a_mapping("job.templates entry"))?;

    Ok(Job {
        name: string_field(template, "name"),
        version: string_field(template, "version"),
        source: source_fields(template),
    })
}

fn resolve_packages(root: &Map<String, Value>) -> Result<Vec<Package>> {
    let packages = match root.get("packages") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value
            .as_array()
            .ok_or_else(|| section_not_a_sequence("packages"))?,
    };

    packages
        .iter()
        .map(|entry| {
            let package = entry
                .as_object()
                .ok_or_else(|| section_not_a_mapping("packages entry"))?;

            Ok(Package {
                name: string_field(package, "name"),
                version: string_field(package, "version"),
                source: source_fields(package),
            })
        })
        .collect()
}

/// Missing or non-string scalar fields resolve to the empty string; only
/// mapping/sequence shape violations abort resolution.
fn string_field(section: &Map<String, Value>, key: &str) -> String {
    match section.get(key) {
        Some(Value::String(value)) => value.clone(),
        _ => String::new(),
    }
}

fn source_fields(section: &Map<String, Value>) -> Source {
    Source {
        sha1: string_field(section, "sha1"),
        blobstore_id: string_field(section, "blobstore_id"),
    }
}
