//! Lookup-or-default chains over spec properties
//!
//! Optional operational properties live in an arbitrarily nested subtree of
//! the spec document. Each accessor declares a path and a default; absence
//! at any level of the path is equivalent to absence at the leaf, so adding
//! a new property never touches control flow.

use serde_json::Value;

/// A fixed path into the spec's `properties` subtree
#[derive(Debug, Clone, Copy)]
pub struct PropertyPath<'a> {
    segments: &'a [&'a str],
}

impl<'a> PropertyPath<'a> {
    /// Create a path from its segments, outermost first
    pub const fn new(segments: &'a [&'a str]) -> Self {
        Self { segments }
    }

    /// Walk the path from `root`, returning the leaf value if every link exists
    ///
    /// A missing key or a non-mapping intermediate node both end the walk.
    pub fn lookup<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| node.get(segment))
    }

    /// Resolve the path to a string value, falling back to `default` when any
    /// link is missing or the leaf is not a string
    pub fn string_or(&self, root: &Value, default: &str) -> String {
        match self.lookup(root) {
            Some(Value::String(value)) => value.clone(),
            _ => default.to_string(),
        }
    }
}
