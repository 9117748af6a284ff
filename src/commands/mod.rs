//! Command implementations for the applyspec CLI

pub mod completions;
pub mod show;
pub mod validate;
pub mod version;
