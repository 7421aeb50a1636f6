//! Generator errors
//!
//! Every failure aborts the run. Nothing partially rendered leaves the pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Message group {0} has no classes")]
    EmptyGroup(String),

    #[error("Message group {group} pairs class {class} with itself")]
    SelfPair { group: String, class: String },

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Class is not registered in any namespace: {0}")]
    UnregisteredClass(String),

    #[error("Unknown namespace handle: {0}")]
    UnknownNamespace(usize),

    #[error("Invalid class reference {0:?}, expected Namespace::Class or ::Class")]
    InvalidClassReference(String),

    #[error("Namespace declared twice: {0:?}")]
    DuplicateNamespace(String),

    #[error("Class {class} declared twice in namespace {namespace:?}")]
    DuplicateClass { namespace: String, class: String },

    #[error("Message group has an empty message name")]
    EmptyMessageName,

    #[error("Configuration requires engine >= {0}, current is {1}")]
    EngineVersionMismatch(String, String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}
