//! Cross Convert Core - BidirectionalTypeMap Header Engine
//!
//! Builds a model of namespaces, forward-declared classes and
//! `BidirectionalTypeMap` specializations, then renders it as one C++ header.
//!
//! # Guarantees
//! 1. Every unordered pair of a message group is visited exactly once
//! 2. Stamped compatibility decides how many specializations a pair gets
//! 3. Output is byte-identical for identical configuration
//! 4. Errors abort the run; no partial header is ever returned

pub mod template;
pub mod class;
pub mod namespace;
pub mod correspondence;
pub mod generator;
pub mod render;
pub mod config;
pub mod hashing;
pub mod pipeline;
pub mod error;

pub use template::{ParamKind, TemplateParam, TemplateParamSet};
pub use class::{ClassDecl, Stamped};
pub use namespace::{ClassId, HeaderModel, Member, NamespaceId, NamespaceTree, Section};
pub use correspondence::TypeCorrespondence;
pub use generator::{unordered_pairs, PairwiseGenerator};
pub use render::{HeaderOptions, Renderer};
pub use config::GeneratorConfig;
pub use hashing::{compute_config_hash, compute_header_hash};
pub use pipeline::{GeneratedHeader, GenerationManifest, GenerationPipeline};
pub use error::GenerateError;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
