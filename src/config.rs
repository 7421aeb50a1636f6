//! Generator configuration
//!
//! Namespaces, classes and message groups are data. They are loaded from
//! JSON and validated before any model is built.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::class::Stamped;
use crate::error::GenerateError;
use crate::render::HeaderOptions;
use crate::template::TemplateParam;

const BUILTIN_CONFIG: &str = include_str!("../config/tf2_cross_convert.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub engine_min_version: String,
    #[serde(flatten)]
    pub header: HeaderOptions,
    pub target_namespace: String,
    #[serde(default)]
    pub namespaces: Vec<NamespaceConfig>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Empty for the global scope
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub classes: Vec<ClassConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConfig {
    pub name: String,
    #[serde(default)]
    pub template: Vec<TemplateParam>,
    #[serde(default)]
    pub stamped: Stamped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub message: String,
    /// `Namespace::Class`, or `::Class` for the global scope
    pub classes: Vec<String>,
}

impl GeneratorConfig {
    /// The tf2 geometry conversions shipped with the engine.
    pub fn builtin() -> Result<Self, GenerateError> {
        Self::from_json(BUILTIN_CONFIG)
    }

    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, GenerateError> {
        let config: GeneratorConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        let mut namespaces = HashSet::new();
        for ns in &self.namespaces {
            if !namespaces.insert(ns.name.as_str()) {
                return Err(GenerateError::DuplicateNamespace(ns.name.clone()));
            }
            let mut classes = HashSet::new();
            for class in &ns.classes {
                if !classes.insert(class.name.as_str()) {
                    return Err(GenerateError::DuplicateClass {
                        namespace: ns.name.clone(),
                        class: class.name.clone(),
                    });
                }
            }
        }

        if self.groups.iter().any(|g| g.message.is_empty()) {
            return Err(GenerateError::EmptyMessageName);
        }
        Ok(())
    }
}
