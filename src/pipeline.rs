//! Generation Pipeline - Single Entry Point
//!
//! Configuration in, complete header text out. Any error aborts the run
//! before text is returned.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::class::ClassDecl;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::generator::PairwiseGenerator;
use crate::hashing::{compute_config_hash, compute_header_hash};
use crate::namespace::{HeaderModel, NamespaceId};
use crate::render::Renderer;
use crate::template::TemplateParamSet;
use crate::ENGINE_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationManifest {
    pub engine_version: String,
    pub config_hash: String,
    pub header_hash: String,
    pub correspondence_count: usize,
    pub include_count: usize,
}

#[derive(Debug, Clone)]
pub struct GeneratedHeader {
    pub text: String,
    pub manifest: GenerationManifest,
}

pub struct GenerationPipeline {
    config: GeneratorConfig,
}

impl GenerationPipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Registers every configured class, then runs each message group
    /// into the target namespace.
    pub fn build_model(&self) -> Result<(HeaderModel, NamespaceId), GenerateError> {
        self.check_engine_version()?;

        let mut model = HeaderModel::new();
        for ns in &self.config.namespaces {
            let id = model.add_namespace(ns.name.as_str());
            for class in &ns.classes {
                let mut decl = ClassDecl::new(class.name.as_str(), class.stamped);
                if !class.template.is_empty() {
                    decl = decl.with_template(TemplateParamSet::new(class.template.clone()));
                }
                model.register_class(id, decl)?;
            }
        }

        let target = model.add_namespace(self.config.target_namespace.as_str());
        for group in &self.config.groups {
            let classes = group
                .classes
                .iter()
                .map(|name| model.find_class(name))
                .collect::<Result<Vec<_>, _>>()?;
            let added =
                PairwiseGenerator::new(&group.message, target).generate(&mut model, &classes)?;
            debug!("group {}: {} classes, {} correspondences", group.message, classes.len(), added);
        }

        Ok((model, target))
    }

    pub fn generate(&self) -> Result<GeneratedHeader, GenerateError> {
        let (model, _) = self.build_model()?;
        let text = Renderer::new(&self.config.header).render(&model)?;

        let manifest = GenerationManifest {
            engine_version: ENGINE_VERSION.to_string(),
            config_hash: compute_config_hash(&self.config)?,
            header_hash: compute_header_hash(&text),
            correspondence_count: model.correspondence_count(),
            include_count: model.collect_includes().len(),
        };
        info!(
            "generated {} correspondences, {} includes, header {}",
            manifest.correspondence_count, manifest.include_count, manifest.header_hash
        );

        Ok(GeneratedHeader { text, manifest })
    }

    fn check_engine_version(&self) -> Result<(), GenerateError> {
        let engine_ver = semver::Version::parse(ENGINE_VERSION)
            .map_err(|_| GenerateError::InvalidVersion(ENGINE_VERSION.to_string()))?;
        let min_ver = semver::Version::parse(&self.config.engine_min_version)
            .map_err(|_| GenerateError::InvalidVersion(self.config.engine_min_version.clone()))?;

        if engine_ver < min_ver {
            return Err(GenerateError::EngineVersionMismatch(
                self.config.engine_min_version.clone(),
                ENGINE_VERSION.to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        // Point: 2 + 1 + 1 + 1 + 1 + 1, Pose: 2 + 2 + 2, Quaternion: 2, Wrench: 1
        let header = GenerationPipeline::new(GeneratorConfig::builtin().unwrap())
            .generate()
            .unwrap();
        assert_eq!(header.manifest.correspondence_count, 16);
        assert_eq!(header.manifest.include_count, 7);
        assert_eq!(header.manifest.engine_version, ENGINE_VERSION);
    }

    #[test]
    fn test_newer_engine_required() {
        let mut config = GeneratorConfig::builtin().unwrap();
        config.engine_min_version = "99.0.0".to_string();
        let err = GenerationPipeline::new(config).generate().unwrap_err();
        assert!(matches!(err, GenerateError::EngineVersionMismatch(..)));
    }

    #[test]
    fn test_invalid_min_version() {
        let mut config = GeneratorConfig::builtin().unwrap();
        config.engine_min_version = "one".to_string();
        let err = GenerationPipeline::new(config).generate().unwrap_err();
        assert!(matches!(err, GenerateError::InvalidVersion(ref v) if v == "one"));
    }

    #[test]
    fn test_unknown_class_in_group() {
        let mut config = GeneratorConfig::builtin().unwrap();
        config.groups[0].classes.push("Eigen::Vector4".to_string());
        let err = GenerationPipeline::new(config).generate().unwrap_err();
        assert!(matches!(err, GenerateError::UnknownClass(ref c) if c == "Eigen::Vector4"));
    }

    #[test]
    fn test_target_namespace_is_last() {
        let pipeline = GenerationPipeline::new(GeneratorConfig::builtin().unwrap());
        let (model, target) = pipeline.build_model().unwrap();
        assert_eq!(model.namespaces().len(), 5);
        assert_eq!(model.namespace(target).unwrap().name(), "tf2");
    }
}
