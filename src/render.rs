//! Header rendering
//!
//! The whole document is composed in memory; callers receive it only once
//! it is complete.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::GenerateError;
use crate::namespace::{HeaderModel, Section};

pub const DEFAULT_BANNER: &str = "// NOTE: This file is generated automatically, do not edit.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderOptions {
    #[serde(default)]
    pub banner: Option<String>,
    pub include_guard: String,
    #[serde(default)]
    pub prelude_includes: Vec<String>,
}

impl HeaderOptions {
    pub fn banner(&self) -> &str {
        self.banner.as_deref().unwrap_or(DEFAULT_BANNER)
    }
}

/// Walks a `HeaderModel` once, top to bottom.
pub struct Renderer<'a> {
    options: &'a HeaderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a HeaderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, model: &HeaderModel) -> Result<String, GenerateError> {
        let mut out = String::new();
        self.write_prologue(&mut out)?;
        self.write_includes(model, &mut out)?;

        for section in [Section::Declarations, Section::Correspondences] {
            for namespace in model.namespaces().iter().filter(|ns| ns.has_section(section)) {
                namespace.write(model, section, &mut out)?;
            }
        }

        writeln!(out, "#endif  // {}", self.options.include_guard)?;
        Ok(out)
    }

    fn write_prologue(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", self.options.banner().trim_end())?;
        out.push('\n');
        writeln!(out, "#ifndef {}", self.options.include_guard)?;
        writeln!(out, "#define {}", self.options.include_guard)?;
        out.push('\n');
        if !self.options.prelude_includes.is_empty() {
            for include in &self.options.prelude_includes {
                writeln!(out, "#include <{}>", include)?;
            }
            out.push('\n');
        }
        Ok(())
    }

    fn write_includes(&self, model: &HeaderModel, out: &mut String) -> std::fmt::Result {
        let includes = model.collect_includes();
        if includes.is_empty() {
            return Ok(());
        }
        for include in &includes {
            writeln!(out, "#include <{}>", include)?;
        }
        out.push('\n');
        Ok(())
    }
}
