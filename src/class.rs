//! Forward-declared C++ classes and their stamped marker

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::GenerateError;
use crate::namespace::{HeaderModel, NamespaceId};
use crate::template::{ParamKind, TemplateParamSet};

/// Which message flavours a class converts to and from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stamped {
    /// Unstamped messages only
    #[default]
    Unstamped,
    /// Stamped messages only
    Stamped,
    /// Both stamped and unstamped messages
    Both,
}

impl Stamped {
    /// Stamped compatibility of a pair of classes.
    ///
    /// `Both` only when both sides are `Both`; `Stamped` when both sides
    /// support stamped messages; `Unstamped` otherwise.
    pub fn compare(self, other: Stamped) -> Stamped {
        match (self, other) {
            (Stamped::Both, Stamped::Both) => Stamped::Both,
            (Stamped::Stamped | Stamped::Both, Stamped::Stamped | Stamped::Both) => {
                Stamped::Stamped
            }
            _ => Stamped::Unstamped,
        }
    }

    pub fn wants_stamped(self) -> bool {
        matches!(self, Stamped::Stamped | Stamped::Both)
    }

    pub fn wants_unstamped(self) -> bool {
        matches!(self, Stamped::Unstamped | Stamped::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    name: String,
    namespace: Option<NamespaceId>,
    template: Option<TemplateParamSet>,
    stamped: Stamped,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, stamped: Stamped) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            template: None,
            stamped,
        }
    }

    pub fn with_template(mut self, template: TemplateParamSet) -> Self {
        self.template = Some(template);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<NamespaceId> {
        self.namespace
    }

    pub fn stamped(&self) -> Stamped {
        self.stamped
    }

    pub(crate) fn set_namespace(&mut self, namespace: NamespaceId) {
        self.namespace = Some(namespace);
    }

    pub fn template_types(&self) -> Vec<ParamKind> {
        self.template.as_ref().map(TemplateParamSet::types).unwrap_or_default()
    }

    pub fn compare_stamped(&self, other: &ClassDecl) -> Stamped {
        self.stamped.compare(other.stamped)
    }

    /// Forward declaration without namespace prefix.
    pub fn write_declaration(&self, out: &mut impl Write) -> std::fmt::Result {
        if let Some(template) = &self.template {
            template.write_declaration(out)?;
        }
        writeln!(out, "class {};", self.name)
    }

    /// `Namespace::Name`, or `::Name` when the class has no namespace.
    pub fn write_qualified_name(
        &self,
        model: &HeaderModel,
        out: &mut impl Write,
    ) -> Result<(), GenerateError> {
        match self.namespace {
            None => out.write_str("::")?,
            Some(id) => model.namespace(id)?.write_qualified_prefix(out)?,
        }
        out.write_str(&self.name)?;
        Ok(())
    }
}
