//! Template parameter lists

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::ops::Range;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParamKind {
    #[serde(rename = "typename")]
    Type,
    #[serde(rename = "int")]
    Int,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Type => "typename",
            ParamKind::Int => "int",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateParam {
    pub kind: ParamKind,
    pub name: String,
}

/// Ordered `(kind, name)` parameters of a C++ template. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParamSet {
    params: Vec<TemplateParam>,
}

impl TemplateParamSet {
    pub fn new(params: Vec<TemplateParam>) -> Self {
        Self { params }
    }

    /// Builds a set from bare kinds, naming them `T0`, `T1`, ...
    pub fn synthetic(kinds: &[ParamKind]) -> Self {
        let params = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| TemplateParam {
                kind: *kind,
                name: format!("T{}", i),
            })
            .collect();
        Self { params }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn types(&self) -> Vec<ParamKind> {
        self.params.iter().map(|p| p.kind).collect()
    }

    /// `template<typename T, int N>` followed by a newline; nothing when empty.
    pub fn write_declaration(&self, out: &mut impl Write) -> fmt::Result {
        if self.params.is_empty() {
            return Ok(());
        }
        let params: Vec<_> = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.kind.as_str(), p.name))
            .collect();
        writeln!(out, "template<{}>", params.join(", "))
    }

    /// `<T0,T1>` for the names inside `range`; nothing when the slice is empty.
    pub fn write_specialization_args(
        &self,
        out: &mut impl Write,
        range: Range<usize>,
    ) -> fmt::Result {
        let Some(slice) = self.params.get(range) else {
            return Err(fmt::Error);
        };
        if slice.is_empty() {
            return Ok(());
        }
        let names: Vec<_> = slice.iter().map(|p| p.name.as_str()).collect();
        write!(out, "<{}>", names.join(","))
    }
}
