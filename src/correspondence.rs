//! `BidirectionalTypeMap` specializations

use std::fmt::Write;
use std::ops::Range;

use crate::error::GenerateError;
use crate::namespace::{ClassId, HeaderModel};
use crate::template::TemplateParamSet;

const TYPE_MAP_NAME: &str = "BidirectionalTypeMap";
const MESSAGE_NAMESPACE: &str = "geometry_msgs";

/// Binds two classes to one common message type.
///
/// The template parameters of both classes are merged into one set named
/// `T0..Tn`; `split` is where the first class's parameters end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCorrespondence {
    message: String,
    classes: [ClassId; 2],
    template: Option<TemplateParamSet>,
    split: usize,
    stamped: bool,
}

impl TypeCorrespondence {
    pub fn new(
        message: &str,
        first: ClassId,
        second: ClassId,
        model: &HeaderModel,
        stamped: bool,
    ) -> Result<Self, GenerateError> {
        let mut kinds = model.class(first)?.template_types();
        let split = kinds.len();
        kinds.extend(model.class(second)?.template_types());

        let template = if kinds.is_empty() {
            None
        } else {
            Some(TemplateParamSet::synthetic(&kinds))
        };

        let message = if stamped {
            format!("{}Stamped", message)
        } else {
            message.to_string()
        };

        Ok(Self {
            message,
            classes: [first, second],
            template,
            split,
            stamped,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn classes(&self) -> [ClassId; 2] {
        self.classes
    }

    pub fn is_stamped(&self) -> bool {
        self.stamped
    }

    /// Range of merged template parameters owned by class `idx` (0 or 1).
    pub fn param_range(&self, idx: usize) -> Range<usize> {
        let total = self.template.as_ref().map_or(0, TemplateParamSet::len);
        if idx == 0 {
            0..self.split
        } else {
            self.split..total
        }
    }

    pub fn required_include(&self) -> String {
        format!("{}/{}.h", MESSAGE_NAMESPACE, self.message)
    }

    pub fn write(&self, model: &HeaderModel, out: &mut impl Write) -> Result<(), GenerateError> {
        match &self.template {
            Some(template) => template.write_declaration(out)?,
            None => out.write_str("template<>\n")?,
        }
        write!(out, "struct {}<", TYPE_MAP_NAME)?;
        self.write_class_name(model, 0, out)?;
        out.write_str(", ")?;
        self.write_class_name(model, 1, out)?;
        write!(
            out,
            "> {{\nusing type = ::{}::{};\n}};\n\n",
            MESSAGE_NAMESPACE, self.message
        )?;
        Ok(())
    }

    fn write_class_name(
        &self,
        model: &HeaderModel,
        idx: usize,
        out: &mut impl Write,
    ) -> Result<(), GenerateError> {
        if self.stamped {
            out.write_str("::tf2::Stamped<")?;
        }
        model.class(self.classes[idx])?.write_qualified_name(model, out)?;
        if let Some(template) = &self.template {
            template.write_specialization_args(out, self.param_range(idx))?;
        }
        if self.stamped {
            out.write_str(">")?;
        }
        Ok(())
    }
}
