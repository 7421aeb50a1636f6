//! Namespaces and the model that owns them
//!
//! `HeaderModel` owns every namespace; a namespace owns its members in
//! insertion order. Members refer back through `NamespaceId` / `ClassId`
//! handles, never by ownership.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::class::ClassDecl;
use crate::correspondence::TypeCorrespondence;
use crate::error::GenerateError;

/// Non-owning handle to a namespace inside a `HeaderModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceId(usize);

/// Non-owning handle to a class member of a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId {
    namespace: NamespaceId,
    member: usize,
}

#[derive(Debug, Clone)]
pub enum Member {
    Class(ClassDecl),
    Correspondence(TypeCorrespondence),
}

/// Part of the header a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Declarations,
    Correspondences,
}

impl Member {
    pub fn section(&self) -> Section {
        match self {
            Member::Class(_) => Section::Declarations,
            Member::Correspondence(_) => Section::Correspondences,
        }
    }

    fn write(&self, model: &HeaderModel, out: &mut impl Write) -> Result<(), GenerateError> {
        match self {
            Member::Class(class) => Ok(class.write_declaration(out)?),
            Member::Correspondence(map) => map.write(model, out),
        }
    }

    fn collect_includes(&self, includes: &mut BTreeSet<String>) {
        if let Member::Correspondence(map) = self {
            includes.insert(map.required_include());
        }
    }
}

/// A C++ namespace. The empty name is the global scope and is written
/// without a `namespace` block.
#[derive(Debug, Clone)]
pub struct NamespaceTree {
    name: String,
    members: Vec<Member>,
}

impl NamespaceTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Appends a member and returns its index.
    pub fn add_member(&mut self, member: Member) -> usize {
        self.members.push(member);
        self.members.len() - 1
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.members.iter().any(|m| m.section() == section)
    }

    pub fn write_qualified_prefix(&self, out: &mut impl Write) -> std::fmt::Result {
        write!(out, "{}::", self.name)
    }

    /// Writes the members of one section, wrapped in this namespace's block.
    pub fn write(
        &self,
        model: &HeaderModel,
        section: Section,
        out: &mut impl Write,
    ) -> Result<(), GenerateError> {
        if !self.is_global() {
            writeln!(out, "namespace {} {{", self.name)?;
        }
        for member in self.members.iter().filter(|m| m.section() == section) {
            member.write(model, out)?;
        }
        if self.is_global() {
            out.write_str("\n\n")?;
        } else {
            out.write_str("}\n\n")?;
        }
        Ok(())
    }

    pub fn collect_includes(&self, includes: &mut BTreeSet<String>) {
        for member in &self.members {
            member.collect_includes(includes);
        }
    }

    fn find_class(&self, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|m| matches!(m, Member::Class(c) if c.name() == name))
    }
}

/// Everything one generation run produces before rendering.
#[derive(Debug, Clone, Default)]
pub struct HeaderModel {
    namespaces: Vec<NamespaceTree>,
}

impl HeaderModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new namespace. Names may repeat; each call opens its own block.
    pub fn add_namespace(&mut self, name: impl Into<String>) -> NamespaceId {
        self.namespaces.push(NamespaceTree::new(name));
        NamespaceId(self.namespaces.len() - 1)
    }

    pub fn namespaces(&self) -> &[NamespaceTree] {
        &self.namespaces
    }

    pub fn namespace(&self, id: NamespaceId) -> Result<&NamespaceTree, GenerateError> {
        self.namespaces.get(id.0).ok_or(GenerateError::UnknownNamespace(id.0))
    }

    fn namespace_mut(&mut self, id: NamespaceId) -> Result<&mut NamespaceTree, GenerateError> {
        self.namespaces.get_mut(id.0).ok_or(GenerateError::UnknownNamespace(id.0))
    }

    pub fn register_class(
        &mut self,
        id: NamespaceId,
        mut class: ClassDecl,
    ) -> Result<ClassId, GenerateError> {
        let namespace = self.namespace_mut(id)?;
        if namespace.find_class(class.name()).is_some() {
            return Err(GenerateError::DuplicateClass {
                namespace: namespace.name().to_string(),
                class: class.name().to_string(),
            });
        }
        class.set_namespace(id);
        let member = namespace.add_member(Member::Class(class));
        Ok(ClassId { namespace: id, member })
    }

    pub fn register_correspondence(
        &mut self,
        id: NamespaceId,
        map: TypeCorrespondence,
    ) -> Result<usize, GenerateError> {
        Ok(self.namespace_mut(id)?.add_member(Member::Correspondence(map)))
    }

    pub fn class(&self, id: ClassId) -> Result<&ClassDecl, GenerateError> {
        match self.namespace(id.namespace)?.members.get(id.member) {
            Some(Member::Class(class)) => Ok(class),
            _ => Err(GenerateError::UnregisteredClass(format!("{:?}", id))),
        }
    }

    /// Resolves `Namespace::Class`, or `::Class` for the global scope.
    pub fn find_class(&self, qualified: &str) -> Result<ClassId, GenerateError> {
        let (namespace, name) = qualified
            .rsplit_once("::")
            .filter(|(_, name)| !name.is_empty())
            .ok_or_else(|| GenerateError::InvalidClassReference(qualified.to_string()))?;

        self.namespaces
            .iter()
            .enumerate()
            .filter(|(_, ns)| ns.name() == namespace)
            .find_map(|(i, ns)| {
                ns.find_class(name).map(|member| ClassId {
                    namespace: NamespaceId(i),
                    member,
                })
            })
            .ok_or_else(|| GenerateError::UnknownClass(qualified.to_string()))
    }

    /// Include paths of every member, deduplicated and sorted.
    pub fn collect_includes(&self) -> BTreeSet<String> {
        let mut includes = BTreeSet::new();
        for namespace in &self.namespaces {
            namespace.collect_includes(&mut includes);
        }
        includes
    }

    pub fn correspondence_count(&self) -> usize {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.members())
            .filter(|m| m.section() == Section::Correspondences)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Stamped;

    #[test]
    fn test_member_order_is_insertion_order() {
        let mut model = HeaderModel::new();
        let kdl = model.add_namespace("KDL");
        for name in ["Frame", "Vector", "Twist", "Wrench"] {
            model.register_class(kdl, ClassDecl::new(name, Stamped::Stamped)).unwrap();
        }

        let mut out = String::new();
        model.namespace(kdl).unwrap().write(&model, Section::Declarations, &mut out).unwrap();
        assert_eq!(
            out,
            "namespace KDL {\nclass Frame;\nclass Vector;\nclass Twist;\nclass Wrench;\n}\n\n"
        );
    }

    #[test]
    fn test_global_namespace_is_unwrapped() {
        let mut model = HeaderModel::new();
        let global = model.add_namespace("");
        let bt = model
            .register_class(global, ClassDecl::new("btVector3", Stamped::Stamped))
            .unwrap();

        let mut out = String::new();
        model.namespace(global).unwrap().write(&model, Section::Declarations, &mut out).unwrap();
        assert_eq!(out, "class btVector3;\n\n\n");

        let mut name = String::new();
        model.class(bt).unwrap().write_qualified_name(&model, &mut name).unwrap();
        assert_eq!(name, "::btVector3");
    }

    #[test]
    fn test_find_class() {
        let mut model = HeaderModel::new();
        let global = model.add_namespace("");
        let eigen = model.add_namespace("Eigen");
        let bt = model
            .register_class(global, ClassDecl::new("btVector3", Stamped::Stamped))
            .unwrap();
        let matrix = model.register_class(eigen, ClassDecl::new("Matrix", Stamped::Both)).unwrap();

        assert_eq!(model.find_class("::btVector3").unwrap(), bt);
        assert_eq!(model.find_class("Eigen::Matrix").unwrap(), matrix);
        assert!(matches!(model.find_class("Eigen::Vector"), Err(GenerateError::UnknownClass(_))));
        assert!(matches!(model.find_class("Matrix"), Err(GenerateError::InvalidClassReference(_))));
        assert!(matches!(
            model.find_class("Eigen::"),
            Err(GenerateError::InvalidClassReference(_))
        ));
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let mut model = HeaderModel::new();
        let tf2 = model.add_namespace("tf2");
        model.register_class(tf2, ClassDecl::new("Vector3", Stamped::Both)).unwrap();
        let err = model.register_class(tf2, ClassDecl::new("Vector3", Stamped::Both)).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateClass { .. }));
    }

    #[test]
    fn test_same_name_opens_separate_blocks() {
        let mut model = HeaderModel::new();
        let a = model.add_namespace("tf2");
        let b = model.add_namespace("tf2");
        assert_ne!(a, b);
        assert_eq!(model.namespaces().len(), 2);
    }

    #[test]
    fn test_class_handle_must_point_at_class() {
        let mut other = HeaderModel::new();
        let ns = other.add_namespace("Foo");
        other.register_class(ns, ClassDecl::new("A", Stamped::Unstamped)).unwrap();
        let second = other.register_class(ns, ClassDecl::new("B", Stamped::Unstamped)).unwrap();

        let mut model = HeaderModel::new();
        let ns = model.add_namespace("Foo");
        model.register_class(ns, ClassDecl::new("A", Stamped::Unstamped)).unwrap();
        assert!(matches!(model.class(second), Err(GenerateError::UnregisteredClass(_))));
    }
}
