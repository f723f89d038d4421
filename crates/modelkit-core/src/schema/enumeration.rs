use super::{name, NameForms, Schema};
use crate::decl::{EnumDecl, EnumeratorDecl};
use std::fmt;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enum {
    /// Uniquely identifies the enum within the catalog
    pub id: EnumId,

    /// Name of the enum, as declared
    pub name: String,

    /// Naming variants of the enum name
    pub names: NameForms,

    /// Values of the enum, in declaration order
    pub enumerators: Vec<Enumerator>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumId(pub usize);

/// One named value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enumerator {
    /// Raw name, conventionally `UPPER_SNAKE_CASE`
    pub name: String,

    /// `ACTIVE_STATE` -> `Active State`
    pub title: String,

    /// `ACTIVE_STATE` -> `Active state`
    pub label: String,

    pub comment: Option<String>,
}

/// Role payload of a field whose type is a declared enum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumField {
    pub target: EnumId,
}

impl Enum {
    pub(crate) fn from_decl(id: EnumId, decl: &EnumDecl) -> Self {
        Self {
            id,
            name: decl.name.clone(),
            names: NameForms::new(&decl.name),
            enumerators: decl.enumerators.iter().map(Enumerator::from_decl).collect(),
        }
    }

    pub fn enumerator(&self, name: &str) -> Option<&Enumerator> {
        self.enumerators
            .iter()
            .find(|enumerator| enumerator.name == name)
    }
}

impl Enumerator {
    pub fn from_decl(decl: &EnumeratorDecl) -> Self {
        Self {
            name: decl.name.clone(),
            title: name::enumerator_title(&decl.name),
            label: name::enumerator_label(&decl.name),
            comment: decl.comment.clone(),
        }
    }
}

impl EnumField {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Enum {
        schema.enumeration(self.target)
    }
}

impl From<&Enum> for EnumId {
    fn from(value: &Enum) -> Self {
        value.id
    }
}

impl fmt::Debug for EnumId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EnumId({})", self.0)
    }
}
