//! Declarations handed over by a schema parser.
//!
//! These are plain data: an ordered list of model and enum declarations, each
//! with ordered fields or enumerators and the raw attributes written on them.
//! Nothing here interprets attributes; that happens when the [`Schema`] is
//! built.
//!
//! [`Schema`]: crate::Schema

mod attr;
pub use attr::{Attribute, AttributeArg};

mod enumeration;
pub use enumeration::{EnumDecl, EnumeratorDecl};

mod field;
pub use field::FieldDecl;

mod model;
pub use model::ModelDecl;

mod source;
pub use source::Source;

mod value;
pub use value::Value;

/// A single top-level item of a schema, in source order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Declaration {
    Model(ModelDecl),
    Enum(EnumDecl),
}

impl From<ModelDecl> for Declaration {
    fn from(value: ModelDecl) -> Self {
        Self::Model(value)
    }
}

impl From<EnumDecl> for Declaration {
    fn from(value: EnumDecl) -> Self {
        Self::Enum(value)
    }
}
