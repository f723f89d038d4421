use super::{
    AutoStrategy, BelongsTo, Enum, EnumField, EnumId, HasMany, Model, ModelId, NameForms, Schema,
};
use crate::decl::{Attribute, Value};
use std::fmt;

/// The primitive type tokens a scalar field may be declared with.
pub const SCALAR_TYPES: [&str; 7] = [
    "Float", "String", "Int", "Boolean", "DateTime", "Bytes", "Decimal",
];

/// Returns `true` if `ty` is one of [`SCALAR_TYPES`].
pub fn is_scalar_type(ty: &str) -> bool {
    SCALAR_TYPES.contains(&ty)
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Uniquely identifies the field within the catalog.
    pub id: FieldId,

    /// The field name, as declared
    pub name: String,

    /// Naming variants of the field name
    pub names: NameForms,

    /// The raw declared type token, e.g. `Int` or `Comment`
    pub ty: String,

    /// True if declared as an array (`Type[]`)
    pub array: bool,

    /// True if declared optional (`Type?`)
    pub nullable: bool,

    /// True if the field carries `@id`
    pub primary_key: bool,

    /// True if the field carries `@unique`
    pub unique: bool,

    /// The `@default(...)` argument, if any
    pub default: Option<FieldDefault>,

    /// Key, scalar, relation, enum reference, or nothing
    pub role: FieldRole,

    /// Raw attributes, in declaration order
    pub attrs: Vec<Attribute>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

/// The semantic role of a field. Exactly one applies to every field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldRole {
    /// Default is a surrogate identifier generator.
    Key,

    /// Primitive-typed value that is not a key.
    Scalar,

    /// Foreign-key bearing side of a relation.
    BelongsTo(BelongsTo),

    /// Array of another model.
    HasMany(HasMany),

    /// Reference to an enum.
    Enum(EnumField),

    /// No rule confirmed a role. The field is left out of every bucket.
    Unclassified,
}

/// A field's `@default(...)` argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldDefault {
    /// One of the key generators.
    Auto(AutoStrategy),

    /// Any other literal or expression, e.g. `now()`, `DRAFT` or `"guest"`.
    Value(Value),
}

impl Field {
    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn is_key(&self) -> bool {
        matches!(self.role, FieldRole::Key)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.role, FieldRole::Scalar)
    }

    pub fn is_belongs_to(&self) -> bool {
        self.role.is_belongs_to()
    }

    pub fn is_has_many(&self) -> bool {
        self.role.is_has_many()
    }

    pub fn is_enum(&self) -> bool {
        self.role.is_enum()
    }

    pub fn is_unclassified(&self) -> bool {
        matches!(self.role, FieldRole::Unclassified)
    }

    pub fn is_relation(&self) -> bool {
        self.role.is_relation()
    }

    /// Name of the sibling field holding the foreign key, for `BelongsTo`
    /// fields.
    pub fn foreign_key(&self) -> Option<&str> {
        self.role
            .as_belongs_to()
            .map(|belongs_to| &belongs_to.foreign_key[..])
    }

    /// Name of the referenced field on the target model, for `BelongsTo`
    /// fields that declare one.
    pub fn references(&self) -> Option<&str> {
        self.role
            .as_belongs_to()
            .and_then(|belongs_to| belongs_to.references.as_deref())
    }

    /// If the field is a relation, return the relation's target ModelId.
    pub fn related_model_id(&self) -> Option<ModelId> {
        match &self.role {
            FieldRole::BelongsTo(belongs_to) => belongs_to.target,
            FieldRole::HasMany(has_many) => Some(has_many.target),
            _ => None,
        }
    }

    /// If the field is a relation, return the target of the relation.
    pub fn related_model<'a>(&self, schema: &'a Schema) -> Option<&'a Model> {
        self.related_model_id().map(|id| schema.model(id))
    }

    pub fn related_enum_id(&self) -> Option<EnumId> {
        self.role.as_enum().map(|field| field.target)
    }

    /// If the field references an enum, return that enum.
    pub fn related_enum<'a>(&self, schema: &'a Schema) -> Option<&'a Enum> {
        self.related_enum_id().map(|id| schema.enumeration(id))
    }

    /// Returns a fully qualified name for the field.
    pub fn full_name(&self, schema: &Schema) -> String {
        let model = schema.model(self.id.model);
        format!("{}::{}", model.name, self.name)
    }
}

impl FieldRole {
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::BelongsTo(..) | Self::HasMany(..))
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self, Self::BelongsTo(..))
    }

    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        match self {
            Self::BelongsTo(belongs_to) => Some(belongs_to),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_belongs_to(&self) -> &BelongsTo {
        match self {
            Self::BelongsTo(belongs_to) => belongs_to,
            _ => panic!("expected field to be `BelongsTo`, but was {self:?}"),
        }
    }

    #[track_caller]
    pub(crate) fn expect_belongs_to_mut(&mut self) -> &mut BelongsTo {
        match self {
            Self::BelongsTo(belongs_to) => belongs_to,
            _ => panic!("expected field to be `BelongsTo`, but was {self:?}"),
        }
    }

    pub fn is_has_many(&self) -> bool {
        matches!(self, Self::HasMany(..))
    }

    pub fn as_has_many(&self) -> Option<&HasMany> {
        match self {
            Self::HasMany(has_many) => Some(has_many),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_has_many(&self) -> &HasMany {
        match self {
            Self::HasMany(has_many) => has_many,
            _ => panic!("expected field to be `HasMany`, but was {self:?}"),
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(..))
    }

    pub fn as_enum(&self) -> Option<&EnumField> {
        match self {
            Self::Enum(field) => Some(field),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_enum(&self) -> &EnumField {
        match self {
            Self::Enum(field) => field,
            _ => panic!("expected field to be `Enum`, but was {self:?}"),
        }
    }
}

impl FieldDefault {
    pub(crate) fn from_value(value: &Value) -> Self {
        value
            .function_name()
            .and_then(AutoStrategy::from_generator)
            .map(Self::Auto)
            .unwrap_or_else(|| Self::Value(value.clone()))
    }

    pub fn as_auto(&self) -> Option<AutoStrategy> {
        match self {
            Self::Auto(auto) => Some(*auto),
            Self::Value(_) => None,
        }
    }

    /// The generator name for key defaults, or the function name for other
    /// calls such as `now()`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Auto(auto) => Some(auto.generator()),
            Self::Value(value) => value.function_name(),
        }
    }
}

impl fmt::Display for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto(auto) => write!(f, "{}()", auto.generator()),
            Self::Value(value) => value.fmt(f),
        }
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
