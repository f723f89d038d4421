//! The resolved catalog of models and enums.

mod auto;
pub use auto::AutoStrategy;

mod builder;
pub use builder::Builder;

pub mod classify;

mod enumeration;
pub use enumeration::{Enum, EnumField, EnumId, Enumerator};

mod field;
pub use field::{is_scalar_type, Field, FieldDefault, FieldId, FieldRole, SCALAR_TYPES};

mod model;
pub use model::{Model, ModelId};

pub mod name;
pub use name::NameForms;

mod registry;
pub use registry::{Entity, Registry};

mod relation;
pub use relation::{BelongsTo, HasMany};

mod resolve;

use crate::{Result, Source};

/// Models and enums of a schema with their derived roles, relations and
/// names.
///
/// A `Schema` is built in one pass and never changes afterwards. To reflect
/// new declarations, build a new one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schema {
    pub models: Registry<Model>,
    pub enums: Registry<Enum>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Builds a catalog with the default, permissive, options.
    pub fn from_declarations(source: impl Source) -> Result<Schema> {
        Builder::new().build(source)
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get_index(id.into().0)
    }

    /// Get an enum by ID
    pub fn enumeration(&self, id: impl Into<EnumId>) -> &Enum {
        self.enums.get_index(id.into().0)
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model).field(id)
    }

    /// Every field, across all models, that resolved to no role.
    pub fn unclassified_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.models
            .iter()
            .flat_map(|model| model.unclassified_fields())
    }
}
