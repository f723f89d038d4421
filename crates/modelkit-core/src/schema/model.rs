use super::{Field, FieldId, FieldRole, NameForms};
use std::fmt;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Model {
    /// Uniquely identifies the model within the catalog
    pub id: ModelId,

    /// Name of the model, as declared
    pub name: String,

    /// Naming variants of the model name
    pub names: NameForms,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,

    /// Field indices grouped by role. Filled while the catalog is built.
    buckets: Buckets,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelId(pub usize);

/// Indices into `Model::fields`, one list per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct Buckets {
    key: Vec<usize>,
    scalar: Vec<usize>,
    belongs_to: Vec<usize>,
    has_many: Vec<usize>,
    enums: Vec<usize>,
}

/// Selects one of a model's role buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bucket {
    Key,
    Scalar,
    BelongsTo,
    HasMany,
    Enum,
}

impl Model {
    pub(crate) fn new(id: ModelId, name: &str, fields: Vec<Field>) -> Self {
        let mut model = Self {
            id,
            name: name.to_string(),
            names: NameForms::new(name),
            fields,
            buckets: Buckets::default(),
        };
        model.collect_local_buckets();
        model
    }

    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub(crate) fn field_mut(&mut self, field: impl Into<FieldId>) -> &mut Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &mut self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields whose default is a key generator.
    pub fn key_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.bucket(Bucket::Key)
    }

    /// Primitive-typed fields, excluding keys and foreign key columns of
    /// `BelongsTo` relations.
    pub fn scalar_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.bucket(Bucket::Scalar)
    }

    pub fn belongs_to_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.bucket(Bucket::BelongsTo)
    }

    pub fn has_many_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.bucket(Bucket::HasMany)
    }

    pub fn enum_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.bucket(Bucket::Enum)
    }

    /// Fields that ended up with no role. These appear in no bucket.
    pub fn unclassified_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_unclassified())
    }

    /// Names of the sibling fields that hold foreign keys of this model's
    /// `BelongsTo` relations.
    pub fn foreign_key_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.belongs_to_fields().filter_map(Field::foreign_key)
    }

    fn bucket(&self, bucket: Bucket) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.buckets
            .get(bucket)
            .iter()
            .map(|index| &self.fields[*index])
    }

    /// Appends a field to a bucket unless it is already there. Returns `true`
    /// if the field was added.
    pub(crate) fn push_to_bucket(&mut self, bucket: Bucket, field: FieldId) -> bool {
        assert_eq!(self.id, field.model);
        let indices = self.buckets.get_mut(bucket);

        if indices.contains(&field.index) {
            return false;
        }

        indices.push(field.index);
        true
    }

    /// Buckets that depend only on the model's own fields: keys, scalars and
    /// `BelongsTo` relations. Scalars named as a foreign key by one of the
    /// relations are left out.
    fn collect_local_buckets(&mut self) {
        let mut key = vec![];
        let mut scalar = vec![];
        let mut belongs_to = vec![];

        for (index, field) in self.fields.iter().enumerate() {
            match &field.role {
                FieldRole::Key => key.push(index),
                FieldRole::Scalar => scalar.push(index),
                FieldRole::BelongsTo(_) => belongs_to.push(index),
                _ => {}
            }
        }

        scalar.retain(|index| {
            let name = &self.fields[*index].name;
            !belongs_to
                .iter()
                .any(|rel| self.fields[*rel].foreign_key() == Some(name.as_str()))
        });

        self.buckets.key = key;
        self.buckets.scalar = scalar;
        self.buckets.belongs_to = belongs_to;
    }
}

impl Buckets {
    fn get(&self, bucket: Bucket) -> &Vec<usize> {
        match bucket {
            Bucket::Key => &self.key,
            Bucket::Scalar => &self.scalar,
            Bucket::BelongsTo => &self.belongs_to,
            Bucket::HasMany => &self.has_many,
            Bucket::Enum => &self.enums,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<usize> {
        match bucket {
            Bucket::Key => &mut self.key,
            Bucket::Scalar => &mut self.scalar,
            Bucket::BelongsTo => &mut self.belongs_to,
            Bucket::HasMany => &mut self.has_many,
            Bucket::Enum => &mut self.enums,
        }
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
