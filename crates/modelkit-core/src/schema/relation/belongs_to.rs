use super::*;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BelongsTo {
    /// Name of the sibling field holding the key, from `fields: [...]`
    pub foreign_key: String,

    /// Name of the referenced field on the target, from `references: [...]`
    pub references: Option<String>,

    /// The model named by the field's declared type. `None` until relations
    /// are linked, and stays `None` if no such model is declared.
    pub target: Option<ModelId>,
}

impl BelongsTo {
    pub fn target<'a>(&self, schema: &'a Schema) -> Option<&'a Model> {
        self.target.map(|id| schema.model(id))
    }
}
