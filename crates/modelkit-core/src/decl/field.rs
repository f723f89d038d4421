use super::Attribute;

/// One field line of a model declaration: `name Type[]? @attr ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    pub name: String,

    /// The declared type token, without `[]` or `?`.
    pub ty: String,

    /// True if declared as `Type[]`
    pub array: bool,

    /// True if declared as `Type?`
    pub optional: bool,

    pub attrs: Vec<Attribute>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            array: false,
            optional: false,
            attrs: vec![],
        }
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn attr(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }
}
