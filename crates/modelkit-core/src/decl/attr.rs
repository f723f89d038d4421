use super::Value;

/// A raw field attribute such as `@default(autoincrement())` or
/// `@relation(fields: [authorId], references: [id])`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name without the leading `@`
    pub name: String,

    /// Arguments in source order
    pub args: Vec<AttributeArg>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeArg {
    Positional(Value),
    KeyValue { key: String, value: Value },
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: vec![],
        }
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: Value) -> Self {
        self.args.push(AttributeArg::Positional(value));
        self
    }

    /// Appends a `key: value` argument.
    pub fn key_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.args.push(AttributeArg::KeyValue {
            key: key.into(),
            value,
        });
        self
    }

    /// The first positional argument.
    pub fn first_positional(&self) -> Option<&Value> {
        self.args.iter().find_map(|arg| match arg {
            AttributeArg::Positional(value) => Some(value),
            _ => None,
        })
    }

    /// The value of the `key: value` argument named `key`.
    pub fn named(&self, key: &str) -> Option<&Value> {
        self.args.iter().find_map(|arg| match arg {
            AttributeArg::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }
}
