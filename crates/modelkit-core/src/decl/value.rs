/// An attribute argument value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A bare identifier, e.g. `DRAFT` or a field name.
    Ident(String),

    /// A quoted string literal, stored without quotes.
    String(String),

    /// A numeric literal, kept in its source spelling.
    Number(String),

    Boolean(bool),

    /// `[a, b, ...]`
    Array(Vec<Value>),

    /// A function call such as `autoincrement()` or `dbgenerated("...")`.
    Function { name: String, args: Vec<Value> },
}

impl Value {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// A call with no arguments.
    pub fn call(name: impl Into<String>) -> Self {
        Self::Function {
            name: name.into(),
            args: vec![],
        }
    }

    /// An array of identifiers, the shape used by `fields: [...]` and
    /// `references: [...]`.
    pub fn idents<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(names.into_iter().map(Self::ident).collect())
    }

    /// Name of the function, if this is a call.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::Function { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The identifier this value names: an identifier itself, or the first
    /// element of an array of identifiers.
    pub fn first_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name),
            _ => self.as_array()?.first()?.first_ident(),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ident(name) => f.write_str(name),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Number(value) => f.write_str(value),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Function { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_source_spelling() {
        assert_eq!(Value::call("now").to_string(), "now()");
        assert_eq!(Value::idents(["a", "b"]).to_string(), "[a, b]");
        assert_eq!(Value::string("guest").to_string(), "\"guest\"");
        assert_eq!(
            Value::Function {
                name: "dbgenerated".into(),
                args: vec![Value::string("gen_random_uuid()")],
            }
            .to_string(),
            "dbgenerated(\"gen_random_uuid()\")"
        );
    }

    #[test]
    fn first_ident() {
        assert_eq!(Value::idents(["managerId"]).first_ident(), Some("managerId"));
        assert_eq!(Value::ident("id").first_ident(), Some("id"));
        assert_eq!(Value::Array(vec![]).first_ident(), None);
        assert_eq!(Value::string("id").first_ident(), None);
    }

    #[test]
    fn as_array() {
        let value = Value::idents(["a", "b"]);
        assert_eq!(value.as_array(), Some(&[Value::ident("a"), Value::ident("b")][..]));
        assert_eq!(Value::ident("a").as_array(), None);
    }
}
