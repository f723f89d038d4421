/// Surrogate identifier generator named by a field's `@default(...)`.
///
/// A field whose default is one of these is a key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AutoStrategy {
    /// `autoincrement()`
    Increment,

    /// `uuid()`
    Uuid,

    /// `cuid()`
    Cuid,
}

impl AutoStrategy {
    /// Maps a default generator function name to a strategy.
    pub fn from_generator(name: &str) -> Option<Self> {
        match name {
            "autoincrement" => Some(Self::Increment),
            "uuid" => Some(Self::Uuid),
            "cuid" => Some(Self::Cuid),
            _ => None,
        }
    }

    /// The generator function name, as written in a schema.
    pub fn generator(self) -> &'static str {
        match self {
            Self::Increment => "autoincrement",
            Self::Uuid => "uuid",
            Self::Cuid => "cuid",
        }
    }
}
