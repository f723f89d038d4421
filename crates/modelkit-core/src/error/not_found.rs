use super::Error;

/// The kind of catalog entity a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Model,
    Enum,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self {
            EntityKind::Model => "Model",
            EntityKind::Enum => "Enum",
        })
    }
}

/// Error when a name lookup against the catalog has no match.
#[derive(Debug)]
pub(super) struct NotFoundError {
    kind: EntityKind,
    name: Box<str>,
}

impl std::error::Error for NotFoundError {}

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} {} not found", self.kind, self.name)
    }
}

impl Error {
    /// Creates a not found error for an entity of `kind` named `name`.
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError {
            kind,
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a not found
    /// error.
    pub fn is_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NotFound(_)))
    }

    /// The entity kind and name of the not found error in this chain.
    pub fn not_found_entity(&self) -> Option<(EntityKind, &str)> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::NotFound(err) => Some((err.kind, &*err.name)),
            _ => None,
        })
    }
}
