#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumDecl {
    pub name: String,
    pub enumerators: Vec<EnumeratorDecl>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumeratorDecl {
    pub name: String,

    /// Trailing `//` comment on the enumerator line, if any
    pub comment: Option<String>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enumerators: vec![],
        }
    }

    pub fn enumerator(mut self, name: impl Into<String>) -> Self {
        self.enumerators.push(EnumeratorDecl {
            name: name.into(),
            comment: None,
        });
        self
    }

    pub fn enumerator_with_comment(
        mut self,
        name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        self.enumerators.push(EnumeratorDecl {
            name: name.into(),
            comment: Some(comment.into()),
        });
        self
    }
}
