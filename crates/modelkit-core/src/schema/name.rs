use std_util::str;

/// The naming variants of an identifier used by generated code and prose.
///
/// Every variant is a pure function of the raw identifier, so two catalogs
/// built from the same declarations always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NameForms {
    /// `Posts` -> `Post`
    pub singular_name: String,

    /// `Post` -> `Posts`
    pub plural_name: String,

    /// `BlogPosts` -> `blogPost`
    pub singular_variable: String,

    /// `BlogPost` -> `blogPosts`
    pub plural_variable: String,

    /// `BlogPosts` -> `Blog Post`
    pub singular_title: String,

    /// `BlogPost` -> `Blog Posts`
    pub plural_title: String,

    /// `BlogPosts` -> `Blog post`
    pub singular_label: String,

    /// `BlogPost` -> `Blog posts`
    pub plural_label: String,
}

impl NameForms {
    pub fn new(raw: &str) -> Self {
        let singular = str::singularize(raw);
        let plural = str::pluralize(raw);

        // Split into words before number inflection so that both camelCase
        // and snake_case identifiers end up as separate words.
        let words = str::snake_case(raw);
        let singular_words = str::singularize(&words);
        let plural_words = str::pluralize(&words);

        Self {
            singular_variable: str::camel_case(&singular),
            plural_variable: str::camel_case(&plural),
            singular_title: str::title_case(&singular_words),
            plural_title: str::title_case(&plural_words),
            singular_label: str::humanize(&singular_words),
            plural_label: str::humanize(&plural_words),
            singular_name: singular,
            plural_name: plural,
        }
    }
}

/// Title for an enumerator: `ACTIVE_STATE` -> `Active State`
pub fn enumerator_title(raw: &str) -> String {
    str::title_case(&raw.to_lowercase())
}

/// Label for an enumerator: `ACTIVE_STATE` -> `Active state`
pub fn enumerator_label(raw: &str) -> String {
    str::humanize(&raw.to_lowercase())
}
