//! Inflection primitives for identifiers.
//!
//! Word splitting for titles and snake case is delegated to `heck`, number
//! inflection to `pluralizer`. Both operate on whole identifiers, so
//! `singularize` and `pluralize` only ever touch the final word of a
//! compound name.

use heck::{ToSnakeCase, ToTitleCase};

pub fn singularize(src: &str) -> String {
    pluralizer::pluralize(src, 1, false)
}

pub fn pluralize(src: &str) -> String {
    pluralizer::pluralize(src, 2, false)
}

/// `CamelCases` -> `camel_cases`
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// `snake_case` -> `snakeCase`
///
/// Each `_`-separated segment gets an upper-case first letter and keeps the
/// rest of its casing, then the very first letter is lower-cased. Unlike
/// `title_case`, words are not re-split on case changes: `userID` stays
/// `userID`.
pub fn camel_case(src: &str) -> String {
    let upper: String = src.split('_').map(upper_first).collect();
    lower_first(&upper)
}

fn upper_first(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `camel_case` -> `Camel Case`
pub fn title_case(src: &str) -> String {
    src.to_title_case()
}

/// Turns an underscored identifier into prose: lower-cases it, drops a
/// trailing `_id`, replaces underscores with spaces and capitalizes the first
/// letter.
///
/// `camel_case` -> `Camel case`, `author_id` -> `Author`
pub fn humanize(src: &str) -> String {
    let lower = src.to_lowercase();
    let trimmed = lower.strip_suffix("_id").unwrap_or(&lower);
    let spaced = trimmed.replace('_', " ");

    upper_first(&spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_inflection() {
        assert_eq!(singularize("CamelCases"), "CamelCase");
        assert_eq!(singularize("CamelCase"), "CamelCase");
        assert_eq!(pluralize("CamelCase"), "CamelCases");
        assert_eq!(pluralize("snake_case"), "snake_cases");
        assert_eq!(singularize("snake_cases"), "snake_case");
    }

    #[test]
    fn case_conversion() {
        assert_eq!(snake_case("CamelCases"), "camel_cases");
        assert_eq!(snake_case("managerId"), "manager_id");
        assert_eq!(camel_case("snake_case"), "snakeCase");
        assert_eq!(camel_case("CamelCase"), "camelCase");
        assert_eq!(camel_case("userID"), "userID");
        assert_eq!(camel_case("userIDs"), "userIDs");
        assert_eq!(camel_case("URLPath"), "uRLPath");
        assert_eq!(camel_case("author_id"), "authorId");
        assert_eq!(camel_case(""), "");
        assert_eq!(title_case("camel_case"), "Camel Case");
    }

    #[test]
    fn humanize_words() {
        assert_eq!(humanize("camel_case"), "Camel case");
        assert_eq!(humanize("active_state"), "Active state");
        assert_eq!(humanize("author_id"), "Author");
        assert_eq!(humanize(""), "");
    }
}
