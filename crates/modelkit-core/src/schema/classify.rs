//! Single-field classification.
//!
//! Classification only looks at the field's own type token and attributes.
//! Whether a non-scalar type names a model or an enum is not known yet, so
//! such fields come out with a [`Tentative`] role that relation linking later
//! confirms or drops.

use super::{is_scalar_type, BelongsTo, Field, FieldDefault, FieldId, FieldRole, NameForms};
use crate::decl::{Attribute, FieldDecl, Value};

/// Role guessed for a field whose type is not a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tentative {
    /// Array of a type that may be a model.
    HasMany,

    /// Single value of a type that may be an enum.
    Enum,
}

/// Result of classifying one field declaration.
#[derive(Debug, Clone)]
pub struct Classified {
    /// The field record. Its role is [`FieldRole::Unclassified`] while
    /// `tentative` is set.
    pub field: Field,

    pub tentative: Option<Tentative>,
}

/// Classifies a field declaration on its own, without looking at the rest
/// of the catalog. Unknown type tokens are accepted.
///
/// Rules apply in priority order and the first match wins:
///
/// 1. `@unique` marks the field unique (any role).
/// 2. `@default(autoincrement() | uuid() | cuid())` makes it a key.
/// 3. `@relation(fields: [fk], ...)` makes it a `BelongsTo`.
/// 4. A primitive type token makes it a scalar.
/// 5. An array type is a tentative `HasMany`.
/// 6. Anything else is a tentative enum reference.
pub fn classify(id: FieldId, decl: &FieldDecl) -> Classified {
    let mut unique = false;
    let mut primary_key = false;
    let mut default = None;
    let mut belongs_to = None;

    for attr in &decl.attrs {
        match attr.name.as_str() {
            "unique" => unique = true,
            "id" => primary_key = true,
            "default" => {
                if let Some(value) = attr.first_positional() {
                    default = Some(FieldDefault::from_value(value));
                }
            }
            "relation" => {
                if let Some(rel) = belongs_to_from_attr(attr) {
                    belongs_to = Some(rel);
                }
            }
            _ => {}
        }
    }

    let key = default
        .as_ref()
        .and_then(FieldDefault::as_auto)
        .is_some();

    let (role, tentative) = if key {
        (FieldRole::Key, None)
    } else if let Some(belongs_to) = belongs_to {
        (FieldRole::BelongsTo(belongs_to), None)
    } else if is_scalar_type(&decl.ty) {
        (FieldRole::Scalar, None)
    } else if decl.array {
        (FieldRole::Unclassified, Some(Tentative::HasMany))
    } else {
        (FieldRole::Unclassified, Some(Tentative::Enum))
    };

    Classified {
        field: Field {
            id,
            name: decl.name.clone(),
            names: NameForms::new(&decl.name),
            ty: decl.ty.clone(),
            array: decl.array,
            nullable: decl.optional,
            primary_key,
            unique,
            default,
            role,
            attrs: decl.attrs.clone(),
        },
        tentative,
    }
}

/// Reads `@relation(fields: [fk], references: [pk])`. Only the first column
/// of each list is used.
fn belongs_to_from_attr(attr: &Attribute) -> Option<BelongsTo> {
    let foreign_key = attr.named("fields").and_then(Value::first_ident)?;
    let references = attr.named("references").and_then(Value::first_ident);

    Some(BelongsTo {
        foreign_key: foreign_key.to_string(),
        references: references.map(str::to_string),
        target: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Attribute;
    use crate::schema::{AutoStrategy, ModelId};
    use std_util::prelude::*;

    fn run(decl: FieldDecl) -> Classified {
        classify(ModelId(0).field(0), &decl)
    }

    fn default_to(value: Value) -> Attribute {
        Attribute::new("default").arg(value)
    }

    fn relation(fields: &str, references: Option<&str>) -> Attribute {
        let attr = Attribute::new("relation").key_value("fields", Value::idents([fields]));
        match references {
            Some(references) => attr.key_value("references", Value::idents([references])),
            None => attr,
        }
    }

    #[test]
    fn key_generators() {
        for (generator, auto) in [
            ("autoincrement", AutoStrategy::Increment),
            ("uuid", AutoStrategy::Uuid),
            ("cuid", AutoStrategy::Cuid),
        ] {
            let classified =
                run(FieldDecl::new("id", "String").attr(default_to(Value::call(generator))));

            assert_eq!(classified.field.role, FieldRole::Key);
            assert_eq!(classified.field.default, Some(FieldDefault::Auto(auto)));
            assert_eq!(
                classified.field.default.as_ref().and_then(FieldDefault::name),
                Some(generator)
            );
            assert_none!(classified.tentative);
        }
    }

    #[test]
    fn other_defaults_keep_scalar_role() {
        let classified =
            run(FieldDecl::new("createdAt", "DateTime").attr(default_to(Value::call("now"))));

        assert_eq!(classified.field.role, FieldRole::Scalar);
        assert_eq!(
            classified.field.default,
            Some(FieldDefault::Value(Value::call("now")))
        );
        assert_eq!(classified.field.default.unwrap().to_string(), "now()");
    }

    #[test]
    fn literal_default_on_enum_typed_field() {
        let classified =
            run(FieldDecl::new("status", "Status").attr(default_to(Value::ident("DRAFT"))));

        assert_eq!(classified.field.role, FieldRole::Unclassified);
        assert_eq!(classified.tentative, Some(Tentative::Enum));
        assert_eq!(classified.field.default.unwrap().to_string(), "DRAFT");
    }

    #[test]
    fn unique_does_not_change_role() {
        let classified = run(FieldDecl::new("email", "String").attr(Attribute::new("unique")));

        assert!(classified.field.unique);
        assert_eq!(classified.field.role, FieldRole::Scalar);
    }

    #[test]
    fn relation_with_fields_is_belongs_to() {
        let classified =
            run(FieldDecl::new("manager", "User").attr(relation("managerId", Some("id"))));

        assert_none!(classified.tentative);
        assert_eq!(classified.field.foreign_key(), Some("managerId"));
        assert_eq!(classified.field.references(), Some("id"));
        assert_none!(classified.field.role.expect_belongs_to().target);
    }

    #[test]
    fn relation_without_references() {
        let classified = run(FieldDecl::new("author", "User").attr(relation("authorId", None)));

        assert_eq!(classified.field.foreign_key(), Some("authorId"));
        assert_none!(classified.field.references());
    }

    #[test]
    fn relation_without_fields_is_not_belongs_to() {
        let classified = run(FieldDecl::new("posts", "Post")
            .array()
            .attr(Attribute::new("relation").arg(Value::string("Authored"))));

        assert!(!classified.field.is_belongs_to());
        assert_eq!(classified.tentative, Some(Tentative::HasMany));
    }

    #[test]
    fn key_wins_over_relation() {
        let classified = run(FieldDecl::new("id", "Int")
            .attr(relation("otherId", Some("id")))
            .attr(default_to(Value::call("autoincrement"))));

        assert!(classified.field.is_key());
        assert_none!(classified.field.foreign_key());
    }

    #[test]
    fn scalar_types() {
        for ty in ["Float", "String", "Int", "Boolean", "DateTime", "Bytes", "Decimal"] {
            let classified = run(FieldDecl::new("value", ty));
            assert!(classified.field.is_scalar(), "{ty} should be scalar");
        }

        let optional = run(FieldDecl::new("nickname", "String").optional());
        assert!(optional.field.is_scalar());
        assert!(optional.field.nullable);
    }

    #[test]
    fn non_scalar_primitives_are_tentative_enums() {
        for ty in ["BigInt", "Json"] {
            let classified = run(FieldDecl::new("value", ty));
            assert_eq!(classified.tentative, Some(Tentative::Enum));
        }
    }

    #[test]
    fn arrays_of_unknown_types_are_tentative_has_many() {
        let classified = run(FieldDecl::new("comments", "Comment").array());

        assert!(classified.field.is_unclassified());
        assert_eq!(classified.tentative, Some(Tentative::HasMany));
    }

    #[test]
    fn primary_key_flag() {
        let classified = run(FieldDecl::new("id", "Int")
            .attr(Attribute::new("id"))
            .attr(default_to(Value::call("autoincrement"))));

        assert!(classified.field.primary_key);
        assert_eq!(classified.field.attrs.len(), 2);
    }
}
