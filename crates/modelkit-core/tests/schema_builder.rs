use modelkit_core::decl::{Attribute, EnumDecl, FieldDecl, ModelDecl, Value};
use modelkit_core::{Declaration, Schema, Source};
use std_util::prelude::*;

/// Stands in for a schema text parser that rejects its input.
struct RejectingParser {
    message: &'static str,
}

impl Source for RejectingParser {
    fn declarations(self) -> anyhow::Result<Vec<Declaration>> {
        Err(anyhow::anyhow!(self.message))
    }
}

fn post_with_unknown_author() -> Vec<Declaration> {
    vec![ModelDecl::new("Post")
        .field(FieldDecl::new("title", "String"))
        .field(FieldDecl::new("author", "Author"))
        .into()]
}

#[test]
fn source_failure_is_returned_unchanged() {
    let err = assert_err!(Schema::from_declarations(RejectingParser {
        message: "unexpected `}` at line 3",
    }));

    assert!(err.is_source());
    assert!(!err.is_not_found());
    assert_eq!(err.to_string(), "unexpected `}` at line 3");

    let source = assert_some!(std::error::Error::source(&err));
    assert_eq!(source.to_string(), "unexpected `}` at line 3");
}

#[test]
fn fallible_declaration_list() {
    let ok: anyhow::Result<Vec<Declaration>> = Ok(vec![ModelDecl::new("User").into()]);
    let schema = assert_ok!(Schema::from_declarations(ok));
    assert_ok!(schema.models.find("User"));

    let failed: anyhow::Result<Vec<Declaration>> = Err(anyhow::anyhow!("io error"));
    let err = assert_err!(Schema::from_declarations(failed));
    assert_eq!(err.to_string(), "io error");
}

#[test]
fn borrowed_sources() {
    let declarations: Vec<Declaration> = vec![
        ModelDecl::new("User").into(),
        EnumDecl::new("Role").enumerator("ADMIN").into(),
    ];

    let from_vec = assert_ok!(Schema::from_declarations(&declarations));
    let from_slice = assert_ok!(Schema::from_declarations(&declarations[..]));

    assert_eq!(from_vec.models.len(), 1);
    assert_eq!(from_slice.enums.len(), 1);
}

#[test]
fn permissive_by_default() {
    let schema = assert_ok!(Schema::from_declarations(post_with_unknown_author()));

    let unclassified: Vec<_> = schema
        .unclassified_fields()
        .map(|field| field.full_name(&schema))
        .collect();
    assert_eq!(unclassified, ["Post::author"]);
}

#[test]
fn strict_rejects_unclassified_fields() {
    let err = assert_err!(Schema::builder()
        .strict(true)
        .build(post_with_unknown_author()));

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "strict build found 1 unresolved field(s): invalid schema: \
         field `Post::author` has type `Author` which is not a scalar, model, or enum"
    );

    let cause = assert_some!(std::error::Error::source(&err));
    assert!(cause.to_string().starts_with("invalid schema: "));
}

#[test]
fn strict_lists_every_unclassified_field() {
    let declarations: Vec<Declaration> = vec![
        ModelDecl::new("Post")
            .field(FieldDecl::new("author", "Author"))
            .field(FieldDecl::new("tags", "Tag").array())
            .into(),
    ];

    let err = assert_err!(Schema::builder().strict(true).build(declarations));

    assert_eq!(
        err.to_string(),
        "strict build found 2 unresolved field(s): invalid schema: \
         field `Post::author` has type `Author` which is not a scalar, model, or enum; \
         field `Post::tags` has type `Tag` which is not a scalar, model, or enum"
    );
}

#[test]
fn strict_accepts_fully_resolved_schema() {
    let declarations: Vec<Declaration> = vec![
        ModelDecl::new("Post")
            .field(
                FieldDecl::new("id", "Int")
                    .attr(Attribute::new("default").arg(Value::call("autoincrement"))),
            )
            .field(FieldDecl::new("author", "Author").attr(
                Attribute::new("relation").key_value("fields", Value::idents(["authorId"])),
            ))
            .field(FieldDecl::new("authorId", "Int"))
            .into(),
        ModelDecl::new("Author")
            .field(FieldDecl::new("posts", "Post").array())
            .into(),
    ];

    let schema = assert_ok!(Schema::builder().strict(true).build(declarations));
    assert_eq!(schema.unclassified_fields().count(), 0);
}

#[test]
fn strict_can_be_switched_off_again() {
    let mut builder = Schema::builder();
    builder.strict(true).strict(false);

    assert_ok!(builder.build(post_with_unknown_author()));
}

#[cfg(feature = "serde")]
#[test]
fn catalog_serializes_to_json() {
    let declarations: Vec<Declaration> = vec![
        ModelDecl::new("User")
            .field(
                FieldDecl::new("id", "Int")
                    .attr(Attribute::new("default").arg(Value::call("autoincrement"))),
            )
            .field(FieldDecl::new("role", "Role"))
            .into(),
        EnumDecl::new("Role").enumerator("ADMIN").into(),
    ];

    let schema = assert_ok!(Schema::from_declarations(declarations));
    let json = assert_ok!(serde_json::to_value(&schema));

    assert_eq!(json["models"][0]["name"], "User");
    assert_eq!(json["models"][0]["names"]["plural_name"], "Users");
    assert_eq!(json["models"][0]["fields"][0]["role"], "Key");
    assert_eq!(json["models"][0]["fields"][1]["role"]["Enum"]["target"], 0);
    assert_eq!(json["enums"][0]["enumerators"][0]["title"], "Admin");
}
