use super::classify::{self, Tentative};
use super::{Enum, EnumId, FieldId, Model, ModelId, Registry, Schema};
use crate::decl::{Declaration, EnumDecl, ModelDecl};
use crate::{Error, Result, Source};
use indexmap::IndexMap;

/// Options for building a [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// Fail instead of silently dropping fields that resolve to no role.
    strict: bool,
}

/// Used to track state during the build process
pub(super) struct BuildSchema<'a> {
    /// Build options
    builder: &'a Builder,

    /// Maps model names to identifiers. The first declaration of a name wins.
    pub(super) model_lookup: IndexMap<String, ModelId>,

    /// Maps enum names to identifiers.
    pub(super) enum_lookup: IndexMap<String, EnumId>,

    pub(super) models: Vec<Model>,

    pub(super) enums: Vec<Enum>,

    /// Fields whose role depends on which models and enums exist.
    pub(super) tentative: Vec<(FieldId, Tentative)>,
}

impl Builder {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// When set, a field whose type resolves to neither a scalar, a model nor
    /// an enum makes [`build`](Self::build) fail. Off by default.
    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Classifies every field, links relations across the whole declaration
    /// list, and returns the finished catalog.
    ///
    /// A failure of `source` is returned unchanged and no catalog is built.
    pub fn build(&self, source: impl Source) -> Result<Schema> {
        let declarations = source.declarations().map_err(Error::from)?;

        let mut build = BuildSchema::new(self);

        for declaration in &declarations {
            match declaration {
                Declaration::Model(model) => build.push_model(model),
                Declaration::Enum(enumeration) => build.push_enum(enumeration),
            }
        }

        build.resolve();
        build.verify()?;

        let schema = build.into_schema();

        tracing::debug!(
            models = schema.models.len(),
            enums = schema.enums.len(),
            "schema built"
        );

        Ok(schema)
    }
}

impl<'a> BuildSchema<'a> {
    pub(super) fn new(builder: &'a Builder) -> Self {
        Self {
            builder,
            model_lookup: IndexMap::new(),
            enum_lookup: IndexMap::new(),
            models: vec![],
            enums: vec![],
            tentative: vec![],
        }
    }

    pub(super) fn push_model(&mut self, decl: &ModelDecl) {
        let id = ModelId(self.models.len());
        self.model_lookup.entry(decl.name.clone()).or_insert(id);

        let mut fields = Vec::with_capacity(decl.fields.len());

        for (index, field) in decl.fields.iter().enumerate() {
            let classified = classify::classify(id.field(index), field);

            if let Some(tentative) = classified.tentative {
                self.tentative.push((classified.field.id, tentative));
            }

            fields.push(classified.field);
        }

        self.models.push(Model::new(id, &decl.name, fields));
    }

    pub(super) fn push_enum(&mut self, decl: &EnumDecl) {
        let id = EnumId(self.enums.len());
        self.enum_lookup.entry(decl.name.clone()).or_insert(id);
        self.enums.push(Enum::from_decl(id, decl));
    }

    /// In strict mode, rejects fields that resolution left without a role.
    fn verify(&self) -> Result<()> {
        if !self.builder.strict {
            return Ok(());
        }

        let unresolved: Vec<_> = self
            .models
            .iter()
            .flat_map(|model| {
                model.unclassified_fields().map(move |field| {
                    format!(
                        "field `{}::{}` has type `{}` which is not a scalar, model, or enum",
                        model.name, field.name, field.ty
                    )
                })
            })
            .collect();

        if unresolved.is_empty() {
            return Ok(());
        }

        Err(Error::invalid_schema(unresolved.join("; ")).context(crate::err!(
            "strict build found {} unresolved field(s)",
            unresolved.len()
        )))
    }

    fn into_schema(self) -> Schema {
        Schema {
            models: Registry::new(self.models),
            enums: Registry::new(self.enums),
        }
    }
}
