//! Relation linking.
//!
//! Runs once every model and enum of the declaration list has been assembled,
//! so a field may refer to a type declared after it. Linking is idempotent:
//! running it again over a linked catalog leaves roles and buckets as they
//! were.

use super::builder::BuildSchema;
use super::classify::Tentative;
use super::model::Bucket;
use super::{EnumField, FieldRole, HasMany};

impl BuildSchema<'_> {
    pub(super) fn resolve(&mut self) {
        // Order matters: an array field that does not name a model may still
        // name an enum, and that check only applies to fields the first pass
        // left unconfirmed.
        self.link_has_many();
        self.link_enums();
        self.link_belongs_to();

        for model in &self.models {
            for field in model.unclassified_fields() {
                tracing::debug!(
                    model = %model.name,
                    field = %field.name,
                    ty = %field.ty,
                    "field left unclassified"
                );
            }
        }
    }

    /// Confirms tentative `HasMany` fields whose element type is a declared
    /// model.
    fn link_has_many(&mut self) {
        for i in 0..self.tentative.len() {
            let (field_id, tentative) = self.tentative[i];

            if tentative != Tentative::HasMany {
                continue;
            }

            let field = self.models[field_id.model.0].field(field_id);
            let Some(&target) = self.model_lookup.get(&field.ty) else {
                continue;
            };

            let model = &mut self.models[field_id.model.0];
            model.field_mut(field_id).role = FieldRole::HasMany(HasMany { target });

            if model.push_to_bucket(Bucket::HasMany, field_id) {
                let field = model.field(field_id);
                tracing::trace!(
                    model = %model.name,
                    field = %field.name,
                    target = %field.ty,
                    "linked has_many"
                );
            }
        }
    }

    /// Confirms enum references for every tentative field that did not become
    /// a `HasMany`, including arrays of enums.
    fn link_enums(&mut self) {
        for i in 0..self.tentative.len() {
            let (field_id, _) = self.tentative[i];

            let model = &mut self.models[field_id.model.0];
            let field = model.field(field_id);

            if field.is_has_many() {
                continue;
            }

            let Some(&target) = self.enum_lookup.get(&field.ty) else {
                continue;
            };

            model.field_mut(field_id).role = FieldRole::Enum(EnumField { target });

            if model.push_to_bucket(Bucket::Enum, field_id) {
                let field = model.field(field_id);
                tracing::trace!(
                    model = %model.name,
                    field = %field.name,
                    target = %field.ty,
                    "linked enum"
                );
            }
        }
    }

    /// Points each `BelongsTo` at the model named by the field's own declared
    /// type. The `references` argument only names the referenced column and
    /// plays no part in finding the target. No inverse field is added to the
    /// target model.
    fn link_belongs_to(&mut self) {
        for curr in 0..self.models.len() {
            for index in 0..self.models[curr].fields.len() {
                let field = &self.models[curr].fields[index];

                if !field.is_belongs_to() {
                    continue;
                }

                let target = self.model_lookup.get(&field.ty).copied();

                if target.is_none() {
                    tracing::debug!(
                        model = %self.models[curr].name,
                        field = %field.name,
                        ty = %field.ty,
                        "belongs_to target is not a declared model"
                    );
                }

                self.models[curr].fields[index]
                    .role
                    .expect_belongs_to_mut()
                    .target = target;
            }
        }
    }
}
