use super::{Enum, Model};
use crate::{EntityKind, Error, Result};
use indexmap::IndexMap;

/// A catalog entity that can be looked up by name.
pub trait Entity {
    const KIND: EntityKind;

    fn name(&self) -> &str;
}

impl Entity for Model {
    const KIND: EntityKind = EntityKind::Model;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Enum {
    const KIND: EntityKind = EntityKind::Enum;

    fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered, immutable collection of models or enums with name lookup.
///
/// Entities are kept in declaration order. If two entities share a name,
/// lookups return the first one declared.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Registry<T> {
    items: Vec<T>,

    /// Maps names to positions in `items`
    #[cfg_attr(feature = "serde", serde(skip))]
    lookup: IndexMap<String, usize>,
}

impl<T: Entity> Registry<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        let mut lookup = IndexMap::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            lookup.entry(item.name().to_string()).or_insert(index);
        }

        Self { items, lookup }
    }

    /// Every entity, in declaration order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the entity named `name`, or a not found error naming the
    /// entity kind and the requested name.
    pub fn find(&self, name: &str) -> Result<&T> {
        self.get(name).ok_or_else(|| Error::not_found(T::KIND, name))
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.lookup.get(name).map(|index| &self.items[*index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get_index(&self, index: usize) -> &T {
        self.items.get(index).expect("invalid entity ID")
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumId, NameForms};
    use std_util::prelude::*;

    fn enumeration(index: usize, name: &str) -> Enum {
        Enum {
            id: EnumId(index),
            name: name.to_string(),
            names: NameForms::new(name),
            enumerators: vec![],
        }
    }

    #[test]
    fn find_by_exact_name() {
        let registry = Registry::new(vec![enumeration(0, "Role"), enumeration(1, "Status")]);

        assert_eq!(assert_ok!(registry.find("Status")).id, EnumId(1));
        assert_none!(registry.get("status"));

        let err = assert_err!(registry.find("X"));
        assert_eq!(err.to_string(), "Enum X not found");
        assert_eq!(err.not_found_entity(), Some((EntityKind::Enum, "X")));
    }

    #[test]
    fn duplicate_names_resolve_to_first_declared() {
        let registry = Registry::new(vec![enumeration(0, "Role"), enumeration(1, "Role")]);

        assert_eq!(registry.len(), 2);
        assert_eq!(assert_ok!(registry.find("Role")).id, EnumId(0));
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::<Enum>::new(vec![]);

        assert!(registry.is_empty());
        assert_empty!(registry.all());
        assert!(assert_err!(registry.find("Role")).is_not_found());
    }
}
