//! Typed property bags and resource-reference extraction

use crate::Moniker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property value.
///
/// Deep structural equality (`PartialEq`) drives update detection in the
/// diff engine; `references()` / `collect_references` drive dependency
/// edge construction. Do not add variants without revisiting both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<PropertyValue>),
    Bag(PropertyBag),
    /// A reference to another resource by moniker.
    Reference(Moniker),
}

impl PropertyValue {
    fn collect_references(&self, out: &mut Vec<Moniker>) {
        match self {
            PropertyValue::Reference(m) => out.push(m.clone()),
            PropertyValue::Sequence(items) => {
                for item in items {
                    item.collect_references(out);
                }
            }
            PropertyValue::Bag(bag) => out.extend(bag.references()),
            PropertyValue::Null | PropertyValue::Bool(_) | PropertyValue::Number(_) | PropertyValue::String(_) => {}
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<Moniker> for PropertyValue {
    fn from(m: Moniker) -> Self {
        PropertyValue::Reference(m)
    }
}

/// A mapping from string keys to tagged property values.
///
/// Backed by a `BTreeMap` so iteration order (and therefore any
/// serialized form) is deterministic; deep equality does not depend on
/// insertion order either way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(BTreeMap<String, PropertyValue>);

impl PropertyBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every moniker transitively referenced by this bag, through nested
    /// bags and sequences, in insertion (key) order with duplicates kept.
    #[must_use]
    pub fn references(&self) -> Vec<Moniker> {
        let mut out = Vec::new();
        for value in self.0.values() {
            value.collect_references(&mut out);
        }
        out
    }
}

impl FromIterator<(String, PropertyValue)> for PropertyBag {
    fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_equality_is_reflexive() {
        let bag = PropertyBag::new()
            .with("v", 1.0)
            .with("ref", Moniker::new("a"));
        assert_eq!(bag, bag.clone());
    }

    #[test]
    fn references_recurse_through_sequence_and_bag() {
        let nested = PropertyBag::new().with("inner_ref", Moniker::new("c"));
        let bag = PropertyBag::new()
            .with("direct", Moniker::new("a"))
            .with(
                "list",
                PropertyValue::Sequence(vec![PropertyValue::Reference(Moniker::new("b"))]),
            )
            .with("nested", PropertyValue::Bag(nested));

        let mut refs: Vec<_> = bag.references().into_iter().map(|m| m.as_str().to_string()).collect();
        refs.sort();
        assert_eq!(refs, vec!["a", "b", "c"]);
    }

    #[test]
    fn scalar_only_bag_has_no_references() {
        let bag = PropertyBag::new().with("v", 1.0).with("name", "x");
        assert!(bag.references().is_empty());
    }
}
