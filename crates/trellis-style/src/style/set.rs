//! Per-state property storage.

use std::collections::HashMap;

use crate::types::{PropertyValue, StateType};

type StateValues = [Option<PropertyValue>; StateType::COUNT];

/// A set of property values, one slot per [`StateType`].
///
/// Only explicitly set values are stored. Reading a property that was never
/// set for a state returns `None`; registered defaults are applied by
/// [`StyleContext`](crate::resolve::StyleContext), not here.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSet {
    properties: HashMap<String, StateValues>,
}

impl StyleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` for one state.
    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        state: StateType,
        value: impl Into<PropertyValue>,
    ) {
        self.properties.entry(name.into()).or_default()[state.index()] = Some(value.into());
    }

    /// Set `name` to the same value for every state.
    pub fn set_for_all_states(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let value = value.into();
        let values = self.properties.entry(name.into()).or_default();
        for slot in values.iter_mut() {
            *slot = Some(value.clone());
        }
    }

    /// Builder form of [`set_property`](Self::set_property).
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        state: StateType,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.set_property(name, state, value);
        self
    }

    /// Remove the value of `name` for one state.
    ///
    /// The name is dropped once no state holds a value.
    pub fn unset_property(&mut self, name: &str, state: StateType) -> Option<PropertyValue> {
        let values = self.properties.get_mut(name)?;
        let old = values[state.index()].take();
        if values.iter().all(Option::is_none) {
            self.properties.remove(name);
        }
        old
    }

    /// The explicitly set value of `name` in `state`.
    pub fn get_property(&self, name: &str, state: StateType) -> Option<&PropertyValue> {
        self.properties.get(name)?[state.index()].as_ref()
    }

    /// Whether any state holds a value for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Number of property names with at least one value.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// Iterate `(name, per-state values)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<PropertyValue>])> {
        self.properties
            .iter()
            .map(|(name, values)| (name.as_str(), &values[..]))
    }

    /// Merge `other` into this set.
    ///
    /// With `replace`, every value set in `other` overwrites ours. Without
    /// it, values are only copied into empty `(name, state)` slots.
    pub fn merge(&mut self, other: &StyleSet, replace: bool) {
        for (name, source) in &other.properties {
            let target = self.properties.entry(name.clone()).or_default();
            for (slot, value) in target.iter_mut().zip(source) {
                if let Some(value) = value
                    && (replace || slot.is_none())
                {
                    *slot = Some(value.clone());
                }
            }
        }
    }
}
