//! A provider backed by a mutable in-memory set.

use parking_lot::RwLock;

use super::StyleProvider;
use crate::style::StyleSet;
use crate::types::{PropertyValue, StateType};

/// A provider whose values are set directly.
///
/// Changes are not pushed to contexts; call
/// [`StyleContext::invalidate`](crate::resolve::StyleContext::invalidate)
/// after modifying a provider that is already registered.
#[derive(Debug, Default)]
pub struct StaticStyleProvider {
    style: RwLock<StyleSet>,
}

impl StaticStyleProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider holding `style`.
    pub fn from_style_set(style: StyleSet) -> Self {
        Self {
            style: RwLock::new(style),
        }
    }

    pub fn set_property(
        &self,
        name: impl Into<String>,
        state: StateType,
        value: impl Into<PropertyValue>,
    ) {
        self.style.write().set_property(name, state, value);
    }

    pub fn set_for_all_states(&self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.style.write().set_for_all_states(name, value);
    }

    pub fn unset_property(&self, name: &str, state: StateType) -> Option<PropertyValue> {
        self.style.write().unset_property(name, state)
    }
}

impl StyleProvider for StaticStyleProvider {
    fn style(&self) -> StyleSet {
        self.style.read().clone()
    }
}

static_assertions::assert_impl_all!(StaticStyleProvider: Send, Sync);
