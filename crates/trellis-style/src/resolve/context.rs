//! Per-widget style context.

use std::fmt;
use std::sync::Arc;

use trellis_core::DebugFlags;
use trellis_core::logging::targets;

use crate::error::Result;
use crate::provider::{StylePriority, StyleProvider};
use crate::resolve::cascade::cascade_providers;
use crate::style::{PropertySpec, StyleSet};
use crate::types::{PropertyValue, StateType};

struct StyleProviderEntry {
    provider: Arc<dyn StyleProvider>,
    priority: StylePriority,
}

/// Resolves style properties from a prioritized list of providers.
///
/// Providers are kept in ascending priority order; providers with equal
/// priority keep their insertion order. The resolved store is rebuilt from
/// scratch whenever the list changes, so reads never see a partial merge.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use trellis_style::prelude::*;
///
/// let theme = Arc::new(StaticStyleProvider::new());
/// theme.set_property("text-color", StateType::Normal, Color::RED);
/// let user = Arc::new(StaticStyleProvider::new());
/// user.set_property("text-color", StateType::Normal, Color::BLUE);
///
/// let mut cx = StyleContext::new();
/// cx.add_provider(theme, StylePriority::THEME);
/// cx.add_provider(user, StylePriority::USER);
///
/// assert_eq!(
///     cx.get_property("text-color", StateType::Normal),
///     Some(PropertyValue::Color(Color::BLUE))
/// );
/// ```
pub struct StyleContext {
    providers: Vec<StyleProviderEntry>,
    store: StyleSet,
    generation: u64,
    debug: DebugFlags,
}

impl StyleContext {
    /// Create a context with no providers.
    pub fn new() -> Self {
        Self::with_debug(DebugFlags::empty())
    }

    /// Create a context with explicit debug flags.
    pub fn with_debug(debug: DebugFlags) -> Self {
        Self {
            providers: Vec::new(),
            store: StyleSet::new(),
            generation: 0,
            debug,
        }
    }

    /// Register `provider` at `priority` and rebuild.
    ///
    /// A provider that is already registered is moved to the new priority.
    /// Among equal priorities the most recently added provider wins.
    pub fn add_provider(&mut self, provider: Arc<dyn StyleProvider>, priority: StylePriority) {
        self.providers
            .retain(|entry| !same_provider(&entry.provider, &provider));

        let index = self
            .providers
            .iter()
            .position(|entry| entry.priority > priority)
            .unwrap_or(self.providers.len());

        tracing::debug!(
            target: targets::STYLE,
            provider = provider.name(),
            %priority,
            index,
            "added style provider"
        );

        self.providers.insert(index, StyleProviderEntry { provider, priority });
        self.rebuild();
    }

    /// Unregister `provider`.
    ///
    /// Returns `false` and leaves the store untouched if it was not
    /// registered.
    pub fn remove_provider(&mut self, provider: &Arc<dyn StyleProvider>) -> bool {
        let Some(index) = self
            .providers
            .iter()
            .position(|entry| same_provider(&entry.provider, provider))
        else {
            return false;
        };

        let entry = self.providers.remove(index);
        tracing::debug!(
            target: targets::STYLE,
            provider = entry.provider.name(),
            priority = %entry.priority,
            "removed style provider"
        );
        self.rebuild();
        true
    }

    /// Whether `provider` is registered.
    pub fn contains_provider(&self, provider: &Arc<dyn StyleProvider>) -> bool {
        self.providers
            .iter()
            .any(|entry| same_provider(&entry.provider, provider))
    }

    /// Registered providers in cascade order, lowest priority first.
    pub fn providers(&self) -> impl Iterator<Item = (&Arc<dyn StyleProvider>, StylePriority)> {
        self.providers
            .iter()
            .map(|entry| (&entry.provider, entry.priority))
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Re-read every provider.
    ///
    /// Call this after changing the data of a registered provider.
    pub fn invalidate(&mut self) {
        self.rebuild();
    }

    /// Number of rebuilds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The resolved set, without registered defaults.
    pub fn store(&self) -> &StyleSet {
        &self.store
    }

    /// Resolved value of `name` in `state`.
    ///
    /// Falls back to the registered default when no provider sets it.
    pub fn get_property(&self, name: &str, state: StateType) -> Option<PropertyValue> {
        self.store
            .get_property(name, state)
            .cloned()
            .or_else(|| PropertySpec::lookup(name).map(PropertySpec::default_value))
    }

    /// Resolve several properties for one state.
    pub fn get_properties(&self, state: StateType, names: &[&str]) -> Vec<Option<PropertyValue>> {
        names
            .iter()
            .map(|name| self.get_property(name, state))
            .collect()
    }

    /// Resolved value of a registered property.
    ///
    /// Unlike [`get_property`](Self::get_property), this never returns
    /// nothing: unknown names are an error and unset names yield the
    /// default.
    pub fn get_registered_property(&self, name: &str, state: StateType) -> Result<PropertyValue> {
        let spec = PropertySpec::lookup_strict(name)?;
        Ok(self
            .store
            .get_property(name, state)
            .cloned()
            .unwrap_or_else(|| spec.default_value()))
    }

    fn rebuild(&mut self) {
        cascade_providers(
            &mut self.store,
            self.providers
                .iter()
                .map(|entry| -> &dyn StyleProvider { &*entry.provider }),
        );
        self.generation += 1;

        if self.debug.contains(DebugFlags::STYLE) {
            tracing::trace!(
                target: targets::STYLE,
                providers = self.providers.len(),
                properties = self.store.len(),
                generation = self.generation,
                "rebuilt style store"
            );
        }
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleContext")
            .field(
                "providers",
                &self
                    .providers
                    .iter()
                    .map(|entry| (entry.provider.name(), entry.priority))
                    .collect::<Vec<_>>(),
            )
            .field("store", &self.store)
            .field("generation", &self.generation)
            .finish()
    }
}

static_assertions::assert_impl_all!(StyleContext: Send, Sync);

/// Identity of the provider allocation, ignoring vtables.
fn same_provider(a: &Arc<dyn StyleProvider>, b: &Arc<dyn StyleProvider>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
