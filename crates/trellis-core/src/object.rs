//! Widget identity.
//!
//! Every widget taking part in size negotiation carries an [`ObjectId`].
//! The id is what external collaborators (size groups, explicit size
//! requests) key their per-widget data on, so it has to stay stable for the
//! widget's whole lifetime and must not be reused by an unrelated widget
//! afterwards. Generational [`slotmap`] keys give both guarantees.

use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a widget in an [`ObjectRegistry`].
    ///
    /// `ObjectId`s stay valid until the widget is unregistered. A stale id
    /// never aliases a newer widget: the generation part of the key differs.
    pub struct ObjectId;
}

impl ObjectId {
    /// Convert the ObjectId to a raw u64 value.
    ///
    /// This is useful for interop with external systems that need a numeric ID.
    /// The raw value can be converted back using [`ObjectId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create an ObjectId from a raw u64 value.
    ///
    /// Note: This does not check if the ObjectId exists in any registry.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Hands out [`ObjectId`]s and remembers the type name behind each one.
///
/// The registry is an ordinary owned value. Object lifecycle (parenting,
/// destruction cascades) belongs to the surrounding widget framework; this
/// only tracks which ids are live.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, &'static str>,
}

impl ObjectRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object and return its ID.
    pub fn register(&mut self, type_name: &'static str) -> ObjectId {
        let id = self.objects.insert(type_name);
        tracing::trace!(target: targets::OBJECT, ?id, type_name, "registered object");
        id
    }

    /// Register an object, using the Rust type name of `T`.
    pub fn register_type<T: ?Sized>(&mut self) -> ObjectId {
        self.register(std::any::type_name::<T>())
    }

    /// Drop an id. Returns `false` if it was not live.
    pub fn unregister(&mut self, id: ObjectId) -> bool {
        let removed = self.objects.remove(id).is_some();
        if removed {
            tracing::trace!(target: targets::OBJECT, ?id, "unregistered object");
        }
        removed
    }

    /// Check whether an id is live.
    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Type name recorded at registration.
    pub fn type_name(&self, id: ObjectId) -> Option<&'static str> {
        self.objects.get(id).copied()
    }

    /// Number of live ids.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if no ids are live.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label;

    #[test]
    fn register_and_unregister() {
        let mut registry = ObjectRegistry::new();
        let id = registry.register("Button");

        assert!(registry.contains(id));
        assert_eq!(registry.type_name(id), Some("Button"));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(id));
        assert!(!registry.contains(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn stale_ids_do_not_alias() {
        let mut registry = ObjectRegistry::new();
        let first = registry.register("A");
        registry.unregister(first);
        let second = registry.register("B");

        assert_ne!(first, second);
        assert!(!registry.contains(first));
        assert_eq!(registry.type_name(second), Some("B"));
    }

    #[test]
    fn register_type_uses_rust_name() {
        let mut registry = ObjectRegistry::new();
        let id = registry.register_type::<Label>();
        assert!(registry.type_name(id).is_some_and(|name| name.ends_with("Label")));
    }

    #[test]
    fn raw_round_trip() {
        let mut registry = ObjectRegistry::new();
        let id = registry.register("A");
        assert_eq!(ObjectId::from_raw(id.as_raw()), id);
    }
}
