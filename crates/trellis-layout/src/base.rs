//! Per-widget size request state.

use bitflags::bitflags;
use trellis_core::{ObjectId, Orientation};

use crate::cache::{DesiredSize, SizeCache};
use crate::geometry::Requisition;

bitflags! {
    /// Staleness flags consulted by the negotiation engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RequestFlags: u8 {
        /// The coarse unconstrained measurement must run again.
        const REQUEST_NEEDED = 1 << 0;
        /// Cached widths are stale.
        const WIDTH_REQUEST_NEEDED = 1 << 1;
        /// Cached heights are stale.
        const HEIGHT_REQUEST_NEEDED = 1 << 2;
    }
}

impl RequestFlags {
    /// The per-orientation flag for `orientation`.
    #[inline]
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::WIDTH_REQUEST_NEEDED,
            Orientation::Vertical => Self::HEIGHT_REQUEST_NEEDED,
        }
    }
}

impl Default for RequestFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Size request state owned by each widget.
///
/// Widgets embed this as a field and expose it through
/// [`SizeRequest::request_base`](crate::SizeRequest::request_base). The
/// engine keeps the widget's cache and coarse requisition here; the widget
/// framework marks it stale with [`queue_resize`](Self::queue_resize) when
/// the widget's content changes.
///
/// A new base starts with every flag set so the first query measures.
#[derive(Debug, Clone)]
pub struct SizeRequestBase {
    id: ObjectId,
    flags: RequestFlags,
    requisition: Requisition,
    cache: Option<SizeCache>,
}

impl SizeRequestBase {
    /// Create the state for the widget identified by `id`.
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            flags: RequestFlags::all(),
            requisition: Requisition::ZERO,
            cache: None,
        }
    }

    /// The owning widget's id.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Current staleness flags.
    #[inline]
    pub fn flags(&self) -> RequestFlags {
        self.flags
    }

    /// Result of the last coarse measurement.
    #[inline]
    pub fn requisition(&self) -> Requisition {
        self.requisition
    }

    /// Mark everything stale: the coarse measurement and both orientations.
    pub fn queue_resize(&mut self) {
        self.flags = RequestFlags::all();
    }

    /// Mark only `orientation`'s cached results stale.
    pub fn invalidate(&mut self, orientation: Orientation) {
        self.flags.insert(RequestFlags::for_orientation(orientation));
    }

    /// Whether the next `orientation` query discards the cache.
    #[inline]
    pub fn needs_request(&self, orientation: Orientation) -> bool {
        self.flags.contains(RequestFlags::for_orientation(orientation))
    }

    /// Whether the coarse measurement is stale.
    #[inline]
    pub fn request_needed(&self) -> bool {
        self.flags.contains(RequestFlags::REQUEST_NEEDED)
    }

    /// Whether the cache has been created by a first query.
    #[inline]
    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// Cached results for `orientation`; empty before the first query.
    pub fn cached_sizes(&self, orientation: Orientation) -> &[DesiredSize] {
        match &self.cache {
            Some(cache) => &cache.sizes(orientation)[..],
            None => &[],
        }
    }

    /// The cache, if created.
    #[inline]
    pub fn cache(&self) -> Option<&SizeCache> {
        self.cache.as_ref()
    }

    pub(crate) fn cache_mut(&mut self) -> &mut SizeCache {
        self.cache.get_or_insert_with(SizeCache::new)
    }

    pub(crate) fn clear_flags(&mut self, flags: RequestFlags) {
        self.flags.remove(flags);
    }

    pub(crate) fn set_requisition(&mut self, requisition: Requisition) {
        self.requisition = requisition;
    }
}

static_assertions::assert_impl_all!(SizeRequestBase: Send, Sync);
