//! Size negotiation entry points.

use trellis_core::logging::targets;
use trellis_core::{DebugFlags, Orientation};

use crate::base::RequestFlags;
use crate::cache::CacheLookup;
use crate::geometry::Requisition;
use crate::size_group::SizeGroupBump;
use crate::traits::SizeRequest;

/// Entry point for measuring widgets.
///
/// A context is created by the layout root for one measurement or
/// allocation pass and handed down through every
/// [`SizeRequest`] hook, so containers measure their children through the
/// same size-group collaborator and debug settings.
///
/// # Height-for-width negotiation
///
/// For a height-for-width widget the root first asks for
/// [`desired_width`](Self::desired_width), then for
/// [`height_for_width`](Self::height_for_width) of the width it decides to
/// use. Width-for-height widgets are queried the other way around.
/// [`desired_size`](Self::desired_size) does both steps in the right order.
///
/// # Caching
///
/// Each widget keeps up to three results per orientation. A repeated query
/// for the same contextual size is answered without calling the widget's
/// hooks, until the widget is invalidated in that orientation.
///
/// # Panics
///
/// Every query panics if the stored result has a minimum larger than its
/// natural size. The size-group bump raises both values, so this only
/// happens with a collaborator that returns less than the minimum it was
/// given.
pub struct RequestContext<'a> {
    size_groups: &'a mut dyn SizeGroupBump,
    debug: DebugFlags,
}

impl<'a> RequestContext<'a> {
    /// Create a context that bumps requisitions through `size_groups`.
    pub fn new(size_groups: &'a mut dyn SizeGroupBump) -> Self {
        Self::with_debug(size_groups, DebugFlags::empty())
    }

    /// Create a context with explicit debug flags.
    pub fn with_debug(size_groups: &'a mut dyn SizeGroupBump, debug: DebugFlags) -> Self {
        Self { size_groups, debug }
    }

    /// Active debug flags.
    #[inline]
    pub fn debug_flags(&self) -> DebugFlags {
        self.debug
    }

    /// The size-group collaborator.
    #[inline]
    pub fn size_groups(&mut self) -> &mut dyn SizeGroupBump {
        &mut *self.size_groups
    }

    /// Whether `widget` prefers height-for-width negotiation.
    pub fn is_height_for_width<W: SizeRequest + ?Sized>(&self, widget: &W) -> bool {
        widget.is_height_for_width()
    }

    /// Unconstrained `(minimum, natural)` width.
    pub fn desired_width<W: SizeRequest + ?Sized>(&mut self, widget: &mut W) -> (i32, i32) {
        self.compute_size_for_orientation(widget, Orientation::Horizontal, None)
    }

    /// Unconstrained `(minimum, natural)` height.
    pub fn desired_height<W: SizeRequest + ?Sized>(&mut self, widget: &mut W) -> (i32, i32) {
        self.compute_size_for_orientation(widget, Orientation::Vertical, None)
    }

    /// `(minimum, natural)` width if given `height`.
    ///
    /// A negative height is the unconstrained query.
    pub fn width_for_height<W: SizeRequest + ?Sized>(
        &mut self,
        widget: &mut W,
        height: i32,
    ) -> (i32, i32) {
        self.compute_size_for_orientation(widget, Orientation::Horizontal, contextual(height))
    }

    /// `(minimum, natural)` height if given `width`.
    ///
    /// A negative width is the unconstrained query.
    pub fn height_for_width<W: SizeRequest + ?Sized>(
        &mut self,
        widget: &mut W,
        width: i32,
    ) -> (i32, i32) {
        self.compute_size_for_orientation(widget, Orientation::Vertical, contextual(width))
    }

    /// Minimum and natural boxes, honoring the widget's preferred direction.
    ///
    /// A height-for-width widget is asked for its width first and then for
    /// its height at the minimum width, or at the natural width when
    /// `use_natural` is set. Width-for-height widgets are the mirror image.
    /// The secondary orientation is never queried first.
    ///
    /// Returns `(minimum, natural)`.
    pub fn desired_size<W: SizeRequest + ?Sized>(
        &mut self,
        widget: &mut W,
        use_natural: bool,
    ) -> (Requisition, Requisition) {
        let (primary, secondary) = if self.is_height_for_width(widget) {
            (Orientation::Horizontal, Orientation::Vertical)
        } else {
            (Orientation::Vertical, Orientation::Horizontal)
        };

        let (min_primary, nat_primary) = self.compute_size_for_orientation(widget, primary, None);
        let for_size = if use_natural { nat_primary } else { min_primary };
        let (min_secondary, nat_secondary) =
            self.compute_size_for_orientation(widget, secondary, contextual(for_size));

        let mut minimum = Requisition::ZERO;
        let mut natural = Requisition::ZERO;
        minimum.set(primary, min_primary);
        minimum.set(secondary, min_secondary);
        natural.set(primary, nat_primary);
        natural.set(secondary, nat_secondary);

        (minimum, natural)
    }

    /// Shared implementation of the four directional queries.
    ///
    /// `for_size` is the size in the opposite orientation, or `None` for an
    /// unconstrained query. Returns `(minimum, natural)`.
    pub fn compute_size_for_orientation<W: SizeRequest + ?Sized>(
        &mut self,
        widget: &mut W,
        orientation: Orientation,
        for_size: Option<i32>,
    ) -> (i32, i32) {
        let stale = widget.request_base().needs_request(orientation);

        let lookup = {
            let cache = widget.request_base_mut().cache_mut();
            if stale {
                cache.clear(orientation);
                CacheLookup::Miss(0)
            } else {
                cache.lookup(orientation, for_size)
            }
        };

        if stale && self.debug.contains(DebugFlags::SIZE_REQUEST) {
            tracing::debug!(
                target: targets::SIZE_REQUEST,
                widget = widget.type_name(),
                %orientation,
                "discarded cached sizes"
            );
        }

        let (index, hit) = match lookup {
            CacheLookup::Hit(index) => (index, true),
            CacheLookup::Miss(index) => {
                self.measure_into(widget, orientation, for_size, index);
                (index, false)
            }
        };

        let slot = *widget.request_base_mut().cache_mut().slot(orientation, index);

        if self.debug.contains(DebugFlags::SIZE_REQUEST) {
            tracing::trace!(
                target: targets::SIZE_REQUEST,
                widget = widget.type_name(),
                %orientation,
                ?for_size,
                minimum = slot.minimum_size,
                natural = slot.natural_size,
                hit,
                "size request"
            );
        }

        assert!(
            slot.minimum_size <= slot.natural_size,
            "{}: {} minimum {} exceeds natural {} (for size {:?})",
            widget.type_name(),
            orientation,
            slot.minimum_size,
            slot.natural_size,
            for_size,
        );

        (slot.minimum_size, slot.natural_size)
    }

    /// Run the widget's hooks and store the result in slot `index`.
    fn measure_into<W: SizeRequest + ?Sized>(
        &mut self,
        widget: &mut W,
        orientation: Orientation,
        for_size: Option<i32>,
        index: usize,
    ) {
        self.ensure_requisition(widget);
        let requisition = widget.request_base().requisition().get(orientation);

        let (minimum, natural) = match (orientation, for_size) {
            (Orientation::Horizontal, None) => widget.desired_width(self),
            (Orientation::Horizontal, Some(height)) => widget.width_for_height(self, height),
            (Orientation::Vertical, None) => widget.desired_height(self),
            (Orientation::Vertical, Some(width)) => widget.height_for_width(self, width),
        };

        // Widgets that only fill in the coarse requisition rely on this floor.
        let minimum = minimum.max(requisition);
        let natural = natural.max(requisition);

        let base = widget.request_base_mut();
        let id = base.id();
        base.clear_flags(RequestFlags::for_orientation(orientation));
        let slot = base.cache_mut().store(orientation, index, for_size, minimum, natural);

        // Size groups see the cached minimum and may only raise it. This is
        // also where explicit per-widget minimum sizes come in.
        let group_size = self.size_groups.bump_requisition(id, orientation, slot.minimum_size);
        slot.minimum_size = slot.minimum_size.max(group_size);
        slot.natural_size = slot.natural_size.max(group_size);
    }

    /// Run the coarse measurement if it is stale.
    fn ensure_requisition<W: SizeRequest + ?Sized>(&mut self, widget: &mut W) {
        if widget.request_base().request_needed() {
            widget.request_base_mut().clear_flags(RequestFlags::REQUEST_NEEDED);
            let requisition = widget.size_request(self);
            widget.request_base_mut().set_requisition(requisition);
        }
    }
}

impl std::fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Map a contextual size to a cache key; negative sizes are unconstrained.
#[inline]
fn contextual(size: i32) -> Option<i32> {
    (size >= 0).then_some(size)
}
