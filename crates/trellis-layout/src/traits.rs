//! The size request capability implemented by widgets.

use trellis_core::ObjectId;

use crate::base::SizeRequestBase;
use crate::context::RequestContext;
use crate::geometry::Requisition;

/// Capability implemented by every widget that takes part in size
/// negotiation.
///
/// Widgets are never measured by calling these hooks directly. The layout
/// root and containers go through a [`RequestContext`], which caches the
/// results, applies floors and size groups, and only calls the hooks on a
/// cache miss. Hooks receive the same context so a container can measure its
/// children:
///
/// ```ignore
/// impl SizeRequest for VBox {
///     fn request_base(&self) -> &SizeRequestBase { &self.base }
///     fn request_base_mut(&mut self) -> &mut SizeRequestBase { &mut self.base }
///
///     fn desired_width(&mut self, cx: &mut RequestContext<'_>) -> (i32, i32) {
///         self.children.iter_mut().fold((0, 0), |(min, nat), child| {
///             let (child_min, child_nat) = cx.desired_width(child.as_mut());
///             (min.max(child_min), nat.max(child_nat))
///         })
///     }
/// }
/// ```
///
/// # Implementing the hooks
///
/// A widget whose height does not depend on its width only needs
/// [`desired_width`](Self::desired_width) and
/// [`desired_height`](Self::desired_height); the contextual hooks fall back
/// to them. A widget that does reflow content (a wrapping label) must
/// answer in both orientations: its unconstrained `desired_height` should
/// be the height for its minimum width.
///
/// Every hook must return `minimum <= natural`.
pub trait SizeRequest {
    /// Get a reference to the widget's size request state.
    fn request_base(&self) -> &SizeRequestBase;

    /// Get a mutable reference to the widget's size request state.
    fn request_base_mut(&mut self) -> &mut SizeRequestBase;

    /// The widget's id.
    fn object_id(&self) -> ObjectId {
        self.request_base().id()
    }

    /// Type name used in debug output.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Coarse unconstrained measurement.
    ///
    /// Runs at most once per [`queue_resize`](SizeRequestBase::queue_resize),
    /// before the first directional hook. Its result is a floor for every
    /// directional result. Legacy widgets may implement only this.
    fn size_request(&mut self, _cx: &mut RequestContext<'_>) -> Requisition {
        Requisition::ZERO
    }

    /// Unconstrained `(minimum, natural)` width.
    fn desired_width(&mut self, _cx: &mut RequestContext<'_>) -> (i32, i32) {
        (0, 0)
    }

    /// Unconstrained `(minimum, natural)` height.
    fn desired_height(&mut self, _cx: &mut RequestContext<'_>) -> (i32, i32) {
        (0, 0)
    }

    /// `(minimum, natural)` width if given `height`.
    ///
    /// Defaults to the unconstrained width.
    fn width_for_height(&mut self, cx: &mut RequestContext<'_>, _height: i32) -> (i32, i32) {
        self.desired_width(cx)
    }

    /// `(minimum, natural)` height if given `width`.
    ///
    /// Defaults to the unconstrained height.
    fn height_for_width(&mut self, cx: &mut RequestContext<'_>, _width: i32) -> (i32, i32) {
        self.desired_height(cx)
    }

    /// Whether the widget prefers height-for-width over width-for-height.
    ///
    /// Containers with a single child usually forward the child's preference.
    fn is_height_for_width(&self) -> bool {
        true
    }
}
