//! Size group collaborator.
//!
//! After the engine caches a fresh result it offers the minimum to a
//! [`SizeGroupBump`], which may raise it. Real size groups (widgets sharing
//! one size across a dialog) live in the widget framework; the engine only
//! sees this call.

use std::collections::HashMap;

use trellis_core::{ObjectId, Orientation};

/// Raises a widget's freshly computed minimum.
pub trait SizeGroupBump {
    /// Return the minimum the widget must request along `orientation`.
    ///
    /// Implementations must not return less than `minimum`; the engine takes
    /// the maximum either way.
    fn bump_requisition(&mut self, widget: ObjectId, orientation: Orientation, minimum: i32) -> i32;
}

impl<F> SizeGroupBump for F
where
    F: FnMut(ObjectId, Orientation, i32) -> i32,
{
    fn bump_requisition(&mut self, widget: ObjectId, orientation: Orientation, minimum: i32) -> i32 {
        self(widget, orientation, minimum)
    }
}

/// No size groups: every minimum passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSizeGroups;

impl SizeGroupBump for NoSizeGroups {
    #[inline]
    fn bump_requisition(&mut self, _widget: ObjectId, _orientation: Orientation, minimum: i32) -> i32 {
        minimum
    }
}

/// Explicit per-widget minimum sizes.
///
/// This is where an application's "this widget must be at least N pixels
/// wide" requests are honored. A dimension left as `None` does not
/// constrain that orientation.
#[derive(Debug, Clone, Default)]
pub struct SizeRequestOverrides {
    overrides: HashMap<ObjectId, (Option<i32>, Option<i32>)>,
}

impl SizeRequestOverrides {
    /// Create an empty override table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit minimum width and height for `widget`.
    ///
    /// Setting both to `None` removes the entry.
    pub fn set(&mut self, widget: ObjectId, width: Option<i32>, height: Option<i32>) {
        if width.is_none() && height.is_none() {
            self.overrides.remove(&widget);
        } else {
            self.overrides.insert(widget, (width, height));
        }
    }

    /// The explicit `(width, height)` for `widget`.
    pub fn get(&self, widget: ObjectId) -> (Option<i32>, Option<i32>) {
        self.overrides.get(&widget).copied().unwrap_or((None, None))
    }

    /// Remove `widget`'s entry. Returns `true` if there was one.
    pub fn remove(&mut self, widget: ObjectId) -> bool {
        self.overrides.remove(&widget).is_some()
    }

    /// Number of widgets with an override.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Check if there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl SizeGroupBump for SizeRequestOverrides {
    fn bump_requisition(&mut self, widget: ObjectId, orientation: Orientation, minimum: i32) -> i32 {
        let (width, height) = self.get(widget);
        let explicit = match orientation {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        };
        explicit.map_or(minimum, |size| minimum.max(size))
    }
}
