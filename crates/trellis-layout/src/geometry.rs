//! Plain size types used by the negotiation engine.

use trellis_core::Orientation;

/// A width/height pair in integer pixels.
///
/// This is both the result of a widget's coarse unconstrained measurement
/// (its "size request") and the box type returned by
/// [`RequestContext::desired_size`](crate::RequestContext::desired_size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requisition {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Requisition {
    /// The empty requisition.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new requisition.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The extent along `orientation`.
    #[inline]
    pub fn get(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Set the extent along `orientation`.
    #[inline]
    pub fn set(&mut self, orientation: Orientation, value: i32) {
        match orientation {
            Orientation::Horizontal => self.width = value,
            Orientation::Vertical => self.height = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requisition_axis_access() {
        let mut req = Requisition::new(10, 20);
        assert_eq!(req.get(Orientation::Horizontal), 10);
        assert_eq!(req.get(Orientation::Vertical), 20);

        req.set(Orientation::Vertical, 5);
        assert_eq!(req, Requisition::new(10, 5));
        assert_eq!(Requisition::default(), Requisition::ZERO);
    }
}
