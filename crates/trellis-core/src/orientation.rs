//! Layout orientation.

use std::fmt;

/// The axis a size query is made along.
///
/// A horizontal query asks for widths, a vertical one for heights. Contextual
/// queries are made along one axis for a given size on the
/// [`opposite`](Orientation::opposite) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Widths.
    Horizontal,
    /// Heights.
    Vertical,
}

impl Orientation {
    /// The other axis.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns true for [`Orientation::Horizontal`].
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_swaps_axes() {
        assert_eq!(Orientation::Horizontal.opposite(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.opposite(), Orientation::Horizontal);
        assert!(Orientation::Horizontal.is_horizontal());
        assert!(!Orientation::Vertical.is_horizontal());
    }
}
