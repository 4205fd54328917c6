//! Interaction states.

use std::fmt;

use crate::error::{Error, Result};

/// The interaction state a property value applies to.
///
/// Every property in a [`StyleSet`](crate::style::StyleSet) can hold one
/// value per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StateType {
    /// Default state.
    #[default]
    Normal = 0,
    /// Being pressed or activated.
    Active = 1,
    /// Under the pointer.
    Prelight = 2,
    /// Selected.
    Selected = 3,
    /// Disabled.
    Insensitive = 4,
    /// Neither on nor off (a half-checked box).
    Inconsistent = 5,
    /// Holding keyboard focus.
    Focused = 6,
}

impl StateType {
    /// Number of states.
    pub const COUNT: usize = 7;

    /// All states in index order.
    pub const ALL: [StateType; Self::COUNT] = [
        Self::Normal,
        Self::Active,
        Self::Prelight,
        Self::Selected,
        Self::Insensitive,
        Self::Inconsistent,
        Self::Focused,
    ];

    /// Index into per-state storage.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Active => "active",
            Self::Prelight => "prelight",
            Self::Selected => "selected",
            Self::Insensitive => "insensitive",
            Self::Inconsistent => "inconsistent",
            Self::Focused => "focused",
        }
    }
}

impl TryFrom<u8> for StateType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(Error::InvalidState(value))
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
