//! Provider priority levels.

use std::fmt;

/// Cascade priority of a provider.
///
/// Higher priorities are merged later and win. Any `u32` is valid; the
/// associated constants are the conventional levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StylePriority(pub u32);

impl StylePriority {
    /// Built-in defaults (lowest priority).
    pub const FALLBACK: Self = Self(1);
    /// Theme styles.
    pub const THEME: Self = Self(200);
    /// Styles derived from user settings.
    pub const SETTINGS: Self = Self(400);
    /// Application styles.
    pub const APPLICATION: Self = Self(600);
    /// Per-user overrides (highest conventional priority).
    pub const USER: Self = Self(800);

    /// Raw numeric value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for StylePriority {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for StylePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        let levels = [
            StylePriority::FALLBACK,
            StylePriority::THEME,
            StylePriority::SETTINGS,
            StylePriority::APPLICATION,
            StylePriority::USER,
        ];
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(StylePriority::from(600), StylePriority::APPLICATION);
        assert_eq!(StylePriority::USER.value(), 800);
    }
}
