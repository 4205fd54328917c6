//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A raw interaction state was out of range.
    #[error("Invalid state value {0} (expected 0..{count})", count = crate::types::StateType::COUNT)]
    InvalidState(u8),

    /// A property name is not in the registered property table.
    #[error("Unknown style property '{property}'")]
    UnknownProperty { property: String },
}

impl Error {
    /// Create an unknown property error.
    pub fn unknown_property(property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
        }
    }
}
