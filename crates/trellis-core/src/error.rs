//! Error types for Trellis core configuration.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading core configuration.
///
/// Size negotiation itself has no recoverable failures; misuse of the
/// negotiation API panics. These errors only cover configuration input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A debug flag name was not recognized.
    #[error("Unknown debug flag '{flag}' (expected one of: size-request, style, all)")]
    UnknownDebugFlag { flag: String },
}

impl Error {
    /// Create an unknown debug flag error.
    pub fn unknown_debug_flag(flag: impl Into<String>) -> Self {
        Self::UnknownDebugFlag { flag: flag.into() }
    }
}
