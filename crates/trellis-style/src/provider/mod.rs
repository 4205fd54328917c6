//! Style providers and their priorities.

mod priority;
mod static_provider;

pub use priority::StylePriority;
pub use static_provider::StaticStyleProvider;

use crate::style::StyleSet;

/// A source of style values.
///
/// A [`StyleContext`](crate::resolve::StyleContext) asks each provider for
/// its set on every rebuild and merges the results by priority. The returned
/// set is owned by the caller and dropped after the merge.
pub trait StyleProvider: Send + Sync {
    /// Current property values of this provider.
    fn style(&self) -> StyleSet;

    /// Name for diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A fixed set is its own provider.
impl StyleProvider for StyleSet {
    fn style(&self) -> StyleSet {
        self.clone()
    }
}
