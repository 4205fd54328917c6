//! Style resolution.

mod cascade;
mod context;

pub use cascade::cascade_providers;
pub use context::StyleContext;
