//! Prioritized style cascade for Trellis.
//!
//! This crate resolves style properties from several providers:
//!
//! - **Providers**: Anything implementing [`StyleProvider`](provider::StyleProvider)
//!   returns a [`StyleSet`](style::StyleSet) on demand
//! - **Priorities**: Providers are merged from low to high [`StylePriority`](provider::StylePriority),
//!   with insertion order breaking ties
//! - **States**: Every property holds one value per [`StateType`](types::StateType)
//! - **Defaults**: Well-known properties fall back to a registered default
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis_style::prelude::*;
//!
//! let theme = Arc::new(StaticStyleProvider::new());
//! theme.set_for_all_states("padding", 4);
//!
//! let mut cx = StyleContext::new();
//! cx.add_provider(theme.clone(), StylePriority::THEME);
//!
//! let values = cx.get_properties(StateType::Prelight, &["padding", "opacity"]);
//! assert_eq!(values, vec![Some(PropertyValue::Int(4)), Some(PropertyValue::Float(1.0))]);
//!
//! // Providers are not observed; re-read them after a change.
//! theme.set_for_all_states("padding", 6);
//! cx.invalidate();
//! assert_eq!(cx.get_property("padding", StateType::Normal), Some(PropertyValue::Int(6)));
//! ```

pub mod provider;
pub mod resolve;
pub mod style;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::provider::{StaticStyleProvider, StylePriority, StyleProvider};
    pub use crate::resolve::StyleContext;
    pub use crate::style::{PropertySpec, StyleSet};
    pub use crate::types::{Color, PropertyValue, StateType};
}
