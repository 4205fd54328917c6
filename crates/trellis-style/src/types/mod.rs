//! Style value and state types.

mod state;
mod value;

pub use state::StateType;
pub use value::{Color, PropertyValue};
