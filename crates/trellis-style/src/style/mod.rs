//! Style sets and the registered property table.

mod properties;
mod set;

pub use properties::{PROPERTIES, PropertySpec};
pub use set::StyleSet;
