//! Core types for Trellis.
//!
//! This crate provides the pieces shared by the Trellis layout and style
//! crates:
//!
//! - **Object identity**: [`ObjectId`] handles and the [`ObjectRegistry`]
//!   that issues them
//! - **Orientation**: the axis a size query is made along
//! - **Configuration**: [`DebugFlags`] controlling per-call tracing
//! - **Logging**: `tracing` target names for filtering
//!
//! # Example
//!
//! ```
//! use trellis_core::{DebugFlags, ObjectRegistry, Orientation};
//!
//! let mut registry = ObjectRegistry::new();
//! let label = registry.register("Label");
//! assert!(registry.contains(label));
//!
//! let flags: DebugFlags = "size-request".parse().unwrap();
//! assert!(flags.contains(DebugFlags::SIZE_REQUEST));
//!
//! assert_eq!(Orientation::Horizontal.opposite(), Orientation::Vertical);
//! ```

mod config;
mod error;
pub mod logging;
pub mod object;
mod orientation;

pub use config::{DebugFlags, DEBUG_ENV_VAR};
pub use error::{Error, Result};
pub use object::{ObjectId, ObjectRegistry};
pub use orientation::Orientation;
