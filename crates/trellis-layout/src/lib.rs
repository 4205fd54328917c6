//! Height-for-width size negotiation for Trellis.
//!
//! This crate implements the measuring half of a two-pass layout:
//!
//! - **Dual-orientation queries**: minimum and natural sizes, unconstrained
//!   or contextual to a size in the other orientation
//! - **Per-widget caching**: up to three results per orientation, evicted
//!   oldest-first, so repeated queries within one layout cycle are free
//! - **Invalidation**: per-orientation and coarse staleness flags owned by
//!   each widget
//! - **Size groups**: a collaborator that may raise freshly computed minimums
//!
//! # Example
//!
//! ```
//! use trellis_core::ObjectRegistry;
//! use trellis_layout::prelude::*;
//!
//! struct Label {
//!     base: SizeRequestBase,
//!     text_len: i32,
//! }
//!
//! impl SizeRequest for Label {
//!     fn request_base(&self) -> &SizeRequestBase { &self.base }
//!     fn request_base_mut(&mut self) -> &mut SizeRequestBase { &mut self.base }
//!
//!     fn desired_width(&mut self, _cx: &mut RequestContext<'_>) -> (i32, i32) {
//!         (10, self.text_len * 10)
//!     }
//!
//!     fn height_for_width(&mut self, _cx: &mut RequestContext<'_>, width: i32) -> (i32, i32) {
//!         let lines = (self.text_len * 10 + width - 1) / width.max(1);
//!         (lines * 16, lines * 16)
//!     }
//! }
//!
//! let mut registry = ObjectRegistry::new();
//! let mut label = Label { base: SizeRequestBase::new(registry.register("Label")), text_len: 8 };
//!
//! let mut groups = NoSizeGroups;
//! let mut cx = RequestContext::new(&mut groups);
//! let (minimum, natural) = cx.desired_size(&mut label, true);
//!
//! assert_eq!(natural, Requisition::new(80, 16));
//! assert_eq!(minimum.width, 10);
//! ```

mod base;
mod cache;
mod context;
mod geometry;
mod size_group;
mod traits;

pub use base::{RequestFlags, SizeRequestBase};
pub use cache::{CacheLookup, DesiredSize, SizeCache, N_CACHED_SIZES};
pub use context::RequestContext;
pub use geometry::Requisition;
pub use size_group::{NoSizeGroups, SizeGroupBump, SizeRequestOverrides};
pub use traits::SizeRequest;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::{
        NoSizeGroups, RequestContext, Requisition, SizeGroupBump, SizeRequest, SizeRequestBase,
        SizeRequestOverrides,
    };
    pub use trellis_core::Orientation;
}
