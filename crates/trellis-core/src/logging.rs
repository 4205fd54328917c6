//! Logging targets for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis::size_request=trace")
//!     .init();
//! ```
//!
//! Size negotiation and style rebuilds are hot paths, so their per-call
//! events are additionally gated by [`DebugFlags`](crate::DebugFlags).

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Size negotiation: cache hits, misses and invalidations.
    pub const SIZE_REQUEST: &str = "trellis::size_request";
    /// Style provider changes and store rebuilds.
    pub const STYLE: &str = "trellis::style";
    /// Object id registration.
    pub const OBJECT: &str = "trellis::object";
}
