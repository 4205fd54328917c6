//! Debug configuration.
//!
//! Per-call tracing in the size negotiation engine and the style resolver is
//! opt-in. The flags are normally read from the `TRELLIS_DEBUG` environment
//! variable:
//!
//! ```text
//! TRELLIS_DEBUG=size-request,style cargo run
//! ```

use std::env::VarError;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{Error, Result};

/// Environment variable consulted by [`DebugFlags::from_env`].
pub const DEBUG_ENV_VAR: &str = "TRELLIS_DEBUG";

bitflags! {
    /// Subsystems that emit per-call debug events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DebugFlags: u32 {
        /// Trace every size computation (hit or miss) and cache invalidation.
        const SIZE_REQUEST = 1 << 0;
        /// Trace style store rebuilds.
        const STYLE = 1 << 1;
        /// Everything.
        const ALL = Self::SIZE_REQUEST.bits() | Self::STYLE.bits();
    }
}

impl DebugFlags {
    /// Read flags from [`DEBUG_ENV_VAR`].
    ///
    /// A missing variable yields empty flags; a malformed one is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var(DEBUG_ENV_VAR))
    }

    fn from_var(var: std::result::Result<String, VarError>) -> Result<Self> {
        match var {
            Ok(value) => value.parse(),
            Err(VarError::NotPresent) => Ok(Self::empty()),
            Err(VarError::NotUnicode(raw)) => {
                Err(Error::unknown_debug_flag(raw.to_string_lossy()))
            }
        }
    }

    /// Parse a single flag name.
    fn parse_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "size-request" | "sizerequest" | "layout" => Some(Self::SIZE_REQUEST),
            "style" => Some(Self::STYLE),
            "all" => Some(Self::ALL),
            _ => None,
        }
    }
}

impl FromStr for DebugFlags {
    type Err = Error;

    /// Parse a comma- or colon-separated list of flag names.
    fn from_str(s: &str) -> Result<Self> {
        s.split([',', ':'])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(Self::empty(), |flags, name| {
                Self::parse_name(name)
                    .map(|flag| flags | flag)
                    .ok_or_else(|| Error::unknown_debug_flag(name))
            })
    }
}
