#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-export of the tracing macro when the `tracing` feature is enabled;
//! a no-op macro otherwise, so library code can log unconditionally.
//! Either way the macro resolves at `crate::logging::trace`.

#[cfg(feature = "tracing")]
pub use tracing::trace;

// When tracing is not enabled, provide a no-op macro
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::trace;
