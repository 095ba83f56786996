#![forbid(unsafe_code)]

//! Tabwin public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use tabwin_core::schedule::{DebounceTimer, FrameLoop, DEFAULT_DEBOUNCE};
pub use tabwin_core::surface::{NodeId, Surface};

#[cfg(feature = "test-helpers")]
pub use tabwin_core::mock::{MockSurface, SurfaceOp};

// --- Widget re-exports -----------------------------------------------------

pub use tabwin_widgets::{
    ConfigError, EndIndexPolicy, RowConstruction, RowProvider, TableConfig, TableRow, TableView,
    WindowController, DEFAULT_PADDING_ROWS,
};

/// Standard result type for tabwin configuration APIs.
pub type Result<T> = std::result::Result<T, ConfigError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        NodeId, Result, RowProvider, Surface, TableConfig, TableRow, TableView,
    };

    pub use crate::{core, widgets};
}

pub use tabwin_core as core;
pub use tabwin_widgets as widgets;
