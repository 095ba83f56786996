#![forbid(unsafe_code)]

//! Virtualized table widgets.
//!
//! A [`TableView`] renders an arbitrarily large logical table through a
//! small, recycled set of row widgets. Only the rows inside a padded
//! window around the viewport exist at any moment; scrolling moves the
//! window and rows that fall out of it are pooled and rebound to the
//! indices scrolling in, so steady-state scrolling allocates nothing.
//!
//! The crate is surface-agnostic: hosts implement
//! [`Surface`](tabwin_core::surface::Surface) for whatever display tree
//! they render into, and supply a [`RowProvider`] to populate rows.
//!
//! ```
//! use std::time::Duration;
//! use tabwin_core::mock::MockSurface;
//! use tabwin_core::surface::Surface;
//! use tabwin_widgets::{TableConfig, TableRow, TableView};
//!
//! let mut surface = MockSurface::with_viewport(500);
//! let config = TableConfig::new(1000, 20);
//! let mut view = TableView::new(
//!     config,
//!     |surface: &mut dyn Surface, recycled: Option<TableRow>, index: usize| {
//!         let mut row = recycled.unwrap_or_else(|| TableRow::new(surface, 1));
//!         row.reset();
//!         row.set_cell(0, format!("row {index}"));
//!         row
//!     },
//! )?;
//!
//! view.attach(&mut surface);
//! assert!(!view.window().is_empty());
//!
//! surface.set_scroll_offset(2000);
//! view.notify_scroll();
//! view.tick(Duration::from_millis(100), &mut surface);
//! assert_eq!(view.window().start, 70);
//! # Ok::<(), tabwin_widgets::ConfigError>(())
//! ```

pub mod pool;
pub mod provider;
pub mod row;
pub mod table;
pub mod window;

pub use pool::RowBank;
pub use provider::RowProvider;
pub use row::TableRow;
pub use table::{ConfigError, TableConfig, TableView, DEFAULT_PADDING_ROWS};
pub use window::{EndIndexPolicy, RowConstruction, WindowController};
