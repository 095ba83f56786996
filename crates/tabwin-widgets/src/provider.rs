#![forbid(unsafe_code)]

//! The row-binding callback supplied by the table's owner.
//!
//! The window controller decides *which* indices are materialized; a
//! [`RowProvider`] decides *what* a row shows. On every bind the provider
//! receives either a recycled row to repopulate or, under
//! [`RowConstruction::Provider`](crate::window::RowConstruction), `None`
//! with the obligation to construct a fresh one.
//!
//! # Contract
//!
//! - The provider must return the row it was handed (or the one it built);
//!   ownership round-trips through the call and never stays behind.
//! - A recycled row may still display content for its previous index; call
//!   [`TableRow::reset`](crate::row::TableRow::reset) before repopulating
//!   unless every cell is overwritten anyway.
//! - The provider must not touch the table that invoked it (row count,
//!   attachment, mode); re-entrancy is ruled out by the borrow it holds.

use tabwin_core::surface::Surface;

use crate::row::TableRow;

/// Populates row widgets for logical indices.
pub trait RowProvider {
    /// Bind a row to `index`.
    ///
    /// `recycled` is `Some` when a pooled (or, under controller
    /// construction, freshly built) widget is available; `None` only under
    /// provider construction when the pool was empty, in which case the
    /// implementation must build a new row on `surface`.
    fn provide(
        &mut self,
        surface: &mut dyn Surface,
        recycled: Option<TableRow>,
        index: usize,
    ) -> TableRow;
}

impl<F> RowProvider for F
where
    F: FnMut(&mut dyn Surface, Option<TableRow>, usize) -> TableRow,
{
    fn provide(
        &mut self,
        surface: &mut dyn Surface,
        recycled: Option<TableRow>,
        index: usize,
    ) -> TableRow {
        self(surface, recycled, index)
    }
}
