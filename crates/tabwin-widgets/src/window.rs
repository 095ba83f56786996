#![forbid(unsafe_code)]

//! The window controller: the windowing/recycling core of the table.
//!
//! Given a scroll offset and viewport height, the controller materializes
//! a contiguous, padding-extended range of row indices as widgets, diffs
//! it against the previously applied range, recycles departing rows
//! through the pool, and binds arriving indices via the owner's
//! [`RowProvider`].
//!
//! # Design
//!
//! The visible window is a half-open `Range<usize>`; `0..0` is the empty
//! initial state (replacing the classic `min = 0, max = -1` sentinel).
//! One [`recompute`](WindowController::recompute) pass performs, in order:
//!
//! 1. leading-offset update, so absolute scroll position survives the
//!    window shifting;
//! 2. eviction of indices that fell off below, then above;
//! 3. acquisition + bind + order-tag + attach for arriving indices;
//! 4. one batched detach of pooled rows still attached to the container.
//!
//! Detachment is deferred to step 4 so a row evicted and immediately
//! rebound at a different index in the same pass never round-trips
//! through the surface.
//!
//! # Invariants
//!
//! 1. After `recompute`, the index map's keys are exactly the window.
//! 2. An unchanged window is a strict no-op: no surface mutation, no
//!    provider call.
//! 3. Rows are constructed only when the pool is empty at acquisition.
//! 4. `row_count == 0` yields the empty window without touching anything.

use std::ops::Range;

use tabwin_core::surface::Surface;

use crate::pool::RowBank;
use crate::provider::RowProvider;
use crate::row::TableRow;

/// How the trailing index bound relates to the row count.
///
/// The padded pixel window naturally ends at `floor(end_px / row_height)`,
/// which can equal `row_count` when the extent divides evenly. The two
/// observed policies in this widget family diverge here and must never be
/// merged: pick one per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndIndexPolicy {
    /// Clamp the last index to `row_count - 1`. For providers that reuse a
    /// fixed cell grid in place and cannot render a phantom trailing row.
    Clamped,
    /// Use the raw pixel-derived bound; the last index may equal
    /// `row_count`. Matches the permissive variant.
    #[default]
    Extent,
}

/// Who constructs fresh row widgets when the pool is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowConstruction {
    /// The controller builds uniform rows itself (it knows the column
    /// count); the provider only ever repopulates.
    #[default]
    Controller,
    /// The provider is handed `None` and must build the row.
    Provider,
}

/// Windowing state and recycling machinery for one table.
#[derive(Debug)]
pub struct WindowController {
    window: Range<usize>,
    row_height: u32,
    row_count: usize,
    padding_rows: u32,
    column_count: usize,
    end_index: EndIndexPolicy,
    construction: RowConstruction,
    bank: RowBank,
    rows_built: usize,
}

impl WindowController {
    /// Create a controller with an empty window.
    ///
    /// `row_height` must be positive; the configuration layer validates
    /// before construction reaches this point.
    #[must_use]
    pub fn new(
        row_count: usize,
        row_height: u32,
        padding_rows: u32,
        column_count: usize,
        end_index: EndIndexPolicy,
        construction: RowConstruction,
    ) -> Self {
        debug_assert!(row_height > 0, "row_height must be positive");
        Self {
            window: 0..0,
            row_height,
            row_count,
            padding_rows,
            column_count,
            end_index,
            construction,
            bank: RowBank::new(),
            rows_built: 0,
        }
    }

    /// The last-applied visible window (half-open).
    #[must_use]
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// Total number of logical rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Update the row count. Takes effect on the next recompute; the
    /// current window is deliberately left untouched until then.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }

    /// Fixed per-row height in surface pixels.
    #[must_use]
    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Rows of padding rendered beyond the viewport on each side.
    #[must_use]
    pub fn padding_rows(&self) -> u32 {
        self.padding_rows
    }

    /// Total scrollable extent (`row_count × row_height`) in pixels.
    #[must_use]
    pub fn content_extent(&self) -> u64 {
        u64::from(self.row_height).saturating_mul(self.row_count as u64)
    }

    /// Number of rows constructed over the controller's lifetime. Only
    /// grows when the pool was empty at acquisition time.
    #[must_use]
    pub fn rows_built(&self) -> usize {
        self.rows_built
    }

    /// Bookkeeping access for diagnostics and tests.
    #[must_use]
    pub fn bank(&self) -> &RowBank {
        &self.bank
    }

    /// The window the given scroll state maps to, without applying it.
    #[must_use]
    pub fn target_window(&self, scroll_offset: u64, viewport_height: u32) -> Range<usize> {
        if self.row_count == 0 {
            return 0..0;
        }
        let height = u64::from(self.row_height);
        let padding = height.saturating_mul(u64::from(self.padding_rows));
        let extent = self.content_extent();

        let start_px = scroll_offset.saturating_sub(padding);
        let end_px = extent.min(
            scroll_offset
                .saturating_add(u64::from(viewport_height))
                .saturating_add(padding),
        );

        let start_idx = (start_px / height) as usize;
        let mut end_idx = (end_px / height) as usize;
        if self.end_index == EndIndexPolicy::Clamped {
            end_idx = end_idx.min(self.row_count - 1);
        }
        if start_idx > end_idx {
            // Scrolled past the extent: nothing to materialize.
            return start_idx..start_idx;
        }
        start_idx..end_idx + 1
    }

    /// Recompute and apply the visible window for the given scroll state.
    ///
    /// Returns `true` when the window changed. An unchanged window is a
    /// guaranteed no-op: no surface mutation, no provider invocation.
    pub fn recompute(
        &mut self,
        scroll_offset: u64,
        viewport_height: u32,
        surface: &mut dyn Surface,
        provider: &mut dyn RowProvider,
    ) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "window_recompute",
            scroll = scroll_offset,
            viewport = viewport_height,
            rows = self.row_count
        )
        .entered();

        let target = self.target_window(scroll_offset, viewport_height);
        if target == self.window {
            return false;
        }

        let old = self.window.clone();
        surface.set_leading_offset(target.start as u64 * u64::from(self.row_height));

        // Evict indices that fell off below, then above. Both sweeps are
        // tolerant of unmapped indices (a degenerate previous window may
        // not have materialized every index).
        for index in old.start..target.start.min(old.end) {
            self.bank.evict(index);
        }
        for index in target.end.max(old.start)..old.end {
            self.bank.evict(index);
        }

        for index in target.clone() {
            if self.bank.contains(index) {
                continue;
            }
            let recycled = self.bank.acquire();
            if recycled.is_none() {
                self.rows_built += 1;
            }
            let offered = match (recycled, self.construction) {
                (Some(row), _) => Some(row),
                (None, RowConstruction::Controller) => {
                    Some(TableRow::new(surface, self.column_count))
                }
                (None, RowConstruction::Provider) => None,
            };
            let mut row = provider.provide(surface, offered, index);
            row.set_order_key(index);
            surface.set_order(row.node(), index);
            if !row.is_attached() {
                surface.append_child(row.node());
                row.mark_attached();
            }
            self.bank.bind(index, row);
        }

        self.bank.detach_stale(surface);
        self.window = target;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            start = self.window.start,
            end = self.window.end,
            pooled = self.bank.pool_len(),
            "window applied"
        );

        true
    }

    /// Remove and return every owned row, resetting the window. The
    /// caller is responsible for detaching/destroying the rows' elements.
    pub fn drain_rows(&mut self) -> Vec<TableRow> {
        self.window = 0..0;
        self.bank.drain()
    }
}
