#![forbid(unsafe_code)]

//! Row bookkeeping: the index map and the recycle pool.
//!
//! [`RowBank`] owns every live row of one table, in exactly one of two
//! places: the *index map* (rows rendering an index in the visible window)
//! or the *pool* (detached rows awaiting reassignment). Moving rows
//! between the two transfers ownership, so a row can never be in both —
//! the disjointness invariant holds structurally.
//!
//! # Invariants
//!
//! 1. Every mapped row's `attached_index` equals its key.
//! 2. Pooled rows have no `attached_index`.
//! 3. The pool is a LIFO stack: the most recently evicted row is reused
//!    first. No correctness depends on this, but it favors locality of
//!    recently touched surface nodes.

use std::collections::HashMap;

use tabwin_core::surface::Surface;

use crate::row::TableRow;

/// Index map plus recycle pool for one table instance.
#[derive(Debug, Default)]
pub struct RowBank {
    indexed: HashMap<usize, TableRow>,
    pool: Vec<TableRow>,
}

impl RowBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `index` is currently mapped to a row.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indexed.contains_key(&index)
    }

    /// The row rendering `index`, if mapped.
    #[must_use = "use the returned row (if any)"]
    pub fn get(&self, index: usize) -> Option<&TableRow> {
        self.indexed.get(&index)
    }

    /// Move the row at `index` from the map into the pool.
    ///
    /// Tolerant of unmapped indices (returns `false`); eviction sweeps may
    /// cover ranges that were never fully materialized.
    pub fn evict(&mut self, index: usize) -> bool {
        match self.indexed.remove(&index) {
            Some(mut row) => {
                row.set_attached_index(None);
                self.pool.push(row);
                true
            }
            None => false,
        }
    }

    /// Pop the most recently pooled row, if any.
    pub fn acquire(&mut self) -> Option<TableRow> {
        self.pool.pop()
    }

    /// Insert `row` into the map under `index`, recording the index on the
    /// row. The index must not already be mapped.
    pub fn bind(&mut self, index: usize, mut row: TableRow) {
        debug_assert!(
            !self.indexed.contains_key(&index),
            "index {index} bound twice"
        );
        row.set_attached_index(Some(index));
        self.indexed.insert(index, row);
    }

    /// Number of mapped rows.
    #[must_use]
    pub fn indexed_len(&self) -> usize {
        self.indexed.len()
    }

    /// Number of pooled rows.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Total rows owned (mapped + pooled).
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.indexed.len() + self.pool.len()
    }

    /// Iterate the currently mapped indices (unordered).
    pub fn mapped_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indexed.keys().copied()
    }

    /// Iterate the pooled rows.
    pub fn pooled_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.pool.iter()
    }

    /// Detach every pooled row whose element is still attached to the
    /// container. Batched here (rather than at eviction time) so a row
    /// evicted and immediately reused in the same pass is never churned
    /// through a detach/attach pair. Returns the number detached.
    pub fn detach_stale(&mut self, surface: &mut dyn Surface) -> usize {
        let mut detached = 0;
        for row in &mut self.pool {
            if row.is_attached() {
                surface.remove_child(row.node());
                row.mark_detached();
                detached += 1;
            }
        }
        detached
    }

    /// Remove and return every row, mapped and pooled. Used at teardown.
    pub fn drain(&mut self) -> Vec<TableRow> {
        let mut rows: Vec<TableRow> = self.indexed.drain().map(|(_, row)| row).collect();
        rows.append(&mut self.pool);
        rows
    }
}
