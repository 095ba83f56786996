#![forbid(unsafe_code)]

//! The table view: configuration, attachment lifecycle, and scheduling.
//!
//! [`TableView`] wires a [`WindowController`] to a host surface and a
//! [`RowProvider`], and decides *when* the window is recomputed:
//!
//! - **cold mode** (default): scroll notifications arm a debounce timer
//!   and one recompute fires after the quiet period;
//! - **hot mode**: a frame loop recomputes once per tick for as long as
//!   the table stays attached and hot.
//!
//! Time never comes from a wall clock. The host calls
//! [`tick`](TableView::tick) with its own elapsed duration, so every
//! schedule decision is reproducible under test.

use std::time::Duration;

use tabwin_core::schedule::{DebounceTimer, FrameLoop, DEFAULT_DEBOUNCE};
use tabwin_core::surface::Surface;

use crate::provider::RowProvider;
use crate::row::TableRow;
use crate::window::{EndIndexPolicy, RowConstruction, WindowController};

/// Rows of padding materialized beyond the viewport on each side.
pub const DEFAULT_PADDING_ROWS: u32 = 30;

/// Rejected table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `row_height` was zero; the index math divides by it.
    ZeroRowHeight,
    /// `column_count` was zero; rows would have no cells to bind.
    ZeroColumnCount,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroRowHeight => write!(f, "row height must be positive"),
            Self::ZeroColumnCount => write!(f, "column count must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Static table parameters, built with `with_*` setters.
#[derive(Debug, Clone)]
pub struct TableConfig {
    row_count: usize,
    row_height: u32,
    column_count: usize,
    padding_rows: u32,
    debounce: Duration,
    end_index: EndIndexPolicy,
    construction: RowConstruction,
}

impl TableConfig {
    /// Configure a table of `row_count` rows, each `row_height` pixels
    /// tall, with one column and default padding and debounce.
    #[must_use]
    pub fn new(row_count: usize, row_height: u32) -> Self {
        Self {
            row_count,
            row_height,
            column_count: 1,
            padding_rows: DEFAULT_PADDING_ROWS,
            debounce: DEFAULT_DEBOUNCE,
            end_index: EndIndexPolicy::default(),
            construction: RowConstruction::default(),
        }
    }

    /// Number of cells per row.
    #[must_use]
    pub fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    /// Rows of padding beyond the viewport on each side.
    #[must_use]
    pub fn with_padding_rows(mut self, padding_rows: u32) -> Self {
        self.padding_rows = padding_rows;
        self
    }

    /// Quiet period for cold-mode scroll coalescing.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// How the trailing window index relates to the row count.
    #[must_use]
    pub fn with_end_index_policy(mut self, policy: EndIndexPolicy) -> Self {
        self.end_index = policy;
        self
    }

    /// Who constructs fresh rows when the pool is empty.
    #[must_use]
    pub fn with_row_construction(mut self, construction: RowConstruction) -> Self {
        self.construction = construction;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        if self.column_count == 0 {
            return Err(ConfigError::ZeroColumnCount);
        }
        Ok(())
    }
}

/// A virtualized table bound to a row provider.
#[derive(Debug)]
pub struct TableView<P: RowProvider> {
    controller: WindowController,
    provider: P,
    header: Option<TableRow>,
    attached: bool,
    run_hot: bool,
    debounce: DebounceTimer,
    frames: FrameLoop,
    published_extent: Option<u64>,
}

impl<P: RowProvider> TableView<P> {
    /// Build a detached, cold table from a validated configuration.
    pub fn new(config: TableConfig, provider: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            controller: WindowController::new(
                config.row_count,
                config.row_height,
                config.padding_rows,
                config.column_count,
                config.end_index,
                config.construction,
            ),
            provider,
            header: None,
            attached: false,
            run_hot: false,
            debounce: DebounceTimer::new(config.debounce),
            frames: FrameLoop::new(),
            published_extent: None,
        })
    }

    /// The last-applied visible window.
    #[must_use]
    pub fn window(&self) -> std::ops::Range<usize> {
        self.controller.window()
    }

    /// Total number of logical rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.controller.row_count()
    }

    /// Replace the row count. Lazy: nothing is recomputed until the next
    /// scheduled or explicit recompute observes the new value.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.controller.set_row_count(row_count);
    }

    /// Whether the table is currently bound to a surface.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the frame loop drives recomputes.
    #[must_use]
    pub fn run_hot(&self) -> bool {
        self.run_hot
    }

    /// Windowing internals, for diagnostics.
    #[must_use]
    pub fn controller(&self) -> &WindowController {
        &self.controller
    }

    /// The pinned header row, if one is set.
    #[must_use = "use the returned header (if any)"]
    pub fn header(&self) -> Option<&TableRow> {
        self.header.as_ref()
    }

    /// Mutable access to the header row.
    #[must_use = "use the returned header (if any)"]
    pub fn header_mut(&mut self) -> Option<&mut TableRow> {
        self.header.as_mut()
    }

    /// Install a header row, returning the previous one. Headers are never
    /// windowed; the host pins the element outside the scroll range.
    pub fn set_header(&mut self, header: TableRow) -> Option<TableRow> {
        self.header.replace(header)
    }

    /// Bind the table to `surface`: publish the content extent, apply the
    /// initial window, and start the frame loop if the table is hot.
    pub fn attach(&mut self, surface: &mut dyn Surface) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.recompute_now(surface);
        if self.run_hot {
            self.frames.schedule();
        }
    }

    /// Unbind from the surface. Pending timers are cancelled synchronously;
    /// rows stay attached to the container (the container itself leaves the
    /// display). Re-attachment resumes from the preserved window.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.debounce.cancel();
        self.frames.cancel();
    }

    /// Note that the surface's scroll position may have changed. In cold
    /// mode this arms (or coalesces into) the debounce timer; in hot mode
    /// the frame loop already covers it. Ignored while detached.
    pub fn notify_scroll(&mut self) {
        if self.attached && !self.run_hot {
            self.debounce.arm();
        }
    }

    /// Switch between cold (debounced) and hot (per-tick) scheduling.
    ///
    /// Going hot recomputes immediately and starts the frame loop; going
    /// cold stops the loop. No-op when the mode does not change.
    pub fn set_run_hot(&mut self, hot: bool, surface: &mut dyn Surface) {
        if self.run_hot == hot {
            return;
        }
        self.run_hot = hot;
        if !self.attached {
            return;
        }
        if hot {
            self.debounce.cancel();
            self.recompute_now(surface);
            self.frames.schedule();
        } else {
            self.frames.cancel();
        }
    }

    /// Advance time by `dt` and run any recompute that came due.
    ///
    /// Returns `true` when a recompute ran (whether or not the window
    /// changed). Hot mode consumes the pending frame and re-schedules
    /// while the table stays attached and hot; cold mode fires at most
    /// one debounced recompute.
    pub fn tick(&mut self, dt: Duration, surface: &mut dyn Surface) -> bool {
        if !self.attached {
            return false;
        }
        if self.run_hot {
            if self.frames.take_due() {
                self.recompute_now(surface);
                if self.attached && self.run_hot {
                    self.frames.schedule();
                }
                return true;
            }
            return false;
        }
        if self.debounce.tick(dt) {
            self.recompute_now(surface);
            return true;
        }
        false
    }

    /// Recompute the window immediately from the surface's current scroll
    /// state, bypassing the schedulers. Returns `true` when the window
    /// changed.
    pub fn recompute_now(&mut self, surface: &mut dyn Surface) -> bool {
        let extent = self.controller.content_extent();
        if self.published_extent != Some(extent) {
            surface.set_content_height(extent);
            self.published_extent = Some(extent);
        }
        let scroll_offset = surface.scroll_offset();
        let viewport_height = surface.viewport_height();
        self.controller
            .recompute(scroll_offset, viewport_height, surface, &mut self.provider)
    }

    /// Tear the table down: cancel timers, detach and destroy every owned
    /// row (header included), and reset the window.
    pub fn dispose(&mut self, surface: &mut dyn Surface) {
        self.detach();
        let mut rows = self.controller.drain_rows();
        if let Some(header) = self.header.take() {
            rows.push(header);
        }
        for mut row in rows {
            if row.is_attached() {
                surface.remove_child(row.node());
                row.mark_detached();
            }
            surface.destroy_node(row.node());
        }
        self.published_extent = None;
    }
}
