#![forbid(unsafe_code)]

//! The row widget: one visual unit of the table.
//!
//! A [`TableRow`] wraps a surface element and a fixed-width strip of cell
//! contents. Rows are created on demand, recycled through the pool, and
//! destroyed only when the table is torn down; the *identity* of a row
//! (its element handle, column count, header flag) therefore outlives any
//! particular logical index it is bound to.
//!
//! The reset contract is identity-independent: [`TableRow::reset`] clears
//! the mutable content (cells, display-order key) and nothing else, so a
//! recycled row carries no trace of the index it used to render.

use tabwin_core::surface::{NodeId, Surface};

/// A single table row bound to a surface element.
#[derive(Debug)]
pub struct TableRow {
    node: NodeId,
    cells: Vec<String>,
    attached_index: Option<usize>,
    order_key: Option<usize>,
    is_header: bool,
    attached: bool,
}

impl TableRow {
    /// Create a fresh (detached) body row with `column_count` empty cells.
    #[must_use]
    pub fn new(surface: &mut dyn Surface, column_count: usize) -> Self {
        Self {
            node: surface.create_node(),
            cells: vec![String::new(); column_count],
            attached_index: None,
            order_key: None,
            is_header: false,
            attached: false,
        }
    }

    /// Create a header row. Header rows are never windowed; the table owns
    /// at most one and the host pins its element outside the scroll range.
    #[must_use]
    pub fn header(surface: &mut dyn Surface, column_count: usize) -> Self {
        Self {
            is_header: true,
            ..Self::new(surface, column_count)
        }
    }

    /// The stable element handle for attach/detach on the surface.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Whether this row is the header variant.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.is_header
    }

    /// Number of cells, fixed at construction.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Content of one cell.
    #[must_use = "use the returned cell content (if any)"]
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// All cell contents in column order.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Replace the content of one cell. Returns `false` (and leaves the
    /// row untouched) when `column` is out of range.
    pub fn set_cell(&mut self, column: usize, content: impl Into<String>) -> bool {
        match self.cells.get_mut(column) {
            Some(cell) => {
                *cell = content.into();
                true
            }
            None => false,
        }
    }

    /// The logical row index this widget currently renders, absent while
    /// pooled.
    #[must_use = "use the returned index (if any)"]
    pub fn attached_index(&self) -> Option<usize> {
        self.attached_index
    }

    /// The display-order sort key last assigned by the controller.
    #[must_use = "use the returned key (if any)"]
    pub fn order_key(&self) -> Option<usize> {
        self.order_key
    }

    /// Whether the row's element is currently attached to the container.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Clear mutable content: cells and order key. Identity (element,
    /// column count, header flag) and attachment state are untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.order_key = None;
    }

    pub(crate) fn set_attached_index(&mut self, index: Option<usize>) {
        self.attached_index = index;
    }

    pub(crate) fn set_order_key(&mut self, key: usize) {
        self.order_key = Some(key);
    }

    pub(crate) fn mark_attached(&mut self) {
        self.attached = true;
    }

    pub(crate) fn mark_detached(&mut self) {
        self.attached = false;
    }
}
