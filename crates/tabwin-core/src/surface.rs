#![forbid(unsafe_code)]

//! The widget surface: the external display system a table renders into.
//!
//! A [`Surface`] is anything that can hold child elements, report its
//! scroll position and visible height, and honor a per-child sort key.
//! DOM containers, retained-mode scene graphs, and test recorders all fit.
//!
//! # Design
//!
//! Elements are referred to by opaque [`NodeId`] handles issued by the
//! surface itself via [`Surface::create_node`]. The virtualization layer
//! never inspects an element; it only attaches, detaches, and orders
//! handles. Visual order is communicated through an explicit sort key
//! ([`Surface::set_order`]) rather than by physically reordering the
//! attachment list, so attach order and logical order may diverge freely.
//!
//! # Invariants
//!
//! 1. `create_node` returns a handle distinct from every live handle.
//! 2. `append_child` / `remove_child` are idempotent from the caller's
//!    point of view: the table never appends an attached node or removes
//!    a detached one, and a surface may debug-assert that.
//! 3. `scroll_offset` and `viewport_height` are pure reads; they must not
//!    trigger layout or callbacks re-entering the table.

use core::fmt;

/// Opaque handle to an element owned by a [`Surface`].
///
/// Handles are cheap to copy and hashable so the table can key bookkeeping
/// structures by them. The raw value has no meaning outside the surface
/// that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw id. Intended for surface implementations.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id this handle wraps.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A scrollable container of elements, implemented by the host.
///
/// All pixel quantities are in surface-native units (device pixels,
/// terminal cells, whatever the host renders in); the table only requires
/// that row height, scroll offset, and viewport height share one unit.
pub trait Surface {
    /// Allocate a new (detached) element and return its handle.
    fn create_node(&mut self) -> NodeId;

    /// Release an element. The handle must not be used afterwards.
    fn destroy_node(&mut self, node: NodeId);

    /// Attach a detached element to the visible container.
    fn append_child(&mut self, node: NodeId);

    /// Detach an attached element from the visible container.
    fn remove_child(&mut self, node: NodeId);

    /// Set the sort key controlling an element's visual position among
    /// its siblings. Keys are logical row indices; smaller sorts first.
    fn set_order(&mut self, node: NodeId, order: usize);

    /// Set the leading offset (padding before the first attached row) so
    /// that a partially materialized window keeps its absolute position.
    fn set_leading_offset(&mut self, px: u64);

    /// Set the total scrollable extent of the content.
    fn set_content_height(&mut self, px: u64);

    /// Current scroll position of the viewport, in pixels from the top.
    fn scroll_offset(&self) -> u64;

    /// Visible height of the viewport, in pixels.
    fn viewport_height(&self) -> u32;
}
