#![forbid(unsafe_code)]

//! A recording [`Surface`] for tests.
//!
//! [`MockSurface`] implements the surface trait over plain bookkeeping and
//! records every mutation as a [`SurfaceOp`], so tests can assert exact
//! operation sequences — in particular the no-op guarantee ("recompute with
//! an unchanged window performs zero surface mutations") and the batched
//! detach ordering.
//!
//! Gated behind the `test-helpers` feature; downstream crates pull it in as
//! a dev-dependency feature only.

use std::collections::{HashMap, HashSet};

use crate::surface::{NodeId, Surface};

/// One recorded surface mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    /// A node was allocated.
    Created(NodeId),
    /// A node was released.
    Destroyed(NodeId),
    /// A node was attached to the container.
    Appended(NodeId),
    /// A node was detached from the container.
    Removed(NodeId),
    /// A node's sort key changed.
    Ordered(NodeId, usize),
    /// The leading offset changed.
    LeadingOffset(u64),
    /// The content extent changed.
    ContentHeight(u64),
}

/// In-memory surface that records operations and lets tests drive the
/// scroll position and viewport height.
#[derive(Debug, Default)]
pub struct MockSurface {
    next_node: u64,
    scroll_offset: u64,
    viewport_height: u32,
    attached: HashSet<NodeId>,
    live: HashSet<NodeId>,
    orders: HashMap<NodeId, usize>,
    leading_offset: u64,
    content_height: u64,
    ops: Vec<SurfaceOp>,
}

impl MockSurface {
    /// Create a surface with a zero-sized viewport at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with the given viewport height.
    #[must_use]
    pub fn with_viewport(viewport_height: u32) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    /// Simulate the user scrolling to `offset`.
    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    /// Simulate a viewport resize.
    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height;
    }

    /// All operations recorded so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain and return the recorded operations.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of nodes currently attached to the container.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Whether `node` is currently attached.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.attached.contains(&node)
    }

    /// Number of live (created, not destroyed) nodes.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// The sort key last assigned to `node`.
    #[must_use = "use the returned order (if any)"]
    pub fn order_of(&self, node: NodeId) -> Option<usize> {
        self.orders.get(&node).copied()
    }

    /// The last leading offset applied.
    #[must_use]
    pub fn leading_offset(&self) -> u64 {
        self.leading_offset
    }

    /// The last content extent applied.
    #[must_use]
    pub fn content_height(&self) -> u64 {
        self.content_height
    }
}

impl Surface for MockSurface {
    fn create_node(&mut self) -> NodeId {
        let node = NodeId::new(self.next_node);
        self.next_node += 1;
        self.live.insert(node);
        self.ops.push(SurfaceOp::Created(node));
        node
    }

    fn destroy_node(&mut self, node: NodeId) {
        debug_assert!(self.live.contains(&node), "destroying unknown node");
        debug_assert!(!self.attached.contains(&node), "destroying attached node");
        self.live.remove(&node);
        self.orders.remove(&node);
        self.ops.push(SurfaceOp::Destroyed(node));
    }

    fn append_child(&mut self, node: NodeId) {
        debug_assert!(self.live.contains(&node), "appending unknown node");
        let inserted = self.attached.insert(node);
        debug_assert!(inserted, "appending already-attached node");
        self.ops.push(SurfaceOp::Appended(node));
    }

    fn remove_child(&mut self, node: NodeId) {
        let removed = self.attached.remove(&node);
        debug_assert!(removed, "removing detached node");
        self.ops.push(SurfaceOp::Removed(node));
    }

    fn set_order(&mut self, node: NodeId, order: usize) {
        self.orders.insert(node, order);
        self.ops.push(SurfaceOp::Ordered(node, order));
    }

    fn set_leading_offset(&mut self, px: u64) {
        self.leading_offset = px;
        self.ops.push(SurfaceOp::LeadingOffset(px));
    }

    fn set_content_height(&mut self, px: u64) {
        self.content_height = px;
        self.ops.push(SurfaceOp::ContentHeight(px));
    }

    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> u32 {
        self.viewport_height
    }
}
