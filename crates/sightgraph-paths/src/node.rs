use sightgraph_core::{Point, Range};

/// Slot index of a node inside a [`NodeStore`] (or a query overlay).
pub(crate) type Slot = usize;

/// Sentinel slot meaning "no node".
pub(crate) const NONE: Slot = usize::MAX;

/// A permanent graph node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Cell identity, `cx + cy * width`.
    pub(crate) id: usize,
    pub(crate) cell: Point,
    /// Permanent undirected links, as slots into the same store.
    pub(crate) links: Vec<Slot>,
}

/// Dense arena of permanent nodes with a per-cell lookup table.
///
/// Nodes are stored in creation order; `by_id` maps each in-range cell id to
/// the node's slot, or [`NONE`].
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeStore {
    range: Range,
    nodes: Vec<Node>,
    by_id: Vec<Slot>,
}

impl NodeStore {
    /// An empty store for a `width × height` grid.
    pub(crate) fn new(width: i32, height: i32) -> Self {
        let range = Range::sized(width, height);
        Self {
            range,
            nodes: Vec::new(),
            by_id: vec![NONE; range.len()],
        }
    }

    /// Cell id of an in-range point.
    #[inline]
    pub(crate) fn id(&self, p: Point) -> Option<usize> {
        if !self.range.contains(p) {
            return None;
        }
        Some((p.x + p.y * self.range.width()) as usize)
    }

    /// Add a node at `p`. Returns `None` if `p` is out of range or already
    /// holds a node.
    pub(crate) fn insert(&mut self, p: Point) -> Option<Slot> {
        let id = self.id(p)?;
        if self.by_id[id] != NONE {
            return None;
        }
        let slot = self.nodes.len();
        self.nodes.push(Node {
            id,
            cell: p,
            links: Vec::new(),
        });
        self.by_id[id] = slot;
        Some(slot)
    }

    /// Add a permanent undirected link between two distinct nodes.
    pub(crate) fn link(&mut self, a: Slot, b: Slot) {
        debug_assert_ne!(a, b);
        self.nodes[a].links.push(b);
        self.nodes[b].links.push(a);
    }

    /// Slot of the node at `p`, if any.
    #[inline]
    pub(crate) fn slot_at(&self, p: Point) -> Option<Slot> {
        let id = self.id(p)?;
        match self.by_id[id] {
            NONE => None,
            slot => Some(slot),
        }
    }

    #[inline]
    pub(crate) fn node(&self, slot: Slot) -> &Node {
        &self.nodes[slot]
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected permanent links.
    pub(crate) fn link_count(&self) -> usize {
        self.nodes.iter().map(|n| n.links.len()).sum::<usize>() / 2
    }
}
