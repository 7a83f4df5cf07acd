//! Per-query view of the graph.
//!
//! Query endpoints that are not permanent nodes become ephemeral nodes that
//! live only in an [`Overlay`], together with their temporary links. The
//! permanent [`NodeStore`] is never touched; dropping the overlay is the
//! cleanup.

use std::collections::HashMap;

use sightgraph_core::Point;

use crate::node::{NodeStore, Slot};

#[derive(Debug)]
struct Ephemeral {
    cell: Point,
    links: Vec<Slot>,
}

/// Permanent nodes plus query-scoped ephemeral nodes.
///
/// Slots `0..store.len()` are the permanent nodes; ephemeral nodes follow
/// in creation order.
#[derive(Debug)]
pub(crate) struct Overlay<'a> {
    store: &'a NodeStore,
    ephemeral: Vec<Ephemeral>,
    // Temporary links of permanent nodes, keyed by permanent node id.
    temp_links: HashMap<usize, Vec<Slot>>,
}

impl<'a> Overlay<'a> {
    pub(crate) fn new(store: &'a NodeStore) -> Self {
        Self {
            store,
            ephemeral: Vec::new(),
            temp_links: HashMap::new(),
        }
    }

    /// Total number of nodes visible through the overlay.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.store.len() + self.ephemeral.len()
    }

    #[inline]
    pub(crate) fn ephemeral_count(&self) -> usize {
        self.ephemeral.len()
    }

    #[inline]
    pub(crate) fn cell(&self, slot: Slot) -> Point {
        let base = self.store.len();
        if slot < base {
            self.store.node(slot).cell
        } else {
            self.ephemeral[slot - base].cell
        }
    }

    /// Linked neighbors of `slot`: permanent links first, then temporary
    /// links in the order they were added.
    pub(crate) fn neighbors(&self, slot: Slot) -> impl Iterator<Item = Slot> + '_ {
        let base = self.store.len();
        let (permanent, temporary): (&[Slot], &[Slot]) = if slot < base {
            let node = self.store.node(slot);
            let temp = self.temp_links.get(&node.id).map_or(&[][..], Vec::as_slice);
            (node.links.as_slice(), temp)
        } else {
            (&[][..], self.ephemeral[slot - base].links.as_slice())
        };
        permanent.iter().chain(temporary).copied()
    }

    /// Slot for the node at `p`, creating an ephemeral node when no node
    /// exists there yet.
    ///
    /// A new ephemeral node is tested against every existing node with
    /// `sees`, and temporarily linked to each one it can see.
    pub(crate) fn materialize(&mut self, p: Point, sees: impl Fn(Point, Point) -> bool) -> Slot {
        if let Some(slot) = self.store.slot_at(p) {
            return slot;
        }
        let base = self.store.len();
        if let Some(i) = self.ephemeral.iter().position(|e| e.cell == p) {
            return base + i;
        }

        let slot = self.len();
        let mut links = Vec::new();
        for other in 0..slot {
            if !sees(p, self.cell(other)) {
                continue;
            }
            links.push(other);
            if other < base {
                let id = self.store.node(other).id;
                self.temp_links.entry(id).or_default().push(slot);
            } else {
                self.ephemeral[other - base].links.push(slot);
            }
        }
        self.ephemeral.push(Ephemeral { cell: p, links });
        slot
    }
}
