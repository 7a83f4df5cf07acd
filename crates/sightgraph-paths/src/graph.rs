use std::fmt;

use sightgraph_core::{Occupancy, Point};

use crate::builder;
use crate::compress::compress;
use crate::config::GraphConfig;
use crate::node::NodeStore;
use crate::overlay::Overlay;
use crate::ray::cast_ray_with;
use crate::search::best_first;
use crate::waypoint::Waypoint;

/// Any-angle pathfinder over a static occupancy snapshot.
///
/// [`init`](Self::init) scans the grid for obstacle corners and links every
/// pair that can see each other. [`path`](Self::path) then searches that
/// sparse graph, temporarily adding the query endpoints when they are not
/// corners themselves, and returns a short list of waypoints.
///
/// Queries take `&self`: per-query state lives in a scratch overlay that is
/// discarded before `path` returns, so the graph after any number of queries
/// is identical to the graph after `init`.
pub struct VisibilityGraph<O> {
    width: i32,
    height: i32,
    oracle: O,
    config: GraphConfig,
    store: NodeStore,
    initialized: bool,
}

impl<O: Occupancy> VisibilityGraph<O> {
    /// Create an unbuilt graph over `[0, width) × [0, height)` with the
    /// default [`GraphConfig`].
    pub fn new(width: i32, height: i32, oracle: O) -> Self {
        Self::with_config(width, height, oracle, GraphConfig::default())
    }

    /// Create an unbuilt graph with explicit options.
    pub fn with_config(width: i32, height: i32, oracle: O, config: GraphConfig) -> Self {
        Self {
            width,
            height,
            oracle,
            config,
            store: NodeStore::new(width, height),
            initialized: false,
        }
    }

    /// Build (or rebuild) the visibility graph from the oracle's current
    /// answers. Costs O(V²) ray casts over V corner nodes.
    pub fn init(&mut self) {
        let store = builder::build(self.width, self.height, &self.oracle, |a, b| {
            self.has_line_of_sight(a, b)
        });
        log::debug!(
            "visibility graph {}x{}: {} corner nodes, {} links",
            self.width,
            self.height,
            store.len(),
            store.link_count()
        );
        self.store = store;
        self.initialized = true;
    }

    /// Find an any-angle path from `from` to `to`.
    ///
    /// The result starts with the first waypoint after `from` and ends with
    /// `to`. When `to` is directly visible it is the only waypoint; when `to`
    /// cannot be reached the result is empty.
    ///
    /// # Panics
    ///
    /// Panics if [`init`](Self::init) has not been called.
    pub fn path(&self, from: Point, to: Point) -> Vec<Waypoint> {
        assert!(
            self.initialized,
            "VisibilityGraph::init() must be called before path()"
        );
        self.search(from, to)
    }

    /// Like [`path`](Self::path), but reports a missing [`init`](Self::init)
    /// as an error instead of panicking.
    pub fn try_path(&self, from: Point, to: Point) -> Result<Vec<Waypoint>, PathError> {
        if !self.initialized {
            return Err(PathError::NotInitialized);
        }
        Ok(self.search(from, to))
    }

    fn search(&self, from: Point, to: Point) -> Vec<Waypoint> {
        if self.has_line_of_sight(from, to) {
            log::trace!("path {from} -> {to}: direct sight");
            return vec![Waypoint::from(to)];
        }

        let sees = |a: Point, b: Point| self.has_line_of_sight(a, b);
        let mut view = Overlay::new(&self.store);
        let start = view.materialize(from, sees);
        let goal = view.materialize(to, sees);
        log::trace!(
            "path {from} -> {to}: {} nodes ({} ephemeral)",
            view.len(),
            view.ephemeral_count()
        );

        let Some(tree) = best_first(&view, start, goal, self.config.metric) else {
            log::trace!("path {from} -> {to}: unreachable");
            return Vec::new();
        };

        let slots = compress(goal, &tree.parents, |a, b| sees(view.cell(a), view.cell(b)));
        log::trace!(
            "path {from} -> {to}: {} waypoints after {} expansions",
            slots.len(),
            tree.expanded
        );
        slots
            .into_iter()
            .map(|slot| Waypoint::from(view.cell(slot)))
            .collect()
    }

    /// Whether the straight segment between two cell centers is clear,
    /// under this graph's oracle and diagonal-gap rule.
    #[inline]
    pub fn has_line_of_sight(&self, a: Point, b: Point) -> bool {
        cast_ray_with(a, b, self.config.diagonal_gaps, |p| !self.oracle.blocked(p))
    }
}

impl<O> VisibilityGraph<O> {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The occupancy oracle the graph was built from.
    #[inline]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Whether [`init`](VisibilityGraph::init) has run.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of permanent (corner) nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Number of undirected permanent links.
    pub fn link_count(&self) -> usize {
        self.store.link_count()
    }

    /// Whether `p` holds a permanent node.
    #[inline]
    pub fn is_node(&self, p: Point) -> bool {
        self.store.slot_at(p).is_some()
    }

    /// Cells of all permanent nodes, in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Point> + '_ {
        self.store.nodes().iter().map(|n| n.cell)
    }

    /// Cells linked to the permanent node at `p`. Empty if `p` is not a node.
    pub fn links(&self, p: Point) -> Vec<Point> {
        match self.store.slot_at(p) {
            Some(slot) => self
                .store
                .node(slot)
                .links
                .iter()
                .map(|&l| self.store.node(l).cell)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<O> fmt::Debug for VisibilityGraph<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityGraph")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("config", &self.config)
            .field("initialized", &self.initialized)
            .field("nodes", &self.store.len())
            .field("links", &self.store.link_count())
            .finish()
    }
}

/// Errors reported by [`VisibilityGraph::try_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The graph has not been built yet.
    NotInitialized,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "visibility graph is not initialized"),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CostMetric, DiagonalGaps};
    use sightgraph_core::TileMap;
    use std::cell::RefCell;

    fn graph(map: &str) -> VisibilityGraph<TileMap> {
        let map = TileMap::parse(map).unwrap();
        let mut g = VisibilityGraph::new(map.width(), map.height(), map);
        g.init();
        g
    }

    #[test]
    #[should_panic(expected = "init() must be called")]
    fn path_before_init_panics() {
        let g = VisibilityGraph::new(3, 3, |_: i32, _: i32| false);
        g.path(Point::new(0, 0), Point::new(2, 2));
    }

    #[test]
    fn try_path_before_init_is_an_error() {
        let g = VisibilityGraph::new(3, 3, |_: i32, _: i32| false);
        assert_eq!(
            g.try_path(Point::new(0, 0), Point::new(2, 2)),
            Err(PathError::NotInitialized)
        );
        assert!(!g.is_initialized());
    }

    #[test]
    fn goes_around_a_pillar() {
        let g = graph(
            "\
.....
.....
..#..
.....
.....",
        );
        assert_eq!(g.node_count(), 4);
        let path = g.path(Point::new(2, 0), Point::new(2, 4));
        assert_eq!(path.len(), 2);
        // Either side of the pillar; the first corner row wins.
        assert_eq!(path[0], Waypoint::new(1, 1));
        assert_eq!(path[1], Waypoint::new(2, 4));
    }

    #[test]
    fn corner_endpoints_are_reused() {
        let g = graph(
            "\
.....
.....
..#..
.....
.....",
        );
        let path = g.path(Point::new(1, 1), Point::new(3, 3));
        assert_eq!(path, vec![Waypoint::new(3, 1), Waypoint::new(3, 3)]);
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn init_rebuilds_after_layout_change() {
        let walls = RefCell::new(TileMap::new(5, 5));
        let mut g = VisibilityGraph::new(5, 5, |x: i32, y: i32| walls.borrow().has_collision(x, y));
        g.init();
        assert_eq!(g.node_count(), 0);

        walls.borrow_mut().set_blocked(Point::new(2, 2), true);
        g.init();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.link_count(), 4);
    }

    #[test]
    fn introspection() {
        let g = graph(
            "\
.....
.....
..#..
.....
.....",
        );
        assert!(g.is_node(Point::new(3, 1)));
        assert!(!g.is_node(Point::new(2, 1)));
        assert_eq!(g.nodes().count(), 4);
        let mut links = g.links(Point::new(1, 1));
        links.sort();
        assert_eq!(links, vec![Point::new(3, 1), Point::new(1, 3)]);
        assert!(g.links(Point::new(0, 0)).is_empty());
        assert!(format!("{g:?}").contains("nodes: 4"));
    }

    #[test]
    fn diagonal_gap_rule_is_configurable() {
        let map = TileMap::parse(
            "\
...
.#.
#..",
        )
        .unwrap();
        let (a, b) = (Point::new(0, 1), Point::new(1, 2));
        let blocked = VisibilityGraph::new(3, 3, map.clone());
        assert!(!blocked.has_line_of_sight(a, b));
        let open = VisibilityGraph::with_config(
            3,
            3,
            map,
            GraphConfig {
                metric: CostMetric::SquaredEuclidean,
                diagonal_gaps: DiagonalGaps::Open,
            },
        );
        assert!(open.has_line_of_sight(a, b));
    }
}
