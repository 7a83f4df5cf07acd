//! Any-angle pathfinding on static tile grids.
//!
//! This crate precomputes a sparse visibility graph over obstacle corners
//! and answers path queries with a handful of waypoints instead of a
//! cell-by-cell walk:
//!
//! - **Ray casting** between cell centers ([`cast_ray`], [`line_cells`])
//! - **Graph building** over corner cells ([`VisibilityGraph::init`])
//! - **Best-first search** with query-scoped endpoint nodes
//!   ([`VisibilityGraph::path`])
//! - **Path compression** to the deepest visible ancestor
//!
//! ```
//! use sightgraph_core::{Point, TileMap};
//! use sightgraph_paths::{VisibilityGraph, Waypoint};
//!
//! let map = TileMap::parse(
//!     "\
//! ...#.
//! ...#.
//! ...#.
//! .....",
//! )
//! .unwrap();
//! let mut graph = VisibilityGraph::new(map.width(), map.height(), map);
//! graph.init();
//! let path = graph.path(Point::new(0, 0), Point::new(4, 0));
//! assert_eq!(path.last(), Some(&Waypoint::new(4, 0)));
//! ```

mod builder;
mod compress;
mod config;
mod graph;
mod node;
mod overlay;
mod ray;
mod search;
mod waypoint;

pub use builder::is_corner;
pub use config::{CostMetric, DiagonalGaps, GraphConfig};
pub use graph::{PathError, VisibilityGraph};
pub use ray::{LineCells, cast_ray, cast_ray_with, line_cells};
pub use waypoint::{Waypoint, path_length};
