//! Visibility graph construction.

use sightgraph_core::{Occupancy, Point, Range};

use crate::node::NodeStore;

/// Whether `p` is a corner node: for some diagonal direction the diagonal
/// neighbor is blocked while both orthogonal neighbors on that side are open.
///
/// These are the convex obstacle corners a shortest any-angle path can bend
/// around.
pub fn is_corner<O: Occupancy + ?Sized>(oracle: &O, p: Point) -> bool {
    Point::DIAGONALS.iter().any(|d| {
        oracle.blocked(p + *d) && !oracle.blocked(p.shift(d.x, 0)) && !oracle.blocked(p.shift(0, d.y))
    })
}

/// Scan `[0, width) × [0, height)` row by row for corner nodes, then link
/// every unordered pair for which `sees` holds.
pub(crate) fn build<O: Occupancy + ?Sized>(
    width: i32,
    height: i32,
    oracle: &O,
    sees: impl Fn(Point, Point) -> bool,
) -> NodeStore {
    let mut store = NodeStore::new(width, height);
    for p in Range::sized(width, height) {
        if is_corner(oracle, p) {
            store.insert(p);
        }
    }

    let n = store.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if sees(store.node(i).cell, store.node(j).cell) {
                store.link(i, j);
            }
        }
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::cast_ray;
    use sightgraph_core::TileMap;

    #[test]
    fn single_pillar_has_four_corners() {
        let map = TileMap::parse(
            "\
.....
.....
..#..
.....
.....",
        )
        .unwrap();
        let corners: Vec<Point> = map.range().iter().filter(|&p| is_corner(&map, p)).collect();
        assert_eq!(
            corners,
            vec![
                Point::new(1, 1),
                Point::new(3, 1),
                Point::new(1, 3),
                Point::new(3, 3)
            ]
        );
    }

    #[test]
    fn map_border_produces_no_corners() {
        let map = TileMap::new(4, 4);
        assert!(map.range().iter().all(|p| !is_corner(&map, p)));
    }

    #[test]
    fn wall_run_only_has_end_corners() {
        let map = TileMap::parse(
            "\
......
.####.
......",
        )
        .unwrap();
        let corners: Vec<Point> = map.range().iter().filter(|&p| is_corner(&map, p)).collect();
        assert_eq!(
            corners,
            vec![
                Point::new(0, 0),
                Point::new(5, 0),
                Point::new(0, 2),
                Point::new(5, 2)
            ]
        );
    }

    #[test]
    fn pillar_corners_link_around_the_pillar() {
        let map = TileMap::parse(
            "\
.....
.....
..#..
.....
.....",
        )
        .unwrap();
        let store = build(5, 5, &map, |a, b| cast_ray(a, b, |p| !map.blocked(p)));
        assert_eq!(store.len(), 4);
        // Four sides of the square are clear; both diagonals cross the pillar.
        assert_eq!(store.link_count(), 4);
        let nw = store.slot_at(Point::new(1, 1)).unwrap();
        let se = store.slot_at(Point::new(3, 3)).unwrap();
        assert!(!store.node(nw).links.contains(&se));
    }
}
