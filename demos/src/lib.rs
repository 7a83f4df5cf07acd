//! Shared helpers for the sightgraph demos: cave generation and path
//! rendering on top of [`TileMap`].

use rand::Rng;
use sightgraph_core::{Point, TileMap};
use sightgraph_paths::Waypoint;

/// A hand-drawn level with a few rooms and pillars.
pub const SAMPLE_MAP: &str = "\
..............#.................
..............#.................
..####........#.......###.......
..#...........#.........#.......
..#.......................#.....
..#.....#.....#.........#.......
........#.....########..........
........#.......................
..............#.............#...
#######.......#......##.....#...
..............#......##.....#...
..............#.................";

/// Parameters for [`cave`].
#[derive(Debug, Clone, Copy)]
pub struct CaveRule {
    /// Chance for each cell to start as a wall (0.0–1.0).
    pub wall_pct: f64,
    /// A cell becomes a wall when at least this many of its 8 neighbors are
    /// walls. Out-of-range neighbors count as walls.
    pub cutoff: usize,
    /// Number of smoothing passes.
    pub reps: usize,
}

impl Default for CaveRule {
    fn default() -> Self {
        Self {
            wall_pct: 0.42,
            cutoff: 5,
            reps: 3,
        }
    }
}

/// Generate a cave with random initialization followed by cellular
/// automata smoothing.
pub fn cave(width: i32, height: i32, rule: CaveRule, rng: &mut impl Rng) -> TileMap {
    let mut map = TileMap::new(width, height);
    for p in map.range() {
        map.set_blocked(p, rng.random_bool(rule.wall_pct));
    }

    for _ in 0..rule.reps {
        let prev = map.clone();
        for p in prev.range() {
            let walls = (-1..=1)
                .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
                .filter(|&(dx, dy)| (dx, dy) != (0, 0) && prev.is_blocked(p.shift(dx, dy)))
                .count();
            map.set_blocked(p, walls >= rule.cutoff);
        }
    }
    map
}

/// A random open cell, or `None` after `tries` misses.
pub fn random_open(map: &TileMap, rng: &mut impl Rng, tries: usize) -> Option<Point> {
    if map.width() == 0 || map.height() == 0 {
        return None;
    }
    (0..tries)
        .map(|_| {
            Point::new(
                rng.random_range(0..map.width()),
                rng.random_range(0..map.height()),
            )
        })
        .find(|&p| !map.is_blocked(p))
}

/// Render `map` with the start as `S`, intermediate waypoints numbered
/// `1`–`9` (then `*`), and the goal as `G`.
pub fn render_path(map: &TileMap, from: Point, path: &[Waypoint]) -> String {
    let mut marks = vec![(from, 'S')];
    for (i, wp) in path.iter().enumerate() {
        let ch = if i + 1 == path.len() {
            'G'
        } else {
            char::from_digit((i + 1) as u32, 10).unwrap_or('*')
        };
        marks.push((wp.point(), ch));
    }
    map.render(&marks)
}
