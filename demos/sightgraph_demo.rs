//! Builds visibility graphs for a hand-drawn level and a generated cave, runs
//! a few queries and prints the resulting paths.
//!
//! Run: cargo run --bin sightgraph-demo [seed]
//! Set `RUST_LOG=trace` to see the graph and search logs.

use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sightgraph_core::{Point, TileMap};
use sightgraph_demos::{CaveRule, SAMPLE_MAP, cave, random_open, render_path};
use sightgraph_paths::{VisibilityGraph, path_length};

fn show(graph: &VisibilityGraph<TileMap>, from: Point, to: Point) {
    let path = graph.path(from, to);
    if path.is_empty() {
        println!("{from} -> {to}: unreachable\n");
        return;
    }
    println!(
        "{from} -> {to}: {} waypoint(s), length {:.2} (4-connected walk: {})",
        path.len(),
        path_length(from, &path),
        from.manhattan(to)
    );
    println!("{}\n", render_path(graph.oracle(), from, &path));
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };

    let map = TileMap::parse(SAMPLE_MAP)?;
    let mut graph = VisibilityGraph::new(map.width(), map.height(), map);
    graph.init();
    println!(
        "sample level: {} corner nodes, {} links\n",
        graph.node_count(),
        graph.link_count()
    );
    show(&graph, Point::new(0, 0), Point::new(31, 11));
    show(&graph, Point::new(3, 3), Point::new(23, 3));
    show(&graph, Point::new(0, 11), Point::new(30, 0));

    let mut rng = StdRng::seed_from_u64(seed);
    let map = cave(60, 24, CaveRule::default(), &mut rng);
    let mut graph = VisibilityGraph::new(map.width(), map.height(), map);
    graph.init();
    println!(
        "cave (seed {seed}): {} corner nodes, {} links\n",
        graph.node_count(),
        graph.link_count()
    );
    for _ in 0..3 {
        let endpoints = (
            random_open(graph.oracle(), &mut rng, 10_000),
            random_open(graph.oracle(), &mut rng, 10_000),
        );
        match endpoints {
            (Some(from), Some(to)) => show(&graph, from, to),
            _ => {
                log::warn!("cave (seed {seed}) has no open cells");
                break;
            }
        }
    }
    Ok(())
}
