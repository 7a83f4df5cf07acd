//! **sightgraph-core** — grid primitives shared by the *sightgraph* crates.
//!
//! This crate provides integer geometry ([`Point`], [`Range`]), the
//! [`Occupancy`] oracle trait consumed by the pathfinder, and [`TileMap`], a
//! simple obstacle map that can be parsed from ASCII art.

pub mod geom;
pub mod occupancy;
pub mod tilemap;

pub use geom::{Point, Range, RangeIter};
pub use occupancy::Occupancy;
pub use tilemap::{MapError, TileMap};
