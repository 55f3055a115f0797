//! **stride-paths** — Shortest-path search for [`GridMap`] obstacle grids.
//!
//! The central type is [`PathFinder`], which computes optimal 4-directional
//! paths with A* ([`PathFinder::find_path`]). It owns and reuses its search
//! caches, so repeated queries incur no allocations after warm-up, while
//! remaining semantically stateless: nothing from one search influences the
//! next.
//!
//! [`bfs_distance`] provides an unweighted shortest-path length by plain
//! breadth-first search, useful as a cheap reachability probe.
//!
//! [`GridMap`]: stride_core::GridMap

mod astar;
mod bfs;
mod distance;
mod finder;

pub use bfs::bfs_distance;
pub use distance::manhattan;
pub use finder::PathFinder;
