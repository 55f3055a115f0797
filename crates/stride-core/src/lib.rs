//! **stride-core** — Foundational types for the stride pathfinding engine.
//!
//! Provides the [`Point`] grid coordinate and the [`GridMap`] static
//! obstacle grid that the search and execution crates build on.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::GridMap;
