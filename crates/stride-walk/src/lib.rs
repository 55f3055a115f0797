//! **stride-walk** — Drives an agent's logical grid position along a
//! computed path, one cell at a time.
//!
//! [`PathExecutor`] consumes a waypoint list (typically from
//! `stride-paths`) and a host implementing [`MoveHost`]. The executor
//! issues exactly one outstanding move request at a time and advances only
//! when the host acknowledges it via
//! [`on_step_complete`](PathExecutor::on_step_complete) — the host owns
//! all animation and timing; the executor owns the logical position.

mod executor;

pub use executor::{MoveHost, PathExecutor};
