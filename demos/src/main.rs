//! patrol — a headless walk-through of the full engine: scatter obstacles
//! on a small map, find a corner-to-corner path, then drive the executor
//! with a host that acknowledges every move instantly.
//!
//! Usage: `patrol [seed]` (defaults to seed 1). Output is deterministic
//! for a fixed seed. Set `RUST_LOG=debug` for engine internals.

use std::collections::HashSet;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use stride_core::{GridMap, Point};
use stride_paths::PathFinder;
use stride_walk::{MoveHost, PathExecutor};

const WIDTH: i32 = 12;
const HEIGHT: i32 = 12;
const OBSTACLE_RATE: f64 = 0.3;

/// Stands in for an animation layer: logs each request and lets the main
/// loop confirm it on the next iteration.
struct LoggingHost {
    steps: usize,
}

impl MoveHost for LoggingHost {
    fn begin_move(&mut self, to: Point) {
        self.steps += 1;
        info!("step {}: moving into {to}", self.steps);
    }

    fn path_complete(&mut self, at: Point) {
        info!("arrived at {at} after {} steps", self.steps);
    }
}

fn render(map: &GridMap, path: &[Point], start: Point, goal: Point) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Point::new(x, y);
            out.push(if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if on_path.contains(&p) {
                '*'
            } else if map.is_walkable(p) {
                '.'
            } else {
                '#'
            });
        }
        out.push('\n');
    }
    out
}

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);

    let start = Point::new(0, 0);
    let goal = Point::new(WIDTH - 1, HEIGHT - 1);

    let mut map = GridMap::new(WIDTH, HEIGHT);
    let mut rng = StdRng::seed_from_u64(seed);
    let placed = map.scatter_obstacles(&mut rng, OBSTACLE_RATE, &[start, goal]);
    println!("seed {seed}: {WIDTH}x{HEIGHT} map, {placed} obstacles");

    let mut finder = PathFinder::for_grid(&map);
    let Some(path) = finder.find_path(&map, start, goal) else {
        println!("{}", render(&map, &[], start, goal));
        println!("no path from {start} to {goal} — try another seed");
        return;
    };

    println!("{}", render(&map, &path, start, goal));
    println!("path length: {} steps", path.len());

    let mut host = LoggingHost { steps: 0 };
    let mut executor = PathExecutor::new(start);
    executor.start(start, path, &mut host);
    while executor.is_moving() {
        // The real host would call this when its tween finishes.
        executor.on_step_complete(&mut host);
    }

    println!("agent rests at {}", executor.current_position());
}
