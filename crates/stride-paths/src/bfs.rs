use std::collections::VecDeque;

use stride_core::{GridMap, Point};

const UNREACHABLE: u32 = u32::MAX;

/// Length of the shortest 4-directional path from `from` to `to` by plain
/// breadth-first search, or `None` if no path exists or either endpoint is
/// unwalkable.
///
/// Slower than [`PathFinder::find_path`](crate::PathFinder::find_path) on
/// large grids but has no tunable parts, which makes it a convenient
/// reachability probe and a cross-check for the A* implementation.
pub fn bfs_distance(grid: &GridMap, from: Point, to: Point) -> Option<u32> {
    if !grid.is_walkable(from) || !grid.is_walkable(to) {
        return None;
    }
    if from == to {
        return Some(0);
    }

    let width = grid.width();
    let idx = |p: Point| (p.y * width + p.x) as usize;

    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut queue: VecDeque<Point> = VecDeque::new();
    dist[idx(from)] = 0;
    queue.push_back(from);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(cp) = queue.pop_front() {
        let d = dist[idx(cp)];
        nbuf.clear();
        grid.neighbors4(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if dist[idx(np)] != UNREACHABLE {
                continue;
            }
            if np == to {
                return Some(d + 1);
            }
            dist[idx(np)] = d + 1;
            queue.push_back(np);
        }
    }
    None
}
