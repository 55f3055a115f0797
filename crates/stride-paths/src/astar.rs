use std::collections::BinaryHeap;

use log::debug;
use stride_core::{GridMap, Point};

use crate::PathFinder;
use crate::distance::manhattan;
use crate::finder::OpenEntry;

impl PathFinder {
    /// Compute the shortest 4-directional path from `from` to `to` using
    /// A* with unit step cost and the Manhattan heuristic.
    ///
    /// The returned path excludes `from` itself: it is the ordered
    /// sequence of cells to enter, ending at `to`, so its length equals
    /// the number of steps. `from == to` yields `Some(vec![])` (already
    /// at the destination). An unwalkable or out-of-bounds endpoint, or
    /// an exhausted frontier, yields `None`.
    ///
    /// The grid is never mutated, and ties between equal-cost routes are
    /// broken by discovery order, so identical queries always return the
    /// identical path.
    pub fn find_path(
        &mut self,
        grid: &GridMap,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        if !grid.is_walkable(from) || !grid.is_walkable(to) {
            debug!("path query {from} -> {to}: endpoint not walkable");
            return None;
        }

        self.resize(grid.width(), grid.height());
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(Vec::new());
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut seq: u32 = 0;
        open.push(OpenEntry {
            f: self.nodes[start_idx].f,
            seq,
            idx: start_idx,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            grid.neighbors4(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered; relax only on a strict improvement.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(OpenEntry { f: n.f, seq, idx: ni });
            }
        };

        self.nbuf = nbuf;

        if !found {
            debug!("path query {from} -> {to}: frontier exhausted");
            return None;
        }

        // Walk parent links back from the goal, stopping before the start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
