//! The [`GridMap`] static obstacle grid.

use log::debug;
use rand::{Rng, RngExt};

use crate::geom::Point;

/// A rectangular walkability map with fixed dimensions.
///
/// `GridMap` is a passive query surface: it answers walkability and
/// neighbour questions but drives nothing itself. Out-of-bounds queries
/// are absorbed (never walkable, never an error), since hosts may probe
/// arbitrary screen-derived coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    width: i32,
    height: i32,
    walkable: Vec<bool>,
}

impl GridMap {
    /// Create a new map with every cell walkable.
    ///
    /// # Panics
    /// Panics if `width` or `height` is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            walkable: vec![true; (width * height) as usize],
        }
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walkable.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty()
    }

    /// Whether `p` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Whether `p` is in bounds and free of obstacles.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.contains(p) && self.walkable[self.index(p)]
    }

    /// Set the walkability flag at `p`. Does nothing if out of bounds.
    pub fn set_walkable(&mut self, p: Point, flag: bool) {
        if self.contains(p) {
            let idx = self.index(p);
            self.walkable[idx] = flag;
        }
    }

    /// Append the walkable cardinal neighbours of `p` to `buf`, in fixed
    /// north, east, south, west order. The caller clears `buf` beforehand.
    ///
    /// Out-of-bounds and blocked cells are filtered out, so the result is
    /// directly usable as search successors.
    pub fn neighbors4(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
    }

    /// Mark a `rate` fraction of cells (0.0–1.0) as obstacles, chosen
    /// uniformly at random. Cells listed in `keep_open` are never blocked,
    /// so a host can guarantee e.g. that the agent's start stays walkable.
    ///
    /// Returns the number of obstacles actually placed.
    pub fn scatter_obstacles<R: Rng>(
        &mut self,
        rng: &mut R,
        rate: f64,
        keep_open: &[Point],
    ) -> usize {
        let total = self.walkable.len();
        let target = (total as f64 * rate.clamp(0.0, 1.0)) as usize;
        let mut placed = 0usize;

        // Safety limit so an over-constrained request terminates.
        let mut attempts = total * 10;
        while placed < target && attempts > 0 {
            attempts -= 1;
            let p = Point::new(
                rng.random_range(0..self.width),
                rng.random_range(0..self.height),
            );
            let idx = self.index(p);
            if keep_open.contains(&p) || !self.walkable[idx] {
                continue;
            }
            self.walkable[idx] = false;
            placed += 1;
        }

        debug!("scattered {placed} obstacles over {total} cells");
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn out_of_bounds_is_never_walkable() {
        let map = GridMap::new(4, 3);
        assert!(!map.is_walkable(Point::new(-1, 0)));
        assert!(!map.is_walkable(Point::new(0, -1)));
        assert!(!map.is_walkable(Point::new(4, 0)));
        assert!(!map.is_walkable(Point::new(0, 3)));
        assert!(map.is_walkable(Point::new(3, 2)));
    }

    #[test]
    fn set_walkable_out_of_bounds_is_a_noop() {
        let mut map = GridMap::new(2, 2);
        map.set_walkable(Point::new(5, 5), false);
        for y in 0..2 {
            for x in 0..2 {
                assert!(map.is_walkable(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn neighbors_filter_bounds_and_obstacles() {
        let mut map = GridMap::new(3, 3);
        map.set_walkable(Point::new(1, 0), false);
        let mut buf = Vec::new();
        // Corner: north and west are out of bounds, north-of-center blocked.
        map.neighbors4(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);

        buf.clear();
        map.neighbors4(Point::new(1, 1), &mut buf);
        // N blocked, E/S/W open — order preserved.
        assert_eq!(
            buf,
            vec![Point::new(2, 1), Point::new(1, 2), Point::new(0, 1)]
        );
    }

    #[test]
    fn neighbor_enumeration_order_is_stable() {
        let map = GridMap::new(5, 5);
        let mut buf = Vec::new();
        map.neighbors4(Point::new(2, 2), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(2, 3),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn scatter_respects_keep_open() {
        let mut map = GridMap::new(6, 6);
        let start = Point::new(0, 0);
        let mut rng = StdRng::seed_from_u64(7);
        let placed = map.scatter_obstacles(&mut rng, 0.5, &[start]);
        assert!(placed > 0);
        assert!(map.is_walkable(start));
        let blocked = (0..6)
            .flat_map(|y| (0..6).map(move |x| Point::new(x, y)))
            .filter(|&p| !map.is_walkable(p))
            .count();
        assert_eq!(blocked, placed);
    }

    #[test]
    fn scatter_is_reproducible_for_a_fixed_seed() {
        let mut a = GridMap::new(8, 8);
        let mut b = GridMap::new(8, 8);
        a.scatter_obstacles(&mut StdRng::seed_from_u64(42), 0.3, &[]);
        b.scatter_obstacles(&mut StdRng::seed_from_u64(42), 0.3, &[]);
        assert_eq!(a, b);
    }
}
