use stride_core::{GridMap, Point};

/// Per-cell search bookkeeping, kept in a flat arena indexed by cell.
///
/// Nodes are invalidated lazily via the generation counter: a node whose
/// `generation` differs from the finder's current one is treated as
/// undiscovered, so no per-search clearing pass is needed and nothing
/// persists from one search to the next.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry referencing a node in the arena.
///
/// Ordered by `f`, with ties broken by discovery order (`seq`), so that
/// equal-cost frontiers expand deterministically and repeated queries
/// return the identical path.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: i32,
    pub(crate) seq: u32,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first;
        // among equal f, the earliest-discovered entry wins.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* path finder for [`GridMap`] grids.
///
/// Owns a node arena sized to the grid plus scratch buffers, all reused
/// across queries. Create one per grid size and call
/// [`find_path`](PathFinder::find_path) as often as needed; the finder
/// resizes itself automatically if handed a larger grid.
pub struct PathFinder {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a finder for grids of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            nodes: vec![Node::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a finder sized for `grid`.
    pub fn for_grid(grid: &GridMap) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Adapt to new grid dimensions, reallocating only on growth.
    ///
    /// When the new size fits within existing capacity the arena is kept
    /// and the generation counter bumped so stale entries are ignored.
    pub fn resize(&mut self, width: i32, height: i32) {
        if width == self.width && height == self.height {
            return;
        }
        let new_len = (width.max(0) as usize) * (height.max(0) as usize);
        self.width = width;
        self.height = height;
        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Convert a `Point` to a flat arena index. `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat arena index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}
