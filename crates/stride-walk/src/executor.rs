use std::collections::VecDeque;

use log::{debug, trace};
use stride_core::Point;

/// The executor's view of the host's animation/movement layer.
///
/// The executor guarantees at most one outstanding [`begin_move`] request
/// at a time: the next is issued only after the host confirms the current
/// one through [`PathExecutor::on_step_complete`]. There is no timeout —
/// a host that never confirms leaves the executor moving forever.
///
/// [`begin_move`]: MoveHost::begin_move
pub trait MoveHost {
    /// Start animating the agent into `to` (an adjacent cell).
    fn begin_move(&mut self, to: Point);

    /// The whole path has been traversed (or an empty path was accepted);
    /// the agent rests at `at` and the executor is idle again.
    fn path_complete(&mut self, at: Point);
}

/// Advances an agent through a waypoint sequence, one confirmed step at a
/// time.
///
/// The recorded position only ever changes in
/// [`on_step_complete`](Self::on_step_complete), so it always names a cell
/// the agent has actually arrived at — mid-animation interpolation is
/// invisible here.
#[derive(Debug)]
pub struct PathExecutor {
    pos: Point,
    queue: VecDeque<Point>,
    moving: bool,
}

impl PathExecutor {
    /// Create an idle executor resting at `at`.
    pub fn new(at: Point) -> Self {
        Self {
            pos: at,
            queue: VecDeque::new(),
            moving: false,
        }
    }

    /// The last confirmed cell, never a speculative in-flight one.
    #[inline]
    pub fn current_position(&self) -> Point {
        self.pos
    }

    /// Whether a path is currently being executed.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Waypoints not yet confirmed (includes the in-flight one).
    #[inline]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Begin executing `path` from `from`.
    ///
    /// Dropped silently while a path is already in flight; concurrent
    /// requests are not queued, so the agent cannot be yanked between two
    /// destinations. An empty path completes immediately with zero steps.
    /// Otherwise the executor enters the moving state and asks the host to
    /// animate the first step.
    pub fn start(&mut self, from: Point, path: Vec<Point>, host: &mut impl MoveHost) {
        if self.moving {
            debug!("start dropped: already moving toward {:?}", self.queue.back());
            return;
        }
        self.pos = from;
        if path.is_empty() {
            trace!("empty path accepted at {from}, completing immediately");
            host.path_complete(self.pos);
            return;
        }
        self.queue.clear();
        self.queue.extend(path);
        self.moving = true;
        // Queue is non-empty here.
        if let Some(&first) = self.queue.front() {
            trace!("walking {from} -> {:?} ({} steps)", self.queue.back(), self.queue.len());
            host.begin_move(first);
        }
    }

    /// Host confirmation that the in-flight move finished.
    ///
    /// Commits the arrival, then either requests the next step or, with
    /// the queue drained, goes idle and reports completion. Ignored while
    /// idle.
    pub fn on_step_complete(&mut self, host: &mut impl MoveHost) {
        if !self.moving {
            trace!("step confirmation ignored: not moving");
            return;
        }
        let Some(arrived) = self.queue.pop_front() else {
            self.moving = false;
            return;
        };
        self.pos = arrived;
        match self.queue.front() {
            Some(&next) => host.begin_move(next),
            None => {
                self.moving = false;
                trace!("path complete at {arrived}");
                host.path_complete(self.pos);
            }
        }
    }

    /// Abandon the current path without any completion signal.
    ///
    /// The queue is cleared and the executor goes idle at its last
    /// confirmed cell; the host is expected to drop its in-flight
    /// animation. A no-op while idle.
    pub fn cancel(&mut self) {
        if !self.moving {
            return;
        }
        debug!("walk cancelled at {} with {} waypoints left", self.pos, self.queue.len());
        self.queue.clear();
        self.moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum HostEvent {
        BeginMove(Point),
        PathComplete(Point),
    }

    /// Records every request the executor issues, in order.
    #[derive(Default)]
    struct RecordingHost {
        events: Vec<HostEvent>,
    }

    impl MoveHost for RecordingHost {
        fn begin_move(&mut self, to: Point) {
            self.events.push(HostEvent::BeginMove(to));
        }
        fn path_complete(&mut self, at: Point) {
            self.events.push(HostEvent::PathComplete(at));
        }
    }

    fn three_step_path() -> Vec<Point> {
        vec![Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)]
    }

    #[test]
    fn empty_path_completes_immediately() {
        let mut host = RecordingHost::default();
        let mut exec = PathExecutor::new(Point::ZERO);
        exec.start(Point::new(3, 3), Vec::new(), &mut host);
        assert!(!exec.is_moving());
        assert_eq!(exec.current_position(), Point::new(3, 3));
        assert_eq!(host.events, vec![HostEvent::PathComplete(Point::new(3, 3))]);
    }

    #[test]
    fn walks_each_waypoint_exactly_once_in_order() {
        let mut host = RecordingHost::default();
        let mut exec = PathExecutor::new(Point::ZERO);
        let path = three_step_path();
        exec.start(Point::ZERO, path.clone(), &mut host);

        assert!(exec.is_moving());
        assert_eq!(host.events, vec![HostEvent::BeginMove(path[0])]);
        // Position is not updated speculatively.
        assert_eq!(exec.current_position(), Point::ZERO);

        for (i, &wp) in path.iter().enumerate() {
            exec.on_step_complete(&mut host);
            assert_eq!(exec.current_position(), wp, "after step {i}");
        }

        assert!(!exec.is_moving());
        assert_eq!(exec.remaining(), 0);
        assert_eq!(
            host.events,
            vec![
                HostEvent::BeginMove(path[0]),
                HostEvent::BeginMove(path[1]),
                HostEvent::BeginMove(path[2]),
                HostEvent::PathComplete(path[2]),
            ]
        );
    }

    #[test]
    fn start_while_moving_is_a_noop() {
        let mut host = RecordingHost::default();
        let mut exec = PathExecutor::new(Point::ZERO);
        exec.start(Point::ZERO, three_step_path(), &mut host);
        let events_before = host.events.len();
        let remaining_before = exec.remaining();
        let pos_before = exec.current_position();

        exec.start(Point::new(9, 9), vec![Point::new(9, 8)], &mut host);

        assert!(exec.is_moving());
        assert_eq!(exec.remaining(), remaining_before);
        assert_eq!(exec.current_position(), pos_before);
        assert_eq!(host.events.len(), events_before);
    }

    #[test]
    fn step_confirmation_while_idle_is_ignored() {
        let mut host = RecordingHost::default();
        let mut exec = PathExecutor::new(Point::new(2, 2));
        exec.on_step_complete(&mut host);
        assert!(host.events.is_empty());
        assert_eq!(exec.current_position(), Point::new(2, 2));
    }

    #[test]
    fn cancel_goes_idle_without_completion() {
        let mut host = RecordingHost::default();
        let mut exec = PathExecutor::new(Point::ZERO);
        let path = three_step_path();
        exec.start(Point::ZERO, path.clone(), &mut host);
        exec.on_step_complete(&mut host); // arrive at path[0]

        exec.cancel();
        assert!(!exec.is_moving());
        assert_eq!(exec.remaining(), 0);
        assert_eq!(exec.current_position(), path[0]);
        // No PathComplete was emitted.
        assert_eq!(
            host.events,
            vec![HostEvent::BeginMove(path[0]), HostEvent::BeginMove(path[1])]
        );

        // A new start is accepted after cancelling.
        exec.start(path[0], vec![Point::new(1, 1)], &mut host);
        assert!(exec.is_moving());
    }

    #[test]
    fn executes_a_found_path_end_to_end() {
        use stride_core::GridMap;
        use stride_paths::PathFinder;

        let mut map = GridMap::new(5, 5);
        for y in 0..4 {
            map.set_walkable(Point::new(2, y), false);
        }
        let from = Point::new(0, 0);
        let to = Point::new(4, 0);
        let mut pf = PathFinder::for_grid(&map);
        let path = pf.find_path(&map, from, to).unwrap();

        let mut host = RecordingHost::default();
        let mut exec = PathExecutor::new(from);
        exec.start(from, path.clone(), &mut host);
        // Ack every request as soon as it is issued, like an instant tween.
        while exec.is_moving() {
            exec.on_step_complete(&mut host);
        }

        assert_eq!(exec.current_position(), to);
        let moves = host
            .events
            .iter()
            .filter(|e| matches!(e, HostEvent::BeginMove(_)))
            .count();
        assert_eq!(moves, path.len());
        assert_eq!(*host.events.last().unwrap(), HostEvent::PathComplete(to));
    }
}
