use super::direction::Direction;
use super::grid::{in_bounds, Cell};
use std::collections::VecDeque;

/// Where a fresh snake is placed and which way it faces
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SnakeStart {
    pub(crate) head: Cell,
    pub(crate) direction: Direction,
}

/// Snake state.
///
/// The head is stored apart from the rest of the body, so a snake always has
/// at least one segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cell occupied by the snake's head
    pub(super) head: Cell,

    /// The cells occupied by the rest of the body, ordered from the neck to
    /// the tail
    pub(super) body: VecDeque<Cell>,

    /// The direction that the next call to `advance()` moves in
    pub(super) direction: Direction,

    /// The direction most recently requested by input.  It becomes the
    /// current direction at the end of the next `advance()`.
    pub(super) pending: Direction,

    /// Whether the next `advance()` should keep the tail
    pub(super) growing: bool,
}

impl Snake {
    /// Create a one-segment snake at `start.head`, facing `start.direction`
    pub(crate) fn new(start: SnakeStart) -> Snake {
        Snake {
            head: start.head,
            body: VecDeque::new(),
            direction: start.direction,
            pending: start.direction,
            growing: false,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Return every cell occupied by the snake, head first
    pub(crate) fn segments(&self) -> Vec<Cell> {
        std::iter::once(self.head)
            .chain(self.body.iter().copied())
            .collect()
    }

    /// Move one cell in the current direction, dropping the tail unless the
    /// snake is growing, and then adopt the pending direction.
    pub(crate) fn advance(&mut self) {
        let new_head = self.direction.step(self.head);
        self.body.push_front(self.head);
        self.head = new_head;
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.body.pop_back();
        }
        self.direction = self.pending;
    }

    /// Ask the snake to turn.  A request for the exact opposite of the
    /// current direction is ignored; returns whether the request was taken.
    ///
    /// Later requests before the next `advance()` replace earlier ones.
    pub(crate) fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            false
        } else {
            self.pending = direction;
            true
        }
    }

    /// Keep the tail on the next `advance()`
    pub(crate) fn grow(&mut self) {
        self.growing = true;
    }

    /// Returns true if the head is outside the field or overlaps another
    /// segment
    pub(crate) fn check_collision(&self, width: i32, height: i32) -> bool {
        !in_bounds(self.head, width, height) || self.body.contains(&self.head)
    }
}
