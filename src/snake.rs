use std::collections::VecDeque;

use crate::config::{GridSize, INITIAL_SNAKE_BODY};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body, heading and pending growth.
///
/// The head may sit one cell outside the grid for the rest of a tick; the
/// caller detects that and resets.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    grow: bool,
}

impl Snake {
    /// Creates the three-segment starting snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: initial_body(),
            direction: Direction::Right,
            grow: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            grow: false,
        }
    }

    /// Advances one cell; keeps the tail when growth is pending.
    pub fn update(&mut self) {
        let next_head = self.next_head();
        self.body.push_front(next_head);

        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Restores the starting body and heading and drops pending growth.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Queues growth on the next movement step.
    pub fn request_growth(&mut self) {
        self.grow = true;
    }

    /// Returns true while growth is queued for the next step.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.grow
    }

    /// Sets the heading without validation; reversal checks live with the caller.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns where the head lands on the next step.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_body() -> VecDeque<Position> {
    INITIAL_SNAKE_BODY
        .iter()
        .map(|&(x, y)| Position { x, y })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    fn cells(snake: &Snake) -> Vec<Position> {
        snake.segments().copied().collect()
    }

    #[test]
    fn new_snake_uses_starting_body() {
        let snake = Snake::new();

        assert_eq!(
            cells(&snake),
            vec![Position::new(6, 9), Position::new(5, 9), Position::new(4, 9)]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.is_growing());
    }

    #[test]
    fn update_slides_body_forward() {
        let mut snake = Snake::new();

        snake.update();

        assert_eq!(
            cells(&snake),
            vec![Position::new(7, 9), Position::new(6, 9), Position::new(5, 9)]
        );
    }

    #[test]
    fn growth_keeps_previous_tail_once() {
        let mut snake = Snake::new();

        snake.request_growth();
        snake.update();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments().last(), Some(&Position::new(4, 9)));
        assert!(!snake.is_growing());

        snake.update();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn update_does_not_clamp_to_grid() {
        let mut snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Up);

        snake.update();

        assert_eq!(snake.head(), Position::new(0, -1));
        assert!(!snake.head().is_within_bounds(GridSize::default()));
    }

    #[test]
    fn reset_restores_start_state() {
        let mut snake = Snake::new();
        snake.set_direction(Direction::Down);
        snake.request_growth();
        snake.update();
        snake.update();

        snake.reset();

        assert_eq!(snake, Snake::new());
    }

    #[test]
    fn head_overlap_ignores_head_itself() {
        let straight = Snake::new();
        let looped = Snake::from_segments(
            vec![Position::new(5, 9), Position::new(6, 9), Position::new(5, 9)],
            Direction::Right,
        );

        assert!(!straight.head_overlaps_body());
        assert!(looped.head_overlaps_body());
    }

    #[test]
    fn next_head_follows_direction() {
        let mut snake = Snake::new();
        snake.set_direction(Direction::Up);

        assert_eq!(snake.next_head(), Position::new(6, 8));
    }
}
