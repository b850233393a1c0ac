use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at a fixed `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a random cell the snake does not occupy.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        Self::new(spawn_position(rng, bounds, snake))
    }

    /// Moves the food to a random cell the snake does not occupy.
    pub fn reposition<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize, snake: &Snake) {
        self.position = spawn_position(rng, bounds, snake);
    }
}

/// Samples uniformly random cells until one is free of the snake.
///
/// Expected attempts stay close to one while the snake covers a small share of
/// the board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    assert!(
        snake.len() < bounds.total_cells(),
        "spawn_position: no free cells on the board ({}×{})",
        bounds.width,
        bounds.height,
    );

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
