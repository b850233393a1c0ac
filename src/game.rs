use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::food::Food;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    /// Halted after a crash until the next accepted direction.
    Stopped,
}

/// What ended the last run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to place food.
    BoardFilled,
}

/// Events produced by one tick, forwarded by the driver to audio and logs.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub collision: Option<DeathReason>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            high_score: 0,
            status: GameStatus::Running,
            tick_count: 0,
            death_reason: None,
            bounds,
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.status != GameStatus::Running {
            return outcome;
        }

        self.tick_count += 1;

        // Growth is queued before the advance so the eating tick keeps its tail.
        let eats = self.snake.next_head() == self.food.position;
        if eats {
            self.snake.request_growth();
        }
        self.snake.update();

        if eats {
            self.score += 1;
            outcome.ate_food = true;

            if self.snake.len() >= self.bounds.total_cells() {
                self.game_over(DeathReason::BoardFilled);
                outcome.collision = Some(DeathReason::BoardFilled);
                return outcome;
            }

            self.food.reposition(&mut self.rng, self.bounds, &self.snake);
            debug!(
                "food eaten, score {} length {} next food {:?}",
                self.score,
                self.snake.len(),
                self.food.position
            );
        }

        if let Some(reason) = self.detect_collision() {
            self.game_over(reason);
            outcome.collision = Some(reason);
        }

        outcome
    }

    /// Applies one directional input; returns whether it was accepted.
    ///
    /// An accepted direction always resumes play, also when already running.
    pub fn handle_direction_input(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.snake.direction(), direction) {
            debug!(
                "rejected reversal {:?} while heading {:?}",
                direction,
                self.snake.direction()
            );
            return false;
        }

        self.snake.set_direction(direction);
        self.status = GameStatus::Running;
        true
    }

    fn detect_collision(&self) -> Option<DeathReason> {
        let head = self.snake.head();
        let width = i32::from(self.bounds.width);
        let height = i32::from(self.bounds.height);

        if head.x == -1 || head.x == width || head.y == -1 || head.y == height {
            return Some(DeathReason::WallCollision);
        }

        if self.snake.head_overlaps_body() {
            return Some(DeathReason::SelfCollision);
        }

        None
    }

    fn game_over(&mut self, reason: DeathReason) {
        info!(
            "game over after {} ticks: {:?}, score {} (high score {})",
            self.tick_count, reason, self.score, self.high_score
        );

        if self.score > self.high_score {
            self.high_score = self.score;
        }

        self.snake.reset();
        self.food.reposition(&mut self.rng, self.bounds, &self.snake);
        self.status = GameStatus::Stopped;
        self.score = 0;
        self.death_reason = Some(reason);
    }

    /// Returns the snake cells from head to tail.
    #[must_use]
    pub fn snake_cells(&self) -> Vec<Position> {
        self.snake.segments().copied().collect()
    }

    #[must_use]
    pub fn food_cell(&self) -> Position {
        self.food.position
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the logical board bounds.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
