use grid_snake::audio::{AudioSink, SoundCue};
use grid_snake::config::GridSize;
use grid_snake::food::Food;
use grid_snake::game::{DeathReason, GameState, GameStatus};
use grid_snake::input::Direction;
use grid_snake::snake::{Position, Snake};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Default)]
struct RecordingAudio {
    cues: Vec<SoundCue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

#[test]
fn eat_then_crash_then_resume() {
    let mut state = GameState::new_with_seed(GridSize::default(), 42);
    let mut audio = RecordingAudio::default();
    state.food = Food::new(p(7, 9));

    for cue in SoundCue::for_outcome(state.tick()) {
        audio.play(cue);
    }
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake_cells(), vec![p(7, 9), p(6, 9), p(5, 9), p(4, 9)]);
    assert!(!state.snake_cells().contains(&state.food_cell()));

    // Head for the top wall: (7,9) up to (7,0) is nine ticks, the tenth hits.
    state.food = Food::new(p(0, 19));
    assert!(state.handle_direction_input(Direction::Up));
    for _ in 0..9 {
        let outcome = state.tick();
        assert_eq!(outcome.collision, None);
    }
    assert_eq!(state.snake.head(), p(7, 0));
    assert_eq!(state.snake.len(), 4);

    let outcome = state.tick();
    for cue in SoundCue::for_outcome(outcome) {
        audio.play(cue);
    }
    assert_eq!(outcome.collision, Some(DeathReason::WallCollision));
    assert_eq!(state.status(), GameStatus::Stopped);
    assert_eq!(state.high_score(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.snake_cells(), vec![p(6, 9), p(5, 9), p(4, 9)]);
    assert_eq!(audio.cues, vec![SoundCue::Eat, SoundCue::Wall]);

    // Stopped: ticks do nothing until a direction is accepted.
    state.tick();
    assert_eq!(state.snake.head(), p(6, 9));

    assert!(!state.handle_direction_input(Direction::Left));
    assert_eq!(state.status(), GameStatus::Stopped);

    assert!(state.handle_direction_input(Direction::Down));
    assert!(state.is_running());
    state.tick();
    assert_eq!(state.snake.head(), p(6, 10));
}

#[test]
fn second_crash_keeps_best_score() {
    let mut state = GameState::new_with_seed(GridSize::default(), 5);
    state.snake = Snake::from_segments(vec![p(18, 9), p(17, 9), p(16, 9)], Direction::Right);
    state.food = Food::new(p(19, 9));

    state.tick();
    state.tick();
    assert_eq!(state.high_score(), 1);

    state.handle_direction_input(Direction::Up);
    state.snake = Snake::from_segments(vec![p(3, 0), p(3, 1), p(3, 2)], Direction::Up);
    state.food = Food::new(p(10, 10));
    state.tick();

    assert_eq!(state.high_score(), 1);
    assert_eq!(state.score(), 0);
}

#[test]
fn random_play_keeps_invariants() {
    let bounds = GridSize::default();
    let mut state = GameState::new_with_seed(bounds, 2024);
    let mut driver = StdRng::seed_from_u64(77);
    let directions = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    for _ in 0..5_000 {
        if driver.gen_bool(0.3) {
            let direction = directions[driver.gen_range(0..directions.len())];
            let before = state.snake.direction();
            let accepted = state.handle_direction_input(direction);
            if direction == before.opposite() {
                assert!(!accepted);
                assert_eq!(state.snake.direction(), before);
            } else {
                assert!(accepted);
                assert!(state.is_running());
            }
        }

        let len_before = state.snake.len();
        let food_before = state.food_cell();
        let score_before = state.score();
        let high_before = state.high_score();
        let was_running = state.is_running();

        let outcome = state.tick();

        if !was_running {
            assert_eq!(state.snake.len(), len_before);
            continue;
        }

        match outcome.collision {
            Some(_) => {
                let final_score = score_before + u32::from(outcome.ate_food);
                assert_eq!(state.high_score(), high_before.max(final_score));
                assert_eq!(state.score(), 0);
                assert_eq!(state.snake.len(), 3);
                assert_eq!(state.status(), GameStatus::Stopped);
            }
            None => {
                let landed_on_food = state.snake.head() == food_before;
                assert_eq!(landed_on_food, outcome.ate_food);
                assert_eq!(state.snake.len(), len_before + usize::from(landed_on_food));
                assert!(state.snake.head().is_within_bounds(bounds));
                assert!(!state.snake.head_overlaps_body());
            }
        }

        assert!(!state.snake.occupies(state.food_cell()));
        assert!(state.food_cell().is_within_bounds(bounds));
    }
}
