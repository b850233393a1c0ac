//! Classic grid snake: a fixed-timestep simulation core with a terminal front end.
//!
//! [`game::GameState`] owns the snake, the food and the scores. A driver calls
//! [`game::GameState::tick`] whenever a [`clock::TickClock`] fires and forwards
//! direction keys to [`game::GameState::handle_direction_input`] in between.

pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
