//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Time and randomness are passed in, so every rule can be driven from tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod power_up;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, GridSize};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::Food;
pub use power_up::{PowerUp, PowerUpState};
pub use state::{CollisionType, GameState, Position, Snake};
