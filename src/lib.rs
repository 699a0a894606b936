//! Power Snake - a terminal Snake game with a speed-boost power-up
//!
//! This library provides:
//! - Core game logic (game module)
//! - TUI rendering behind the `Screen` trait (render module)
//! - Keyboard input behind the `InputSource` trait (input module)
//! - The real-time round driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
