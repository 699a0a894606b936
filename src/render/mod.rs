//! Drawing the game.
//!
//! The loop hands a shared borrow of the round state to a [`Screen`] once per
//! tick. [`TerminalScreen`] is the ratatui implementation; it works with any
//! backend, including ratatui's `TestBackend`.

pub mod renderer;

use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend};

use crate::game::GameState;
use crate::metrics::GameMetrics;

pub use renderer::Renderer;

pub trait Screen {
    /// Draw one frame of a running round
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;

    /// Draw the end-of-round summary
    fn draw_game_over(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()>;
}

pub struct TerminalScreen<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
}

impl<B: Backend> TerminalScreen<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            renderer: Renderer::new(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Screen for TerminalScreen<B> {
    fn draw(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        let renderer = &self.renderer;
        self.terminal
            .draw(|frame| renderer.render(frame, state, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn draw_game_over(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        let renderer = &self.renderer;
        self.terminal
            .draw(|frame| renderer.render_game_over(frame, state, metrics))
            .context("Failed to draw game over screen")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Food, GameConfig, GameEngine, Position, Snake};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn screen() -> TerminalScreen<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(48, 14)).unwrap();
        TerminalScreen::new(terminal)
    }

    fn dump(screen: &TerminalScreen<TestBackend>) -> String {
        let buffer = screen.terminal().backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state(now: Instant) -> crate::game::GameState {
        let mut engine =
            GameEngine::with_rng(GameConfig::with_grid(10, 8), StdRng::seed_from_u64(5));
        let mut state = engine.reset(now);
        state.snake = Snake::from_segments(
            vec![Position::new(4, 4), Position::new(4, 5)],
            Direction::Up,
        );
        state.food = Food::at(Position::new(1, 1));
        state.score = 7;
        state
    }

    #[test]
    fn test_draw_shows_score_and_pickups() {
        let now = Instant::now();
        let mut screen = screen();
        let mut metrics = GameMetrics::started_at(now);
        metrics.update(now + Duration::from_secs(65));

        screen.draw(&state(now), &metrics).unwrap();
        let text = dump(&screen);

        assert!(text.contains("Score: 7"));
        assert!(text.contains("Speed: x1.00"));
        assert!(text.contains("Time: 01:05"));
        assert!(text.contains('●'));
        assert!(text.contains("██"));
        assert!(!text.contains('◆'));
    }

    #[test]
    fn test_draw_shows_active_power_up() {
        let now = Instant::now();
        let mut state = state(now);
        let mut rng = StdRng::seed_from_u64(11);
        assert!(state.power_up.try_spawn(now + Duration::from_secs(41), state.grid, &mut rng));

        // Keep the power-up cell visible
        let cell = state.power_up.position().unwrap();
        state.snake = Snake::new(Position::new((cell.x + 5) % 10, (cell.y + 4) % 8), Direction::Up);
        state.food = Food::at(Position::new((cell.x + 2) % 10, cell.y));

        let mut screen = screen();
        screen.draw(&state, &GameMetrics::started_at(now)).unwrap();

        assert!(dump(&screen).contains('◆'));
    }

    #[test]
    fn test_draw_is_repeatable() {
        let now = Instant::now();
        let state = state(now);
        let metrics = GameMetrics::started_at(now);
        let mut screen = screen();

        screen.draw(&state, &metrics).unwrap();
        let first = dump(&screen);
        screen.draw(&state, &metrics).unwrap();

        assert_eq!(first, dump(&screen));
    }

    #[test]
    fn test_game_over_screen() {
        let now = Instant::now();
        let mut state = state(now);
        state.snake = Snake::new(Position::new(-1, 3), Direction::Left);
        state.is_alive = false;

        let mut screen = screen();
        screen
            .draw_game_over(&state, &GameMetrics::started_at(now))
            .unwrap();
        let text = dump(&screen);

        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 7"));
        assert!(text.contains("You left the board"));
    }
}
