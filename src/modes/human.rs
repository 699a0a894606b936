use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Instant;
use tokio::time::sleep_until;
use tracing::info;

use crate::game::{CollisionType, GameConfig, GameEngine, GameState};
use crate::input::{InputSource, TerminalInput};
use crate::metrics::GameMetrics;
use crate::render::{Screen, TerminalScreen};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The snake hit a wall or itself
    GameOver { score: u32, collision: CollisionType },
    /// The player asked to leave
    Quit { score: u32 },
}

impl RoundOutcome {
    pub fn score(&self) -> u32 {
        match *self {
            RoundOutcome::GameOver { score, .. } | RoundOutcome::Quit { score } => score,
        }
    }
}

/// Runs one round: input, step, render, then wait for the next tick
pub struct GameLoop<S, I, R = ThreadRng> {
    engine: GameEngine<R>,
    state: GameState,
    metrics: GameMetrics,
    screen: S,
    input: I,
}

impl<S: Screen, I: InputSource, R: Rng> GameLoop<S, I, R> {
    pub fn new(mut engine: GameEngine<R>, screen: S, input: I) -> Self {
        let now = Instant::now();
        let state = engine.reset(now);

        Self {
            engine,
            state,
            metrics: GameMetrics::started_at(now),
            screen,
            input,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Play until the round ends or the player quits
    pub async fn run(&mut self) -> Result<RoundOutcome> {
        loop {
            let tick_start = Instant::now();
            if let Some(outcome) = self.tick(tick_start)? {
                return Ok(outcome);
            }

            // Speed may have changed during the tick
            let deadline = tick_start + self.engine.config().tick_interval(self.state.snake.speed());

            tokio::select! {
                _ = sleep_until(deadline.into()) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!(score = self.state.score, "interrupted");
                    return Ok(RoundOutcome::Quit { score: self.state.score });
                }
            }
        }
    }

    /// Run a single tick at `now`; returns the outcome once the round is over
    pub fn tick(&mut self, now: Instant) -> Result<Option<RoundOutcome>> {
        let batch = self.input.poll()?;
        if batch.quit {
            info!(score = self.state.score, ticks = self.state.ticks, "player quit");
            return Ok(Some(RoundOutcome::Quit {
                score: self.state.score,
            }));
        }

        let result = self.engine.step(&mut self.state, batch.latest(), now);
        self.metrics.update(now);
        if result.info.collected_power_up {
            self.metrics.on_power_up();
        }

        if let Some(collision) = result.info.collision_type {
            return Ok(Some(RoundOutcome::GameOver {
                score: self.state.score,
                collision,
            }));
        }

        self.screen.draw(&self.state, &self.metrics)?;
        Ok(None)
    }

    /// Play the round, then hold the game-over screen until a key is pressed
    pub async fn play(&mut self) -> Result<RoundOutcome> {
        let outcome = self.run().await?;

        if let RoundOutcome::GameOver { .. } = outcome {
            self.show_game_over()?;

            tokio::select! {
                key = self.input.wait_for_key() => key?,
                _ = tokio::signal::ctrl_c() => {}
            }
        }

        Ok(outcome)
    }

    pub fn show_game_over(&mut self) -> Result<()> {
        self.screen.draw_game_over(&self.state, &self.metrics)
    }
}

/// Plays one round in the terminal
pub struct HumanMode {
    config: GameConfig,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub async fn run(&mut self) -> Result<RoundOutcome> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let engine = GameEngine::new(self.config.clone());
        let mut game = GameLoop::new(engine, TerminalScreen::new(terminal), TerminalInput::new());

        // Run game loop with cleanup
        let result = game.play().await;

        // Cleanup terminal
        let cleanup = Self::cleanup_terminal(game.screen.terminal_mut());

        let outcome = result?;
        cleanup?;
        info!(?outcome, "session finished");
        Ok(outcome)
    }

    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
