//! Keyboard input.
//!
//! The game loop only sees [`InputSource`]: each poll returns whatever was
//! typed since the previous one and never waits for a key. Only the game-over
//! screen blocks, through [`InputSource::wait_for_key`].

pub mod handler;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::future::Future;
use std::time::Duration;

use crate::game::Direction;

pub use handler::{InputHandler, KeyAction};

/// Commands gathered by one poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    /// Steering commands in the order they were typed
    pub directions: Vec<Direction>,
    pub quit: bool,
}

impl InputBatch {
    /// Most recent steering command; earlier ones in the same tick are dropped
    pub fn latest(&self) -> Option<Direction> {
        self.directions.last().copied()
    }

    pub fn push(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => self.directions.push(direction),
            KeyAction::Quit => self.quit = true,
            KeyAction::None => {}
        }
    }
}

pub trait InputSource {
    /// Drain pending commands without blocking
    fn poll(&mut self) -> Result<InputBatch>;

    /// Resolve once any key is pressed
    fn wait_for_key(&mut self) -> impl Future<Output = Result<()>>;
}

/// Key presses from the terminal via crossterm
pub struct TerminalInput {
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputBatch> {
        let mut batch = InputBatch::default();

        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            if let Some(key) = key_press(event) {
                batch.push(self.handler.handle_key_event(key));
            }
        }

        Ok(batch)
    }

    async fn wait_for_key(&mut self) -> Result<()> {
        // A fresh stream registers this task's waker with crossterm
        let mut events = EventStream::new();
        while let Some(event) = events.next().await {
            if key_press(event.context("Failed to read terminal event")?).is_some() {
                return Ok(());
            }
        }
        Ok(())
    }
}

/// Only key presses count, not releases or repeats
fn key_press(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}
