//! Speed-boost pickup.
//!
//! The power-up alternates between two states. While dormant it waits for a
//! randomly rolled delay (measured from the moment it went dormant); once that
//! delay has elapsed it appears on a random cell and stays there until the
//! snake's head reaches it. There is no timeout while active.

use rand::Rng;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use super::config::GridSize;
use super::food::random_cell;
use super::state::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpState {
    Dormant { since: Instant, delay: Duration },
    Active { position: Position, spawned_at: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUp {
    state: PowerUpState,
    delay_secs: RangeInclusive<u64>,
}

impl PowerUp {
    /// A dormant power-up whose countdown starts at `now`
    pub fn new<R: Rng + ?Sized>(now: Instant, delay_secs: RangeInclusive<u64>, rng: &mut R) -> Self {
        let delay = roll_delay(&delay_secs, rng);
        Self {
            state: PowerUpState::Dormant { since: now, delay },
            delay_secs,
        }
    }

    pub fn state(&self) -> PowerUpState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PowerUpState::Active { .. })
    }

    /// Cell of the power-up, only while it is active
    pub fn position(&self) -> Option<Position> {
        match self.state {
            PowerUpState::Active { position, .. } => Some(position),
            PowerUpState::Dormant { .. } => None,
        }
    }

    /// Activate on a random cell if dormant for longer than the rolled delay
    pub fn try_spawn<R: Rng + ?Sized>(&mut self, now: Instant, grid: GridSize, rng: &mut R) -> bool {
        let PowerUpState::Dormant { since, delay } = self.state else {
            return false;
        };
        if now.saturating_duration_since(since) <= delay {
            return false;
        }

        self.state = PowerUpState::Active {
            position: random_cell(grid, rng),
            spawned_at: now,
        };
        true
    }

    /// Collect the power-up if it is active at `head`; goes dormant with a new delay
    pub fn try_collect<R: Rng + ?Sized>(&mut self, head: Position, now: Instant, rng: &mut R) -> bool {
        if self.position() != Some(head) {
            return false;
        }

        self.state = PowerUpState::Dormant {
            since: now,
            delay: roll_delay(&self.delay_secs, rng),
        };
        true
    }
}

fn roll_delay<R: Rng + ?Sized>(range: &RangeInclusive<u64>, rng: &mut R) -> Duration {
    Duration::from_secs(rng.gen_range(range.clone()))
}
