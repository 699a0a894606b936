use rand::Rng;
use rand::rngs::ThreadRng;
use std::time::Instant;
use tracing::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    food::Food,
    power_up::PowerUp,
    state::{CollisionType, GameState, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the snake picked up the power-up this step
    pub collected_power_up: bool,
    /// Whether the power-up appeared this step
    pub spawned_power_up: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the round has ended
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new round: one-segment snake at the grid center heading up
    pub fn reset(&mut self, now: Instant) -> GameState {
        let grid = self.config.grid();
        let snake = Snake::new(Position::new(grid.width / 2, grid.height / 2), Direction::Up);
        let food = Food::spawn(grid, &mut self.rng);
        let power_up = PowerUp::new(now, self.config.power_up_delay_secs.clone(), &mut self.rng);

        info!(
            width = grid.width,
            height = grid.height,
            head = ?snake.head(),
            "round started"
        );

        GameState::new(snake, food, power_up, grid)
    }

    /// Execute one tick of the game at time `now`
    pub fn step(
        &mut self,
        state: &mut GameState,
        direction: Option<Direction>,
        now: Instant,
    ) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
            };
        }

        // Reversals are silently ignored
        if let Some(direction) = direction {
            state.snake.set_heading(direction);
        }

        state.snake.advance();
        state.ticks += 1;
        let head = state.snake.head();
        let mut info = StepInfo::default();

        // Growth only shows up on the next advance
        if head == state.food.position() {
            state.snake.queue_growth();
            state.food.relocate(state.grid, &mut self.rng);
            state.score += 1;
            info.ate_food = true;
            debug!(score = state.score, food = ?state.food.position(), "food eaten");
        }

        if state.power_up.try_collect(head, now, &mut self.rng) {
            let speed = state.snake.speed() * self.config.speed_boost;
            state.snake.set_speed(speed);
            info.collected_power_up = true;
            debug!(speed, "power-up collected");
        }

        if state.power_up.try_spawn(now, state.grid, &mut self.rng) {
            info.spawned_power_up = true;
            debug!(position = ?state.power_up.position(), "power-up spawned");
        }

        info.collision_type = self.check_collision(state);
        if let Some(collision) = info.collision_type {
            state.is_alive = false;
            info!(
                score = state.score,
                ticks = state.ticks,
                length = state.snake.len(),
                ?collision,
                "round over"
            );
        }

        StepResult {
            terminated: !state.is_alive,
            info,
        }
    }

    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        if state.snake.is_out_of_bounds(state.grid) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_self() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}
