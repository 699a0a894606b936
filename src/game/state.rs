use super::action::Direction;
use super::config::GridSize;
use super::food::Food;
use super::power_up::PowerUp;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn is_within(&self, grid: GridSize) -> bool {
        self.x >= 0 && self.x < grid.width && self.y >= 0 && self.y < grid.height
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Current direction of movement
    direction: Direction,
    /// Set by eating; consumed by the next `advance`
    grow_pending: bool,
    /// Tick rate multiplier, starts at 1.0
    speed: f32,
}

impl Snake {
    /// Create a one-segment snake at `head`
    pub fn new(head: Position, direction: Direction) -> Self {
        Self::from_segments(vec![head], direction)
    }

    /// Create a snake from explicit segments, head first.
    ///
    /// Panics if `body` is empty.
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self {
            body,
            direction,
            grow_pending: false,
            speed: 1.0,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Change heading unless it would reverse the snake onto itself.
    ///
    /// Returns whether the new heading was accepted.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Move one cell along the heading, keeping the tail if growth is pending
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop();
        }
    }

    pub fn queue_growth(&mut self) {
        self.grow_pending = true;
    }

    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// True when the head shares a cell with any other segment
    pub fn collides_with_self(&self) -> bool {
        self.body_segments().contains(&self.head())
    }

    pub fn is_out_of_bounds(&self, grid: GridSize) -> bool {
        !self.head().is_within(grid)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True only for a snake with no segments
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete round state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub power_up: PowerUp,
    pub grid: GridSize,
    pub score: u32,
    pub ticks: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, power_up: PowerUp, grid: GridSize) -> Self {
        Self {
            snake,
            food,
            power_up,
            grid,
            score: 0,
            ticks: 0,
            is_alive: true,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.segments().contains(&pos)
    }
}
