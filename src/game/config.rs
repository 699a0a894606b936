use std::ops::RangeInclusive;
use std::time::Duration;

/// Size of the playfield in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the play area in pixels
    pub screen_width: u32,
    /// Height of the play area in pixels
    pub screen_height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Ticks per second at speed 1.0
    pub base_ticks_per_second: f32,
    /// Speed multiplier applied on each power-up pickup
    pub speed_boost: f32,
    /// Bounds for the power-up spawn delay, in whole seconds
    pub power_up_delay_secs: RangeInclusive<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            cell_size: 20,
            base_ticks_per_second: 10.0,
            speed_boost: 1.5,
            power_up_delay_secs: 10..=40,
        }
    }
}

impl GameConfig {
    /// Create a configuration whose grid is exactly `width` x `height` cells
    pub fn with_grid(width: u32, height: u32) -> Self {
        let defaults = Self::default();
        Self {
            screen_width: width * defaults.cell_size,
            screen_height: height * defaults.cell_size,
            ..defaults
        }
    }

    /// Grid dimensions derived from the pixel resolution and cell size
    pub fn grid(&self) -> GridSize {
        GridSize::new(
            (self.screen_width / self.cell_size) as i32,
            (self.screen_height / self.cell_size) as i32,
        )
    }

    /// Time between two ticks when the snake moves at `speed`
    pub fn tick_interval(&self, speed: f32) -> Duration {
        Duration::from_secs_f32(1.0 / (self.base_ticks_per_second * speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid(), GridSize::new(64, 36));
        assert_eq!(config.power_up_delay_secs, 10..=40);
        assert_eq!(config.grid().cell_count(), 64 * 36);
    }

    #[test]
    fn test_custom_grid() {
        let config = GameConfig::with_grid(15, 12);
        assert_eq!(config.grid(), GridSize::new(15, 12));
        assert_eq!(config.cell_size, 20);
    }

    #[test]
    fn test_tick_interval_scales_with_speed() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(1.0).as_millis(), 100);
        assert_eq!(config.tick_interval(1.5).as_millis(), 66);
        assert_eq!(config.tick_interval(2.25).as_millis(), 44);
    }
}
