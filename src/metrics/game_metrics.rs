use std::time::{Duration, Instant};

/// Wall-clock bookkeeping for the header line
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub power_ups_collected: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(start_time: Instant) -> Self {
        Self {
            start_time,
            elapsed_time: Duration::ZERO,
            power_ups_collected: 0,
        }
    }

    pub fn update(&mut self, now: Instant) {
        self.elapsed_time = now.saturating_duration_since(self.start_time);
    }

    pub fn on_power_up(&mut self) {
        self.power_ups_collected += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
