pub mod human;

pub use human::{GameLoop, HumanMode, RoundOutcome};
