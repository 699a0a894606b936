use rand::Rng;

use super::config::GridSize;
use super::state::Position;

/// Pick a uniformly random cell anywhere on the grid.
///
/// Occupied cells are not excluded: food and power-ups may land on the snake.
pub fn random_cell<R: Rng + ?Sized>(grid: GridSize, rng: &mut R) -> Position {
    Position::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height))
}

/// The single food pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn spawn<R: Rng + ?Sized>(grid: GridSize, rng: &mut R) -> Self {
        Self::at(random_cell(grid, rng))
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a fresh random cell
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: GridSize, rng: &mut R) {
        self.position = random_cell(grid, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_spawn_stays_in_grid() {
        let grid = GridSize::new(7, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::spawn(grid, &mut rng);

        for _ in 0..500 {
            assert!(food.position().is_within(grid));
            food.relocate(grid, &mut rng);
        }
    }

    #[test]
    fn test_relocate_covers_whole_grid() {
        let grid = GridSize::new(4, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::at(Position::new(0, 0));
        let mut seen = HashSet::new();

        for _ in 0..2_000 {
            food.relocate(grid, &mut rng);
            seen.insert(food.position());
        }

        assert_eq!(seen.len(), grid.cell_count());
    }
}
