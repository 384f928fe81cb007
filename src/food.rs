use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::GridModel;
use crate::snake::Cell;

/// Places food on uniformly random free cells.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    /// Creates a deterministic spawner for tests and reproducible games.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly random cell anywhere on a `grid_size` board.
    #[must_use]
    pub fn random_cell(&mut self, grid_size: u16) -> Cell {
        random_cell(&mut self.rng, grid_size)
    }

    /// Picks a free cell, or `None` when the board is full.
    #[must_use]
    pub fn spawn(&mut self, grid: &GridModel) -> Option<Cell> {
        spawn_position(&mut self.rng, grid)
    }
}

/// Rejection-samples a cell that `grid` does not mark as occupied.
///
/// Returns `None` without sampling when every cell is occupied.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: &GridModel) -> Option<Cell> {
    if grid.is_full() {
        return None;
    }

    loop {
        let cell = random_cell(rng, grid.size());
        if !grid.is_occupied(cell) {
            return Some(cell);
        }
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid_size: u16) -> Cell {
    let size = i32::from(grid_size);
    Cell {
        x: rng.gen_range(0..size),
        y: rng.gen_range(0..size),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{FoodSpawner, spawn_position};
    use crate::grid::GridModel;
    use crate::snake::Cell;

    #[test]
    fn food_spawn_never_overlaps_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = GridModel::new(6);
        for x in 0..6 {
            grid.set_occupied(Cell::new(x, 0), true);
            grid.set_occupied(Cell::new(x, 1), true);
        }

        for _ in 0..200 {
            let cell = spawn_position(&mut rng, &grid).expect("board has free cells");
            assert!(cell.is_within_bounds(6));
            assert!(!grid.is_occupied(cell));
        }
    }

    #[test]
    fn last_free_cell_is_found() {
        let mut grid = GridModel::new(3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set_occupied(Cell::new(x, y), true);
            }
        }
        grid.set_occupied(Cell::new(2, 1), false);

        let mut spawner = FoodSpawner::new_with_seed(11);
        assert_eq!(spawner.spawn(&grid), Some(Cell::new(2, 1)));
    }

    #[test]
    fn full_board_yields_no_food() {
        let mut grid = GridModel::new(2);
        for y in 0..2 {
            for x in 0..2 {
                grid.set_occupied(Cell::new(x, y), true);
            }
        }

        let mut spawner = FoodSpawner::new_with_seed(3);
        assert_eq!(spawner.spawn(&grid), None);
    }

    #[test]
    fn same_seed_gives_same_cells() {
        let grid = GridModel::new(20);
        let mut first = FoodSpawner::new_with_seed(99);
        let mut second = FoodSpawner::new_with_seed(99);

        for _ in 0..10 {
            assert_eq!(first.spawn(&grid), second.spawn(&grid));
        }
    }

    #[test]
    fn random_cells_stay_on_the_board() {
        let mut spawner = FoodSpawner::new_with_seed(5);

        for _ in 0..500 {
            assert!(spawner.random_cell(4).is_within_bounds(4));
        }
    }
}
