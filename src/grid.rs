use crate::snake::Cell;

/// Occupancy of a square board, one flag per cell.
///
/// Between ticks a cell is occupied exactly when the snake holds it.
#[derive(Debug, Clone)]
pub struct GridModel {
    size: u16,
    occupied: Vec<bool>,
    occupied_count: usize,
}

impl GridModel {
    /// Creates an empty `size × size` board.
    #[must_use]
    pub fn new(size: u16) -> Self {
        let cells = usize::from(size) * usize::from(size);
        Self {
            size,
            occupied: vec![false; cells],
            occupied_count: 0,
        }
    }

    /// Cells per axis.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.occupied.len()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Returns true when no free cell is left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count == self.occupied.len()
    }

    /// # Panics
    ///
    /// Panics when `cell` is off the board.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied[self.index(cell)]
    }

    /// # Panics
    ///
    /// Panics when `cell` is off the board.
    pub fn set_occupied(&mut self, cell: Cell, occupied: bool) {
        let index = self.index(cell);
        let slot = &mut self.occupied[index];
        match (*slot, occupied) {
            (false, true) => self.occupied_count += 1,
            (true, false) => self.occupied_count -= 1,
            _ => {}
        }
        *slot = occupied;
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            cell.is_within_bounds(self.size),
            "cell {cell} is outside the {size}x{size} grid",
            size = self.size
        );

        // Both coordinates are non-negative and below `size` here.
        cell.y as usize * usize::from(self.size) + cell.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::GridModel;
    use crate::snake::Cell;

    #[test]
    fn new_grid_is_empty() {
        let grid = GridModel::new(4);

        assert_eq!(grid.total_cells(), 16);
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.is_occupied(Cell::new(3, 3)));
    }

    #[test]
    fn set_occupied_toggles_and_counts() {
        let mut grid = GridModel::new(4);

        grid.set_occupied(Cell::new(1, 2), true);
        grid.set_occupied(Cell::new(1, 2), true);
        assert!(grid.is_occupied(Cell::new(1, 2)));
        assert!(!grid.is_occupied(Cell::new(2, 1)));
        assert_eq!(grid.occupied_count(), 1);

        grid.set_occupied(Cell::new(1, 2), false);
        assert!(!grid.is_occupied(Cell::new(1, 2)));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn full_grid_is_detected() {
        let mut grid = GridModel::new(2);
        for y in 0..2 {
            for x in 0..2 {
                assert!(!grid.is_full());
                grid.set_occupied(Cell::new(x, y), true);
            }
        }

        assert!(grid.is_full());
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 grid")]
    fn out_of_range_query_panics() {
        let grid = GridModel::new(4);
        let _ = grid.is_occupied(Cell::new(4, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn negative_coordinates_panic() {
        let mut grid = GridModel::new(4);
        grid.set_occupied(Cell::new(0, -1), true);
    }
}
