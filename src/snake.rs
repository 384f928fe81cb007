use std::fmt;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a step off the board is still representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside a `grid_size × grid_size` board.
    #[must_use]
    pub fn is_within_bounds(self, grid_size: u16) -> bool {
        let size = i32::from(grid_size);
        self.x >= 0 && self.y >= 0 && self.x < size && self.y < size
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    cell: Cell,
    /// Arena index of the next segment toward the head.
    next: Option<usize>,
}

/// Snake body as a singly linked chain from tail to head.
///
/// Segments live in an arena and link head-ward by index, so growing at the
/// head and dropping the tail are both O(1) and never shift other segments.
/// Slots freed by the tail are reused by later heads.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    segments: Vec<Segment>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl SnakeBody {
    /// Creates a one-cell body: head and tail are the same segment.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        Self {
            segments: vec![Segment {
                cell: start,
                next: None,
            }],
            free: Vec::new(),
            head: 0,
            tail: 0,
            len: 1,
        }
    }

    /// Creates a body from cells ordered tail first, head last.
    ///
    /// # Panics
    ///
    /// Panics when `cells` is empty or contains a duplicate.
    #[must_use]
    pub fn from_cells(cells: &[Cell]) -> Self {
        let (&tail, rest) = cells
            .split_first()
            .expect("snake body needs at least one cell");

        let mut body = Self::new(tail);
        for &cell in rest {
            assert!(!body.contains(cell), "duplicate snake cell {cell}");
            body.grow_head(cell);
        }
        body
    }

    /// Appends `cell` as the new head.
    ///
    /// The caller has already checked that `cell` is free and next to the head.
    pub fn grow_head(&mut self, cell: Cell) {
        let segment = Segment { cell, next: None };
        let index = match self.free.pop() {
            Some(index) => {
                self.segments[index] = segment;
                index
            }
            None => {
                self.segments.push(segment);
                self.segments.len() - 1
            }
        };

        self.segments[self.head].next = Some(index);
        self.head = index;
        self.len += 1;
    }

    /// Moves one step without growing: appends `cell` and drops the tail.
    ///
    /// Returns the vacated tail cell, which may equal `cell` when the head
    /// follows directly into it.
    pub fn advance(&mut self, cell: Cell) -> Cell {
        self.grow_head(cell);
        self.remove_tail()
    }

    /// Detaches the tail and returns its cell.
    ///
    /// # Panics
    ///
    /// Panics when the body has exactly one cell.
    pub fn remove_tail(&mut self) -> Cell {
        assert!(self.len > 1, "cannot remove the tail of a one-cell snake");

        let index = self.tail;
        let Segment { cell, next } = self.segments[index];
        self.tail = next.expect("tail of a multi-cell snake must link toward the head");
        self.segments[index].next = None;
        self.free.push(index);
        self.len -= 1;
        cell
    }

    /// Returns the most recently added cell.
    #[must_use]
    pub fn head_position(&self) -> Cell {
        self.segments[self.head].cell
    }

    /// Returns the oldest remaining cell.
    #[must_use]
    pub fn tail_position(&self) -> Cell {
        self.segments[self.tail].cell
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a live body holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over cells from tail to head.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            body: self,
            next: Some(self.tail),
        }
    }

    /// Returns true if any segment occupies `cell`. O(n).
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells().any(|segment| segment == cell)
    }
}

/// Tail-to-head iterator over a [`SnakeBody`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    body: &'a SnakeBody,
    next: Option<usize>,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.body.segments[self.next?];
        self.next = segment.next;
        Some(segment.cell)
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Cell, SnakeBody};

    #[test]
    fn cell_bounds_cover_exactly_the_board() {
        assert!(Cell::new(0, 0).is_within_bounds(10));
        assert!(Cell::new(9, 9).is_within_bounds(10));
        assert!(!Cell::new(-1, 5).is_within_bounds(10));
        assert!(!Cell::new(5, 10).is_within_bounds(10));
    }

    #[test]
    fn cell_steps_one_unit() {
        let origin = Cell::new(5, 5);
        assert_eq!(origin.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(origin.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(origin.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(origin.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn new_body_has_head_equal_to_tail() {
        let body = SnakeBody::new(Cell::new(3, 4));

        assert_eq!(body.len(), 1);
        assert_eq!(body.head_position(), Cell::new(3, 4));
        assert_eq!(body.tail_position(), Cell::new(3, 4));
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut body = SnakeBody::new(Cell::new(5, 5));

        body.grow_head(Cell::new(6, 5));

        assert_eq!(body.len(), 2);
        assert_eq!(body.tail_position(), Cell::new(5, 5));
        assert_eq!(body.head_position(), Cell::new(6, 5));
    }

    #[test]
    fn single_cell_body_moves_without_growing() {
        let mut body = SnakeBody::new(Cell::new(5, 5));

        let vacated = body.advance(Cell::new(6, 5));

        assert_eq!(vacated, Cell::new(5, 5));
        assert_eq!(body.len(), 1);
        assert_eq!(body.head_position(), Cell::new(6, 5));
        assert_eq!(body.tail_position(), Cell::new(6, 5));
    }

    #[test]
    fn cells_iterate_tail_to_head() {
        let cells = [Cell::new(2, 2), Cell::new(3, 2), Cell::new(4, 2)];
        let mut body = SnakeBody::from_cells(&cells);

        assert_eq!(body.cells().collect::<Vec<_>>(), cells);

        body.advance(Cell::new(5, 2));
        assert_eq!(
            body.cells().collect::<Vec<_>>(),
            [Cell::new(3, 2), Cell::new(4, 2), Cell::new(5, 2)]
        );
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut body = SnakeBody::from_cells(&[Cell::new(0, 0), Cell::new(1, 0)]);

        for x in 2..50 {
            body.advance(Cell::new(x, 0));
        }

        assert_eq!(body.len(), 2);
        assert!(body.segments.len() <= 3);
        assert_eq!(body.tail_position(), Cell::new(48, 0));
        assert_eq!(body.head_position(), Cell::new(49, 0));
    }

    #[test]
    fn contains_matches_every_segment() {
        let body = SnakeBody::from_cells(&[Cell::new(1, 1), Cell::new(1, 2)]);

        assert!(body.contains(Cell::new(1, 1)));
        assert!(body.contains(Cell::new(1, 2)));
        assert!(!body.contains(Cell::new(2, 2)));
    }

    #[test]
    #[should_panic(expected = "one-cell snake")]
    fn removing_last_cell_panics() {
        let mut body = SnakeBody::new(Cell::new(0, 0));
        body.remove_tail();
    }

    #[test]
    #[should_panic(expected = "duplicate snake cell")]
    fn duplicate_cells_are_rejected() {
        let _ = SnakeBody::from_cells(&[Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 0)]);
    }
}
