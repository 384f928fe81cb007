/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step for one cell of movement.
    ///
    /// Rows grow downward, so `Up` decreases `y`.
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events produced by the controls layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
    Confirm,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// Before the first move (`current == None`) every direction is legal.
#[must_use]
pub fn direction_change_is_valid(current: Option<Direction>, next: Direction) -> bool {
    current.is_none_or(|current| next != current.opposite())
}

/// Resolves one raw input against the current movement direction.
///
/// Returns `raw` when it is a legal change, otherwise `current` unchanged.
#[must_use]
pub fn resolve(current: Option<Direction>, raw: Option<Direction>) -> Option<Direction> {
    match raw {
        Some(next) if direction_change_is_valid(current, next) => Some(next),
        _ => current,
    }
}

/// Buffers validated direction input between simulation ticks.
///
/// Inputs are checked against the direction the snake is currently moving in,
/// not against earlier inputs from the same tick window; the last accepted
/// input before a tick wins. The pending direction is kept after a tick, so
/// every tick applies the most recent accepted input.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DirectionResolver {
    pending: Option<Direction>,
}

impl DirectionResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers one raw input received while moving in `current`.
    ///
    /// Returns whether the input was accepted.
    pub fn submit(&mut self, current: Option<Direction>, raw: Option<Direction>) -> bool {
        let Some(next) = raw else {
            return false;
        };

        if !direction_change_is_valid(current, next) {
            return false;
        }

        self.pending = Some(next);
        true
    }

    /// Returns the direction to apply at a tick boundary.
    #[must_use]
    pub fn latch(&self, current: Option<Direction>) -> Option<Direction> {
        resolve(current, self.pending)
    }

    /// Returns the buffered direction, if any input has been accepted.
    #[must_use]
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}
