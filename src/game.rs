use std::fmt;

use log::{debug, info, trace};

use crate::clock::SimulationClock;
use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::grid::GridModel;
use crate::input::{Direction, DirectionResolver};
use crate::snake::{Cell, SnakeBody};

/// Why a game stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    OutOfBounds,
    SelfCollision,
    UserQuit,
    /// The snake covers every cell.
    BoardFull,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::OutOfBounds => "ran out of bounds",
            Self::SelfCollision => "ate itself",
            Self::UserQuit => "quit",
            Self::BoardFull => "filled the board",
        };
        f.write_str(text)
    }
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Ended(DeathReason),
}

/// What the shell should do with one cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellEventKind {
    /// The cell joined the snake.
    Drawn,
    /// The cell left the snake.
    Erased,
    FoodPlaced,
}

/// One change to the picture, in the order it happened.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellEvent {
    pub cell: Cell,
    pub kind: CellEventKind,
}

impl CellEvent {
    #[must_use]
    pub const fn new(cell: Cell, kind: CellEventKind) -> Self {
        Self { cell, kind }
    }
}

/// Everything the shell reports for one rendered frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub frame_delta_nanos: i64,
    /// Last direction key pressed during the frame, if any.
    pub direction: Option<Direction>,
    pub quit_requested: bool,
}

/// Complete mutable game state for one session.
///
/// Owns the board, the snake, the food spawner and the simulation clock;
/// nothing else mutates them.
#[derive(Debug, Clone)]
pub struct GameLoop {
    grid: GridModel,
    body: SnakeBody,
    food: Option<Cell>,
    spawner: FoodSpawner,
    resolver: DirectionResolver,
    clock: SimulationClock,
    direction: Option<Direction>,
    status: GameStatus,
    tick_count: u64,
}

impl GameLoop {
    /// Starts a game, seeding placement from `config.seed` or from entropy.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::new_with_seed(config, seed)
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    ///
    /// The head starts on a random cell and the food on a different one.
    #[must_use]
    pub fn new_with_seed(config: &GameConfig, seed: u64) -> Self {
        let mut spawner = FoodSpawner::new_with_seed(seed);
        let head = spawner.random_cell(config.grid_size);
        let game = Self::assemble(config, spawner, &[head], None, None);

        info!(
            "new game on {size}x{size} board: seed {seed}, head at {head}, food at {food}",
            size = config.grid_size,
            food = game
                .food
                .map_or_else(|| "none".to_owned(), |food| food.to_string()),
        );
        game
    }

    /// Creates a game from an explicit layout.
    ///
    /// `body` is ordered tail first. `food` must be a free cell; `None` picks a
    /// random one. `direction` is the heading the snake is already moving in.
    ///
    /// # Panics
    ///
    /// Panics when a body cell is off the board or repeated, when `food` lies
    /// on the body, or when a multi-cell body has no direction.
    #[must_use]
    pub fn with_layout(
        config: &GameConfig,
        seed: u64,
        body: &[Cell],
        food: Option<Cell>,
        direction: Option<Direction>,
    ) -> Self {
        Self::assemble(
            config,
            FoodSpawner::new_with_seed(seed),
            body,
            food,
            direction,
        )
    }

    fn assemble(
        config: &GameConfig,
        mut spawner: FoodSpawner,
        cells: &[Cell],
        food: Option<Cell>,
        direction: Option<Direction>,
    ) -> Self {
        assert!(
            cells.len() == 1 || direction.is_some(),
            "a {}-cell snake needs a heading",
            cells.len()
        );

        let mut grid = GridModel::new(config.grid_size);
        let body = SnakeBody::from_cells(cells);
        for cell in body.cells() {
            grid.set_occupied(cell, true);
        }

        let food = match food {
            Some(food) => {
                assert!(!grid.is_occupied(food), "food {food} placed on the snake");
                Some(food)
            }
            None => spawner.spawn(&grid),
        };

        let status = if food.is_none() {
            GameStatus::Ended(DeathReason::BoardFull)
        } else {
            GameStatus::Running
        };

        Self {
            grid,
            body,
            food,
            spawner,
            resolver: DirectionResolver::new(),
            clock: SimulationClock::new(config.tick_duration),
            direction,
            status,
            tick_count: 0,
        }
    }

    /// Events that paint the whole current picture onto an empty raster.
    #[must_use]
    pub fn initial_events(&self) -> Vec<CellEvent> {
        let mut events: Vec<CellEvent> = self
            .body
            .cells()
            .map(|cell| CellEvent::new(cell, CellEventKind::Drawn))
            .collect();
        if let Some(food) = self.food {
            events.push(CellEvent::new(food, CellEventKind::FoodPlaced));
        }
        events
    }

    /// Processes one rendered frame and returns the resulting cell changes.
    ///
    /// Runs as many ticks as the accumulated time allows; a quit request ends
    /// the game before any of them.
    pub fn frame(&mut self, input: FrameInput) -> Vec<CellEvent> {
        let mut events = Vec::new();

        if input.quit_requested {
            self.request_quit();
        }
        if self.is_over() {
            return events;
        }

        self.submit_direction(input.direction);
        self.clock.advance(input.frame_delta_nanos);
        while !self.is_over() && self.clock.should_tick() {
            self.tick(&mut events);
        }

        events
    }

    /// Buffers a raw direction for the next tick. Reversals are dropped.
    pub fn submit_direction(&mut self, raw: Option<Direction>) {
        if self.resolver.submit(self.direction, raw) {
            trace!("direction {:?} buffered", self.resolver.pending());
        }
    }

    /// Ends the game immediately, regardless of tick timing.
    pub fn request_quit(&mut self) {
        if !self.is_over() {
            self.end(DeathReason::UserQuit);
        }
    }

    /// Advances the simulation by exactly one tick, appending cell changes.
    pub fn tick(&mut self, events: &mut Vec<CellEvent>) {
        if self.is_over() {
            return;
        }

        self.tick_count += 1;
        self.direction = self.resolver.latch(self.direction);
        let Some(direction) = self.direction else {
            return;
        };

        let head = self.body.head_position().step(direction);
        trace!("tick {}: heading {direction:?} to {head}", self.tick_count);

        if !head.is_within_bounds(self.grid.size()) {
            self.end(DeathReason::OutOfBounds);
            return;
        }

        if self.food == Some(head) {
            self.eat(head, events);
            return;
        }

        // The tail leaves in the same tick, so following it is not a collision.
        let tail = self.body.tail_position();
        if self.grid.is_occupied(head) && head != tail {
            self.end(DeathReason::SelfCollision);
            return;
        }

        let vacated = self.body.advance(head);
        self.grid.set_occupied(vacated, false);
        self.grid.set_occupied(head, true);
        events.push(CellEvent::new(vacated, CellEventKind::Erased));
        events.push(CellEvent::new(head, CellEventKind::Drawn));
    }

    fn eat(&mut self, head: Cell, events: &mut Vec<CellEvent>) {
        assert!(
            !self.grid.is_occupied(head),
            "food {head} was left on an occupied cell"
        );

        self.body.grow_head(head);
        self.grid.set_occupied(head, true);
        events.push(CellEvent::new(head, CellEventKind::Drawn));
        debug!("ate food at {head}, length now {}", self.body.len());

        self.food = self.spawner.spawn(&self.grid);
        match self.food {
            Some(food) => {
                debug!("food respawned at {food}");
                events.push(CellEvent::new(food, CellEventKind::FoodPlaced));
            }
            None => self.end(DeathReason::BoardFull),
        }
    }

    fn end(&mut self, reason: DeathReason) {
        self.status = GameStatus::Ended(reason);
        info!(
            "game over after {} ticks: snake {reason} at length {}",
            self.tick_count,
            self.body.len()
        );
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    /// Returns the end reason once the game has stopped.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        match self.status {
            GameStatus::Running => None,
            GameStatus::Ended(reason) => Some(reason),
        }
    }

    #[must_use]
    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    #[must_use]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Direction applied on the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn grid_size(&self) -> u16 {
        self.grid.size()
    }

    #[must_use]
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }
}
