//! Grid snake with a deterministic fixed-timestep core.
//!
//! The core ([`game`], [`grid`], [`snake`], [`food`], [`input`], [`clock`])
//! never touches the terminal: each frame it takes a [`game::FrameInput`] and
//! returns the [`game::CellEvent`]s the shell paints into a [`raster::Raster`].

pub mod clock;
pub mod config;
pub mod controls;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod raster;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
