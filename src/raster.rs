use ratatui::style::Color;

use crate::config::Theme;
use crate::game::{CellEvent, CellEventKind};
use crate::snake::Cell;

/// Square pixel buffer the game board is painted into.
///
/// Each grid cell covers a `cell_pixels × cell_pixels` block. Pixels are
/// stored row by row with `stride == width`.
#[derive(Debug, Clone)]
pub struct Raster {
    side: usize,
    cell_pixels: usize,
    pixels: Vec<Color>,
}

impl Raster {
    /// Creates a raster for a `grid_size` board filled with `background`.
    #[must_use]
    pub fn new(grid_size: u16, cell_pixels: u16, background: Color) -> Self {
        let cell_pixels = usize::from(cell_pixels.max(1));
        let side = usize::from(grid_size) * cell_pixels;
        Self {
            side,
            cell_pixels,
            pixels: vec![background; side * side],
        }
    }

    /// Pixels per row (and per column).
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.side + x]
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fills the block of pixels covering `cell`. Off-board cells are skipped.
    pub fn fill_cell(&mut self, cell: Cell, color: Color) {
        let (Ok(cx), Ok(cy)) = (usize::try_from(cell.x), usize::try_from(cell.y)) else {
            return;
        };
        let (left, top) = (cx * self.cell_pixels, cy * self.cell_pixels);
        if left >= self.side || top >= self.side {
            return;
        }

        for y in top..top + self.cell_pixels {
            let row = y * self.side;
            self.pixels[row + left..row + left + self.cell_pixels].fill(color);
        }
    }

    /// Paints a batch of cell events in order.
    pub fn apply(&mut self, events: &[CellEvent], theme: &Theme) {
        for event in events {
            let color = match event.kind {
                CellEventKind::Drawn => theme.snake,
                CellEventKind::Erased => theme.background,
                CellEventKind::FoodPlaced => theme.food,
            };
            self.fill_cell(event.cell, color);
        }
    }
}
