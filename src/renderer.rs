use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{GLYPH_HALF_UPPER, Theme};
use crate::game::GameLoop;
use crate::raster::Raster;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{centered_popup, render_game_over_menu};

/// Renders the full game frame: board raster, border, HUD and end popup.
pub fn render(frame: &mut Frame<'_>, raster: &Raster, game: &GameLoop, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, game, theme);

    let (cols, rows) = board_cells(raster.side());
    let board = centered_popup(play_area, cols + 2, rows + 2);
    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    present_raster(frame.buffer_mut(), inner, raster);

    if let Some(reason) = game.death_reason() {
        render_game_over_menu(
            frame,
            area,
            reason,
            game.body().len(),
            game.tick_count(),
            theme,
        );
    }
}

/// Terminal columns and rows needed to show the whole board, border and HUD.
#[must_use]
pub fn required_terminal_size(raster_side: usize) -> (u32, u32) {
    let side = u32::try_from(raster_side).unwrap_or(u32::MAX);
    let cols = side.saturating_add(2);
    let rows = side.div_ceil(2).saturating_add(2 + u32::from(HUD_HEIGHT));
    (cols, rows)
}

/// Terminal cells covered by the raster: one column per pixel, two pixel rows
/// per terminal row.
fn board_cells(raster_side: usize) -> (u16, u16) {
    let cols = u16::try_from(raster_side).unwrap_or(u16::MAX);
    let rows = u16::try_from(raster_side.div_ceil(2)).unwrap_or(u16::MAX);
    (cols, rows)
}

/// Composites pairs of pixel rows into half-block glyphs.
///
/// The glyph foreground is the upper pixel, the background the lower one.
/// An odd last pixel row fills the whole glyph.
fn present_raster(buffer: &mut Buffer, inner: Rect, raster: &Raster) {
    let side = raster.side();
    for (row, term_y) in (0..side).step_by(2).zip(inner.top()..inner.bottom()) {
        for (x, term_x) in (0..side).zip(inner.left()..inner.right()) {
            let upper = raster.pixel(x, row);
            let lower = if row + 1 < side {
                raster.pixel(x, row + 1)
            } else {
                upper
            };
            buffer.set_string(
                term_x,
                term_y,
                GLYPH_HALF_UPPER,
                Style::new().fg(upper).bg(lower),
            );
        }
    }
}
