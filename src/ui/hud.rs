use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameLoop;

/// Terminal rows taken by the HUD below the board.
pub const HUD_HEIGHT: u16 = 1;

const SEPARATOR: &str = " │ ";

/// Renders the status line and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, game: &GameLoop, theme: &Theme) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);

    let hint = if game.direction().is_none() && !game.is_over() {
        "arrows/WASD to start"
    } else {
        ""
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::new().fg(theme.hud_text)),
        status_area,
    );

    let dimensions = format!("{0}x{0}", game.grid_size());
    frame.render_widget(
        Paragraph::new(info_line(
            game.body().len(),
            game.tick_count(),
            &dimensions,
            usize::from(status_area.width),
            theme,
        ))
        .alignment(Alignment::Right),
        status_area,
    );

    play_area
}

fn info_line(
    length: usize,
    ticks: u64,
    dimensions: &str,
    available_width: usize,
    theme: &Theme,
) -> Line<'static> {
    let compact = info_width(length, ticks, dimensions, false) > available_width;
    let (length_label, ticks_label) = if compact { ("L", "T") } else { ("Length", "Ticks") };
    let label = Style::new().fg(theme.hud_text);
    let value = Style::new().fg(theme.hud_value);

    Line::from(vec![
        Span::styled(format!("{length_label}: "), label),
        Span::styled(length.to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled(format!("{ticks_label}: "), label),
        Span::styled(ticks.to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled(dimensions.to_owned(), value),
    ])
}

fn info_width(length: usize, ticks: u64, dimensions: &str, compact: bool) -> usize {
    let (length_label, ticks_label) = if compact { ("L", "T") } else { ("Length", "Ticks") };

    format!("{length_label}: {length}").width()
        + SEPARATOR.width()
        + format!("{ticks_label}: {ticks}").width()
        + SEPARATOR.width()
        + dimensions.width()
}
