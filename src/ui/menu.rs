use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::DeathReason;

const POPUP_WIDTH: u16 = 34;
const POPUP_HEIGHT: u16 = 9;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    reason: DeathReason,
    length: usize,
    ticks: u64,
    theme: &Theme,
) {
    let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            popup_title(reason),
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("The snake {reason}")),
        Line::from(format!("Length: {length}  Ticks: {ticks}")),
        Line::from(""),
        Line::styled("[Enter] Play again", Style::new().fg(theme.menu_footer)),
        Line::styled("[Q]/[Esc] Quit", Style::new().fg(theme.menu_footer)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn popup_title(reason: DeathReason) -> &'static str {
    if reason == DeathReason::BoardFull {
        "YOU WIN"
    } else {
        "GAME OVER"
    }
}

/// Returns a `width × height` rect centered in `area`, shrunk to fit.
pub(crate) fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
