use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::GameLoop;
use crate::input::{Direction, GameInput};

/// Input gathered during one rendered frame.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FrameControls {
    /// Direction keys pressed this frame, oldest first.
    pub directions: Vec<Direction>,
    pub quit: bool,
    pub confirm: bool,
}

impl FrameControls {
    /// Folds one input into the frame.
    pub fn record(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.directions.push(direction),
            GameInput::Quit => self.quit = true,
            GameInput::Confirm => self.confirm = true,
        }
    }

    /// Hands every direction press to `game` in order.
    ///
    /// Each press is checked against the current heading on its own, so a
    /// reversal pressed after a valid turn cannot cancel the turn.
    pub fn submit_directions(&self, game: &mut GameLoop) {
        for &direction in &self.directions {
            game.submit_direction(Some(direction));
        }
    }
}

/// Drains pending terminal key events without blocking.
pub fn poll_frame() -> io::Result<FrameControls> {
    let mut controls = FrameControls::default();

    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if let Some(input) = map_key(key) {
                controls.record(input);
            }
        }
    }

    Ok(controls)
}

/// Maps a key press to a game input. Releases and auto-repeats are ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => GameInput::Direction(Direction::Right),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        _ => return None,
    };

    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{FrameControls, map_key};
    use crate::config::GameConfig;
    use crate::game::GameLoop;
    use crate::input::{Direction, GameInput};
    use crate::snake::Cell;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('l'))),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn escape_q_and_ctrl_c_quit() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn held_and_released_keys_are_ignored() {
        for kind in [KeyEventKind::Repeat, KeyEventKind::Release] {
            let key = KeyEvent::new_with_kind_and_state(
                KeyCode::Up,
                KeyModifiers::NONE,
                kind,
                KeyEventState::NONE,
            );
            assert_eq!(map_key(key), None);
        }
    }

    #[test]
    fn presses_are_kept_in_order() {
        let mut controls = FrameControls::default();

        controls.record(GameInput::Direction(Direction::Up));
        controls.record(GameInput::Direction(Direction::Left));

        assert_eq!(controls.directions, [Direction::Up, Direction::Left]);
        assert!(!controls.quit);
    }

    #[test]
    fn reversal_after_turn_in_one_frame_keeps_the_turn() {
        let mut game = GameLoop::with_layout(
            &GameConfig::default(),
            1,
            &[Cell::new(4, 5), Cell::new(5, 5)],
            Some(Cell::new(0, 0)),
            Some(Direction::Right),
        );
        let mut controls = FrameControls::default();
        controls.record(GameInput::Direction(Direction::Up));
        controls.record(GameInput::Direction(Direction::Left));

        controls.submit_directions(&mut game);
        game.tick(&mut Vec::new());

        assert_eq!(game.direction(), Some(Direction::Up));
        assert_eq!(game.body().head_position(), Cell::new(5, 4));
    }

    #[test]
    fn later_valid_turn_in_one_frame_wins() {
        let mut game = GameLoop::with_layout(
            &GameConfig::default(),
            2,
            &[Cell::new(4, 5), Cell::new(5, 5)],
            Some(Cell::new(0, 0)),
            Some(Direction::Right),
        );
        let mut controls = FrameControls::default();
        controls.record(GameInput::Direction(Direction::Up));
        controls.record(GameInput::Direction(Direction::Down));

        controls.submit_directions(&mut game);
        game.tick(&mut Vec::new());

        assert_eq!(game.direction(), Some(Direction::Down));
        assert_eq!(game.body().head_position(), Cell::new(5, 6));
    }
}
