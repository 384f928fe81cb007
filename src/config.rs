use std::time::Duration;

use ratatui::style::Color;

use crate::error::ConfigError;

/// Default number of cells per board axis.
pub const DEFAULT_GRID_SIZE: u16 = 32;

/// Smallest playable board: the snake and one food cell must both fit.
pub const MIN_GRID_SIZE: u16 = 2;

/// Largest accepted board edge.
pub const MAX_GRID_SIZE: u16 = 1024;

/// Default simulation rate in ticks per second.
pub const DEFAULT_TICK_RATE_HZ: u32 = 30;

/// Default raster pixels per grid cell edge.
pub const DEFAULT_CELL_PIXELS: u16 = 1;

/// Target wall-clock pause between rendered frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Upper bound on one frame delta handed to the simulation clock.
///
/// Keeps a suspended process from replaying seconds of ticks on resume.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Settings fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    /// Cells per board axis; the board is `grid_size × grid_size`.
    pub grid_size: u16,
    /// Length of one simulation step.
    pub tick_duration: Duration,
    /// RNG seed for head and food placement. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_duration: tick_duration_for_rate(DEFAULT_TICK_RATE_HZ),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Builds a config from a tick rate in Hz, validating every field.
    pub fn new(grid_size: u16, tick_rate_hz: u32, seed: Option<u64>) -> Result<Self, ConfigError> {
        if tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let config = Self {
            grid_size,
            tick_duration: tick_duration_for_rate(tick_rate_hz),
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the game loop relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        if self.tick_duration.is_zero() {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }
}

/// Returns the tick duration for `rate_hz` ticks per second.
#[must_use]
pub fn tick_duration_for_rate(rate_hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(rate_hz.max(1)))
}

/// Colors used by the raster shell.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake: Color,
    pub food: Color,
    /// Empty board pixels.
    pub background: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// White snake, chartreuse food on black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake: Color::White,
    food: Color::Rgb(127, 255, 0),
    background: Color::Black,
    border_fg: Color::DarkGray,
    hud_text: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake: Color::Cyan,
    food: Color::Yellow,
    background: Color::Rgb(0, 20, 40),
    border_fg: Color::Cyan,
    hud_text: Color::DarkGray,
    hud_value: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake: Color::Magenta,
    food: Color::Yellow,
    background: Color::Black,
    border_fg: Color::Magenta,
    hud_text: Color::DarkGray,
    hud_value: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a theme by case-insensitive name.
pub fn theme_by_name(name: &str) -> Result<&'static Theme, ConfigError> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownTheme(name.to_owned()))
}

/// Upper half-block glyph: foreground paints the top pixel, background the bottom.
pub const GLYPH_HALF_UPPER: &str = "▀";

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{GameConfig, MAX_GRID_SIZE, THEME_CLASSIC, theme_by_name, tick_duration_for_rate};
    use crate::error::ConfigError;

    #[test]
    fn default_tick_is_one_thirtieth_of_a_second() {
        let config = GameConfig::default();
        assert_eq!(config.tick_duration, Duration::from_nanos(33_333_333));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_boards() {
        assert!(matches!(
            GameConfig::new(1, 30, None),
            Err(ConfigError::GridSize { size: 1, .. })
        ));
        assert!(matches!(
            GameConfig::new(MAX_GRID_SIZE + 1, 30, None),
            Err(ConfigError::GridSize { .. })
        ));
    }

    #[test]
    fn rejects_zero_tick_rate() {
        assert!(matches!(
            GameConfig::new(10, 0, None),
            Err(ConfigError::ZeroTickRate)
        ));
    }

    #[test]
    fn tick_rate_converts_to_whole_nanoseconds() {
        assert_eq!(tick_duration_for_rate(10), Duration::from_millis(100));
        assert_eq!(tick_duration_for_rate(1), Duration::from_secs(1));
    }

    #[test]
    fn theme_lookup_ignores_case() {
        let theme = theme_by_name("CLASSIC").expect("classic theme should exist");
        assert_eq!(theme.name, THEME_CLASSIC.name);
        assert!(matches!(
            theme_by_name("mauve"),
            Err(ConfigError::UnknownTheme(name)) if name == "mauve"
        ));
    }
}
