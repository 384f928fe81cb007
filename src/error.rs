use std::io;

use thiserror::Error;

/// Invalid startup settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is outside the supported range {min}..={max}")]
    GridSize { size: u16, min: u16, max: u16 },

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,

    #[error("cell size must be at least one pixel")]
    ZeroCellPixels,

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error(
        "a {needed_cols}x{needed_rows} board does not fit a {cols}x{rows} terminal; \
         use a smaller --grid-size or --cell-pixels"
    )]
    DoesNotFit {
        needed_cols: u32,
        needed_rows: u32,
        cols: u16,
        rows: u16,
    },
}

/// Failures that stop the binary before or outside the game itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Error};

    #[test]
    fn config_errors_read_as_plain_sentences() {
        let error = Error::from(ConfigError::GridSize {
            size: 1,
            min: 2,
            max: 1024,
        });

        assert_eq!(
            error.to_string(),
            "grid size 1 is outside the supported range 2..=1024"
        );
    }
}
