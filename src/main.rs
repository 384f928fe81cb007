use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};
use raster_snake::config::{
    DEFAULT_CELL_PIXELS, DEFAULT_GRID_SIZE, DEFAULT_TICK_RATE_HZ, FRAME_INTERVAL, GameConfig,
    MAX_FRAME_DELTA, Theme, theme_by_name,
};
use raster_snake::controls;
use raster_snake::error::{ConfigError, Error};
use raster_snake::game::{DeathReason, FrameInput, GameLoop};
use raster_snake::raster::Raster;
use raster_snake::renderer::{self, required_terminal_size};
use raster_snake::terminal_runtime::TerminalSession;
use simplelog::WriteLogger;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per board edge.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = DEFAULT_TICK_RATE_HZ)]
    tick_rate: u32,

    /// Raster pixels per cell edge.
    #[arg(long, default_value_t = DEFAULT_CELL_PIXELS)]
    cell_pixels: u16,

    /// Seed for head and food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme: classic, ocean or neon.
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// How the last game finished.
struct Outcome {
    reason: DeathReason,
    length: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(outcome) => {
            println!(
                "The snake {} at length {}.",
                outcome.reason, outcome.length
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("raster-snake: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<Outcome, Error> {
    init_logging(&cli)?;

    let config = GameConfig::new(cli.grid_size, cli.tick_rate, cli.seed)?;
    if cli.cell_pixels == 0 {
        return Err(ConfigError::ZeroCellPixels.into());
    }
    let theme = theme_by_name(&cli.theme)?;
    ensure_board_fits(config.grid_size, cli.cell_pixels)?;

    info!(
        "starting: {0}x{0} board, tick {1:?}, {2} px per cell, theme {3}",
        config.grid_size, config.tick_duration, cli.cell_pixels, theme.name
    );
    Ok(run(&config, cli.cell_pixels, theme)?)
}

fn init_logging(cli: &Cli) -> Result<(), Error> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    WriteLogger::init(
        cli.log_level.into(),
        simplelog::Config::default(),
        File::create(path)?,
    )?;
    Ok(())
}

fn ensure_board_fits(grid_size: u16, cell_pixels: u16) -> Result<(), Error> {
    let side = usize::from(grid_size) * usize::from(cell_pixels);
    let (needed_cols, needed_rows) = required_terminal_size(side);
    let (cols, rows) = crossterm::terminal::size()?;

    if needed_cols > u32::from(cols) || needed_rows > u32::from(rows) {
        return Err(ConfigError::DoesNotFit {
            needed_cols,
            needed_rows,
            cols,
            rows,
        }
        .into());
    }
    Ok(())
}

fn run(config: &GameConfig, cell_pixels: u16, theme: &Theme) -> io::Result<Outcome> {
    let mut session = TerminalSession::enter()?;
    let mut game = GameLoop::new(config);
    let mut raster = Raster::new(config.grid_size, cell_pixels, theme.background);
    raster.apply(&game.initial_events(), theme);
    let mut last_frame = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &raster, &game, theme))?;

        let input = controls::poll_frame()?;
        let now = Instant::now();
        let delta = now.duration_since(last_frame).min(MAX_FRAME_DELTA);
        last_frame = now;

        if let Some(reason) = game.death_reason() {
            if input.quit {
                break;
            }
            if input.confirm {
                info!("restarting after the snake {reason}");
                game = GameLoop::new(config);
                raster.clear(theme.background);
                raster.apply(&game.initial_events(), theme);
            }
        } else {
            input.submit_directions(&mut game);
            let events = game.frame(FrameInput {
                frame_delta_nanos: i64::try_from(delta.as_nanos()).unwrap_or(i64::MAX),
                direction: None,
                quit_requested: input.quit,
            });
            raster.apply(&events, theme);

            if game.death_reason() == Some(DeathReason::UserQuit) {
                break;
            }
        }

        thread::sleep(FRAME_INTERVAL);
    }

    Ok(Outcome {
        reason: game.death_reason().unwrap_or(DeathReason::UserQuit),
        length: game.body().len(),
    })
}
