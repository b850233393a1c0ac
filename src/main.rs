use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::audio::{AudioSink, Muted, SoundCue, TerminalBell};
use grid_snake::clock::TickClock;
use grid_snake::config::{DEFAULT_LOG_FILE_NAME, FRAME_INTERVAL_MS, GridSize, TICK_INTERVAL_MS};
use grid_snake::error::{AppError, Result};
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food placement for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not ring the terminal bell on food and crashes.
    #[arg(long)]
    mute: bool,

    /// Log destination (default: grid-snake.log in the temp directory).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("grid-snake: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;
    install_panic_hook();

    let bounds = GridSize::default();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    let mut audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::stdout())
    };

    info!(
        "starting {}x{} game, seed {:?}, muted {}",
        bounds.width, bounds.height, cli.seed, cli.mute
    );

    let mut session = TerminalSession::enter()?;
    game_loop(&mut session, &mut state, audio.as_mut())?;
    drop(session);

    info!(
        "quit after {} ticks, high score {}",
        state.tick_count(),
        state.high_score()
    );
    Ok(())
}

fn game_loop(
    session: &mut TerminalSession,
    state: &mut GameState,
    audio: &mut dyn AudioSink,
) -> Result<()> {
    let mut input = InputHandler::new();
    let mut clock = TickClock::new(Duration::from_millis(TICK_INTERVAL_MS), Instant::now());
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    info!("ticking every {:?}, drawing every {:?}", clock.interval(), frame_interval);

    loop {
        let frame_start = Instant::now();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state))?;

        for game_input in input.drain_pending()? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::Direction(direction) => {
                    state.handle_direction_input(direction);
                }
            }
        }

        if clock.tick_due(Instant::now()) {
            let outcome = state.tick();
            for cue in SoundCue::for_outcome(outcome) {
                audio.play(cue);
            }
        }

        if let Some(remaining) = frame_interval.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));
    let file = File::create(&path).map_err(|source| AppError::LogFile {
        path: path.clone(),
        source,
    })?;
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
