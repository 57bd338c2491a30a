use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use side_shooter::compute::{init_state, player_shoot};
use side_shooter::config::GameConfig;
use side_shooter::display::terminal::TerminalSurface;
use side_shooter::driver::{animate, FrameClock};
use side_shooter::entities::GameState;
use side_shooter::error;
use side_shooter::input::{Command, InputHandler, Key};

const HINT: &str = "↑ ↓ / W S : Move   SPACE : Shoot   R : Restart   Q : Quit";

/// A key counts as held if a press/repeat arrived within this window.
/// Covers terminals that never report releases: OS key-repeat (≥ 15 Hz)
/// refreshes a held key before it expires.
const HOLD_WINDOW: Duration = Duration::from_millis(140);

#[derive(Parser, Debug)]
#[command(name = "side_shooter", about = "Side-scrolling terminal shooter")]
struct Args {
    /// TOML file overriding the default game tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for enemy placement and speed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file (the terminal is used for drawing)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Target repaint rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
}

enum SessionEnd {
    Restart,
    Quit,
}

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one session until the player quits or asks for a restart.
///
/// Key events are drained at the top of each frame: movement keys update the
/// held set and Space fires immediately, so the update that follows always
/// sees a stable snapshot.  On terminals without release events, held keys
/// expire after `HOLD_WINDOW` of silence.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    fps: u32,
    keyboard_enhanced: bool,
) -> error::Result<SessionEnd> {
    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(fps));
    let hold_frames = (HOLD_WINDOW.as_secs_f64() * f64::from(fps)).ceil() as u64;

    let mut input = InputHandler::new();
    let mut clock = FrameClock::new();
    let session_start = Instant::now();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(SessionEnd::Quit);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(SessionEnd::Quit);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if state.is_over() => {
                            return Ok(SessionEnd::Restart);
                        }
                        _ => {}
                    }
                    if let Some(Command::Fire) = input.key_down(Key::from(code), frame) {
                        player_shoot(state);
                    }
                }
                KeyEventKind::Repeat => input.key_repeat(Key::from(code), frame),
                KeyEventKind::Release => input.key_up(Key::from(code)),
            }
        }

        if !keyboard_enhanced {
            input.expire(frame, hold_frames);
        }
        let keys = input.snapshot();

        let size = terminal::size()?;
        let mut surface =
            TerminalSurface::new(out, size, (state.width, state.height)).with_hint(HINT);
        let timestamp = session_start.elapsed().as_secs_f64() * 1000.0;
        animate(state, &mut clock, timestamp, &keys, &mut surface, rng)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    rng: &mut StdRng,
    fps: u32,
    keyboard_enhanced: bool,
) -> error::Result<()> {
    loop {
        let mut state = init_state(config);
        tracing::info!("session started");
        let end = game_loop(out, &mut state, rx, rng, fps, keyboard_enhanced)?;
        tracing::info!(score = state.score, outcome = ?state.outcome(), "session ended");
        if let SessionEnd::Quit = end {
            return Ok(());
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, fps = args.fps, "starting");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    tracing::debug!(keyboard_enhanced, "terminal input mode");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &config, &mut rng, args.fps, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("game loop failed")
}
