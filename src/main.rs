//! Terminal Tetris runner (default binary).
//!
//! Drives the engine with an external fixed-interval ticker, feeds it key and
//! mouse input through crossterm, and draws snapshots with the framebuffer
//! renderer. `--headless` skips the terminal entirely and prints the final
//! snapshot as JSON after a fixed number of ticks.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use tick_tetris::core::{
    BagRandomizer, Engine, EngineConfig, FixedTicker, Randomizer, TickOutcome, UniformRandomizer,
};
use tick_tetris::input::{action_for_click, handle_key_event, should_quit};
use tick_tetris::term::{BlockStyle, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tick_tetris::types::{
    GameAction, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_INTERVAL_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RandomizerKind {
    /// Each piece drawn independently
    Uniform,
    /// Every kind once per seven pieces
    Bag,
}

#[derive(Debug, Parser)]
#[command(name = "tick-tetris")]
#[command(about = "Fixed-tick Tetris in the terminal")]
struct Args {
    /// Board width in cells
    #[arg(long, env = "TETRIS_COLS", default_value_t = DEFAULT_COLS)]
    cols: u8,

    /// Board height in cells
    #[arg(long, env = "TETRIS_ROWS", default_value_t = DEFAULT_ROWS)]
    rows: u8,

    /// Milliseconds between gravity ticks
    #[arg(long = "tick-ms", env = "TETRIS_TICK_MS", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u32,

    /// Seed for piece selection; random when omitted
    #[arg(long, env = "TETRIS_SEED")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = RandomizerKind::Uniform)]
    randomizer: RandomizerKind,

    /// Block glyphs: square or rounded
    #[arg(long, default_value = "square")]
    style: BlockStyle,

    /// Run without a terminal and print the final snapshot as JSON
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 100)]
    ticks: u32,

    /// Write logs here in interactive mode (headless mode logs to stderr)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = EngineConfig::new(args.cols, args.rows, args.tick_ms);
    let mut engine = Engine::new(config, make_randomizer(args.randomizer, args.seed))
        .context("invalid engine configuration")?;

    if args.headless {
        return run_headless(&mut engine, args.ticks);
    }

    let mut term = TerminalRenderer::new().with_mouse();
    term.enter()?;

    let result = run(&mut term, &mut engine, GameView::new(args.style));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing(args: &Args) -> Result<()> {
    if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    } else if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn make_randomizer(kind: RandomizerKind, seed: Option<u64>) -> Box<dyn Randomizer + Send> {
    match (kind, seed) {
        (RandomizerKind::Uniform, Some(seed)) => Box::new(UniformRandomizer::seeded(seed)),
        (RandomizerKind::Uniform, None) => Box::new(UniformRandomizer::from_entropy()),
        (RandomizerKind::Bag, Some(seed)) => Box::new(BagRandomizer::seeded(seed)),
        (RandomizerKind::Bag, None) => Box::new(BagRandomizer::from_entropy()),
    }
}

fn run_headless(engine: &mut Engine, ticks: u32) -> Result<()> {
    let mut ran = 0;
    while ran < ticks && engine.tick() != TickOutcome::Ignored {
        ran += 1;
    }
    info!(ticks = ran, score = engine.score(), game_over = engine.game_over(), "headless run finished");

    let json = serde_json::to_string_pretty(&engine.snapshot())?;
    println!("{json}");
    Ok(())
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, view: GameView) -> Result<()> {
    let mut ticker = FixedTicker::new(engine.config().tick_interval_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            view.render_into(&engine.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(ticker.until_next_ms() as u64)
            .saturating_sub(last.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= apply(engine, &mut ticker, action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let layout = view.layout(engine.config().cols, engine.config().rows, viewport);
                    let on_board =
                        mouse.row >= layout.play_y && mouse.row < layout.play_y + layout.play_h;
                    if let Some(action) = on_board
                        .then(|| action_for_click(mouse.column, layout.play_x, layout.play_w))
                        .flatten()
                    {
                        dirty |= apply(engine, &mut ticker, action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Whole milliseconds only; the sub-millisecond rest stays in `last`.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);

        // Gravity is suspended while the game is over.
        if engine.game_over() {
            ticker.reset();
            continue;
        }
        for _ in 0..ticker.advance(elapsed_ms) {
            if engine.tick() != TickOutcome::Ignored {
                dirty = true;
            }
        }
    }
}

fn apply(engine: &mut Engine, ticker: &mut FixedTicker, action: GameAction) -> bool {
    if action == GameAction::Restart {
        ticker.reset();
    }
    engine.apply_action(action)
}
