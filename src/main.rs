//! Blockdrop runner (default binary).
//!
//! `play` uses crossterm for input and the framebuffer renderer for output;
//! `headless` prints JSON snapshots. Logs go to stderr through `env_logger`
//! (`RUST_LOG`, default `warn`), so redirect stderr while playing to keep the
//! board clean.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{debug, info, warn};

use blockdrop::config::{Cli, Command, GameKind, PlayArgs};
use blockdrop::core::{GameSession, PuyoGame, TetrisGame};
use blockdrop::headless;
use blockdrop::input::{puyo_intent, should_quit, tetris_intent};
use blockdrop::term::{BoardView, Drawable, FrameBuffer, TerminalRenderer, Viewport};
use blockdrop::types::Intent;

type KeyMap = fn(KeyEvent) -> Option<Intent>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play(args) => match args.game {
            GameKind::Tetris => play(TetrisGame::new(args.seed), tetris_intent, &args),
            GameKind::Puyo => play(PuyoGame::new(args.seed), puyo_intent, &args),
        },
        Command::Headless(args) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = match args.game {
                GameKind::Tetris => headless::run(&mut TetrisGame::new(args.seed), &args, &mut out)?,
                GameKind::Puyo => headless::run(&mut PuyoGame::new(args.seed), &args, &mut out)?,
            };
            info!(
                "headless {} finished after {} frames: {} (score {})",
                args.game.as_str(),
                summary.frames,
                summary.phase.as_str(),
                summary.score
            );
            Ok(())
        }
    }
}

fn play<S>(mut session: S, keys: KeyMap, args: &PlayArgs) -> Result<()>
where
    S: GameSession,
    S::Snapshot: Drawable,
{
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, keys, args.frame_ms);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err:#}");
    }
    info!("{} exited with score {}", S::NAME, session.score());
    result
}

fn run<S>(term: &mut TerminalRenderer, session: &mut S, keys: KeyMap, frame_ms: u32) -> Result<()>
where
    S: GameSession,
    S::Snapshot: Drawable,
{
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(u64::from(frame_ms));
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = keys(key) {
                        let accepted = session.apply(intent);
                        debug!("{}: {:?} -> {}", S::NAME, intent, accepted);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.on_frame(elapsed_ms);
        }
    }
}
