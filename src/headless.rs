//! Headless runner: drives a session with a fixed frame time and writes one
//! JSON object per sampled frame.
//!
//! The session is started on frame 0. Scripted intents are applied one per
//! frame from frame 1, each before that frame's gravity. A record is written
//! every `every` frames and once more for the last frame, which is also where
//! the run stops early if the game ends.

use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::config::HeadlessArgs;
use crate::core::GameSession;
use crate::types::{Intent, Phase};

#[derive(Serialize)]
struct FrameRecord<'a, T: Serialize> {
    game: &'static str,
    frame: u32,
    phase: Phase,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<Intent>,
    #[serde(rename = "final")]
    is_final: bool,
    snapshot: &'a T,
}

/// What a headless run ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u32,
    pub records: u32,
    pub phase: Phase,
    pub score: u32,
}

/// Drive `session` for `args.frames` frames, writing records to `out`.
pub fn run<S: GameSession, W: Write>(
    session: &mut S,
    args: &HeadlessArgs,
    out: &mut W,
) -> Result<RunSummary> {
    session.apply(Intent::Start);
    info!(
        "headless {}: {} frames, seed {}, sample every {}",
        S::NAME,
        args.frames,
        args.seed,
        args.every
    );

    let every = args.every.max(1);
    let mut script = args.script.iter().copied();
    let mut records = 0;
    let mut frame = 0;

    while frame < args.frames {
        frame += 1;

        let intent = script.next();
        if let Some(intent) = intent {
            let accepted = session.apply(intent);
            debug!("headless {}: frame {} {:?} -> {}", S::NAME, frame, intent, accepted);
        }
        session.on_frame(args.frame_ms);

        let over = session.phase() == Phase::GameOver;
        let last = over || frame == args.frames;
        if last || frame % every == 0 {
            write_record(session, frame, intent, last, out)?;
            records += 1;
        }
        if over {
            break;
        }
    }

    if args.frames == 0 {
        write_record(session, 0, None, true, out)?;
        records += 1;
    }
    out.flush().context("flushing headless output")?;

    Ok(RunSummary {
        frames: frame,
        records,
        phase: session.phase(),
        score: session.score(),
    })
}

fn write_record<S: GameSession, W: Write>(
    session: &S,
    frame: u32,
    intent: Option<Intent>,
    is_final: bool,
    out: &mut W,
) -> Result<()> {
    let snapshot = session.snapshot();
    let record = FrameRecord {
        game: S::NAME,
        frame,
        phase: session.phase(),
        score: session.score(),
        intent,
        is_final,
        snapshot: &snapshot,
    };
    serde_json::to_writer(&mut *out, &record).context("encoding snapshot")?;
    out.write_all(b"\n")?;
    Ok(())
}
