//! Headless runner output: one JSON object per sampled frame.

use blockdrop::config::{Cli, Command, HeadlessArgs};
use blockdrop::core::{PuyoGame, TetrisGame};
use blockdrop::headless;
use blockdrop::types::Phase;
use clap::Parser;
use serde_json::Value;

fn args(extra: &[&str]) -> HeadlessArgs {
    let mut argv = vec!["blockdrop", "headless"];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Headless(args) => args,
        Command::Play(_) => panic!("expected headless"),
    }
}

fn lines(out: &[u8]) -> Vec<Value> {
    std::str::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn tetris_samples_every_n_frames() {
    let args = args(&["tetris", "--seed", "4", "--frames", "120", "--every", "30"]);
    let mut out = Vec::new();
    let summary = headless::run(&mut TetrisGame::new(args.seed), &args, &mut out).unwrap();

    let records = lines(&out);
    assert_eq!(summary.records, 4);
    assert_eq!(records.len(), 4);
    let frames: Vec<u64> = records.iter().map(|r| r["frame"].as_u64().unwrap()).collect();
    assert_eq!(frames, vec![30, 60, 90, 120]);

    let last = records.last().unwrap();
    assert_eq!(last["game"], "tetris");
    assert_eq!(last["final"], true);
    assert_eq!(last["phase"], "running");
    assert_eq!(last["snapshot"]["board"].as_array().unwrap().len(), 20);
    assert_eq!(last["snapshot"]["board"][0].as_array().unwrap().len(), 10);
    assert!(records[0]["intent"].is_null());
}

#[test]
fn puyo_script_is_applied_and_recorded() {
    let args = args(&["puyo", "--frames", "3", "--every", "1", "--script", "moveLeft,rotate,hardDrop"]);
    let mut out = Vec::new();
    let summary = headless::run(&mut PuyoGame::new(args.seed), &args, &mut out).unwrap();

    let records = lines(&out);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["intent"], "moveLeft");
    assert_eq!(records[1]["intent"], "rotate");
    assert_eq!(records[2]["intent"], "hardDrop");
    assert_eq!(records[2]["snapshot"]["pairs_placed"], 1);
    assert_eq!(summary.phase, Phase::Running);
}

#[test]
fn run_stops_at_game_over() {
    let script = vec!["hardDrop"; 200].join(",");
    let args = args(&["tetris", "--frames", "1000", "--every", "500", "--script", &script]);
    let mut out = Vec::new();
    let summary = headless::run(&mut TetrisGame::new(args.seed), &args, &mut out).unwrap();

    assert_eq!(summary.phase, Phase::GameOver);
    assert!(summary.frames < 200);
    let records = lines(&out);
    let last = records.last().unwrap();
    assert_eq!(last["final"], true);
    assert_eq!(last["phase"], "gameOver");
    assert_eq!(last["frame"].as_u64().unwrap(), u64::from(summary.frames));
}

#[test]
fn zero_frames_still_reports_initial_state() {
    let args = args(&["puyo", "--frames", "0"]);
    let mut out = Vec::new();
    let summary = headless::run(&mut PuyoGame::new(args.seed), &args, &mut out).unwrap();
    assert_eq!(summary.frames, 0);
    let records = lines(&out);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["frame"], 0);
    assert_eq!(records[0]["phase"], "running");
}
