//! Command line and environment configuration.
//!
//! Every option can also come from a `BLOCKDROP_*` environment variable;
//! flags win over the environment.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::{Intent, FRAME_MS};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum GameKind {
    /// Falling tetrominoes on a 10x20 board
    Tetris,
    /// Falling color pairs on a 6x12 board
    Puyo,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Tetris => "tetris",
            GameKind::Puyo => "puyo",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "blockdrop", version, about = "Terminal falling-block games")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),
    /// Run without a terminal, printing JSON snapshots to stdout
    Headless(HeadlessArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    #[arg(value_enum, env = "BLOCKDROP_GAME")]
    pub game: GameKind,

    #[arg(long, env = "BLOCKDROP_SEED", default_value_t = 1, help = "Seed for piece and color choice")]
    pub seed: u32,

    #[arg(
        long,
        env = "BLOCKDROP_FRAME_MS",
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Frame duration in milliseconds"
    )]
    pub frame_ms: u32,
}

#[derive(Debug, Clone, Args)]
pub struct HeadlessArgs {
    #[arg(value_enum, env = "BLOCKDROP_GAME")]
    pub game: GameKind,

    #[arg(long, env = "BLOCKDROP_SEED", default_value_t = 1, help = "Seed for piece and color choice")]
    pub seed: u32,

    #[arg(long, env = "BLOCKDROP_FRAMES", default_value_t = 600, help = "Frames to simulate")]
    pub frames: u32,

    #[arg(
        long,
        env = "BLOCKDROP_EVERY",
        default_value_t = 60,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Emit a snapshot every N frames"
    )]
    pub every: u32,

    #[arg(
        long,
        env = "BLOCKDROP_FRAME_MS",
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Simulated frame duration in milliseconds"
    )]
    pub frame_ms: u32,

    #[arg(
        long,
        env = "BLOCKDROP_SCRIPT",
        value_delimiter = ',',
        value_parser = parse_intent,
        help = "Intents applied one per frame after the start, e.g. moveLeft,rotate,hardDrop"
    )]
    pub script: Vec<Intent>,
}

fn parse_intent(s: &str) -> Result<Intent, String> {
    Intent::from_str(s.trim()).ok_or_else(|| format!("unknown intent `{s}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["blockdrop", "play", "tetris"]).unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.game, GameKind::Tetris);
        assert_eq!(args.seed, 1);
        assert_eq!(args.frame_ms, FRAME_MS);
    }

    #[test]
    fn test_headless_script_parses_intents() {
        let cli = Cli::try_parse_from([
            "blockdrop",
            "headless",
            "puyo",
            "--seed",
            "9",
            "--frames",
            "100",
            "--script",
            "moveLeft,rotate,hardDrop",
        ])
        .unwrap();
        let Command::Headless(args) = cli.command else {
            panic!("expected headless");
        };
        assert_eq!(args.game, GameKind::Puyo);
        assert_eq!(args.seed, 9);
        assert_eq!(args.frames, 100);
        assert_eq!(
            args.script,
            vec![Intent::MoveLeft, Intent::Rotate, Intent::HardDrop]
        );
    }

    #[test]
    fn test_rejects_unknown_intent_and_zero_frame_ms() {
        assert!(Cli::try_parse_from(["blockdrop", "headless", "tetris", "--script", "jump"]).is_err());
        assert!(Cli::try_parse_from(["blockdrop", "play", "tetris", "--frame-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["blockdrop", "play", "chess"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
