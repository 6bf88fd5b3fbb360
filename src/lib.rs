//! Blockdrop (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under `blockdrop::{core,
//! input, term, types}`, and holds the pieces shared by the binary and the
//! integration tests: CLI configuration and the headless runner.

pub mod config;
pub mod headless;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
