//! # Reversi engine
//!
//! Board state, move legality, and a family of decision strategies for
//! Reversi (Othello), plus the match orchestration that sequences turns,
//! detects skips and termination, and determines the winner.
//!
//! The layering, leaves first:
//!
//! - [`board`]: the 8×8 grid, disc counters, legality and flip
//!   computation, cloning.
//! - [`strategy`]: four interchangeable move-choosing algorithms
//!   (random, static heuristic, recursive lookahead, alternating
//!   minimax) behind one closed dispatch type.
//! - [`player`]: a seat bound to one color and one strategy instance.
//! - [`game_controller`]: the authoritative match state and turn loop.
//!
//! The engine performs no I/O and spawns no threads; rendering, input
//! handling, and log display belong to the calling shell (see the `play`
//! binary).

pub mod board;
pub mod error;
pub mod game_controller;
pub mod player;
pub mod strategy;

pub use board::{Board, Cell, Color, Coord, BOARD_SIZE};
pub use error::EngineError;
pub use game_controller::{GameController, GameStatus, MoveRecord, RecordAction, TurnOutcome};
pub use player::Player;
pub use strategy::{Strategy, StrategyKind};
