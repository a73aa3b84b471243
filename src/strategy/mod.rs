//! # Decision strategies
//!
//! Four interchangeable move-choosing algorithms plus the manual sentinel,
//! modeled as a closed tagged variant dispatched to per-algorithm functions
//! rather than trait objects. Each [`Strategy`] instance is stateful only
//! in its privately owned random generator, seeded once at construction;
//! beyond that it is a pure function of a board snapshot and the acting
//! color.
//!
//! Shared conventions:
//! - Illegal coordinates are never returned. Algorithms either skip them
//!   outright or score them with a sentinel minimum that can never win the
//!   arg-max.
//! - Ties break by row-major scan order (smallest row, then smallest
//!   column); the added random noise makes exact ties rare in practice.
//! - A board-clone failure for one candidate drops that candidate from
//!   scoring and the search continues.

pub mod heuristic;
pub mod lookahead;
pub mod minimax;
pub mod random;

use clap::ValueEnum;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Color, Coord};
use crate::error::EngineError;

/// Sentinel scores guaranteeing a branch or coordinate is never picked by
/// arg-max/arg-min. Finite (not `i64::MIN`/`MAX`) so that adding a noise
/// term or a differential to a sentinel cannot overflow.
pub const SCORE_MIN: i64 = -1_000_000_000;
pub const SCORE_MAX: i64 = 1_000_000_000;

/// Reference search depth for the lookahead-heuristic algorithm.
pub const DEFAULT_LOOKAHEAD_DEPTH: u32 = 5;
/// Reference search depth for the alternating minimax algorithm.
pub const DEFAULT_MINIMAX_DEPTH: u32 = 4;

/// The closed set of strategy variants.
///
/// `Manual` is a sentinel for seats driven by outside input; dispatching it
/// to [`Strategy::choose`] is a contract violation, never attempted
/// recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Moves come from an external caller, never from the engine.
    Manual,
    /// Uniform-random choice among legal placements.
    Random,
    /// Static one-ply heuristic: flip count plus positional bonus.
    Heuristic,
    /// Recursive heuristic lookahead, maximizing at every ply.
    Lookahead,
    /// True alternating fixed-depth minimax.
    Minimax,
}

impl std::fmt::Display for StrategyKind {
    /// The CLI-facing name of the variant, matching clap's value parsing.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Manual => "manual",
            StrategyKind::Random => "random",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Lookahead => "lookahead",
            StrategyKind::Minimax => "minimax",
        };
        f.write_str(name)
    }
}

/// A configured strategy instance bound to one seat.
#[derive(Debug, Clone)]
pub struct Strategy {
    kind: StrategyKind,
    rng: Xoshiro256PlusPlus,
    lookahead_depth: u32,
    minimax_depth: u32,
    leaf_noise: bool,
}

impl Strategy {
    /// Create a strategy with its own random stream, seeded once.
    pub fn new(kind: StrategyKind, seed: u64) -> Self {
        Strategy {
            kind,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            lookahead_depth: DEFAULT_LOOKAHEAD_DEPTH,
            minimax_depth: DEFAULT_MINIMAX_DEPTH,
            leaf_noise: false,
        }
    }

    /// Override the lookahead-heuristic search depth.
    pub fn with_lookahead_depth(mut self, depth: u32) -> Self {
        self.lookahead_depth = depth;
        self
    }

    /// Override the minimax search depth.
    pub fn with_minimax_depth(mut self, depth: u32) -> Self {
        self.minimax_depth = depth;
        self
    }

    /// Enable the minimax leaf-noise term.
    pub fn with_leaf_noise(mut self, enabled: bool) -> Self {
        self.leaf_noise = enabled;
        self
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn is_manual(&self) -> bool {
        self.kind == StrategyKind::Manual
    }

    /// Pick a move for `color` on a snapshot of `board`.
    ///
    /// Callers must ensure `color` has at least one legal placement
    /// (`Board::can_place_anywhere`) and must never dispatch a manual seat;
    /// both are contract violations, not recoverable conditions.
    pub fn choose(&mut self, board: &Board, color: Color) -> Result<Coord, EngineError> {
        match self.kind {
            StrategyKind::Manual => Err(EngineError::ContractViolation(
                "manual seat dispatched to an automated strategy",
            )),
            StrategyKind::Random => random::choose(board, color, &mut self.rng),
            StrategyKind::Heuristic => heuristic::choose(board, color, &mut self.rng),
            StrategyKind::Lookahead => {
                lookahead::choose(board, color, self.lookahead_depth, &mut self.rng)
            }
            StrategyKind::Minimax => minimax::choose(
                board,
                color,
                self.minimax_depth,
                self.leaf_noise,
                &mut self.rng,
            ),
        }
    }
}
