//! Seat identity: a name, a color, and the strategy driving the seat.

use crate::board::{Board, Color, Coord};
use crate::error::EngineError;
use crate::strategy::{Strategy, StrategyKind};

/// Offset between the two seats' seed streams. Derived from the same
/// golden-ratio constant `splitmix64` uses, so the streams never collide
/// for any base seed.
pub const SEAT_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// One seat in a match: a display name, the color it plays, and its
/// strategy instance (which owns the seat's private random stream).
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    color: Color,
    strategy: Strategy,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color, strategy: Strategy) -> Self {
        Player {
            name: name.into(),
            color,
            strategy,
        }
    }

    /// Seed for a seat's strategy: the Black seat uses the base seed, the
    /// White seat a fixed stride away, so two seats built from one base
    /// seed draw from distinct streams.
    pub fn seat_seed(base: u64, color: Color) -> u64 {
        match color {
            Color::Black => base,
            Color::White => base.wrapping_add(SEAT_SEED_STRIDE),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// True when this seat's moves come from outside the engine.
    pub fn is_manual(&self) -> bool {
        self.strategy.is_manual()
    }

    /// Ask the seat's strategy for a move on `board`.
    pub fn choose(&mut self, board: &Board) -> Result<Coord, EngineError> {
        self.strategy.choose(board, self.color)
    }
}
