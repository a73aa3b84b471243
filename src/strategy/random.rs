//! Uniform-random strategy: every legal coordinate draws a score in
//! `[0, 1000)` and the arg-max wins. Illegal coordinates are skipped
//! outright.

use rand::Rng;

use crate::board::{Board, Color, Coord};
use crate::error::EngineError;

pub(super) fn choose(
    board: &Board,
    color: Color,
    rng: &mut impl Rng,
) -> Result<Coord, EngineError> {
    let mut best: Option<(i64, Coord)> = None;
    for coord in board.coords() {
        if board.count_reversible_discs(coord, color) == 0 {
            continue;
        }
        let score = rng.random_range(0..1000i64);
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, coord));
        }
    }
    best.map(|(_, coord)| coord).ok_or(EngineError::ContractViolation(
        "random strategy invoked with no legal move available",
    ))
}
