//! Recursive heuristic lookahead.
//!
//! A single evaluation function serves both seats: the same maximization
//! runs at every ply (there is no separate minimizing code path like the
//! [`minimax`](super::minimax) strategy has). Each node clones the board,
//! applies one hypothetical placement for the side to move, and then
//! keeps the best of the negated child values one ply down; a leaf scores
//! the disc differential of the seat being evaluated.
//!
//! The scoring fixtures depend on this exact shape — do not restructure
//! it into the two-procedure alternating form.

use rand::Rng;

use crate::board::{Board, Color, Coord};
use crate::error::EngineError;

use super::SCORE_MIN;

/// Score one hypothetical placement.
///
/// `is_acting_seat` selects which color plays at this node: the acting
/// seat's own color, or the opponent's. An illegal placement terminates
/// the branch with the sentinel minimum regardless of remaining depth,
/// and a node whose every child is illegal resolves to the sentinel too.
pub(super) fn evaluate(
    depth: u32,
    board: &Board,
    acting: Color,
    is_acting_seat: bool,
    coord: Coord,
) -> Result<i64, EngineError> {
    let mut node = board.try_clone()?;
    let mover = if is_acting_seat {
        acting
    } else {
        acting.opponent()
    };
    if !node.put(coord, mover) {
        return Ok(SCORE_MIN);
    }

    if depth == 0 {
        let own = node.count_of(acting) as i64;
        let opp = node.count_of(acting.opponent()) as i64;
        return Ok((own - opp) * 100);
    }

    let mut best: Option<i64> = None;
    for child in node.coords() {
        match evaluate(depth - 1, &node, acting, !is_acting_seat, child) {
            Ok(SCORE_MIN) => continue,
            Ok(value) => {
                // A good reply for the side that just moved is a bad
                // position for the side about to move, hence the flip.
                let value = -value;
                if best.map_or(true, |b| value > b) {
                    best = Some(value);
                }
            }
            // A clone failure drops this child; the scan continues.
            Err(EngineError::CloneFailed) => continue,
            Err(other) => return Err(other),
        }
    }
    Ok(best.unwrap_or(SCORE_MIN))
}

pub(super) fn choose(
    board: &Board,
    color: Color,
    depth: u32,
    rng: &mut impl Rng,
) -> Result<Coord, EngineError> {
    let mut best: Option<(i64, Coord)> = None;
    for coord in board.coords() {
        if board.count_reversible_discs(coord, color) == 0 {
            continue;
        }
        let value = match evaluate(depth, board, color, true, coord) {
            Ok(value) => value,
            Err(EngineError::CloneFailed) => continue,
            Err(other) => return Err(other),
        };
        let score = value + rng.random_range(0..100i64);
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, coord));
        }
    }
    best.map(|(_, coord)| coord).ok_or(EngineError::ContractViolation(
        "lookahead strategy invoked with no legal move available",
    ))
}
