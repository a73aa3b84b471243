//! True alternating fixed-depth minimax.
//!
//! Two mutually recursive evaluators: `evaluate_max` plays the acting
//! seat's color and keeps the maximum over the opponent's replies,
//! `evaluate_mini` plays the opponent's color and keeps the minimum over
//! the acting seat's replies. Leaves return the disc differential from the
//! acting seat's perspective.
//!
//! When the side to move at a ply has no legal reply, the node resolves to
//! the sentinel extreme in that side's unfavorable direction instead of
//! passing the turn back — this diverges from official pass rules and is
//! preserved deliberately.
//!
//! Inner nodes are only ever asked to place coordinates already known
//! legal; an illegal placement there is a broken precondition, not a
//! recoverable state.

use rand::Rng;

use crate::board::{Board, Color, Coord};
use crate::error::EngineError;

use super::{SCORE_MAX, SCORE_MIN};

/// Disc differential from the acting seat's perspective, scaled by 100.
fn differential(board: &Board, acting: Color) -> i64 {
    let own = board.count_of(acting) as i64;
    let opp = board.count_of(acting.opponent()) as i64;
    (own - opp) * 100
}

fn evaluate_max(
    depth: u32,
    board: &Board,
    coord: Coord,
    acting: Color,
    leaf_noise: bool,
    rng: &mut impl Rng,
) -> Result<i64, EngineError> {
    let mut node = board.try_clone()?;
    let placed = node.put(coord, acting);
    assert!(placed, "minimax max node asked to place illegal move {coord}");

    if depth == 0 {
        let mut value = differential(&node, acting);
        if leaf_noise {
            value += rng.random_range(0..100i64);
        }
        return Ok(value);
    }

    let opponent = acting.opponent();
    let mut best: Option<i64> = None;
    for reply in node.coords() {
        if node.count_reversible_discs(reply, opponent) == 0 {
            continue;
        }
        match evaluate_mini(depth - 1, &node, reply, acting, leaf_noise, rng) {
            Ok(value) => best = Some(best.map_or(value, |b| b.max(value))),
            Err(EngineError::CloneFailed) => continue,
            Err(other) => return Err(other),
        }
    }
    // Opponent has no legal coordinate: sentinel, no pass-back.
    Ok(best.unwrap_or(SCORE_MIN))
}

fn evaluate_mini(
    depth: u32,
    board: &Board,
    coord: Coord,
    acting: Color,
    leaf_noise: bool,
    rng: &mut impl Rng,
) -> Result<i64, EngineError> {
    let mut node = board.try_clone()?;
    let placed = node.put(coord, acting.opponent());
    assert!(placed, "minimax mini node asked to place illegal move {coord}");

    if depth == 0 {
        let mut value = differential(&node, acting);
        if leaf_noise {
            value += rng.random_range(0..100i64);
        }
        return Ok(value);
    }

    let mut best: Option<i64> = None;
    for reply in node.coords() {
        if node.count_reversible_discs(reply, acting) == 0 {
            continue;
        }
        match evaluate_max(depth - 1, &node, reply, acting, leaf_noise, rng) {
            Ok(value) => best = Some(best.map_or(value, |b| b.min(value))),
            Err(EngineError::CloneFailed) => continue,
            Err(other) => return Err(other),
        }
    }
    // Acting seat has no legal reply: sentinel in the minimizer's
    // unfavorable direction.
    Ok(best.unwrap_or(SCORE_MAX))
}

pub(super) fn choose(
    board: &Board,
    color: Color,
    depth: u32,
    leaf_noise: bool,
    rng: &mut impl Rng,
) -> Result<Coord, EngineError> {
    let mut best: Option<(i64, Coord)> = None;
    for coord in board.coords() {
        if board.count_reversible_discs(coord, color) == 0 {
            continue;
        }
        let score = match evaluate_max(
            depth.saturating_sub(1),
            board,
            coord,
            color,
            leaf_noise,
            rng,
        ) {
            Ok(score) => score,
            Err(EngineError::CloneFailed) => continue,
            Err(other) => return Err(other),
        };
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, coord));
        }
    }
    best.map(|(_, coord)| coord).ok_or(EngineError::ContractViolation(
        "minimax strategy invoked with no legal move available",
    ))
}
