//! Static one-ply heuristic.
//!
//! Every board coordinate is scored: illegal cells get the sentinel
//! minimum, legal cells get `flips * 100` plus a positional bonus (corners
//! are worth holding, edges less so) plus a small noise term that breaks
//! up deterministic play.

use rand::Rng;

use crate::board::{Board, Color, Coord, BOARD_SIZE};
use crate::error::EngineError;

use super::SCORE_MIN;

const CORNER_BONUS: i64 = 2000;
const EDGE_BONUS: i64 = 500;

/// Positional bonus: +2000 for a corner, +500 for a non-corner edge cell.
fn positional_bonus(coord: Coord) -> i64 {
    let last = BOARD_SIZE - 1;
    let on_row_edge = coord.row() == 0 || coord.row() == last;
    let on_col_edge = coord.col() == 0 || coord.col() == last;
    if on_row_edge && on_col_edge {
        CORNER_BONUS
    } else if on_row_edge || on_col_edge {
        EDGE_BONUS
    } else {
        0
    }
}

pub(super) fn choose(
    board: &Board,
    color: Color,
    rng: &mut impl Rng,
) -> Result<Coord, EngineError> {
    let mut best: Option<(i64, Coord)> = None;
    for coord in board.coords() {
        let flips = board.count_reversible_discs(coord, color) as i64;
        let score = if flips == 0 {
            SCORE_MIN
        } else {
            flips * 100 + positional_bonus(coord) + rng.random_range(0..100i64)
        };
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, coord));
        }
    }
    match best {
        Some((score, coord)) if score > SCORE_MIN => Ok(coord),
        _ => Err(EngineError::ContractViolation(
            "heuristic strategy invoked with no legal move available",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn bonus_tiers() {
        assert_eq!(positional_bonus(at(0, 0)), CORNER_BONUS);
        assert_eq!(positional_bonus(at(7, 7)), CORNER_BONUS);
        assert_eq!(positional_bonus(at(0, 3)), EDGE_BONUS);
        assert_eq!(positional_bonus(at(5, 7)), EDGE_BONUS);
        assert_eq!(positional_bonus(at(3, 3)), 0);
    }

    #[test]
    fn picks_a_legal_move_on_fresh_board() {
        let board = Board::new();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let coord = choose(&board, Color::White, &mut rng).unwrap();
        assert!(board.count_reversible_discs(coord, Color::White) > 0);
    }

    #[test]
    fn prefers_a_corner_when_reachable() {
        use crate::board::Cell;
        // White run along the top row flanked so that a1 flips it for
        // Black; a competing interior move flips the same number of discs
        // but carries no bonus.
        let mut cells = [Cell::Empty; 64];
        cells[1] = Cell::Taken(Color::White); // b1
        cells[2] = Cell::Taken(Color::Black); // c1
        cells[27] = Cell::Taken(Color::White); // d4
        cells[28] = Cell::Taken(Color::Black); // e4
        let board = Board::from_cells(cells);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        // Both a1 (corner, 1 flip) and c4 (interior, 1 flip) are legal;
        // the corner bonus dominates any noise draw.
        let coord = choose(&board, Color::Black, &mut rng).unwrap();
        assert_eq!(coord, at(0, 0));
    }

    #[test]
    fn flip_count_dominates_within_a_tier() {
        use crate::board::Cell;
        // Two interior options: one flips a single disc, the other a run
        // of three. 100-point-per-flip spread exceeds the noise range.
        let mut cells = [Cell::Empty; 64];
        // Row 3: black anchor at h4, whites at e4..g4 — d4 flips three.
        cells[3 * 8 + 4] = Cell::Taken(Color::White);
        cells[3 * 8 + 5] = Cell::Taken(Color::White);
        cells[3 * 8 + 6] = Cell::Taken(Color::White);
        cells[3 * 8 + 7] = Cell::Taken(Color::Black);
        // Row 5: black anchor at d6 next to a lone white at c6 — b6 flips one.
        cells[5 * 8 + 2] = Cell::Taken(Color::White);
        cells[5 * 8 + 3] = Cell::Taken(Color::Black);
        let board = Board::from_cells(cells);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let coord = choose(&board, Color::Black, &mut rng).unwrap();
        assert_eq!(coord, at(3, 3)); // d4
    }
}
