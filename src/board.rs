//! # Board — move legality and flip engine
//!
//! The board is the single mutable structure in a match. It holds an 8×8
//! grid of cells plus incrementally maintained disc counters for both
//! colors, so `count_of` and `empty_count` are O(1) and never rescan.
//!
//! Legality and flipping share one primitive: from a candidate cell, scan
//! each of the 8 compass directions over contiguous opponent discs; a run
//! that terminates on an own-color disc is validated and contributes its
//! length. A placement is legal iff the total across directions is
//! positive, and `put` flips exactly the validated runs.
//!
//! Search code clones boards freely: the grid is a flat array, so a clone
//! is a plain memory copy with no shared storage between branches.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Board side length. The engine is fixed to the standard 8×8 game.
pub const BOARD_SIZE: usize = 8;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Fixed directional scan order: N, NE, E, SE, S, SW, W, NW.
/// The flip set is order-independent; the order is fixed only so the
/// implementation is deterministic.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// One of the two disc colors. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color. A two-element cycle used to alternate seats.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// The state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken(Color),
}

/// A zero-based (row, col) pair, bounded by the board dimensions.
///
/// Coordinates can only be built through the checked [`Coord::new`] (or
/// parsed from display notation), so holding a `Coord` guarantees it is on
/// the board. The display form is column letter plus 1-based row number:
/// row 3, col 2 renders as `"c4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Build a bounds-checked coordinate.
    pub fn new(row: usize, col: usize) -> Result<Coord, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Coord { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = String;

    /// Parse display notation, e.g. `"c4"` → row 3, col 2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| "expected format: column letter + row number, e.g. c4".to_string())?;
        let col = match letter.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(format!("invalid column letter '{letter}'")),
        };
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| format!("invalid row number in '{s}'"))?;
        if row == 0 || row > BOARD_SIZE {
            return Err(format!("row number must be 1..={BOARD_SIZE}, got {row}"));
        }
        Coord::new(row - 1, col).map_err(|e| e.to_string())
    }
}

/// The 8×8 Reversi board.
///
/// Owned exclusively by whichever context holds it: the live match board by
/// the controller, each search node by its own clone. `Clone` is a deep,
/// independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    black_count: u32,
    white_count: u32,
}

impl Board {
    /// A fresh board with the standard diagonal center arrangement:
    /// White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        cells[3 * BOARD_SIZE + 3] = Cell::Taken(Color::White);
        cells[3 * BOARD_SIZE + 4] = Cell::Taken(Color::Black);
        cells[4 * BOARD_SIZE + 3] = Cell::Taken(Color::Black);
        cells[4 * BOARD_SIZE + 4] = Cell::Taken(Color::White);
        Board {
            cells,
            black_count: 2,
            white_count: 2,
        }
    }

    pub fn rows(&self) -> usize {
        BOARD_SIZE
    }

    pub fn cols(&self) -> usize {
        BOARD_SIZE
    }

    /// Number of discs of `color` on the board. O(1), counter-backed.
    pub fn count_of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_count,
            Color::White => self.white_count,
        }
    }

    /// Number of empty cells. O(1).
    pub fn empty_count(&self) -> u32 {
        CELL_COUNT as u32 - self.black_count - self.white_count
    }

    pub fn color_at(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// All board coordinates in row-major order (smallest row, then
    /// smallest column). Strategies rely on this order for tie-breaking.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(|i| Coord {
            row: i / BOARD_SIZE,
            col: i % BOARD_SIZE,
        })
    }

    /// Length of the validated run in one direction, or 0.
    ///
    /// A run is a contiguous sequence of opponent discs starting next to
    /// `coord`; it is validated only if terminated by an own-color disc.
    /// Running off-board or hitting an empty cell invalidates it.
    fn run_length(&self, coord: Coord, color: Color, dir: (i32, i32)) -> u32 {
        let opponent = color.opponent();
        let mut len = 0;
        let mut r = coord.row as i32 + dir.0;
        let mut c = coord.col as i32 + dir.1;
        while r >= 0 && r < BOARD_SIZE as i32 && c >= 0 && c < BOARD_SIZE as i32 {
            match self.cells[r as usize * BOARD_SIZE + c as usize] {
                Cell::Taken(col) if col == opponent => len += 1,
                Cell::Taken(_) => return len,
                Cell::Empty => return 0,
            }
            r += dir.0;
            c += dir.1;
        }
        0
    }

    /// Total discs that placing `color` at `coord` would flip across all 8
    /// directions. 0 means the placement is illegal (including when the
    /// cell is already occupied).
    pub fn count_reversible_discs(&self, coord: Coord, color: Color) -> u32 {
        if self.cells[coord.index()] != Cell::Empty {
            return 0;
        }
        DIRECTIONS
            .iter()
            .map(|&dir| self.run_length(coord, color, dir))
            .sum()
    }

    /// Whether `color` has at least one legal placement.
    pub fn can_place_anywhere(&self, color: Color) -> bool {
        self.coords()
            .any(|coord| self.count_reversible_discs(coord, color) > 0)
    }

    /// Place a disc of `color` at `coord`, flipping every validated run.
    ///
    /// Returns `false` with no state change when the placement is illegal.
    /// Counters are updated incrementally, never by rescanning.
    pub fn put(&mut self, coord: Coord, color: Color) -> bool {
        let total = self.count_reversible_discs(coord, color);
        if total == 0 {
            return false;
        }

        self.cells[coord.index()] = Cell::Taken(color);
        for &dir in &DIRECTIONS {
            let len = self.run_length(coord, color, dir);
            let mut r = coord.row as i32;
            let mut c = coord.col as i32;
            for _ in 0..len {
                r += dir.0;
                c += dir.1;
                self.cells[r as usize * BOARD_SIZE + c as usize] = Cell::Taken(color);
            }
        }

        match color {
            Color::Black => {
                self.black_count += 1 + total;
                self.white_count -= total;
            }
            Color::White => {
                self.white_count += 1 + total;
                self.black_count -= total;
            }
        }
        debug_assert!(
            self.black_count + self.white_count + self.empty_count() == CELL_COUNT as u32,
            "disc counters out of sync with the grid"
        );
        true
    }

    /// Test-only: build a board directly from a cell array, deriving the
    /// counters by a one-time scan (the only full scan in the engine).
    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Cell; CELL_COUNT]) -> Board {
        let black_count = cells
            .iter()
            .filter(|&&c| c == Cell::Taken(Color::Black))
            .count() as u32;
        let white_count = cells
            .iter()
            .filter(|&&c| c == Cell::Taken(Color::White))
            .count() as u32;
        Board {
            cells,
            black_count,
            white_count,
        }
    }

    /// Deep, independent copy for search nodes.
    ///
    /// Infallible for this flat-array representation, but surfaced as a
    /// `Result` so search code treats duplication failure as a recoverable
    /// per-candidate condition rather than a crash.
    pub fn try_clone(&self) -> Result<Board, EngineError> {
        Ok(self.clone())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Plain-text grid: `●` Black, `○` White, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let glyph = match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => '.',
                    Cell::Taken(Color::Black) => '●',
                    Cell::Taken(Color::White) => '○',
                };
                write!(f, "{glyph}")?;
                if col + 1 < BOARD_SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
