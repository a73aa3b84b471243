//! # Match orchestration
//!
//! The [`GameController`] is the single source of truth for a match: it
//! owns the live board and the two players, runs the turn loop, records
//! every move and skip, and decides termination and the winner. Strategies
//! only ever see clones of the board; all mutation of the live board goes
//! through the controller.
//!
//! A match is created once, driven to a terminal status by repeated
//! [`GameController::advance`] calls (with [`GameController::submit_manual_move`]
//! supplying moves for manual seats), then queried for its result and log.
//! It is never reused for another game.

use std::fmt;

use crate::board::{Board, Color, Coord};
use crate::error::EngineError;
use crate::player::Player;

/// Current match status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Match is still in progress.
    InProgress,
    /// Match ended with a winning color.
    Win(Color),
    /// Match ended with equal disc counts.
    Draw,
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What a single [`GameController::advance`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The current seat placed a disc at the coordinate.
    Moved(Coord),
    /// The current seat had no legal placement and forfeited the turn.
    Skipped(Color),
    /// The current seat is manual; the caller must collect a move and
    /// submit it via [`GameController::submit_manual_move`].
    AwaitingManual,
    /// The match is over; no further turns will be played.
    Finished(GameStatus),
}

/// What a log record describes: a placement or a forfeited turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Move(Coord),
    Skip,
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordAction::Move(coord) => write!(f, "{coord}"),
            RecordAction::Skip => write!(f, "skip"),
        }
    }
}

/// One entry in the match log: the acting seat, the action, and both disc
/// counts with their change since the previous record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub turn: u32,
    pub color: Color,
    pub black_count: u32,
    pub white_count: u32,
    pub black_delta: i32,
    pub white_delta: i32,
    pub action: RecordAction,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} (B {} {:+} / W {} {:+})",
            self.turn,
            self.color,
            self.action,
            self.black_count,
            self.black_delta,
            self.white_count,
            self.white_delta
        )
    }
}

/// The central controller owning the authoritative match state.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    players: [Player; 2],
    current: usize,
    turn: u32,
    records: Vec<MoveRecord>,
    status: GameStatus,
}

impl GameController {
    /// Create a match on a fresh board. `black` moves first.
    pub fn new(black: Player, white: Player) -> Self {
        debug_assert_eq!(black.color(), Color::Black);
        debug_assert_eq!(white.color(), Color::White);
        GameController {
            board: Board::new(),
            players: [black, white],
            current: 0,
            turn: 1,
            records: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_color(&self) -> Color {
        self.players[self.current].color()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Winning color, if the match ended with one.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Win(color) => Some(color),
            _ => None,
        }
    }

    /// Play out one step of the turn loop.
    ///
    /// Handles skips and termination before consulting the seat's strategy.
    /// For a manual seat this returns [`TurnOutcome::AwaitingManual`] and
    /// changes nothing; the caller collects a coordinate and submits it
    /// through [`GameController::submit_manual_move`].
    ///
    /// An automated strategy proposing an illegal coordinate breaks its
    /// contract; that surfaces as a fatal [`EngineError::IllegalMove`].
    pub fn advance(&mut self) -> Result<TurnOutcome, EngineError> {
        if self.status.is_game_over() {
            return Ok(TurnOutcome::Finished(self.status));
        }

        let color = self.current_color();
        if !self.board.can_place_anywhere(color) {
            if !self.board.can_place_anywhere(color.opponent()) {
                // Neither seat can move: log both forfeits, then settle.
                self.push_record(color, RecordAction::Skip);
                self.rotate();
                self.push_record(color.opponent(), RecordAction::Skip);
                self.status = self.winner_by_counts();
                return Ok(TurnOutcome::Finished(self.status));
            }
            self.push_record(color, RecordAction::Skip);
            self.rotate();
            return Ok(TurnOutcome::Skipped(color));
        }

        if self.current_player().is_manual() {
            return Ok(TurnOutcome::AwaitingManual);
        }

        let coord = self.players[self.current].choose(&self.board)?;
        if !self.board.put(coord, color) {
            return Err(EngineError::IllegalMove(coord));
        }
        self.push_record(color, RecordAction::Move(coord));
        self.after_move();
        Ok(TurnOutcome::Moved(coord))
    }

    /// Apply an externally supplied move for the current (manual) seat.
    ///
    /// Returns `Ok(false)` when the placement is illegal; the caller
    /// re-prompts. The engine never loops on behalf of manual input.
    pub fn submit_manual_move(&mut self, coord: Coord) -> Result<bool, EngineError> {
        if self.status.is_game_over() {
            return Err(EngineError::ContractViolation(
                "manual move submitted to a finished match",
            ));
        }
        if !self.current_player().is_manual() {
            return Err(EngineError::ContractViolation(
                "manual move submitted for an automated seat",
            ));
        }

        let color = self.current_color();
        if !self.board.put(coord, color) {
            return Ok(false);
        }
        self.push_record(color, RecordAction::Move(coord));
        self.after_move();
        Ok(true)
    }

    /// Post-placement bookkeeping: termination checks in fixed priority,
    /// otherwise hand the turn to the other seat.
    fn after_move(&mut self) {
        if self.board.empty_count() == 0 {
            self.status = self.winner_by_counts();
            return;
        }
        if self.board.count_of(Color::Black) == 0 || self.board.count_of(Color::White) == 0 {
            self.status = self.winner_by_counts();
            return;
        }
        let mover = self.current_color();
        let next = mover.opponent();
        if !self.board.can_place_anywhere(next) && !self.board.can_place_anywhere(mover) {
            // Dead position: record the forfeit of each seat in turn
            // order before settling the result.
            self.rotate();
            self.push_record(next, RecordAction::Skip);
            self.rotate();
            self.push_record(mover, RecordAction::Skip);
            self.status = self.winner_by_counts();
            return;
        }
        self.rotate();
    }

    fn rotate(&mut self) {
        self.current = 1 - self.current;
        self.turn += 1;
    }

    fn push_record(&mut self, color: Color, action: RecordAction) {
        let black_count = self.board.count_of(Color::Black);
        let white_count = self.board.count_of(Color::White);
        let (prev_black, prev_white) = self
            .records
            .last()
            .map(|r| (r.black_count, r.white_count))
            .unwrap_or((2, 2));
        self.records.push(MoveRecord {
            turn: self.turn,
            color,
            black_count,
            white_count,
            black_delta: black_count as i32 - prev_black as i32,
            white_delta: white_count as i32 - prev_white as i32,
            action,
        });
    }

    fn winner_by_counts(&self) -> GameStatus {
        let black = self.board.count_of(Color::Black);
        let white = self.board.count_of(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameStatus::Win(Color::Black),
            std::cmp::Ordering::Less => GameStatus::Win(Color::White),
            std::cmp::Ordering::Equal => GameStatus::Draw,
        }
    }

    /// Format the match log as plain text, one record per line, followed
    /// by the result.
    pub fn format_log(&self) -> String {
        if self.records.is_empty() {
            return String::from("No moves made yet.\n");
        }

        let mut output = String::from("=== Reversi Match Log ===\n\n");
        for record in &self.records {
            output.push_str(&format!("{record}\n"));
        }
        match self.status {
            GameStatus::Win(color) => {
                let name = self
                    .players
                    .iter()
                    .find(|p| p.color() == color)
                    .map(Player::name)
                    .unwrap_or("?");
                output.push_str(&format!("\nResult: {color} ({name}) wins\n"));
            }
            GameStatus::Draw => output.push_str("\nResult: draw\n"),
            GameStatus::InProgress => {
                output.push_str(&format!("\n(in progress, {} to move)\n", self.current_color()));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::strategy::{Strategy, StrategyKind};

    fn automated(kind: StrategyKind, color: Color, seed: u64) -> Player {
        Player::new(format!("{color}"), color, Strategy::new(kind, seed))
    }

    fn random_pair(seed: u64) -> (Player, Player) {
        (
            automated(StrategyKind::Random, Color::Black, seed),
            automated(StrategyKind::Random, Color::White, seed + 1),
        )
    }

    /// Rebuild the controller around a handcrafted position.
    fn with_board(mut controller: GameController, board: Board) -> GameController {
        controller.board = board;
        controller
    }

    #[test]
    fn first_turn_is_black_on_a_fresh_board() {
        let (black, white) = random_pair(5);
        let controller = GameController::new(black, white);
        assert_eq!(controller.current_color(), Color::Black);
        assert_eq!(controller.turn(), 1);
        assert_eq!(controller.status(), GameStatus::InProgress);
    }

    #[test]
    fn advance_records_a_move_with_deltas() {
        let (black, white) = random_pair(11);
        let mut controller = GameController::new(black, white);
        let outcome = controller.advance().unwrap();
        let coord = match outcome {
            TurnOutcome::Moved(coord) => coord,
            other => panic!("expected a move, got {other:?}"),
        };
        let record = controller.records().last().copied().unwrap();
        assert_eq!(record.turn, 1);
        assert_eq!(record.color, Color::Black);
        assert_eq!(record.action, RecordAction::Move(coord));
        // Every opening flips exactly one disc: 2/2 becomes 4/1.
        assert_eq!((record.black_count, record.white_count), (4, 1));
        assert_eq!((record.black_delta, record.white_delta), (2, -1));
        assert_eq!(controller.current_color(), Color::White);
        assert_eq!(controller.turn(), 2);
    }

    #[test]
    fn manual_seat_waits_for_submission() {
        let black = Player::new("you", Color::Black, Strategy::new(StrategyKind::Manual, 0));
        let white = automated(StrategyKind::Random, Color::White, 9);
        let mut controller = GameController::new(black, white);

        assert_eq!(controller.advance().unwrap(), TurnOutcome::AwaitingManual);
        // Nothing changed while waiting.
        assert_eq!(controller.turn(), 1);
        assert!(controller.records().is_empty());

        // An illegal submission is rejected without state change.
        let dead = Coord::new(0, 0).unwrap();
        assert_eq!(controller.submit_manual_move(dead).unwrap(), false);
        assert_eq!(controller.turn(), 1);

        let c4 = Coord::new(3, 2).unwrap();
        assert_eq!(controller.submit_manual_move(c4).unwrap(), true);
        assert_eq!(controller.turn(), 2);
        assert_eq!(controller.current_color(), Color::White);
    }

    #[test]
    fn manual_submission_for_an_automated_seat_is_rejected() {
        let (black, white) = random_pair(3);
        let mut controller = GameController::new(black, white);
        let c4 = Coord::new(3, 2).unwrap();
        assert!(matches!(
            controller.submit_manual_move(c4),
            Err(EngineError::ContractViolation(_))
        ));
    }

    #[test]
    fn wiping_out_the_opponent_ends_the_match() {
        // Black c4 flips the lone white disc: White reaches zero discs.
        let mut cells = [Cell::Empty; 64];
        cells[3 * 8 + 3] = Cell::Taken(Color::White); // d4
        cells[3 * 8 + 4] = Cell::Taken(Color::Black); // e4
        let (black, white) = random_pair(17);
        let mut controller =
            with_board(GameController::new(black, white), Board::from_cells(cells));

        let outcome = controller.advance().unwrap();
        assert!(matches!(outcome, TurnOutcome::Moved(_)));
        assert_eq!(controller.status(), GameStatus::Win(Color::Black));
        assert_eq!(controller.winner(), Some(Color::Black));
        assert_eq!(controller.board().count_of(Color::White), 0);
    }

    #[test]
    fn dead_position_appends_two_skips_then_ends() {
        // Two discs in opposite corners: nobody can ever move.
        let mut cells = [Cell::Empty; 64];
        cells[0] = Cell::Taken(Color::Black); // a1
        cells[63] = Cell::Taken(Color::White); // h8
        let (black, white) = random_pair(23);
        let mut controller =
            with_board(GameController::new(black, white), Board::from_cells(cells));

        let outcome = controller.advance().unwrap();
        assert_eq!(outcome, TurnOutcome::Finished(GameStatus::Draw));
        let records = controller.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].color, Color::Black);
        assert_eq!(records[0].action, RecordAction::Skip);
        assert_eq!(records[0].turn, 1);
        assert_eq!(records[1].color, Color::White);
        assert_eq!(records[1].action, RecordAction::Skip);
        assert_eq!(records[1].turn, 2);
        assert!(controller.is_game_over());
    }

    #[test]
    fn blocked_seat_skips_and_play_continues() {
        // Row 4 reads "W B . . ."; the only white disc is anchored to
        // the edge, so every white run Black could flip ends off-board.
        // White, on the other hand, can flank b4 from c4.
        let mut cells = [Cell::Empty; 64];
        cells[3 * 8] = Cell::Taken(Color::White); // a4
        cells[3 * 8 + 1] = Cell::Taken(Color::Black); // b4
        let board = Board::from_cells(cells);
        assert!(!board.can_place_anywhere(Color::Black));
        assert!(board.can_place_anywhere(Color::White));

        let (black, white) = random_pair(29);
        let mut controller = with_board(GameController::new(black, white), board);

        assert_eq!(controller.advance().unwrap(), TurnOutcome::Skipped(Color::Black));
        assert_eq!(controller.status(), GameStatus::InProgress);
        assert_eq!(controller.current_color(), Color::White);
        assert_eq!(controller.turn(), 2);
        let record = controller.records().last().copied().unwrap();
        assert_eq!(record.action, RecordAction::Skip);
        assert_eq!(record.color, Color::Black);
        // A skip leaves the counts untouched.
        assert_eq!((record.black_delta, record.white_delta), (0, 0));
    }

    #[test]
    fn advancing_a_finished_match_is_a_no_op() {
        let mut cells = [Cell::Empty; 64];
        cells[0] = Cell::Taken(Color::Black);
        cells[63] = Cell::Taken(Color::White);
        let (black, white) = random_pair(31);
        let mut controller =
            with_board(GameController::new(black, white), Board::from_cells(cells));

        controller.advance().unwrap();
        let records_before = controller.records().len();
        let outcome = controller.advance().unwrap();
        assert!(matches!(outcome, TurnOutcome::Finished(_)));
        assert_eq!(controller.records().len(), records_before);
    }

    #[test]
    fn random_match_runs_to_termination() {
        let (black, white) = random_pair(101);
        let mut controller = GameController::new(black, white);
        // 60 placements plus a generous skip allowance.
        for _ in 0..200 {
            match controller.advance().unwrap() {
                TurnOutcome::Finished(status) => {
                    assert!(status.is_game_over());
                    break;
                }
                TurnOutcome::AwaitingManual => panic!("no manual seats in this match"),
                _ => {}
            }
        }
        assert!(controller.is_game_over());
        let board = controller.board();
        let total = board.count_of(Color::Black) + board.count_of(Color::White);
        assert_eq!(total + board.empty_count(), 64);
        // The result must agree with the final counts.
        match controller.status() {
            GameStatus::Win(color) => {
                assert!(board.count_of(color) > board.count_of(color.opponent()));
            }
            GameStatus::Draw => {
                assert_eq!(board.count_of(Color::Black), board.count_of(Color::White));
            }
            GameStatus::InProgress => unreachable!(),
        }
    }

    #[test]
    fn log_lists_every_record_and_the_result() {
        let (black, white) = random_pair(7);
        let mut controller = GameController::new(black, white);
        for _ in 0..200 {
            if let TurnOutcome::Finished(_) = controller.advance().unwrap() {
                break;
            }
        }
        let log = controller.format_log();
        assert!(log.contains("Result:"));
        for record in controller.records() {
            assert!(log.contains(&record.to_string()));
        }
    }
}
