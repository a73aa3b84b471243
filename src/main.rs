//! # Reversi match shell
//!
//! Thin command-line front end for the engine: builds two players from
//! the CLI arguments, drives the match loop, prompts for manual moves,
//! and prints the board and the final log. All rule logic lives in the
//! library; this binary only does I/O.
//!
//! ## Usage
//! ```text
//! play --black manual --white minimax --seed 7
//! ```
//! Manual seats enter moves in column-letter/row-number form, e.g. `c4`.

use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;

use clap::Parser;
use colored::Colorize;

use reversi::strategy::{DEFAULT_LOOKAHEAD_DEPTH, DEFAULT_MINIMAX_DEPTH};
use reversi::{
    Board, Cell, Color, Coord, EngineError, GameController, Player, Strategy, StrategyKind,
    TurnOutcome, BOARD_SIZE,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Strategy for the Black seat (moves first).
    #[clap(short, long, value_enum, default_value_t = StrategyKind::Heuristic)]
    black: StrategyKind,

    /// Strategy for the White seat.
    #[clap(short, long, value_enum, default_value_t = StrategyKind::Minimax)]
    white: StrategyKind,

    #[clap(long, default_value = "black")]
    black_name: String,

    #[clap(long, default_value = "white")]
    white_name: String,

    /// Base RNG seed; the White seat derives its own stream from it.
    /// Drawn at random when omitted.
    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(long, default_value_t = DEFAULT_LOOKAHEAD_DEPTH)]
    lookahead_depth: u32,

    #[clap(long, default_value_t = DEFAULT_MINIMAX_DEPTH)]
    minimax_depth: u32,

    /// Add a random term to minimax leaf evaluations.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    leaf_noise: bool,

    /// Print only the final log, not the board after every move.
    #[clap(short, long, action = clap::ArgAction::SetTrue)]
    quiet: bool,
}

fn build_player(name: &str, color: Color, kind: StrategyKind, args: &Args, seed: u64) -> Player {
    let strategy = Strategy::new(kind, Player::seat_seed(seed, color))
        .with_lookahead_depth(args.lookahead_depth)
        .with_minimax_depth(args.minimax_depth)
        .with_leaf_noise(args.leaf_noise);
    Player::new(name, color, strategy)
}

fn render_board(board: &Board) -> String {
    let mut out = String::from("  ");
    for col in 0..BOARD_SIZE {
        out.push((b'a' + col as u8) as char);
        out.push(' ');
    }
    out.push('\n');
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} ", row + 1));
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col).expect("in-bounds by construction");
            let glyph = match board.color_at(coord) {
                Cell::Taken(Color::Black) => "●".green().to_string(),
                Cell::Taken(Color::White) => "●".bright_white().to_string(),
                Cell::Empty => "·".dimmed().to_string(),
            };
            out.push_str(&glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Read manual moves from stdin until one is accepted.
fn collect_manual_move(controller: &mut GameController) -> io::Result<()> {
    let color = controller.current_color();
    loop {
        print!("{color} to move (e.g. c4): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            eprintln!("input closed, aborting match");
            process::exit(1);
        }
        let coord = match Coord::from_str(line.trim()) {
            Ok(coord) => coord,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        match controller.submit_manual_move(coord) {
            Ok(true) => return Ok(()),
            Ok(false) => eprintln!("{coord} is not a legal placement"),
            Err(err) => fail(err),
        }
    }
}

fn fail(err: EngineError) -> ! {
    eprintln!("fatal engine error: {err}");
    process::exit(1);
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let black = build_player(&args.black_name, Color::Black, args.black, &args, seed);
    let white = build_player(&args.white_name, Color::White, args.white, &args, seed);
    let mut controller = GameController::new(black, white);

    if !args.quiet {
        println!("seed: {seed}");
        println!("{}", render_board(controller.board()));
    }

    loop {
        match controller.advance() {
            Ok(TurnOutcome::Moved(coord)) => {
                if !args.quiet {
                    let record = controller.records().last().expect("move was just recorded");
                    println!("{}. {} plays {}", record.turn, record.color, coord);
                    println!("{}", render_board(controller.board()));
                }
            }
            Ok(TurnOutcome::Skipped(color)) => {
                if !args.quiet {
                    println!("{color} has no legal move and skips");
                }
            }
            Ok(TurnOutcome::AwaitingManual) => {
                if !args.quiet {
                    println!("{}", render_board(controller.board()));
                }
                collect_manual_move(&mut controller)?;
            }
            Ok(TurnOutcome::Finished(_)) => {
                println!("{}", controller.format_log());
                return Ok(());
            }
            Err(err) => fail(err),
        }
    }
}
