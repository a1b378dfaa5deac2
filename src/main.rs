//! Twisty Cube Shuffler
//!
//! Scrambles a 3x3x3 twisty cube with random quarter turns, never letting a
//! move immediately undo its predecessor, and shows the result either as
//! text slices or as an animated interactive 3D view.

mod visualization;

use clap::{Parser, Subcommand};

use twister::cube::Cube;
use twister::shuffle::{self, DEFAULT_MOVES};

/// Shuffles a 3x3x3 twisty cube and visualizes the scramble.
#[derive(Parser)]
#[command(name = "twister")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Shuffle the cube and print the applied rotations and final state.
    Shuffle {
        /// Number of random quarter turns to apply.
        #[arg(short, long, default_value_t = DEFAULT_MOVES)]
        moves: usize,
    },
    /// Watch a shuffle animated in an interactive 3D viewer.
    Display {
        /// Number of random quarter turns per shuffle session.
        #[arg(short, long, default_value_t = DEFAULT_MOVES)]
        moves: usize,
    },
    /// Print the solved state.
    Show,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Shuffle { moves }) => run_shuffle(moves),
        Some(Command::Display { moves }) => run_display(moves),
        Some(Command::Show) => print!("{}", Cube::solved().format_state()),
        None => {
            // default: animate a shuffle in the viewer
            run_display(DEFAULT_MOVES)
        }
    }
}

/// Shuffles a fresh cube and prints the move sequence and the end state.
fn run_shuffle(moves: usize) {
    let mut cube = Cube::solved();
    let applied = shuffle::shuffle(&mut cube, moves, &mut rand::rng());

    for (i, rotation) in applied.iter().enumerate() {
        println!("{:>3}. {rotation}", i + 1);
    }
    println!();
    print!("{}", cube.format_state());
}

/// Opens the animated viewer with a shuffle already running.
fn run_display(moves: usize) {
    println!("Controls: S shuffle again, R reset");
    visualization::display(moves);
}
