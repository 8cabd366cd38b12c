//! Example demonstrating maze puzzle generation.
//!
//! This example shows how to:
//! - Configure a `MazeGenerator` from command-line options
//! - Generate a puzzle set and display it as text
//! - Reproduce a previous run from its seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_maze
//! ```
//!
//! Pick a size preset, grade, and difficulty mode:
//!
//! ```sh
//! cargo run --example generate_maze -- --size large --grade 4 --mode hard
//! ```
//!
//! Generate several puzzles at once:
//!
//! ```sh
//! cargo run --example generate_maze -- --count 3
//! ```
//!
//! Replay a previous run:
//!
//! ```sh
//! cargo run --example generate_maze -- --seed <64 hex chars>
//! ```

use std::process;

use clap::Parser;
use mathmaze_core::{Cell, Grade, Mode, SizePreset};
use mathmaze_generator::{GeneratedMaze, GeneratorConfig, MazeGenerator, MazeSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid size preset.
    #[arg(long, value_name = "PRESET", default_value = "small")]
    size: SizePreset,

    /// Grade level (1-7).
    #[arg(long, value_name = "GRADE", default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=7))]
    grade: u8,

    /// Difficulty mode selecting the color palette.
    #[arg(long, value_name = "MODE", default_value = "easy")]
    mode: Mode,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Reproduce a previous run from its seed (64 hex chars).
    #[arg(long, value_name = "SEED")]
    seed: Option<MazeSeed>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = GeneratorConfig::new(
        args.size.dimension(),
        Grade::from_value(args.grade),
        args.mode,
    );
    config.puzzle_count = args.count;

    let generator = match MazeGenerator::new(config) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let set = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", set.seed);
    println!();

    for (i, puzzle) in set.puzzles.iter().enumerate() {
        print_puzzle(i, puzzle);
    }
}

fn print_puzzle(index: usize, puzzle: &GeneratedMaze) {
    println!("Puzzle {}:", index + 1);
    println!(
        "  Target color: {} (answer {})",
        puzzle.target_color,
        puzzle.target_color.value()
    );
    println!("  Path cells to color: {}", puzzle.path_cell_count());
    println!();

    let labels: Vec<Vec<String>> = (0..puzzle.size())
        .map(|y| {
            (0..puzzle.size())
                .map(|x| {
                    let cell = puzzle
                        .maze
                        .get(mathmaze_core::Position::new(x, y))
                        .expect("position is in bounds");
                    cell_label(cell)
                })
                .collect()
        })
        .collect();

    let width = labels
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    for row in &labels {
        print!("  ");
        for label in row {
            let padding = width - label.chars().count();
            print!("[{label}{}] ", " ".repeat(padding));
        }
        println!();
    }
    println!();
}

fn cell_label(cell: &Cell) -> String {
    if cell.is_start() {
        "START".to_owned()
    } else if cell.is_end() {
        "END".to_owned()
    } else {
        match cell {
            Cell::Wall => "#".to_owned(),
            Cell::Path { problem, .. } | Cell::Decoy { problem, .. } => problem.to_string(),
        }
    }
}
