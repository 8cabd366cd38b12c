//! Procedural generation of mathmaze puzzles.
//!
//! A puzzle is a square grid hiding a corridor-style path from the top-left
//! to the bottom-right corner. Every cell on the path carries an arithmetic
//! problem evaluating to the puzzle's single target color; off-path cells
//! are either decoys (problems evaluating to other palette colors) or
//! walls. Players solve the problems, paint the implied colors, and reveal
//! the path.
//!
//! # Overview
//!
//! - [`generate_problem`]: grade-gated arithmetic problem synthesis
//! - [`generate_corridor_path`]: monotonic right/down paths with long
//!   straight runs
//! - [`build_maze`]: assembles one puzzle from a target color, a path, and
//!   adjacency-weighted decoy placement
//! - [`MazeGenerator`]: validated, seed-reproducible generation of whole
//!   puzzle sets
//!
//! All randomness flows through injected [`rand::Rng`] sources; the
//! generator derives per-puzzle [`rand_pcg::Pcg64`] streams from a
//! [`MazeSeed`], so any run can be replayed from its printed seed.
//!
//! # Examples
//!
//! ```
//! use mathmaze_core::{Grade, Mode};
//! use mathmaze_generator::{GeneratorConfig, MazeGenerator};
//!
//! let mut config = GeneratorConfig::new(5, Grade::G2, Mode::Easy);
//! config.puzzle_count = 2;
//!
//! let generator = MazeGenerator::new(config)?;
//! let set = generator.generate();
//!
//! assert_eq!(set.puzzles.len(), 2);
//! for puzzle in &set.puzzles {
//!     assert_eq!(puzzle.path.len(), 9);
//! }
//! # Ok::<(), mathmaze_generator::GeneratorError>(())
//! ```

pub use self::{builder::*, generator::*, path::*, problem::*, seed::*};

mod builder;
mod generator;
mod path;
mod problem;
mod seed;
