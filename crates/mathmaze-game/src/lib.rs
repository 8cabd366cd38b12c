//! Game session state for mathmaze puzzles.
//!
//! This crate owns everything that changes while a puzzle set is being
//! played: the player's per-cell color choices, answer checking, and
//! hints. The generated mazes themselves stay immutable; regeneration
//! replaces the whole [`PuzzleSet`].
//!
//! # Overview
//!
//! - [`Puzzle`] / [`PuzzleSet`]: generated mazes plus paint/erase/reset
//! - [`CheckResult`]: per-cell verdicts, progress counts, and the
//!   success/partial/empty outcome with its feedback message
//! - [`Hint`]: a random unsolved path cell with its worked problem
//!
//! # Examples
//!
//! ```
//! use mathmaze_core::{Grade, Mode};
//! use mathmaze_game::PuzzleSet;
//! use mathmaze_generator::{GeneratorConfig, MazeGenerator};
//!
//! let config = GeneratorConfig::new(5, Grade::G1, Mode::Easy);
//! let generator = MazeGenerator::new(config).unwrap();
//! let mut set = PuzzleSet::new(generator.generate());
//!
//! // Paint every scorable path cell with the target color...
//! let target = set.puzzle(0).unwrap().target_color();
//! let path = set.puzzle(0).unwrap().path().to_vec();
//! for &pos in &path[1..path.len() - 1] {
//!     set.paint(0, pos, target).unwrap();
//! }
//!
//! // ...and the check reports success.
//! let result = set.check();
//! assert!(result.outcome().is_success());
//! ```

pub use self::{check::*, error::*, hint::*, puzzle::*, puzzle_set::*};

mod check;
mod error;
mod hint;
mod puzzle;
mod puzzle_set;
