//! Core data structures for mathmaze puzzles.
//!
//! This crate provides the fundamental, immutable types shared by the
//! generation and game-state components:
//!
//! - [`color`]: The eight maze colors, each pairing an answer value (1-8)
//!   with a display name
//! - [`palette`] / [`mode`]: Which colors are in play for one generation
//!   run, and the named difficulty tiers selecting them
//! - [`grade`]: School grade levels (1-7) gating arithmetic operations
//! - [`size_preset`]: Named square grid dimensions
//! - [`position`]: Grid coordinates
//! - [`problem`]: An arithmetic expression paired with its answer
//! - [`cell`] / [`maze`]: The grid of walls, path cells, and decoy cells
//!
//! Everything here is plain data: generation lives in `mathmaze-generator`
//! and mutable session state in `mathmaze-game`.
//!
//! # Examples
//!
//! ```
//! use mathmaze_core::{Color, Mode, Position};
//!
//! let palette = Mode::Medium.palette();
//! assert!(palette.contains(Color::Orange));
//!
//! let start = Position::new(0, 0);
//! assert_eq!(start.right().down(), Position::new(1, 1));
//! ```

pub mod cell;
pub mod color;
pub mod grade;
pub mod maze;
pub mod mode;
pub mod palette;
pub mod position;
pub mod problem;
pub mod size_preset;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    color::Color,
    grade::Grade,
    maze::Maze,
    mode::{Mode, ParseModeError},
    palette::{Palette, PaletteError},
    position::Position,
    problem::Problem,
    size_preset::{ParseSizePresetError, SizePreset},
};
