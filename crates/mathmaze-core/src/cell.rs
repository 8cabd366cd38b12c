//! Maze cell kinds.

use derive_more::IsVariant;

use crate::{Color, Problem};

/// One grid position of a maze.
///
/// A cell's kind and contents are fixed at generation time and never
/// mutated. Path cells carry a problem whose answer equals the puzzle's
/// target color; decoy cells carry a problem evaluating to some other
/// palette color; walls carry nothing and cannot be colored.
///
/// # Examples
///
/// ```
/// use mathmaze_core::{Cell, Color, Problem};
///
/// let cell = Cell::Decoy {
///     problem: Problem::new("1+3", 4),
///     color: Color::Green,
/// };
/// assert!(cell.is_decoy());
/// assert!(cell.is_colorable());
/// assert_eq!(cell.color(), Some(Color::Green));
///
/// assert!(!Cell::Wall.is_colorable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Cell {
    /// A wall: no problem, not colorable.
    Wall,
    /// A cell on the hidden path.
    Path {
        /// The problem to solve; its answer equals the puzzle's target color.
        problem: Problem,
        /// The color implied by the problem's answer.
        color: Color,
        /// Whether this is the first path position.
        is_start: bool,
        /// Whether this is the last path position.
        is_end: bool,
    },
    /// An off-path cell with a plausible but non-target problem.
    Decoy {
        /// The problem to solve; its answer equals a non-target palette color.
        problem: Problem,
        /// The color implied by the problem's answer.
        color: Color,
    },
}

impl Cell {
    /// Returns the cell's problem, if it has one.
    #[must_use]
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            Self::Wall => None,
            Self::Path { problem, .. } | Self::Decoy { problem, .. } => Some(problem),
        }
    }

    /// Returns the color implied by the cell's problem, if it has one.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Wall => None,
            Self::Path { color, .. } | Self::Decoy { color, .. } => Some(*color),
        }
    }

    /// Returns whether this is the path's starting cell.
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Path { is_start: true, .. })
    }

    /// Returns whether this is the path's ending cell.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::Path { is_end: true, .. })
    }

    /// Returns whether a player may paint this cell.
    ///
    /// Walls and the start/end markers are fixed; everything else is fair
    /// game.
    #[must_use]
    pub fn is_colorable(&self) -> bool {
        !self.is_wall() && !self.is_start() && !self.is_end()
    }
}
