//! Game state errors.

use mathmaze_core::Position;

/// Errors from paint, erase, and lookup operations on a puzzle set.
///
/// All of these signal a usage error: the caller passed a stale or
/// out-of-range identifier, or targeted a cell that is fixed by
/// construction. They never occur when driving the set from a rendering of
/// its own mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The puzzle index does not name a puzzle in this set.
    #[display("no puzzle at index {index}")]
    PuzzleIndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// The position lies outside the puzzle's maze.
    #[display("position {position} is outside the maze")]
    CellOutOfBounds {
        /// The rejected position.
        position: Position,
    },
    /// The cell is a wall or a start/end marker and cannot be colored.
    #[display("cell at {position} cannot be colored")]
    CellNotColorable {
        /// The rejected position.
        position: Position,
    },
}
