//! The puzzle set owning all session state.

use log::debug;
use mathmaze_core::{Color, Position};
use mathmaze_generator::{GeneratedSet, MazeSeed};

use crate::{GameError, Puzzle};

/// An ordered collection of puzzles sharing one generation run, plus the
/// player's mutable color choices.
///
/// A set is created wholesale from a [`GeneratedSet`] and replaced
/// wholesale on regeneration; only the per-puzzle `user_colors` maps and
/// correctness counters ever change in place.
///
/// # Examples
///
/// ```
/// use mathmaze_core::{Grade, Mode};
/// use mathmaze_game::PuzzleSet;
/// use mathmaze_generator::{GeneratorConfig, MazeGenerator};
///
/// let config = GeneratorConfig::new(5, Grade::G1, Mode::Easy);
/// let generator = MazeGenerator::new(config).unwrap();
/// let mut set = PuzzleSet::new(generator.generate());
///
/// // Paint the first scorable path cell with the target color
/// let target = set.puzzle(0).unwrap().target_color();
/// let pos = set.puzzle(0).unwrap().path()[1];
/// set.paint(0, pos, target).unwrap();
///
/// let result = set.check();
/// assert_eq!(result.total_correct, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
    total_path_cells: usize,
    seed: MazeSeed,
}

impl PuzzleSet {
    /// Creates a puzzle set from a generation run, with empty player state.
    #[must_use]
    pub fn new(set: GeneratedSet) -> Self {
        let total_path_cells = set.total_path_cells();
        debug!(
            "new puzzle set: {} puzzle(s), {total_path_cells} path cell(s), seed {}",
            set.puzzles.len(),
            set.seed
        );
        Self {
            puzzles: set.puzzles.into_iter().map(Puzzle::new).collect(),
            total_path_cells,
            seed: set.seed,
        }
    }

    /// Returns the puzzles in set order.
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Returns the number of puzzles in the set.
    #[must_use]
    pub fn puzzle_count(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns the seed of the generation run that produced this set.
    #[must_use]
    pub const fn seed(&self) -> MazeSeed {
        self.seed
    }

    /// Returns the puzzle at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleIndexOutOfRange`] if the index does not
    /// name a puzzle in this set.
    pub fn puzzle(&self, index: usize) -> Result<&Puzzle, GameError> {
        self.puzzles
            .get(index)
            .ok_or(GameError::PuzzleIndexOutOfRange { index })
    }

    fn puzzle_mut(&mut self, index: usize) -> Result<&mut Puzzle, GameError> {
        self.puzzles
            .get_mut(index)
            .ok_or(GameError::PuzzleIndexOutOfRange { index })
    }

    /// Paints a cell of one puzzle with the given color.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleIndexOutOfRange`] for a bad puzzle index,
    /// [`GameError::CellOutOfBounds`] for a position outside the maze, or
    /// [`GameError::CellNotColorable`] for walls and start/end markers.
    pub fn paint(
        &mut self,
        puzzle_index: usize,
        position: Position,
        color: Color,
    ) -> Result<(), GameError> {
        self.puzzle_mut(puzzle_index)?.paint(position, color)
    }

    /// Removes the player's color from a cell of one puzzle.
    ///
    /// # Errors
    ///
    /// Same conditions as [`paint`](PuzzleSet::paint).
    pub fn erase(&mut self, puzzle_index: usize, position: Position) -> Result<(), GameError> {
        self.puzzle_mut(puzzle_index)?.erase(position)
    }

    /// Clears all player colors and correctness counters, keeping the
    /// generated mazes untouched so the player can try again without
    /// regenerating.
    pub fn reset(&mut self) {
        debug!("resetting puzzle set");
        for puzzle in &mut self.puzzles {
            puzzle.reset();
        }
    }

    /// Returns the total number of scorable path cells across all puzzles.
    #[must_use]
    pub const fn total_path_cells(&self) -> usize {
        self.total_path_cells
    }

    /// Returns the total number of correctly painted path cells as of the
    /// last check.
    #[must_use]
    pub fn total_correct_cells(&self) -> usize {
        self.puzzles.iter().map(Puzzle::correct_cell_count).sum()
    }

    pub(crate) fn puzzles_mut(&mut self) -> &mut [Puzzle] {
        &mut self.puzzles
    }
}

#[cfg(test)]
mod tests {
    use mathmaze_core::{Grade, Mode};
    use mathmaze_generator::{GeneratorConfig, MazeGenerator};

    use super::*;

    fn set(puzzle_count: usize) -> PuzzleSet {
        let mut config = GeneratorConfig::new(5, Grade::G1, Mode::Easy);
        config.puzzle_count = puzzle_count;
        let generator = MazeGenerator::new(config).unwrap();
        PuzzleSet::new(generator.generate_with_seed(MazeSeed::from_bytes([9; 32])))
    }

    #[test]
    fn test_totals_aggregate_over_puzzles() {
        let set = set(3);
        assert_eq!(set.puzzle_count(), 3);
        let per_puzzle: usize = set.puzzles().iter().map(Puzzle::path_cell_count).sum();
        assert_eq!(set.total_path_cells(), per_puzzle);
        assert_eq!(set.total_correct_cells(), 0);
    }

    #[test]
    fn test_indexed_access_errors() {
        let mut set = set(1);
        assert_eq!(
            set.puzzle(1).unwrap_err(),
            GameError::PuzzleIndexOutOfRange { index: 1 }
        );
        assert_eq!(
            set.paint(2, Position::new(1, 0), Color::Red).unwrap_err(),
            GameError::PuzzleIndexOutOfRange { index: 2 }
        );
        assert_eq!(
            set.erase(2, Position::new(1, 0)).unwrap_err(),
            GameError::PuzzleIndexOutOfRange { index: 2 }
        );
    }

    #[test]
    fn test_reset_clears_player_state_only() {
        let mut set = set(1);
        let pos = set.puzzle(0).unwrap().path()[1];
        let target = set.puzzle(0).unwrap().target_color();
        let maze_before = set.puzzle(0).unwrap().maze().clone();

        set.paint(0, pos, target).unwrap();
        set.check();
        assert_eq!(set.total_correct_cells(), 1);

        set.reset();
        assert!(set.puzzle(0).unwrap().user_colors().is_empty());
        assert_eq!(set.total_correct_cells(), 0);
        assert_eq!(set.puzzle(0).unwrap().maze(), &maze_before);
    }
}
