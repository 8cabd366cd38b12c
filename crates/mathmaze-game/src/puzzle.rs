//! A single puzzle with player state.

use std::collections::BTreeMap;

use mathmaze_core::{Color, Maze, Position};
use mathmaze_generator::GeneratedMaze;

use crate::GameError;

/// One generated maze plus the player's color choices for it.
///
/// The generated maze (problems, path, target color) is immutable; only the
/// `user_colors` map and the correctness counter change, the former through
/// [`paint`]/[`erase`] and the latter through checking.
///
/// [`paint`]: Puzzle::paint
/// [`erase`]: Puzzle::erase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    generated: GeneratedMaze,
    user_colors: BTreeMap<Position, Color>,
    correct_cell_count: usize,
}

impl Puzzle {
    /// Wraps a generated maze with empty player state.
    #[must_use]
    pub fn new(generated: GeneratedMaze) -> Self {
        Self {
            generated,
            user_colors: BTreeMap::new(),
            correct_cell_count: 0,
        }
    }

    /// Returns the maze grid.
    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.generated.maze
    }

    /// Returns the hidden path coordinates, start to end.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.generated.path
    }

    /// Returns the grid dimension.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.generated.size()
    }

    /// Returns the color every path problem evaluates to.
    #[must_use]
    pub const fn target_color(&self) -> Color {
        self.generated.target_color
    }

    /// Returns the number of scorable path cells (start and end excluded).
    #[must_use]
    pub fn path_cell_count(&self) -> usize {
        self.generated.path_cell_count()
    }

    /// Returns the player's color for a cell, if painted.
    #[must_use]
    pub fn user_color(&self, position: Position) -> Option<Color> {
        self.user_colors.get(&position).copied()
    }

    /// Returns all painted cells and their colors.
    #[must_use]
    pub fn user_colors(&self) -> &BTreeMap<Position, Color> {
        &self.user_colors
    }

    /// Returns the number of correctly painted path cells as of the last
    /// check. Zero until the first check and after every reset.
    #[must_use]
    pub const fn correct_cell_count(&self) -> usize {
        self.correct_cell_count
    }

    /// Paints a cell with the given color, replacing any previous color.
    ///
    /// Correctness is not validated here; feedback is deferred to checking.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfBounds`] if the position lies outside
    /// the maze, or [`GameError::CellNotColorable`] for walls and the
    /// start/end markers.
    pub fn paint(&mut self, position: Position, color: Color) -> Result<(), GameError> {
        self.colorable_cell(position)?;
        self.user_colors.insert(position, color);
        Ok(())
    }

    /// Removes the player's color from a cell.
    ///
    /// Erasing a colorable cell that is not painted is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfBounds`] if the position lies outside
    /// the maze, or [`GameError::CellNotColorable`] for walls and the
    /// start/end markers.
    pub fn erase(&mut self, position: Position) -> Result<(), GameError> {
        self.colorable_cell(position)?;
        self.user_colors.remove(&position);
        Ok(())
    }

    pub(crate) fn reset(&mut self) {
        self.user_colors.clear();
        self.correct_cell_count = 0;
    }

    pub(crate) fn set_correct_cell_count(&mut self, count: usize) {
        self.correct_cell_count = count;
    }

    fn colorable_cell(&self, position: Position) -> Result<(), GameError> {
        let cell = self
            .maze()
            .get(position)
            .ok_or(GameError::CellOutOfBounds { position })?;
        if !cell.is_colorable() {
            return Err(GameError::CellNotColorable { position });
        }
        Ok(())
    }
}
