//! The maze grid container.

use crate::{Cell, Position};

/// A square grid of [`Cell`]s in row-major order.
///
/// A freshly created maze is all walls; the generator assigns path and decoy
/// cells before handing the maze out. After generation every cell holds
/// exactly one kind and the path cells form a single monotonic corridor from
/// the top-left to the bottom-right corner.
///
/// # Examples
///
/// ```
/// use mathmaze_core::{Cell, Maze, Position};
///
/// let maze = Maze::new(5);
/// assert_eq!(maze.size(), 5);
/// assert_eq!(maze.get(Position::new(0, 0)), Some(&Cell::Wall));
/// assert_eq!(maze.get(Position::new(5, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: u8,
    cells: Vec<Cell>,
}

impl Maze {
    /// Creates a `size`×`size` maze with every cell a wall.
    ///
    /// # Panics
    ///
    /// Panics if `size` is less than 2; a maze needs at least a start and an
    /// end corner.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size >= 2, "maze size must be at least 2, got {size}");
        let cell_count = usize::from(size) * usize::from(size);
        Self {
            size,
            cells: vec![Cell::Wall; cell_count],
        }
    }

    /// Returns the grid dimension.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the cell at the given position, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// Replaces the cell at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let i = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("position {pos} out of bounds for size {}", self.size));
        self.cells[i] = cell;
    }

    /// Returns all positions of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Returns whether the position lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x() < self.size && pos.y() < self.size
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| usize::from(pos.y()) * usize::from(self.size) + usize::from(pos.x()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Problem};

    #[test]
    fn test_new_is_all_walls() {
        let maze = Maze::new(3);
        assert_eq!(maze.positions().count(), 9);
        assert!(maze.positions().all(|pos| maze.get(pos).unwrap().is_wall()));
    }

    #[test]
    fn test_set_and_get() {
        let mut maze = Maze::new(3);
        let pos = Position::new(2, 1);
        maze.set(
            pos,
            Cell::Decoy {
                problem: Problem::new("1+1", 2),
                color: Color::Orange,
            },
        );
        assert!(maze.get(pos).unwrap().is_decoy());
        assert_eq!(maze.get(Position::new(3, 0)), None);
        assert_eq!(maze.get(Position::new(0, 3)), None);
    }

    #[test]
    fn test_positions_row_major() {
        let maze = Maze::new(2);
        let positions: Vec<_> = maze.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "maze size must be at least 2")]
    fn test_size_one_panics() {
        let _ = Maze::new(1);
    }
}
