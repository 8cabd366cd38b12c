//! Maze assembly: path, problems, decoys, and walls.

use mathmaze_core::{Cell, Color, Grade, Maze, Palette, Position};
use rand::{Rng, RngExt, seq::IndexedRandom as _};

use crate::{generate_corridor_path, generate_problem};

/// Decoy placement probabilities, keyed by adjacency to the hidden path.
///
/// Cells next to the path become decoys more often than distant cells:
/// near-path decoys make plausible distractors, while sparse walls keep the
/// rest of the maze visually quiet. The exact thresholds are tunable rather
/// than fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoyTuning {
    /// Probability that a non-path cell orthogonally adjacent to the path
    /// becomes a decoy.
    pub adjacent: f64,
    /// Probability that any other non-path cell becomes a decoy.
    pub distant: f64,
}

impl DecoyTuning {
    pub(crate) fn is_valid(self) -> bool {
        (0.0..=1.0).contains(&self.adjacent) && (0.0..=1.0).contains(&self.distant)
    }
}

impl Default for DecoyTuning {
    fn default() -> Self {
        Self {
            adjacent: 0.75,
            distant: 0.45,
        }
    }
}

/// One generated puzzle: the maze grid, its hidden path, and the target
/// color every path problem evaluates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// The assembled grid.
    pub maze: Maze,
    /// Path coordinates from the top-left to the bottom-right corner.
    pub path: Vec<Position>,
    /// The color whose value every path problem evaluates to.
    pub target_color: Color,
}

impl GeneratedMaze {
    /// Returns the grid dimension.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.maze.size()
    }

    /// Returns the number of scorable path cells (path length minus the
    /// start and end markers).
    #[must_use]
    pub fn path_cell_count(&self) -> usize {
        self.path.len() - 2
    }
}

/// Builds one puzzle: picks a target color, lays a corridor path of
/// problems for it, then fills the rest of the grid with decoys and walls.
///
/// Every path cell's problem evaluates to `target_color`; decoy problems
/// evaluate to some other palette color, so no decoy can be mistaken for a
/// path cell by a player who solves it correctly. With a single-color
/// palette there are no decoy colors and every off-path cell is a wall.
///
/// # Panics
///
/// Panics if `size` is less than 2, or if a tuning probability lies
/// outside `[0, 1]`. [`MazeGenerator`] validates both up front.
///
/// [`MazeGenerator`]: crate::MazeGenerator
///
/// # Examples
///
/// ```
/// use mathmaze_core::{Grade, Mode};
/// use mathmaze_generator::{DecoyTuning, build_maze};
///
/// let mut rng = rand::rng();
/// let palette = Mode::Easy.palette();
/// let puzzle = build_maze(&mut rng, 5, Grade::G1, &palette, DecoyTuning::default());
/// assert_eq!(puzzle.path.len(), 9);
/// assert!(palette.contains(puzzle.target_color));
/// ```
pub fn build_maze<R: Rng + ?Sized>(
    rng: &mut R,
    size: u8,
    grade: Grade,
    palette: &Palette,
    tuning: DecoyTuning,
) -> GeneratedMaze {
    let target_color = *palette
        .colors()
        .choose(rng)
        .expect("palette is never empty");
    let decoy_colors = palette.decoy_colors(target_color);

    let path = generate_corridor_path(rng, size);
    let mut maze = Maze::new(size);

    let index_of = |pos: Position| usize::from(pos.y()) * usize::from(size) + usize::from(pos.x());
    let mut on_path = vec![false; usize::from(size) * usize::from(size)];
    for &pos in &path {
        on_path[index_of(pos)] = true;
    }

    let last = path.len() - 1;
    for (i, &pos) in path.iter().enumerate() {
        let problem = generate_problem(rng, u32::from(target_color.value()), grade);
        maze.set(
            pos,
            Cell::Path {
                problem,
                color: target_color,
                is_start: i == 0,
                is_end: i == last,
            },
        );
    }

    for pos in maze.positions() {
        if on_path[index_of(pos)] {
            continue;
        }

        let adjacent_to_path = pos
            .orthogonal_neighbors()
            .any(|neighbor| maze.in_bounds(neighbor) && on_path[index_of(neighbor)]);
        let decoy_probability = if adjacent_to_path {
            tuning.adjacent
        } else {
            tuning.distant
        };

        if !decoy_colors.is_empty() && rng.random_bool(decoy_probability) {
            let color = *decoy_colors.choose(rng).expect("decoy colors are non-empty");
            let problem = generate_problem(rng, u32::from(color.value()), grade);
            maze.set(pos, Cell::Decoy { problem, color });
        }
        // Cells that lose the decoy roll stay walls.
    }

    GeneratedMaze {
        maze,
        path,
        target_color,
    }
}

#[cfg(test)]
mod tests {
    use mathmaze_core::Mode;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn build(seed: u64, size: u8, mode: Mode) -> GeneratedMaze {
        let mut rng = Pcg64::seed_from_u64(seed);
        build_maze(&mut rng, size, Grade::G3, &mode.palette(), DecoyTuning::default())
    }

    #[test]
    fn test_path_cells_match_target_color() {
        for seed in 0..20 {
            let puzzle = build(seed, 7, Mode::Medium);
            for &pos in &puzzle.path {
                let cell = puzzle.maze.get(pos).unwrap();
                assert!(cell.is_path());
                assert_eq!(cell.color(), Some(puzzle.target_color));
                assert_eq!(
                    cell.problem().unwrap().answer(),
                    u32::from(puzzle.target_color.value())
                );
            }
        }
    }

    #[test]
    fn test_no_decoy_matches_target_color() {
        for seed in 0..20 {
            let puzzle = build(seed, 9, Mode::Hard);
            for pos in puzzle.maze.positions() {
                if let Some(cell) = puzzle.maze.get(pos)
                    && cell.is_decoy()
                {
                    assert_ne!(cell.color(), Some(puzzle.target_color));
                    assert_ne!(
                        cell.problem().unwrap().answer(),
                        u32::from(puzzle.target_color.value())
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_cell_is_classified() {
        for seed in 0..20 {
            let puzzle = build(seed, 5, Mode::Easy);
            let mut path_cells = 0;
            for pos in puzzle.maze.positions() {
                let cell = puzzle.maze.get(pos).unwrap();
                if cell.is_path() {
                    path_cells += 1;
                } else {
                    assert!(cell.is_wall() || cell.is_decoy());
                }
            }
            assert_eq!(path_cells, puzzle.path.len());
            assert_eq!(puzzle.path_cell_count(), puzzle.path.len() - 2);
        }
    }

    #[test]
    fn test_start_and_end_markers() {
        let puzzle = build(0, 5, Mode::Easy);
        let first = puzzle.maze.get(puzzle.path[0]).unwrap();
        let last = puzzle.maze.get(puzzle.path[puzzle.path.len() - 1]).unwrap();
        assert!(first.is_start() && !first.is_end());
        assert!(last.is_end() && !last.is_start());

        for &pos in &puzzle.path[1..puzzle.path.len() - 1] {
            let cell = puzzle.maze.get(pos).unwrap();
            assert!(!cell.is_start() && !cell.is_end());
            assert!(cell.is_colorable());
        }
    }

    #[test]
    fn test_single_color_palette_has_no_decoys() {
        let palette = Palette::new(vec![Color::Red]).unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        let puzzle = build_maze(&mut rng, 6, Grade::G1, &palette, DecoyTuning::default());
        for pos in puzzle.maze.positions() {
            assert!(!puzzle.maze.get(pos).unwrap().is_decoy());
        }
    }

    #[test]
    fn test_zero_probability_tuning_yields_only_walls_off_path() {
        let tuning = DecoyTuning {
            adjacent: 0.0,
            distant: 0.0,
        };
        let mut rng = Pcg64::seed_from_u64(11);
        let puzzle = build_maze(&mut rng, 8, Grade::G2, &Mode::Hard.palette(), tuning);
        for pos in puzzle.maze.positions() {
            let cell = puzzle.maze.get(pos).unwrap();
            assert!(cell.is_path() || cell.is_wall());
        }
    }
}
