//! Worked hints for unsolved path cells.

use mathmaze_core::{Color, Position, Problem};
use rand::{Rng, RngExt};

use crate::PuzzleSet;

/// A worked hint for one path cell that is missing or wrongly colored.
///
/// Exposes everything a consumer needs to display the hint: the cell, its
/// problem, and the required color (whose [`name`] is the display string).
///
/// [`name`]: Color::name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Index of the puzzle within the set.
    pub puzzle_index: usize,
    /// The cell to color.
    pub position: Position,
    /// The cell's problem.
    pub problem: Problem,
    /// The color the problem's answer implies.
    pub color: Color,
}

impl PuzzleSet {
    /// Picks a random path cell that is not yet correctly colored, across
    /// all puzzles. Start and end markers are never hinted.
    ///
    /// Returns `None` when every path cell is already correct.
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
    /// let set = PuzzleSet::new(generator.generate());
    ///
    /// let hint = set.hint(&mut rand::rng()).expect("nothing is painted yet");
    /// assert_eq!(hint.color, set.puzzle(0).unwrap().target_color());
    /// ```
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Hint> {
        let mut candidates = Vec::new();
        for (puzzle_index, puzzle) in self.puzzles().iter().enumerate() {
            let target = puzzle.target_color();
            for &position in puzzle.path() {
                let cell = puzzle
                    .maze()
                    .get(position)
                    .expect("path positions are in bounds");
                if cell.is_start() || cell.is_end() {
                    continue;
                }
                if puzzle.user_color(position) != Some(target) {
                    candidates.push(Hint {
                        puzzle_index,
                        position,
                        problem: cell.problem().expect("path cells have problems").clone(),
                        color: target,
                    });
                }
            }
        }

        if candidates.is_empty() {
            return None;
        }
        let index = rng.random_range(0..candidates.len());
        Some(candidates.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use mathmaze_core::{Grade, Mode};
    use mathmaze_generator::{GeneratorConfig, MazeGenerator, MazeSeed};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn set() -> PuzzleSet {
        let config = GeneratorConfig::new(5, Grade::G1, Mode::Easy);
        let generator = MazeGenerator::new(config).unwrap();
        PuzzleSet::new(generator.generate_with_seed(MazeSeed::from_bytes([8; 32])))
    }

    #[test]
    fn test_hint_targets_unsolved_path_cells() {
        let set = set();
        let mut rng = Pcg64::seed_from_u64(0);

        let hint = set.hint(&mut rng).unwrap();
        assert_eq!(hint.puzzle_index, 0);
        assert_eq!(hint.color, set.puzzle(0).unwrap().target_color());
        assert!(set.puzzle(0).unwrap().path().contains(&hint.position));
        assert_eq!(
            hint.problem.answer(),
            u32::from(hint.color.value()),
            "hint problem must solve to the target color"
        );
    }

    #[test]
    fn test_hint_skips_correct_cells_and_exhausts() {
        let mut set = set();
        let mut rng = Pcg64::seed_from_u64(1);
        let target = set.puzzle(0).unwrap().target_color();
        let path = set.puzzle(0).unwrap().path().to_vec();

        // Solve every scorable path cell except one
        for &pos in &path[1..path.len() - 2] {
            set.paint(0, pos, target).unwrap();
        }
        let remaining = path[path.len() - 2];
        for _ in 0..20 {
            let hint = set.hint(&mut rng).unwrap();
            assert_eq!(hint.position, remaining);
        }

        // Solve the last one: no hint left
        set.paint(0, remaining, target).unwrap();
        assert_eq!(set.hint(&mut rng), None);
    }

    #[test]
    fn test_wrongly_colored_cells_are_hintable() {
        let mut set = set();
        let mut rng = Pcg64::seed_from_u64(2);
        let target = set.puzzle(0).unwrap().target_color();
        let path = set.puzzle(0).unwrap().path().to_vec();
        let wrong = Mode::Easy
            .palette()
            .decoy_colors(target)
            .into_iter()
            .next()
            .unwrap();

        for &pos in &path[1..path.len() - 1] {
            set.paint(0, pos, target).unwrap();
        }
        set.paint(0, path[1], wrong).unwrap();

        let hint = set.hint(&mut rng).unwrap();
        assert_eq!(hint.position, path[1]);
    }
}
