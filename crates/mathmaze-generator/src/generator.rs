//! Seeded puzzle-set generation.

use log::debug;
use mathmaze_core::{Grade, Mode, Palette};

use crate::{DecoyTuning, GeneratedMaze, MazeSeed, build_maze};

/// Parameters for one generation run.
///
/// The fields are public so callers can adjust them directly;
/// [`MazeGenerator::new`] validates the whole configuration before any
/// generation happens.
///
/// # Examples
///
/// ```
/// use mathmaze_core::{Grade, Mode};
/// use mathmaze_generator::GeneratorConfig;
///
/// let mut config = GeneratorConfig::new(7, Grade::G3, Mode::Medium);
/// config.puzzle_count = 3;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Grid dimension (at least 2).
    pub size: u8,
    /// Grade level gating problem operations.
    pub grade: Grade,
    /// Colors in play. A [`Palette`] is non-empty by construction, so an
    /// empty palette is rejected before it can reach the generator.
    pub palette: Palette,
    /// Number of independent puzzles per set (at least 1).
    pub puzzle_count: usize,
    /// Decoy placement probabilities.
    pub decoy_tuning: DecoyTuning,
}

impl GeneratorConfig {
    /// Creates a single-puzzle configuration with the mode's fixed palette
    /// and default decoy tuning.
    #[must_use]
    pub fn new(size: u8, grade: Grade, mode: Mode) -> Self {
        Self {
            size,
            grade,
            palette: mode.palette(),
            puzzle_count: 1,
            decoy_tuning: DecoyTuning::default(),
        }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.size < 2 {
            return Err(GeneratorError::SizeTooSmall { size: self.size });
        }
        if self.puzzle_count < 1 {
            return Err(GeneratorError::NoPuzzles);
        }
        if !self.decoy_tuning.is_valid() {
            return Err(GeneratorError::InvalidDecoyTuning);
        }
        Ok(())
    }
}

/// Generates puzzle sets from a validated configuration.
///
/// # Examples
///
/// ```
/// use mathmaze_core::{Grade, Mode};
/// use mathmaze_generator::{GeneratorConfig, MazeGenerator};
///
/// let config = GeneratorConfig::new(5, Grade::G1, Mode::Easy);
/// let generator = MazeGenerator::new(config).unwrap();
///
/// let set = generator.generate();
/// assert_eq!(set.puzzles.len(), 1);
///
/// // The same seed reproduces the same set.
/// let replay = generator.generate_with_seed(set.seed);
/// assert_eq!(replay, set);
/// ```
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    /// Creates a generator, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the size is below 2, the puzzle
    /// count is zero, or a decoy probability lies outside `[0, 1]`.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the validated configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle set from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedSet {
        self.generate_with_seed(MazeSeed::random())
    }

    /// Generates the puzzle set determined by `seed`.
    ///
    /// The same configuration and seed always produce the same set.
    #[must_use]
    pub fn generate_with_seed(&self, seed: MazeSeed) -> GeneratedSet {
        let GeneratorConfig {
            size,
            grade,
            ref palette,
            puzzle_count,
            decoy_tuning,
        } = self.config;

        debug!(
            "generating {puzzle_count} puzzle(s): size {size}, grade {grade}, \
             {} color(s), seed {seed}",
            palette.color_count()
        );

        let puzzles = (0..puzzle_count)
            .map(|index| {
                #[expect(clippy::cast_possible_truncation)]
                let mut rng = seed.puzzle_rng(index as u32);
                build_maze(&mut rng, size, grade, palette, decoy_tuning)
            })
            .collect();

        GeneratedSet { puzzles, seed }
    }
}

/// A generated puzzle set: the puzzles plus the seed that reproduces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSet {
    /// The generated puzzles, in set order.
    pub puzzles: Vec<GeneratedMaze>,
    /// The seed that reproduces this set.
    pub seed: MazeSeed,
}

impl GeneratedSet {
    /// Returns the total number of scorable path cells across all puzzles.
    #[must_use]
    pub fn total_path_cells(&self) -> usize {
        self.puzzles.iter().map(GeneratedMaze::path_cell_count).sum()
    }
}

/// Errors from generator configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The requested grid dimension cannot hold a start and an end corner.
    #[display("maze size must be at least 2, got {size}")]
    SizeTooSmall {
        /// The rejected size.
        size: u8,
    },
    /// The requested puzzle count was zero.
    #[display("puzzle count must be at least 1")]
    NoPuzzles,
    /// A decoy probability lies outside `[0, 1]`.
    #[display("decoy probabilities must lie in [0, 1]")]
    InvalidDecoyTuning,
}
