//! Answer checking.

use std::collections::BTreeMap;

use derive_more::IsVariant;
use mathmaze_core::Position;

use crate::{Puzzle, PuzzleSet};

/// Verdict for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellVerdict {
    /// A path cell painted with the target color.
    Correct,
    /// A path cell painted with a non-target color, or a painted decoy
    /// whose color contradicts its problem. A decoy painted with the
    /// *target* color is also wrong: the player solved it incorrectly, or
    /// is guessing at the path.
    Wrong,
    /// A path cell left unpainted.
    Missing,
    /// A decoy painted with its own true color: arithmetically consistent,
    /// but irrelevant to the path.
    Neutral,
}

/// Check results for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleCheck {
    /// Verdicts for every scorable path cell and every painted decoy.
    /// Unpainted decoys, walls, and the start/end markers are absent.
    pub verdicts: BTreeMap<Position, CellVerdict>,
    /// Path cells painted with the target color.
    pub correct: usize,
    /// Scorable path cells.
    pub total: usize,
}

impl PuzzleCheck {
    /// Returns whether every path cell is correctly painted.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.correct == self.total
    }
}

/// Aggregate result of checking a puzzle set.
///
/// Only path cells count toward the totals; decoy verdicts are reported
/// for display but never gate success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Per-puzzle breakdown, in set order.
    pub puzzles: Vec<PuzzleCheck>,
    /// Correctly painted path cells across all puzzles.
    pub total_correct: usize,
    /// Scorable path cells across all puzzles.
    pub total_path: usize,
}

impl CheckResult {
    /// Classifies the result as success, partial progress, or empty.
    #[must_use]
    pub fn outcome(&self) -> CheckOutcome {
        let all_correct = self.puzzles.iter().all(PuzzleCheck::is_complete);
        if all_correct && self.total_correct == self.total_path {
            CheckOutcome::Success
        } else if self.total_correct == 0 {
            CheckOutcome::Empty
        } else {
            CheckOutcome::Partial
        }
    }

    /// Returns the player-facing feedback message for this result.
    #[must_use]
    pub fn message(&self) -> String {
        match self.outcome() {
            CheckOutcome::Success => format!(
                "Perfect! You colored all {} path cells correctly!",
                self.total_path
            ),
            CheckOutcome::Empty => {
                "No path cells colored yet. Solve the math problems and color the cells!".to_owned()
            }
            CheckOutcome::Partial => format!(
                "{} of {} path cells correct. Keep going!",
                self.total_correct, self.total_path
            ),
        }
    }
}

/// Result classes for a checked puzzle set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CheckOutcome {
    /// Every path cell in every puzzle is correctly colored.
    Success,
    /// Some, but not all, path cells are correctly colored.
    Partial,
    /// No path cell is correctly colored yet.
    Empty,
}

impl PuzzleSet {
    /// Checks the player's colors against every puzzle.
    ///
    /// Each puzzle's correctness counter is updated to match the result.
    /// Without intervening paints, checking is idempotent.
    pub fn check(&mut self) -> CheckResult {
        let mut puzzles = Vec::with_capacity(self.puzzle_count());
        let mut total_correct = 0;
        let mut total_path = 0;

        for puzzle in self.puzzles_mut() {
            let check = check_puzzle(puzzle);
            puzzle.set_correct_cell_count(check.correct);
            total_correct += check.correct;
            total_path += check.total;
            puzzles.push(check);
        }

        CheckResult {
            puzzles,
            total_correct,
            total_path,
        }
    }
}

fn check_puzzle(puzzle: &Puzzle) -> PuzzleCheck {
    let mut verdicts = BTreeMap::new();
    let mut correct = 0;
    let mut total = 0;

    for position in puzzle.maze().positions() {
        let cell = puzzle
            .maze()
            .get(position)
            .expect("position is in bounds");
        if !cell.is_colorable() {
            continue;
        }

        let user_color = puzzle.user_color(position);
        if cell.is_path() {
            total += 1;
            let verdict = match user_color {
                Some(color) if color == puzzle.target_color() => {
                    correct += 1;
                    CellVerdict::Correct
                }
                Some(_) => CellVerdict::Wrong,
                None => CellVerdict::Missing,
            };
            verdicts.insert(position, verdict);
        } else if let Some(color) = user_color {
            let verdict = if Some(color) == cell.color() {
                CellVerdict::Neutral
            } else {
                CellVerdict::Wrong
            };
            verdicts.insert(position, verdict);
        }
    }

    PuzzleCheck {
        verdicts,
        correct,
        total,
    }
}
