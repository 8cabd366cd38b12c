//! Corridor path generation.
//!
//! The hidden path is a monotonic right/down lattice walk biased toward
//! long straight runs. Straight corridors are easier for young players to
//! trace than a jittery per-step random walk, so a turn is only considered
//! once the current run has reached a minimum length.

use mathmaze_core::Position;
use rand::{Rng, RngExt};

/// Probability of turning once the minimum corridor length is reached and
/// the other axis still has room.
const TURN_PROBABILITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Down,
}

impl Direction {
    fn other(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Right,
        }
    }
}

/// Generates a corridor-style path across a `size`×`size` grid.
///
/// The path starts at `(0, 0)`, ends at `(size-1, size-1)`, moves only
/// right or down, and visits exactly `2·size - 1` distinct positions. The
/// minimum corridor length before a voluntary turn is
/// `max(2, size / 4)`; turns are forced when the current direction runs
/// out of room, and skipped when the other axis is exhausted.
///
/// # Panics
///
/// Panics if `size` is less than 2.
///
/// # Examples
///
/// ```
/// use mathmaze_core::Position;
/// use mathmaze_generator::generate_corridor_path;
///
/// let mut rng = rand::rng();
/// let path = generate_corridor_path(&mut rng, 7);
/// assert_eq!(path.len(), 13);
/// assert_eq!(path[0], Position::new(0, 0));
/// assert_eq!(path[12], Position::new(6, 6));
/// ```
pub fn generate_corridor_path<R: Rng + ?Sized>(rng: &mut R, size: u8) -> Vec<Position> {
    assert!(size >= 2, "path size must be at least 2, got {size}");
    let limit = size - 1;
    let min_run = (size / 4).max(2);

    let mut pos = Position::new(0, 0);
    let mut path = Vec::with_capacity(usize::from(size) * 2 - 1);
    path.push(pos);

    let mut direction = if rng.random_bool(0.5) {
        Direction::Right
    } else {
        Direction::Down
    };
    let mut run_length = 0u8;

    while pos.x() < limit || pos.y() < limit {
        let has_room = |dir: Direction| match dir {
            Direction::Right => pos.x() < limit,
            Direction::Down => pos.y() < limit,
        };

        if !has_room(direction) {
            // Out of room straight ahead; the turn is forced.
            direction = direction.other();
            run_length = 0;
        } else if run_length >= min_run
            && has_room(direction.other())
            && rng.random_bool(TURN_PROBABILITY)
        {
            direction = direction.other();
            run_length = 0;
        }

        pos = match direction {
            Direction::Right => pos.right(),
            Direction::Down => pos.down(),
        };
        run_length += 1;
        path.push(pos);
    }

    path
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn assert_corridor_shape(path: &[Position], size: u8) {
        let limit = size - 1;
        assert_eq!(path.len(), usize::from(size) * 2 - 1);
        assert_eq!(path[0], Position::new(0, 0));
        assert_eq!(path[path.len() - 1], Position::new(limit, limit));

        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let step_right = to == from.right();
            let step_down = to == from.down();
            assert!(
                step_right ^ step_down,
                "non-lattice step {from} -> {to} at size {size}"
            );
        }

        let distinct: BTreeSet<_> = path.iter().copied().collect();
        assert_eq!(distinct.len(), path.len(), "revisited position");
    }

    #[test]
    fn test_shape_across_sizes_and_seeds() {
        for seed in 0..50 {
            let mut rng = Pcg64::seed_from_u64(seed);
            for size in 2..=20 {
                let path = generate_corridor_path(&mut rng, size);
                assert_corridor_shape(&path, size);
            }
        }
    }

    #[test]
    fn test_minimal_size() {
        let mut rng = Pcg64::seed_from_u64(0);
        let path = generate_corridor_path(&mut rng, 2);
        assert_eq!(path.len(), 3);
        assert_corridor_shape(&path, 2);
    }

    #[test]
    #[should_panic(expected = "path size must be at least 2")]
    fn test_size_one_panics() {
        let mut rng = Pcg64::seed_from_u64(0);
        let _ = generate_corridor_path(&mut rng, 1);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn prop_path_is_monotonic(size in 3u8..=20, seed in any::<u64>()) {
                let mut rng = Pcg64::seed_from_u64(seed);
                let path = generate_corridor_path(&mut rng, size);
                assert_corridor_shape(&path, size);

                for pair in path.windows(2) {
                    prop_assert!(pair[1].x() >= pair[0].x());
                    prop_assert!(pair[1].y() >= pair[0].y());
                }
            }
        }
    }
}
