//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that reproduces one generation run.
///
/// Seeds print and parse as 64 lowercase hex characters, so a run can be
/// recorded and replayed exactly. Each puzzle in a set draws from its own
/// PRNG stream derived by hashing the seed together with the puzzle index,
/// so puzzles within a set are independent while the whole set remains a
/// pure function of the seed.
///
/// # Examples
///
/// ```
/// use mathmaze_generator::MazeSeed;
///
/// let seed = MazeSeed::from_bytes([7; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<MazeSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed([u8; 32]);

impl MazeSeed {
    /// Draws a fresh random seed from the operating system's entropy.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the deterministic PRNG stream for the puzzle at `index`
    /// within a set.
    pub(crate) fn puzzle_rng(&self, index: u32) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(index.to_le_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        Pcg64::from_seed(digest)
    }
}

impl Display for MazeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for MazeSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError);
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| ParseSeedError)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError)?;
        }
        Ok(Self(bytes))
    }
}

/// Error parsing a [`MazeSeed`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("seed must be 64 hex characters")]
pub struct ParseSeedError;
