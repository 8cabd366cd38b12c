//! Named grid-size presets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A named grid dimension preset.
///
/// Each preset maps to a square maze dimension. Presets exist so callers can
/// offer a fixed menu of sizes rather than free-form numbers.
///
/// # Examples
///
/// ```
/// use mathmaze_core::SizePreset;
///
/// assert_eq!(SizePreset::Small.dimension(), 5);
/// assert_eq!("large".parse::<SizePreset>().unwrap(), SizePreset::Large);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizePreset {
    /// 5×5 grid.
    Small,
    /// 7×7 grid.
    Medium,
    /// 9×9 grid.
    Large,
    /// 10×10 grid.
    XLarge,
    /// 12×12 grid.
    Huge,
    /// 15×15 grid.
    Giant,
    /// 18×18 grid.
    Epic,
}

impl SizePreset {
    /// Array containing all presets in ascending size order.
    pub const ALL: [Self; 7] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::Huge,
        Self::Giant,
        Self::Epic,
    ];

    /// Returns the grid dimension for this preset.
    #[must_use]
    pub const fn dimension(self) -> u8 {
        match self {
            Self::Small => 5,
            Self::Medium => 7,
            Self::Large => 9,
            Self::XLarge => 10,
            Self::Huge => 12,
            Self::Giant => 15,
            Self::Epic => 18,
        }
    }

    /// Returns the display name of this preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
            Self::Huge => "huge",
            Self::Giant => "giant",
            Self::Epic => "epic",
        }
    }
}

impl Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizePreset {
    type Err = ParseSizePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or(ParseSizePresetError)
    }
}

/// Error parsing a [`SizePreset`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("size must be one of: small, medium, large, xlarge, huge, giant, epic")]
pub struct ParseSizePresetError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_ascending() {
        let dimensions: Vec<_> = SizePreset::ALL.iter().map(|p| p.dimension()).collect();
        assert_eq!(dimensions, [5, 7, 9, 10, 12, 15, 18]);
        assert!(dimensions.is_sorted());
    }

    #[test]
    fn test_parse_round_trip() {
        for preset in SizePreset::ALL {
            assert_eq!(preset.name().parse::<SizePreset>().unwrap(), preset);
        }
        assert!("tiny".parse::<SizePreset>().is_err());
    }
}
