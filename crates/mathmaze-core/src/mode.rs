//! Difficulty modes and their fixed palettes.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Color, Palette};

/// A named difficulty tier selecting a fixed color palette.
///
/// Easy plays with three colors, medium with five, hard with all eight.
/// Fewer colors in play means fewer answer values to discriminate between.
///
/// # Examples
///
/// ```
/// use mathmaze_core::Mode;
///
/// let palette = Mode::Easy.palette();
/// assert_eq!(palette.color_count(), 3);
///
/// let mode: Mode = "hard".parse().unwrap();
/// assert_eq!(mode, Mode::Hard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Three colors: red, green, blue.
    Easy,
    /// Five colors: red, orange, yellow, green, blue.
    Medium,
    /// All eight colors.
    Hard,
}

impl Mode {
    /// Array containing all modes in ascending difficulty order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    const EASY_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
    const MEDIUM_COLORS: [Color; 5] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
    ];

    /// Returns the fixed palette for this mode.
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Easy => Palette::from_colors(&Self::EASY_COLORS),
            Self::Medium => Palette::from_colors(&Self::MEDIUM_COLORS),
            Self::Hard => Palette::from_colors(&Color::ALL),
        }
    }

    /// Returns the display name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseModeError),
        }
    }
}

/// Error parsing a [`Mode`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("mode must be one of: easy, medium, hard")]
pub struct ParseModeError;
