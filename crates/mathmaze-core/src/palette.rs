//! Color palettes for one generation run.

use crate::Color;

/// An ordered, duplicate-free, non-empty set of colors.
///
/// A palette determines which colors may appear as path targets and decoys
/// in one generation run. The fixed difficulty palettes come from
/// [`Mode::palette`]; arbitrary palettes can be built with [`Palette::new`].
///
/// [`Mode::palette`]: crate::Mode::palette
///
/// # Examples
///
/// ```
/// use mathmaze_core::{Color, Palette};
///
/// let palette = Palette::new(vec![Color::Red, Color::Green, Color::Blue]).unwrap();
/// assert_eq!(palette.color_count(), 3);
/// assert!(palette.contains(Color::Green));
/// assert_eq!(palette.decoy_colors(Color::Red), [Color::Green, Color::Blue]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty, or
    /// [`PaletteError::DuplicateColor`] if a color appears more than once.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        for (i, &color) in colors.iter().enumerate() {
            if colors[..i].contains(&color) {
                return Err(PaletteError::DuplicateColor { color });
            }
        }
        Ok(Self { colors })
    }

    pub(crate) fn from_colors(colors: &[Color]) -> Self {
        Self {
            colors: colors.to_vec(),
        }
    }

    /// Returns the colors in palette order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the number of colors in the palette (always at least 1).
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Returns whether the palette contains the given color.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Returns the palette's colors excluding `target`, in palette order.
    ///
    /// These are the colors eligible for decoy cells when `target` is the
    /// puzzle's path color. The result is empty for a single-color palette.
    #[must_use]
    pub fn decoy_colors(&self, target: Color) -> Vec<Color> {
        self.colors
            .iter()
            .copied()
            .filter(|&color| color != target)
            .collect()
    }
}

/// Errors from palette construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PaletteError {
    /// The palette has no colors.
    #[display("palette must contain at least one color")]
    Empty,
    /// The same color appears more than once.
    #[display("duplicate color in palette: {color}")]
    DuplicateColor {
        /// The repeated color.
        color: Color,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert_eq!(Palette::new(vec![]), Err(PaletteError::Empty));
        assert_eq!(
            Palette::new(vec![Color::Red, Color::Red]),
            Err(PaletteError::DuplicateColor { color: Color::Red })
        );

        let palette = Palette::new(vec![Color::Blue, Color::Red]).unwrap();
        assert_eq!(palette.colors(), [Color::Blue, Color::Red]);
    }

    #[test]
    fn test_decoy_colors_excludes_target() {
        let palette = Palette::new(vec![Color::Red, Color::Green, Color::Blue]).unwrap();
        assert_eq!(
            palette.decoy_colors(Color::Green),
            [Color::Red, Color::Blue]
        );

        let single = Palette::new(vec![Color::Red]).unwrap();
        assert!(single.decoy_colors(Color::Red).is_empty());
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn prop_valid_palettes_never_contain_their_decoy_target(
                values in proptest::collection::vec(1u8..=8, 1..=8),
                target_value in 1u8..=8,
            ) {
                let colors: Vec<_> = values.into_iter().map(Color::from_value).collect();
                let Ok(palette) = Palette::new(colors.clone()) else {
                    // Duplicates are the only way a non-empty list is rejected
                    prop_assert!((1..colors.len()).any(|i| colors[..i].contains(&colors[i])));
                    return Ok(());
                };

                let target = Color::from_value(target_value);
                let decoys = palette.decoy_colors(target);
                prop_assert!(!decoys.contains(&target));
                prop_assert_eq!(
                    decoys.len(),
                    palette.color_count() - usize::from(palette.contains(target))
                );
            }
        }
    }
}
