//! Maze color representation.

use std::fmt::{self, Display};

/// A maze color in the range 1-8.
///
/// Each color pairs an integer identity with a display name. The integer is
/// the number every arithmetic problem for that color must evaluate to; the
/// name is presentation-only. Identity comparisons use the integer.
///
/// # Examples
///
/// ```
/// use mathmaze_core::Color;
///
/// let color = Color::Blue;
/// assert_eq!(color.value(), 5);
/// assert_eq!(color.name(), "Blue");
///
/// // Create from a u8 value
/// let color = Color::from_value(3);
/// assert_eq!(color, Color::Yellow);
///
/// // Iterate over all colors
/// for color in Color::ALL {
///     println!("{}", color);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    /// Red, answer value 1.
    Red = 1,
    /// Orange, answer value 2.
    Orange = 2,
    /// Yellow, answer value 3.
    Yellow = 3,
    /// Green, answer value 4.
    Green = 4,
    /// Blue, answer value 5.
    Blue = 5,
    /// Purple, answer value 6.
    Purple = 6,
    /// Brown, answer value 7.
    Brown = 7,
    /// Black, answer value 8.
    Black = 8,
}

impl Color {
    /// Array containing all colors in answer-value order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathmaze_core::Color;
    ///
    /// assert_eq!(Color::ALL.len(), 8);
    /// assert_eq!(Color::ALL[0], Color::Red);
    /// assert_eq!(Color::ALL[7], Color::Black);
    /// ```
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Brown,
        Self::Black,
    ];

    /// Creates a color from a u8 value in the range 1-8.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathmaze_core::Color;
    ///
    /// let color = Color::from_value(1);
    /// assert_eq!(color, Color::Red);
    /// ```
    ///
    /// ```should_panic
    /// use mathmaze_core::Color;
    ///
    /// // This will panic
    /// let _ = Color::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::Red,
            2 => Self::Orange,
            3 => Self::Yellow,
            4 => Self::Green,
            5 => Self::Blue,
            6 => Self::Purple,
            7 => Self::Brown,
            8 => Self::Black,
            _ => panic!("Invalid color value: {value}"),
        }
    }

    /// Returns the answer value of this color (1-8).
    ///
    /// # Examples
    ///
    /// ```
    /// use mathmaze_core::Color;
    ///
    /// assert_eq!(Color::Red.value(), 1);
    /// assert_eq!(Color::Black.value(), 8);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display name of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathmaze_core::Color;
    ///
    /// assert_eq!(Color::Green.name(), "Green");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Brown => "Brown",
            Self::Black => "Black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.value()
    }
}
