//! School grade levels.

use std::fmt::{self, Display};

/// A school grade level in the range 1-7.
///
/// The grade gates which arithmetic operations appear in generated problems:
/// grades 1-2 use addition and subtraction, grade 3 adds multiplication,
/// grade 4 adds division, and grades 5-7 use two-step expressions.
///
/// # Examples
///
/// ```
/// use mathmaze_core::Grade;
///
/// let grade = Grade::G3;
/// assert_eq!(grade.value(), 3);
///
/// let grade = Grade::from_value(5);
/// assert_eq!(grade, Grade::G5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Grade {
    /// First grade.
    G1 = 1,
    /// Second grade.
    G2 = 2,
    /// Third grade.
    G3 = 3,
    /// Fourth grade.
    G4 = 4,
    /// Fifth grade.
    G5 = 5,
    /// Sixth grade.
    G6 = 6,
    /// Seventh grade.
    G7 = 7,
}

impl Grade {
    /// Array containing all grades from 1 to 7.
    pub const ALL: [Self; 7] = [
        Self::G1,
        Self::G2,
        Self::G3,
        Self::G4,
        Self::G5,
        Self::G6,
        Self::G7,
    ];

    /// Creates a grade from a u8 value in the range 1-7.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-7.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathmaze_core::Grade;
    ///
    /// assert_eq!(Grade::from_value(1), Grade::G1);
    /// assert_eq!(Grade::from_value(7), Grade::G7);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::G1,
            2 => Self::G2,
            3 => Self::G3,
            4 => Self::G4,
            5 => Self::G5,
            6 => Self::G6,
            7 => Self::G7,
            _ => panic!("Invalid grade value: {value}"),
        }
    }

    /// Returns the numeric value of this grade (1-7).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_value(grade.value()), grade);
        }
        assert_eq!(Grade::ALL.len(), 7);
        assert_eq!(format!("{}", Grade::G4), "4");
    }

    #[test]
    #[should_panic(expected = "Invalid grade value: 8")]
    fn test_from_value_eight_panics() {
        let _ = Grade::from_value(8);
    }
}
