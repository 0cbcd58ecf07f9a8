//! School grade newtype with a smart constructor.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Elementary school grade, 1 through 6.
///
/// Grade N corresponds to Kanken level 11 − N (grade 1 is level 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

/// Grade outside 1..=6.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("grade must be between 1 and 6, got {0}")]
pub struct InvalidGrade(pub u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;
    pub const FIRST: Grade = Grade(1);

    /// Smart constructor: validates 1..=6.
    pub fn new(raw: u8) -> Result<Self, InvalidGrade> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(InvalidGrade(raw))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every grade in ascending order.
    pub fn all() -> impl Iterator<Item = Grade> {
        (Self::MIN..=Self::MAX).map(Grade)
    }

    /// Kanken level matching this grade.
    pub fn kanken_level(self) -> u8 {
        11 - self.0
    }

    /// Label such as `1年生 (10級)`.
    pub fn label(self) -> String {
        format!("{}年生 ({}級)", self.0, self.kanken_level())
    }
}

impl Default for Grade {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Grade {
    type Error = InvalidGrade;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_accepts_one_through_six() {
        for raw in 1..=6 {
            assert!(Grade::new(raw).is_ok(), "grade {raw} should be accepted");
        }
    }

    #[test]
    fn grade_rejects_zero_and_seven() {
        assert_eq!(Grade::new(0), Err(InvalidGrade(0)));
        assert_eq!(Grade::new(7), Err(InvalidGrade(7)));
    }

    #[test]
    fn kanken_level_mapping() {
        assert_eq!(Grade::new(1).unwrap().kanken_level(), 10);
        assert_eq!(Grade::new(6).unwrap().kanken_level(), 5);
    }

    #[test]
    fn label_includes_grade_and_level() {
        assert_eq!(Grade::new(3).unwrap().label(), "3年生 (8級)");
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Grade>("4").is_ok());
        assert!(serde_json::from_str::<Grade>("9").is_err());
    }

    #[test]
    fn all_yields_six_grades() {
        let grades: Vec<u8> = Grade::all().map(Grade::get).collect();
        assert_eq!(grades, vec![1, 2, 3, 4, 5, 6]);
    }
}
