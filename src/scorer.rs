//! Password strength scorer.
//!
//! A presence/length heuristic: it rewards character-class diversity and a
//! length threshold. It does not estimate entropy and ignores policies.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::charset::ClassTally;

/// Points awarded per satisfied criterion.
const POINTS: u8 = 2;
/// Length at which the length criterion is satisfied.
const LONG_PASSWORD: usize = 12;

pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Category for a score: 9+ is Strong, 6 to 8 is Medium, below 6 is Weak.
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => Strength::Strong,
            6..=8 => Strength::Medium,
            _ => Strength::Weak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub category: Strength,
    pub score: u8,
}

impl StrengthResult {
    /// Score as a fraction in `[0, 1]`, e.g. for a progress bar.
    pub fn fraction(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_SCORE)
    }
}

/// Scores a password.
///
/// +2 each for an uppercase letter, a lowercase letter, a digit, a special
/// character, and a length of at least 12 characters.
pub fn score_strength(password: &SecretString) -> StrengthResult {
    let tally = ClassTally::of(password.expose_secret());

    let criteria = [
        tally.uppercase > 0,
        tally.lowercase > 0,
        tally.digits > 0,
        tally.special > 0,
        tally.length >= LONG_PASSWORD,
    ];
    let score = criteria.iter().filter(|&&met| met).count() as u8 * POINTS;

    StrengthResult {
        category: Strength::from_score(score),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(pwd: &str) -> StrengthResult {
        score_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_score_empty_password() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.category, Strength::Weak);
    }

    #[test]
    fn test_score_all_criteria() {
        let result = score("Abcdefgh1!xy");
        assert_eq!(result.score, 10);
        assert_eq!(result.category, Strength::Strong);
    }

    #[test]
    fn test_score_all_classes_but_short() {
        let result = score("Ab1!");
        assert_eq!(result.score, 8);
        assert_eq!(result.category, Strength::Medium);
    }

    #[test]
    fn test_score_three_criteria_is_medium() {
        // boundary at 6
        let result = score("Abc1");
        assert_eq!(result.score, 6);
        assert_eq!(result.category, Strength::Medium);
    }

    #[test]
    fn test_score_two_criteria_is_weak() {
        let result = score("abc123");
        assert_eq!(result.score, 4);
        assert_eq!(result.category, Strength::Weak);
    }

    #[test]
    fn test_score_length_alone() {
        let result = score("            ");
        assert_eq!(result.score, 2);
        assert_eq!(result.category, Strength::Weak);
    }

    #[test]
    fn test_score_special_outside_set_not_counted() {
        let result = score("Abc1-?");
        assert_eq!(result.score, 6);
    }

    #[test]
    fn test_score_repeated_class_counts_once() {
        assert_eq!(score("AAAA").score, score("A").score);
    }

    #[test]
    fn test_score_values_are_even_and_bounded() {
        let samples = [
            "", "a", "A", "1", "!", "aA", "a1!", "password", "Password1",
            "Password1!", "CorrectHorseBatteryStaple", "MyP@ssw0rd!xyz", "é", "   ",
        ];
        for pwd in samples {
            let result = score(pwd);
            assert!(result.score <= MAX_SCORE, "{:?} scored {}", pwd, result.score);
            assert_eq!(result.score % 2, 0, "{:?} scored {}", pwd, result.score);
            assert_eq!(result.category, Strength::from_score(result.score));
        }
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(5), Strength::Weak);
        assert_eq!(Strength::from_score(6), Strength::Medium);
        assert_eq!(Strength::from_score(8), Strength::Medium);
        assert_eq!(Strength::from_score(9), Strength::Strong);
        assert_eq!(Strength::from_score(10), Strength::Strong);
    }

    #[test]
    fn test_score_is_pure() {
        assert_eq!(score("MyPass123!"), score("MyPass123!"));
    }

    #[test]
    fn test_fraction() {
        assert_eq!(score("").fraction(), 0.0);
        assert_eq!(score("Abcdefgh1!xy").fraction(), 1.0);
    }
}
