//! Character class sections - uppercase, lowercase, digit and special minimums.

use super::SectionResult;
use crate::catalog::Policy;
use crate::charset::ClassTally;

fn shortfall(observed: usize, minimum: usize, noun: &str) -> SectionResult {
    if observed < minimum {
        return Some(format!("Must include at least {} {}.", minimum, noun));
    }
    None
}

pub fn uppercase_section(tally: &ClassTally, policy: &Policy) -> SectionResult {
    shortfall(tally.uppercase, policy.min_uppercase, "uppercase letter(s)")
}

pub fn lowercase_section(tally: &ClassTally, policy: &Policy) -> SectionResult {
    shortfall(tally.lowercase, policy.min_lowercase, "lowercase letter(s)")
}

pub fn digits_section(tally: &ClassTally, policy: &Policy) -> SectionResult {
    shortfall(tally.digits, policy.min_digits, "digit(s)")
}

/// Only characters of the special set count; other punctuation does not.
pub fn special_section(tally: &ClassTally, policy: &Policy) -> SectionResult {
    shortfall(tally.special, policy.min_special, "special character(s)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup_policy;

    fn gov() -> &'static Policy {
        lookup_policy("Government Agencies").unwrap()
    }

    #[test]
    fn test_uppercase_section_missing() {
        let result = uppercase_section(&ClassTally::of("Aabc"), gov());
        assert_eq!(
            result,
            Some("Must include at least 2 uppercase letter(s).".to_string())
        );
    }

    #[test]
    fn test_lowercase_section_missing() {
        let result = lowercase_section(&ClassTally::of("ABCd"), gov());
        assert_eq!(
            result,
            Some("Must include at least 2 lowercase letter(s).".to_string())
        );
    }

    #[test]
    fn test_digits_section_missing() {
        let result = digits_section(&ClassTally::of("12ab"), gov());
        assert_eq!(result, Some("Must include at least 3 digit(s).".to_string()));
    }

    #[test]
    fn test_special_section_missing() {
        let result = special_section(&ClassTally::of("!@-?"), gov());
        assert_eq!(
            result,
            Some("Must include at least 3 special character(s).".to_string())
        );
    }

    #[test]
    fn test_sections_pass_at_minimum() {
        let tally = ClassTally::of("ABab123!@#");
        assert_eq!(uppercase_section(&tally, gov()), None);
        assert_eq!(lowercase_section(&tally, gov()), None);
        assert_eq!(digits_section(&tally, gov()), None);
        assert_eq!(special_section(&tally, gov()), None);
    }
}
