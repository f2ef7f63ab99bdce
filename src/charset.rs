//! Character alphabets and per-class tallies.
//!
//! The special set is fixed to `!@#$%^&*` and is the only set used by the
//! scorer, the validator and the generator.

/// Characters counted as "special".
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

pub(crate) const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub(crate) const DIGITS: &[u8] = b"0123456789";
pub(crate) const SPECIAL: &[u8] = b"!@#$%^&*";

/// Letters, digits and the special set, used for random fill.
pub(crate) const FILL: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Returns `true` if `c` belongs to the special set.
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Counts of each character class in a password.
///
/// Uppercase and lowercase follow Unicode case, digits are ASCII `0-9`.
/// Characters outside every class only count toward `length`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassTally {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special: usize,
}

impl ClassTally {
    pub fn of(password: &str) -> Self {
        let mut tally = Self::default();
        for c in password.chars() {
            tally.length += 1;
            if c.is_uppercase() {
                tally.uppercase += 1;
            } else if c.is_lowercase() {
                tally.lowercase += 1;
            } else if c.is_ascii_digit() {
                tally.digits += 1;
            } else if is_special(c) {
                tally.special += 1;
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_are_consistent() {
        assert_eq!(SPECIAL, SPECIAL_CHARACTERS.as_bytes());
        assert_eq!(
            FILL.len(),
            UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SPECIAL.len()
        );
    }

    #[test]
    fn test_tally_mixed() {
        let tally = ClassTally::of("Ab1!!!!!!!!");
        assert_eq!(
            tally,
            ClassTally {
                length: 11,
                uppercase: 1,
                lowercase: 1,
                digits: 1,
                special: 8,
            }
        );
    }

    #[test]
    fn test_tally_ignores_characters_outside_classes() {
        // space, '-', '?' and '~' are not in the special set
        let tally = ClassTally::of("a b-c?~");
        assert_eq!(tally.length, 7);
        assert_eq!(tally.lowercase, 3);
        assert_eq!(tally.special, 0);
        assert_eq!(tally.digits, 0);
    }

    #[test]
    fn test_tally_counts_chars_not_bytes() {
        let tally = ClassTally::of("Éé");
        assert_eq!(tally.length, 2);
        assert_eq!(tally.uppercase, 1);
        assert_eq!(tally.lowercase, 1);
    }

    #[test]
    fn test_is_special() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(is_special(c));
        }
        assert!(!is_special('-'));
        assert!(!is_special(' '));
        assert!(!is_special('a'));
    }
}
