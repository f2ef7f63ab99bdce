//! Policy validator - runs every section against a password.

use secrecy::{ExposeSecret, SecretString};

use crate::catalog::Policy;
use crate::charset::ClassTally;
use crate::sections::{
    digits_section, length_section, lowercase_section, special_section, uppercase_section,
    SectionResult,
};

type Section = fn(&ClassTally, &Policy) -> SectionResult;

/// Sections in reporting order.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digits", digits_section),
    ("special", special_section),
];

/// Unmet policy requirements, in check order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Validates a password against a policy.
///
/// All five checks run; the result lists every unmet requirement.
pub fn validate_against_policy(password: &SecretString, policy: &Policy) -> ValidationResult {
    let tally = ClassTally::of(password.expose_secret());
    check_tally(&tally, policy)
}

pub(crate) fn check_tally(tally: &ClassTally, policy: &Policy) -> ValidationResult {
    let mut violations = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        if let Some(reason) = section_fn(tally, policy) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Policy {:?} section failed: {}", policy.field, _section_name);
            violations.push(reason);
        }
    }

    ValidationResult { violations }
}
