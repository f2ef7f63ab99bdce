//! Length section - checks the policy minimum length.

use super::SectionResult;
use crate::catalog::Policy;
use crate::charset::ClassTally;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(tally: &ClassTally, policy: &Policy) -> SectionResult {
    if tally.length < policy.min_length {
        return Some(format!(
            "Password must be at least {} characters long.",
            policy.min_length
        ));
    }
    None
}
