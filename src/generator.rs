//! Constrained password generator.
//!
//! Draws exact per-class counts, fills the remaining length from the union
//! alphabet, then shuffles the whole sequence.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::catalog::Policy;
use crate::charset::{ClassTally, DIGITS, FILL, LOWERCASE, SPECIAL, UPPERCASE};
use crate::error::PolicyError;
use crate::validator::check_tally;

/// Length and per-class counts for one generated password.
///
/// The class counts always fit in `length`; any remainder is random fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    uppercase: usize,
    lowercase: usize,
    digits: usize,
    special: usize,
}

impl GenerationRequest {
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidRequest`] if the class counts sum to
    /// more than `length`.
    pub fn new(
        length: usize,
        uppercase: usize,
        lowercase: usize,
        digits: usize,
        special: usize,
    ) -> Result<Self, PolicyError> {
        let classes = [uppercase, lowercase, digits, special]
            .into_iter()
            .try_fold(0usize, |acc, n| acc.checked_add(n))
            .ok_or_else(|| PolicyError::InvalidRequest("class counts overflow".to_string()))?;

        if classes > length {
            return Err(PolicyError::InvalidRequest(format!(
                "class counts sum to {} but length is {}",
                classes, length
            )));
        }

        Ok(Self {
            length,
            uppercase,
            lowercase,
            digits,
            special,
        })
    }

    /// Request at the policy's minimum length and class counts.
    pub fn for_policy(policy: &Policy) -> Result<Self, PolicyError> {
        Self::new(
            policy.min_length,
            policy.min_uppercase,
            policy.min_lowercase,
            policy.min_digits,
            policy.min_special,
        )
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn uppercase(&self) -> usize {
        self.uppercase
    }

    pub fn lowercase(&self) -> usize {
        self.lowercase
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn special(&self) -> usize {
        self.special
    }

    /// Characters left for random fill once every class count is drawn.
    ///
    /// Non-zero means the class counts do not add up to `length`.
    pub fn fill_count(&self) -> usize {
        self.length - (self.uppercase + self.lowercase + self.digits + self.special)
    }

    /// Policy requirements the request cannot guarantee.
    ///
    /// Uses the validator's messages. An empty list means every password
    /// generated from this request satisfies `policy`.
    pub fn unmet_requirements(&self, policy: &Policy) -> Vec<String> {
        let guaranteed = ClassTally {
            length: self.length,
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digits: self.digits,
            special: self.special,
        };
        check_tally(&guaranteed, policy).into_violations()
    }
}

/// Generates a password using the thread-local CSPRNG.
pub fn generate_password(request: &GenerationRequest) -> SecretString {
    generate_password_with_rng(&mut rand::thread_rng(), request)
}

/// Generates a password from the given cryptographically secure RNG.
pub fn generate_password_with_rng<R>(rng: &mut R, request: &GenerationRequest) -> SecretString
where
    R: Rng + CryptoRng,
{
    let mut chars: Vec<u8> = Vec::with_capacity(request.length);

    draw(rng, UPPERCASE, request.uppercase, &mut chars);
    draw(rng, LOWERCASE, request.lowercase, &mut chars);
    draw(rng, DIGITS, request.digits, &mut chars);
    draw(rng, SPECIAL, request.special, &mut chars);

    draw(rng, FILL, request.fill_count(), &mut chars);

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of length {}", chars.len());

    let password: String = chars.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}

/// Appends `count` characters drawn uniformly, with replacement.
fn draw<R: Rng>(rng: &mut R, alphabet: &[u8], count: usize, out: &mut Vec<u8>) {
    for _ in 0..count {
        out.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }
}
