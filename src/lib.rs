//! Field-based password policy library
//!
//! This library scores password strength, validates passwords against
//! per-field complexity policies, generates passwords with exact
//! character-class counts, and looks passwords up in a breach corpus.
//!
//! Scoring, validation and generation share one special character set,
//! [`SPECIAL_CHARACTERS`] (`!@#$%^&*`).
//!
//! # Features
//!
//! - `async` (default): Enables the cancellable breach lookup wrapper
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_API_URL`: Base URL of the breach range API
//!   (default: `https://api.pwnedpasswords.com`)
//! - `PWD_BREACH_TIMEOUT_SECS`: Breach request timeout in seconds (default: `10`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{
//!     check_breach, generate_password, lookup_policy, score_strength,
//!     validate_against_policy, BreachStatus, GenerationRequest,
//! };
//! use secrecy::SecretString;
//!
//! let policy = lookup_policy("Financial Field").expect("known field");
//! let password = SecretString::new("MyP@ssw0rd!x".to_string().into());
//!
//! let strength = score_strength(&password);
//! println!("Strength: {} ({}/10)", strength.category, strength.score);
//!
//! for violation in &validate_against_policy(&password, policy) {
//!     println!("{}", violation);
//! }
//!
//! match check_breach(&password) {
//!     Ok(BreachStatus::Breached(count)) => println!("Seen {} times", count),
//!     Ok(BreachStatus::Clean) => println!("Not found"),
//!     Err(e) => println!("Could not verify: {}", e),
//! }
//!
//! let request = GenerationRequest::for_policy(policy).expect("satisfiable policy");
//! let generated = generate_password(&request);
//! ```

// Internal modules
mod breach;
mod catalog;
mod charset;
mod error;
mod generator;
mod scorer;
mod sections;
mod validator;

// Public API
pub use breach::{
    check_breach, parse_range_count, BreachChecker, BreachConfig, BreachStatus, HttpRangeClient,
    RangeClient, RangeQuery, DEFAULT_API_URL, DEFAULT_TIMEOUT,
};
pub use catalog::{field_names, lookup_policy, policies, Policy, MAX_EXTRA_LENGTH};
pub use charset::{is_special, ClassTally, SPECIAL_CHARACTERS};
pub use error::PolicyError;
pub use generator::{generate_password, generate_password_with_rng, GenerationRequest};
pub use scorer::{score_strength, Strength, StrengthResult, MAX_SCORE};
pub use validator::{validate_against_policy, ValidationResult};

#[cfg(feature = "async")]
pub use breach::check_breach_tx;
