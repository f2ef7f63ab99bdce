//! Policy validation sections
//!
//! Each section checks one dimension of a policy against a password tally.

mod classes;
mod length;

pub use classes::{digits_section, lowercase_section, special_section, uppercase_section};
pub use length::length_section;

/// Result type for section check functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
