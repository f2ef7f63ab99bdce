//! Policy catalog
//!
//! Fixed mapping from a domain field to the password policy that applies to
//! it. The catalog is static data and never changes at runtime.

use std::fmt;

use crate::error::PolicyError;

/// Extra characters a caller may add on top of a policy's minimum length
/// when offering a length choice for generation.
pub const MAX_EXTRA_LENGTH: usize = 8;

/// Minimum length and character-class counts required for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub field: &'static str,
    pub min_length: usize,
    pub min_uppercase: usize,
    pub min_lowercase: usize,
    pub min_digits: usize,
    pub min_special: usize,
    /// Decorative, not used by any check.
    pub description: Option<&'static str>,
    /// Decorative, not used by any check.
    pub complexity: Option<&'static str>,
}

impl Policy {
    const fn new(
        field: &'static str,
        min_length: usize,
        min_special: usize,
        min_uppercase: usize,
        min_lowercase: usize,
        min_digits: usize,
    ) -> Self {
        Self {
            field,
            min_length,
            min_uppercase,
            min_lowercase,
            min_digits,
            min_special,
            description: None,
            complexity: None,
        }
    }

    /// Sum of the four class minimums.
    pub fn min_class_total(&self) -> usize {
        self.min_uppercase + self.min_lowercase + self.min_digits + self.min_special
    }

    /// Password lengths a caller should offer when generating for this policy.
    pub fn length_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min_length..=self.min_length + MAX_EXTRA_LENGTH
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: length >= {}, uppercase >= {}, lowercase >= {}, digits >= {}, special >= {}",
            self.field,
            self.min_length,
            self.min_uppercase,
            self.min_lowercase,
            self.min_digits,
            self.min_special
        )?;
        if let Some(complexity) = self.complexity {
            write!(f, " ({} complexity)", complexity)?;
        }
        Ok(())
    }
}

static POLICIES: [Policy; 9] = [
    Policy::new("Financial Field", 12, 2, 1, 1, 1),
    Policy::new("Social Networks", 10, 1, 1, 1, 1),
    Policy::new("Technology & IT", 14, 2, 2, 2, 2),
    Policy {
        description: Some("Healthcare services deal with sensitive data that needs protection."),
        complexity: Some("High"),
        ..Policy::new("Healthcare Services", 12, 1, 1, 1, 1)
    },
    Policy::new("Online Retail", 12, 2, 1, 1, 2),
    Policy::new("Educational Institutions", 10, 1, 1, 1, 1),
    Policy::new("Government Agencies", 16, 3, 2, 2, 3),
    Policy::new("Consumer Goods Retail", 12, 2, 1, 1, 2),
    Policy::new("Investment & Finance", 14, 2, 2, 2, 3),
];

/// Looks up the policy for a field name (exact match).
///
/// # Errors
///
/// Returns [`PolicyError::UnknownField`] if the name is not in the catalog.
pub fn lookup_policy(field: &str) -> Result<&'static Policy, PolicyError> {
    match POLICIES.iter().find(|p| p.field == field) {
        Some(policy) => Ok(policy),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Policy lookup failed for field {:?}", field);
            Err(PolicyError::UnknownField(field.to_string()))
        }
    }
}

/// All catalog policies, in catalog order.
pub fn policies() -> &'static [Policy] {
    &POLICIES
}

/// Field names, in catalog order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    POLICIES.iter().map(|p| p.field)
}
