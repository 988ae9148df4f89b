//! Field validation rules for Kitbase
//!
//! A small, pure rule engine shared by the form layer and the payload
//! types. Rules mirror what the server enforces so invalid values are
//! rejected before a request is made.
//!
//! Every rule attached to a field is evaluated on each check, so a value
//! can report several problems at once rather than only the first one.

use thiserror::Error;

// ============================================================================
// Rules
// ============================================================================

/// A single validation rule attached to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty after trimming whitespace
    Required,
    /// Value must not exceed `max` characters
    MaxLength(usize),
}

/// A validation failure for a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field was empty or whitespace-only
    #[error("This field is required")]
    Required,

    /// The field exceeded its maximum length
    #[error("Must be at most {max} characters")]
    TooLong { max: usize },
}

/// Evaluate all rules against a value
///
/// Returns one error per failed rule, in rule order. An empty result
/// means the value passes.
pub fn check(value: &str, rules: &[Rule]) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for rule in rules {
        match rule {
            Rule::Required => {
                if value.trim().is_empty() {
                    errors.push(FieldError::Required);
                }
            }
            Rule::MaxLength(max) => {
                if value.chars().count() > *max {
                    errors.push(FieldError::TooLong { max: *max });
                }
            }
        }
    }

    errors
}

// ============================================================================
// Validatable Trait
// ============================================================================

/// A validation failure tied to a named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field the rule failed on
    pub field: &'static str,
    /// The failed rule
    pub error: FieldError,
}

impl FieldViolation {
    /// Create a new violation
    pub fn new(field: &'static str, error: FieldError) -> Self {
        Self { field, error }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Trait for payloads that can be validated field by field
///
/// Types implementing this trait check themselves against the same limits
/// the server enforces and report every violation at once.
pub trait Validatable {
    /// Validate the current state, returning all violations
    ///
    /// An empty vector means the value is valid.
    fn validate(&self) -> Vec<FieldViolation>;

    /// Check validity without caring about the details
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Get all validation errors as display strings
    fn validation_errors(&self) -> Vec<String> {
        self.validate().iter().map(ToString::to_string).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
