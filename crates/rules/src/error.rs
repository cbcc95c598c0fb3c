//! Error types for rule construction.
//!
//! Rule building is infallible by design: a nonsensical parameter value
//! produces a well-formed but semantically wrong token, which the downstream
//! validation engine rejects at execution time. The one exception is the
//! email style tag set, which is closed and checked at construction.

use thiserror::Error;

/// Errors raised while building a rule token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RuleError {
    /// An email style tag outside the closed set accepted by
    /// [`EmailStyle`](crate::EmailStyle).
    #[error("unknown email validation style `{style}` (expected one of: rfc, strict, dns, spoof, filter)")]
    UnknownEmailStyle {
        /// The tag as supplied by the caller.
        style: String,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_email_style_names_the_offender() {
        let err = RuleError::UnknownEmailStyle {
            style: "bogus".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("rfc"));
    }
}
