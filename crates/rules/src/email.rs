//! Email validation style tags.
//!
//! The `email` rule optionally carries a list of validation styles that tell
//! the downstream engine how strictly to check the address. The set of styles
//! is closed; anything else is rejected before a token is emitted.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;

// ============================================================================
// EMAIL STYLE
// ============================================================================

/// A validation style accepted by the `email` rule.
///
/// Mirrors the styles understood by the downstream engine's email validator:
///
/// | Style    | Engine behaviour                          |
/// |----------|-------------------------------------------|
/// | `rfc`    | RFC-compliant parsing                     |
/// | `strict` | RFC parsing, warnings treated as failures |
/// | `dns`    | The domain must have an MX/A record       |
/// | `spoof`  | Rejects homograph/spoofed addresses       |
/// | `filter` | Legacy filter-based check                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailStyle {
    Rfc,
    Strict,
    Dns,
    Spoof,
    Filter,
}

impl EmailStyle {
    /// Every accepted style, in tag order.
    pub const ALL: [EmailStyle; 5] = [
        EmailStyle::Rfc,
        EmailStyle::Strict,
        EmailStyle::Dns,
        EmailStyle::Spoof,
        EmailStyle::Filter,
    ];

    /// The tag rendered into the rule token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EmailStyle::Rfc => "rfc",
            EmailStyle::Strict => "strict",
            EmailStyle::Dns => "dns",
            EmailStyle::Spoof => "spoof",
            EmailStyle::Filter => "filter",
        }
    }
}

impl fmt::Display for EmailStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailStyle {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rfc" => Ok(EmailStyle::Rfc),
            "strict" => Ok(EmailStyle::Strict),
            "dns" => Ok(EmailStyle::Dns),
            "spoof" => Ok(EmailStyle::Spoof),
            "filter" => Ok(EmailStyle::Filter),
            other => Err(RuleError::UnknownEmailStyle {
                style: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
