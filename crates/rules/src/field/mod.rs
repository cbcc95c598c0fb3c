//! Per-field rule accumulation.
//!
//! [`FieldRules`] collects an ordered list of rule tokens for one named input
//! field through a fluent, method-per-rule interface. Every constraint method
//! consumes `self`, appends exactly one token, and returns the builder, so
//! rules chain in the order the downstream engine will evaluate them:
//!
//! ```rust,ignore
//! use fluent_rules::field;
//!
//! let age = field("age").required().numeric().between(1, 10);
//! assert_eq!(age.rules(), &["required", "numeric", "between:1,10"]);
//! ```
//!
//! The builder never inspects parameter *values*: a negative size or an
//! impossible date produces a well-formed token that the engine rejects later.
//! The catalog is split by category the way the engine's documentation groups
//! rules; all methods live on `FieldRules` regardless of the file they are
//! defined in.

mod comparison;
mod database;
mod datetime;
mod files;
mod format;
mod presence;
mod size;
mod types;

pub use database::{Exists, Unique};
pub use files::Dimensions;

// ============================================================================
// FIELD RULES
// ============================================================================

/// An ordered, append-only set of rule tokens for one named field.
///
/// Created via [`FieldRules::new`] or the [`field`](crate::field()) shorthand.
/// Hand the finished builders to [`Rules`](crate::Rules) (or the
/// [`rules`](crate::rules()) shorthand) to obtain the field → tokens mapping
/// the validation engine consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "FieldRules does nothing until aggregated into a rule mapping"]
pub struct FieldRules {
    field: String,
    rules: Vec<String>,
}

impl FieldRules {
    /// Creates an empty rule set for the given field name.
    ///
    /// The field name is fixed for the lifetime of the builder.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
        }
    }

    /// The field this rule set applies to.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field
    }

    /// The tokens accumulated so far, in append order.
    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Consumes the builder, yielding the field name and its tokens.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.field, self.rules)
    }

    /// Appends a caller-supplied rule token verbatim.
    ///
    /// Escape hatch for rules the catalog does not cover. The token is not
    /// inspected in any way.
    pub fn custom(self, rule: impl Into<String>) -> Self {
        self.push(rule.into())
    }

    /// Stop running validation rules on this field after the first failure.
    pub fn bail(self) -> Self {
        self.push("bail")
    }

    pub(crate) fn push(mut self, token: impl Into<String>) -> Self {
        self.rules.push(token.into());
        self
    }
}

/// Comma-joins list-shaped rule arguments.
///
/// Arguments containing a comma would produce an ambiguous token; by contract
/// the caller must not pass any.
pub(crate) fn comma_join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            joined.push(',');
        }
        joined.push_str(value.as_ref());
    }
    joined
}

// ============================================================================
// TESTS
// ============================================================================
