//! The rule-set aggregator.

use indexmap::IndexMap;
use serde::Serialize;

use crate::field::FieldRules;

// ============================================================================
// RULES
// ============================================================================

/// A write-once mapping from field name to that field's rule tokens.
///
/// Built in one shot from any number of [`FieldRules`]; each builder's tokens
/// are snapshotted at aggregation time. When two builders name the same
/// field, the later one wins outright — tokens are replaced, never merged.
///
/// Field order is preserved (first insertion wins the position), so the
/// serialized mapping lists fields in the order they were declared.
///
/// Serializes transparently as a JSON object of string arrays, the shape
/// validation engines consume:
///
/// ```rust,ignore
/// use fluent_rules::{Rules, field};
///
/// let rules = Rules::new([field("age").required().numeric().between(1, 10)]);
/// assert_eq!(
///     serde_json::to_value(&rules)?,
///     serde_json::json!({ "age": ["required", "numeric", "between:1,10"] }),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rules {
    rules: IndexMap<String, Vec<String>>,
}

impl Rules {
    /// Aggregates the given field builders into one mapping.
    #[must_use]
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = FieldRules>,
    {
        let mut rules = IndexMap::new();
        for field in fields {
            let (name, tokens) = field.into_parts();
            rules.insert(name, tokens);
        }
        Self { rules }
    }

    /// The tokens for one field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.rules.get(field).map(Vec::as_slice)
    }

    /// The number of fields in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no field has been aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The full mapping, in field declaration order.
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<String, Vec<String>> {
        &self.rules
    }

    /// Consumes the aggregator, yielding the mapping.
    #[must_use]
    pub fn into_map(self) -> IndexMap<String, Vec<String>> {
        self.rules
    }
}

impl FromIterator<FieldRules> for Rules {
    fn from_iter<I: IntoIterator<Item = FieldRules>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Rules {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
