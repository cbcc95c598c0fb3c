//! Size and numeric-bound rules.
//!
//! Strings are measured in characters, numerics by value, arrays by element
//! count, and files by size in kilobytes. Bounds are not sanity-checked here;
//! `between(10, 1)` renders exactly as written and fails engine-side.

use super::FieldRules;

impl FieldRules {
    /// The field must have a size between `min` and `max` inclusive.
    pub fn between(self, min: i64, max: i64) -> Self {
        self.push(format!("between:{min},{max}"))
    }

    /// The field must be numeric with exactly `value` digits.
    pub fn digits(self, value: i64) -> Self {
        self.push(format!("digits:{value}"))
    }

    /// The field must be numeric with a digit count between `min` and `max`.
    pub fn digits_between(self, min: i64, max: i64) -> Self {
        self.push(format!("digits_between:{min},{max}"))
    }

    /// The field must be less than or equal to the maximum.
    pub fn max(self, value: i64) -> Self {
        self.push(format!("max:{value}"))
    }

    /// The field must have at least the minimum value.
    pub fn min(self, value: i64) -> Self {
        self.push(format!("min:{value}"))
    }

    /// The field must be a multiple of `value`.
    pub fn multiple_of(self, value: i64) -> Self {
        self.push(format!("multiple_of:{value}"))
    }

    /// The field must have a size matching `value` exactly.
    pub fn size(self, value: i64) -> Self {
        self.push(format!("size:{value}"))
    }
}
