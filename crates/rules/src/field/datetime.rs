//! Date and time rules.
//!
//! Methods taking a `date_or_field` accept either a literal date expression
//! (anything the engine's date parser understands, including relative
//! expressions like `tomorrow`) or the name of another field to compare
//! against. The two are indistinguishable at this layer; the engine decides.

use super::FieldRules;

impl FieldRules {
    /// The field must be a value after the given date or field.
    pub fn after(self, date_or_field: impl AsRef<str>) -> Self {
        let arg = date_or_field.as_ref();
        self.push(format!("after:{arg}"))
    }

    /// The field must be a value after or equal to the given date or field.
    pub fn after_or_equal(self, date_or_field: impl AsRef<str>) -> Self {
        let arg = date_or_field.as_ref();
        self.push(format!("after_or_equal:{arg}"))
    }

    /// The field must be a value preceding the given date or field.
    pub fn before(self, date_or_field: impl AsRef<str>) -> Self {
        let arg = date_or_field.as_ref();
        self.push(format!("before:{arg}"))
    }

    /// The field must be a value preceding or equal to the given date or
    /// field.
    pub fn before_or_equal(self, date_or_field: impl AsRef<str>) -> Self {
        let arg = date_or_field.as_ref();
        self.push(format!("before_or_equal:{arg}"))
    }

    /// The field must be a valid, non-relative date.
    pub fn date(self) -> Self {
        self.push("date")
    }

    /// The field must be equal to the given date.
    pub fn date_equals(self, date: impl AsRef<str>) -> Self {
        let date = date.as_ref();
        self.push(format!("date_equals:{date}"))
    }

    /// The field must match the given date format.
    ///
    /// Use either [`date`](Self::date) or `date_format` on a field, not both.
    pub fn date_format(self, format: impl AsRef<str>) -> Self {
        let format = format.as_ref();
        self.push(format!("date_format:{format}"))
    }
}
