//! Rules comparing the field against other fields or value lists.

use super::{FieldRules, comma_join};

impl FieldRules {
    /// The field must have a matching `<field>_confirmation` companion.
    ///
    /// For example, a `password` field requires a matching
    /// `password_confirmation` field in the input.
    pub fn confirmed(self) -> Self {
        self.push("confirmed")
    }

    /// The field must have a different value than the given field.
    pub fn different(self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        self.push(format!("different:{other}"))
    }

    /// When the field is an array, it must not contain duplicate values.
    pub fn distinct(self) -> Self {
        self.push("distinct")
    }

    /// The field must be greater than the given field.
    ///
    /// The two fields must be of the same type; strings, numerics, arrays,
    /// and files are measured the same way as the `size` rule.
    pub fn gt(self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        self.push(format!("gt:{other}"))
    }

    /// The field must be greater than or equal to the given field.
    pub fn gte(self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        self.push(format!("gte:{other}"))
    }

    /// The field must be included in the given list of values.
    pub fn in_list<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = comma_join(values);
        self.push(format!("in:{values}"))
    }

    /// The field must exist in another field's values.
    pub fn in_array(self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        self.push(format!("in_array:{other}"))
    }

    /// The field must be less than the given field.
    pub fn lt(self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        self.push(format!("lt:{other}"))
    }

    /// The field must be less than or equal to the given field.
    pub fn lte(self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        self.push(format!("lte:{other}"))
    }

    /// The field must not be included in the given list of values.
    ///
    /// Note: the emitted identifier is `notIn`, the one camelCase identifier
    /// in the engine's grammar.
    pub fn not_in<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = comma_join(values);
        self.push(format!("notIn:{values}"))
    }

    /// The given field must match the field under validation.
    pub fn same(self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        self.push(format!("same:{other}"))
    }
}
