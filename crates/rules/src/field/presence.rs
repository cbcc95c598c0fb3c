//! Presence, requirement, and exclusion rules.

use super::{FieldRules, comma_join};

impl FieldRules {
    /// The field is excluded from the validated data when the other field
    /// equals the given value.
    pub fn exclude_if(self, other: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        let value = value.as_ref();
        self.push(format!("exclude_if:{other},{value}"))
    }

    /// The field is excluded from the validated data unless the other field
    /// equals the given value.
    pub fn exclude_unless(self, other: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        let value = value.as_ref();
        self.push(format!("exclude_unless:{other},{value}"))
    }

    /// The field must not be empty when it is present.
    pub fn filled(self) -> Self {
        self.push("filled")
    }

    /// The field may be null.
    pub fn nullable(self) -> Self {
        self.push("nullable")
    }

    /// The field must be present in the input data, but may be empty.
    pub fn present(self) -> Self {
        self.push("present")
    }

    /// The field must be present and not empty.
    ///
    /// A field counts as empty when it is null, an empty string, an empty
    /// array, or an uploaded file with no path.
    pub fn required(self) -> Self {
        self.push("required")
    }

    /// The field must be present and not empty if the other field equals any
    /// of the given values.
    pub fn required_if<I, S>(self, other: impl AsRef<str>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let other = other.as_ref();
        let values = comma_join(values);
        self.push(format!("required_if:{other},{values}"))
    }

    /// The field must be present and not empty unless the other field equals
    /// any of the given values.
    pub fn required_unless<I, S>(self, other: impl AsRef<str>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let other = other.as_ref();
        let values = comma_join(values);
        self.push(format!("required_unless:{other},{values}"))
    }

    /// The field must be present and not empty if any of the given fields
    /// are present.
    pub fn required_with<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = comma_join(fields);
        self.push(format!("required_with:{fields}"))
    }

    /// The field must be present and not empty if all of the given fields
    /// are present.
    pub fn required_with_all<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = comma_join(fields);
        self.push(format!("required_with_all:{fields}"))
    }

    /// The field must be present and not empty when any of the given fields
    /// are not present.
    pub fn required_without<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = comma_join(fields);
        self.push(format!("required_without:{fields}"))
    }

    /// The field must be present and not empty when all of the given fields
    /// are not present.
    pub fn required_without_all<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = comma_join(fields);
        self.push(format!("required_without_all:{fields}"))
    }
}
