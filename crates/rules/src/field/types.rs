//! Type and castability rules.

use super::FieldRules;

impl FieldRules {
    /// The field must be `yes`, `on`, `1`, or `true`.
    ///
    /// Useful for validating "Terms of Service" acceptance.
    pub fn accepted(self) -> Self {
        self.push("accepted")
    }

    /// The field must be an array.
    pub fn array(self) -> Self {
        self.push("array")
    }

    /// The field must be castable to a boolean.
    ///
    /// Accepted input is `true`, `false`, `1`, `0`, `"1"`, and `"0"`.
    pub fn boolean(self) -> Self {
        self.push("boolean")
    }

    /// The field must be an integer.
    ///
    /// This does not verify the input's runtime type, only that it is a
    /// string or numeric value containing an integer.
    pub fn integer(self) -> Self {
        self.push("integer")
    }

    /// The field must be a valid JSON string.
    pub fn json(self) -> Self {
        self.push("json")
    }

    /// The field must be numeric.
    pub fn numeric(self) -> Self {
        self.push("numeric")
    }

    /// The field must be a string.
    ///
    /// To also allow the field to be null, add [`nullable`](Self::nullable).
    pub fn string(self) -> Self {
        self.push("string")
    }
}
