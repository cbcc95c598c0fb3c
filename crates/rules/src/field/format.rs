//! Format rules: character classes, identifiers, addresses, and patterns.

use super::{FieldRules, comma_join};
use crate::email::EmailStyle;
use crate::error::RuleError;

impl FieldRules {
    /// The field must be a URL whose hostname resolves to an A or AAAA
    /// record.
    pub fn active_url(self) -> Self {
        self.push("active_url")
    }

    /// The field must be entirely alphabetic characters.
    pub fn alpha(self) -> Self {
        self.push("alpha")
    }

    /// The field may have alphanumeric characters, dashes, and underscores.
    pub fn alpha_dash(self) -> Self {
        self.push("alpha_dash")
    }

    /// The field must be entirely alphanumeric characters.
    pub fn alpha_num(self) -> Self {
        self.push("alpha_num")
    }

    /// The field must be formatted as an email address.
    ///
    /// `styles` selects the engine-side validation styles to apply; each tag
    /// must parse as an [`EmailStyle`]. An empty list emits the bare `email`
    /// token (the engine then applies its default style); a non-empty list
    /// emits `email:tag1,tag2,...` preserving input order.
    ///
    /// This is the only fallible constraint method: an unknown tag returns
    /// [`RuleError::UnknownEmailStyle`] and appends nothing.
    ///
    /// ```rust,ignore
    /// let f = field("email").email(["dns", "rfc"])?;
    /// assert_eq!(f.rules(), &["email:dns,rfc"]);
    /// ```
    pub fn email<I, S>(self, styles: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<&'static str> = Vec::new();
        for style in styles {
            tags.push(style.as_ref().parse::<EmailStyle>()?.as_str());
        }

        if tags.is_empty() {
            Ok(self.push("email"))
        } else {
            Ok(self.push(format!("email:{}", tags.join(","))))
        }
    }

    /// The field must end with one of the given values.
    pub fn ends_with<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = comma_join(values);
        self.push(format!("ends_with:{values}"))
    }

    /// The field must be an IP address.
    pub fn ip(self) -> Self {
        self.push("ip")
    }

    /// The field must be an IPv4 address.
    ///
    /// Note: the emitted identifier is `ip4`.
    pub fn ip4(self) -> Self {
        self.push("ip4")
    }

    /// The field must be an IPv6 address.
    ///
    /// Note: the emitted identifier is `ip6`.
    pub fn ip6(self) -> Self {
        self.push("ip6")
    }

    /// The field must not match the given regular expression.
    ///
    /// The pattern is passed through verbatim, delimiters included, in the
    /// format the engine's regex facility expects (e.g. `/^.+$/i`).
    pub fn not_regex(self, pattern: impl AsRef<str>) -> Self {
        let pattern = pattern.as_ref();
        self.push(format!("not_regex:{pattern}"))
    }

    /// The field must match the authenticated user's password.
    pub fn password(self) -> Self {
        self.push("password")
    }

    /// Like [`password`](Self::password), checked against the given
    /// authentication guard.
    pub fn password_guard(self, guard: impl AsRef<str>) -> Self {
        let guard = guard.as_ref();
        self.push(format!("password:{guard}"))
    }

    /// The field must match the given regular expression.
    ///
    /// The pattern is passed through verbatim, delimiters included.
    pub fn regex(self, pattern: impl AsRef<str>) -> Self {
        let pattern = pattern.as_ref();
        self.push(format!("regex:{pattern}"))
    }

    /// The field must start with one of the given values.
    pub fn starts_with<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = comma_join(values);
        self.push(format!("starts_with:{values}"))
    }

    /// The field must be a valid timezone identifier.
    pub fn timezone(self) -> Self {
        self.push("timezone")
    }

    /// The field must be a valid URL.
    pub fn url(self) -> Self {
        self.push("url")
    }

    /// The field must be a valid RFC 4122 (version 1, 3, 4, or 5) UUID.
    pub fn uuid(self) -> Self {
        self.push("uuid")
    }
}
