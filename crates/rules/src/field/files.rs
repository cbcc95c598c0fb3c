//! File upload rules.

use super::{FieldRules, comma_join};

// ============================================================================
// DIMENSIONS
// ============================================================================

/// Dimension constraints for an uploaded image.
///
/// All seven bounds are independent and optional; only the ones actually set
/// are rendered, as `key=value` pairs in declared order. An empty constraint
/// set renders to nothing at all — [`FieldRules::dimensions`] then appends no
/// token.
///
/// ```rust,ignore
/// let avatar = field("avatar")
///     .image()
///     .dimensions(Dimensions::new().min_width(100).ratio(1.5));
/// assert_eq!(avatar.rules(), &["image", "dimensions:min_width=100,ratio=1.5"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[must_use = "Dimensions does nothing until passed to FieldRules::dimensions"]
pub struct Dimensions {
    min_width: Option<i64>,
    max_width: Option<i64>,
    min_height: Option<i64>,
    max_height: Option<i64>,
    width: Option<i64>,
    height: Option<i64>,
    ratio: Option<f64>,
}

impl Dimensions {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum width in pixels.
    pub fn min_width(mut self, pixels: i64) -> Self {
        self.min_width = Some(pixels);
        self
    }

    /// Maximum width in pixels.
    pub fn max_width(mut self, pixels: i64) -> Self {
        self.max_width = Some(pixels);
        self
    }

    /// Minimum height in pixels.
    pub fn min_height(mut self, pixels: i64) -> Self {
        self.min_height = Some(pixels);
        self
    }

    /// Maximum height in pixels.
    pub fn max_height(mut self, pixels: i64) -> Self {
        self.max_height = Some(pixels);
        self
    }

    /// Exact width in pixels.
    pub fn width(mut self, pixels: i64) -> Self {
        self.width = Some(pixels);
        self
    }

    /// Exact height in pixels.
    pub fn height(mut self, pixels: i64) -> Self {
        self.height = Some(pixels);
        self
    }

    /// Exact width / height aspect ratio.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    /// Renders the constraint set as a rule token, or `None` when no bound
    /// was supplied.
    pub(crate) fn render(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        if let Some(v) = self.min_width {
            parts.push(format!("min_width={v}"));
        }
        if let Some(v) = self.max_width {
            parts.push(format!("max_width={v}"));
        }
        if let Some(v) = self.min_height {
            parts.push(format!("min_height={v}"));
        }
        if let Some(v) = self.max_height {
            parts.push(format!("max_height={v}"));
        }
        if let Some(v) = self.width {
            parts.push(format!("width={v}"));
        }
        if let Some(v) = self.height {
            parts.push(format!("height={v}"));
        }
        if let Some(v) = self.ratio {
            parts.push(format!("ratio={v}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(format!("dimensions:{}", parts.join(",")))
        }
    }
}

// ============================================================================
// FILE RULES
// ============================================================================

impl FieldRules {
    /// The image under validation must satisfy the given dimension
    /// constraints.
    ///
    /// The one constraint method that may append zero tokens: an empty
    /// [`Dimensions`] leaves the rule set untouched.
    pub fn dimensions(self, constraints: Dimensions) -> Self {
        match constraints.render() {
            Some(token) => self.push(token),
            None => self,
        }
    }

    /// The field must be a successfully uploaded file.
    pub fn file(self) -> Self {
        self.push("file")
    }

    /// The file must be an image (jpg, jpeg, png, bmp, gif, svg, or webp).
    pub fn image(self) -> Self {
        self.push("image")
    }

    /// The file's MIME type must correspond to one of the given extensions.
    ///
    /// The engine determines the MIME type by reading the file's contents,
    /// not by trusting the extension or the client-provided type.
    pub fn mimes<I, S>(self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = comma_join(extensions);
        self.push(format!("mimes:{extensions}"))
    }

    /// The file must match one of the given MIME types.
    pub fn mime_types<I, S>(self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types = comma_join(types);
        self.push(format!("mimetypes:{types}"))
    }
}
