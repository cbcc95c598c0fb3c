//! # fluent-rules
//!
//! A fluent builder for declarative validation rule sets in the
//! colon-and-comma token grammar used by Laravel-style validation engines.
//!
//! This crate does not validate anything itself. It turns chained method
//! calls into the `field => ["rule", "rule:arg1,arg2", ...]` mapping a
//! downstream engine consumes, replacing hand-written rule strings with a
//! typed, discoverable API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fluent_rules::prelude::*;
//!
//! let mapping = rules([
//!     field("age").required().numeric().between(1, 10),
//!     field("email").required().email(["dns", "rfc"])?,
//!     field("avatar")
//!         .nullable()
//!         .image()
//!         .dimensions(Dimensions::new().min_width(100).ratio(1.5)),
//! ]);
//!
//! assert_eq!(mapping["age"], vec!["required", "numeric", "between:1,10"]);
//! ```
//!
//! ## Design
//!
//! - Rule tokens are plain strings in the engine's grammar; parameter
//!   *values* are never semantically checked here. A nonsensical bound or
//!   date renders exactly as given and fails engine-side.
//! - The one construction-time check is the closed [`EmailStyle`] tag set;
//!   [`FieldRules::email`] is the only fallible method.
//! - [`Rules`] snapshots each builder at aggregation time and is write-once;
//!   duplicate field names resolve last-write-wins.

pub mod email;
pub mod error;
pub mod field;
pub mod prelude;
pub mod rules;

pub use email::EmailStyle;
pub use error::RuleError;
pub use field::{Dimensions, Exists, FieldRules, Unique};
pub use rules::Rules;

use indexmap::IndexMap;

/// Creates an empty rule builder for the given field name.
///
/// Shorthand for [`FieldRules::new`].
pub fn field(name: impl Into<String>) -> FieldRules {
    FieldRules::new(name)
}

/// Aggregates field builders and returns the serialized field → tokens
/// mapping in one step.
///
/// Shorthand for [`Rules::new`] followed by [`Rules::into_map`].
#[must_use]
pub fn rules<I>(fields: I) -> IndexMap<String, Vec<String>>
where
    I: IntoIterator<Item = FieldRules>,
{
    Rules::new(fields).into_map()
}
