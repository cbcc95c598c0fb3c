//! Prelude module for convenient imports.
//!
//! Provides a single `use fluent_rules::prelude::*;` import that brings in
//! the entry points and every parameter-builder type.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fluent_rules::prelude::*;
//!
//! let mapping = rules([
//!     field("username").required().alpha_dash().between(3, 20),
//!     field("user_id").exists(Exists::table("users").column("id")),
//! ]);
//! ```

pub use crate::email::EmailStyle;
pub use crate::error::RuleError;
pub use crate::field::{Dimensions, Exists, FieldRules, Unique};
pub use crate::rules::Rules;
pub use crate::{field, rules};
