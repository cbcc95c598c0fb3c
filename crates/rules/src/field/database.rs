//! Database-backed rules.
//!
//! `exists` and `unique` reference a table (or other record source) the
//! engine queries at validation time. This layer only renders the reference;
//! it never touches a database.

use super::FieldRules;

// ============================================================================
// EXISTS
// ============================================================================

/// Record-source reference for the `exists` rule.
///
/// ```rust,ignore
/// let f = field("user_id").exists(Exists::table("users").column("id"));
/// assert_eq!(f.rules(), &["exists:users,id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Exists does nothing until passed to FieldRules::exists"]
pub struct Exists {
    source: String,
    column: Option<String>,
    connection: Option<String>,
}

impl Exists {
    /// References the given table.
    pub fn table(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            column: None,
            connection: None,
        }
    }

    /// The column to look the field's value up in.
    ///
    /// When unset the engine uses the field name itself.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Queries through the named database connection, rendered dot-prefixed
    /// onto the table name (`connection.table`).
    pub fn connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    pub(crate) fn render(&self) -> String {
        let mut token = String::from("exists:");
        push_source(&mut token, &self.source, self.connection.as_deref());
        if let Some(column) = &self.column {
            token.push(',');
            token.push_str(column);
        }
        token
    }
}

// ============================================================================
// UNIQUE
// ============================================================================

/// Record-source reference for the `unique` rule.
///
/// Beyond table and column, a record id may be excluded from the uniqueness
/// check (the usual "updating this very record" case), optionally naming the
/// id column when it is not the primary key.
///
/// ```rust,ignore
/// let f = field("email").unique(Unique::table("users").column("email").ignore("42"));
/// assert_eq!(f.rules(), &["unique:users,email,42"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Unique does nothing until passed to FieldRules::unique"]
pub struct Unique {
    source: String,
    column: Option<String>,
    ignore: Option<String>,
    id_column: Option<String>,
    connection: Option<String>,
}

impl Unique {
    /// References the given table.
    pub fn table(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            column: None,
            ignore: None,
            id_column: None,
            connection: None,
        }
    }

    /// The column that must hold a unique value.
    ///
    /// When unset the engine uses the field name itself.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Excludes the record with this id from the uniqueness check.
    pub fn ignore(mut self, id: impl Into<String>) -> Self {
        self.ignore = Some(id.into());
        self
    }

    /// The column the ignored id is matched against, when it is not the
    /// primary key.
    pub fn id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = Some(column.into());
        self
    }

    /// Queries through the named database connection, rendered dot-prefixed
    /// onto the table name (`connection.table`).
    pub fn connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    pub(crate) fn render(&self) -> String {
        let mut token = String::from("unique:");
        push_source(&mut token, &self.source, self.connection.as_deref());
        for part in [&self.column, &self.ignore, &self.id_column]
            .into_iter()
            .flatten()
        {
            token.push(',');
            token.push_str(part);
        }
        token
    }
}

fn push_source(token: &mut String, source: &str, connection: Option<&str>) {
    if let Some(connection) = connection {
        token.push_str(connection);
        token.push('.');
    }
    token.push_str(source);
}

// ============================================================================
// FIELD RULES
// ============================================================================

impl FieldRules {
    /// The field's value must exist in the referenced record source.
    pub fn exists(self, reference: Exists) -> Self {
        let token = reference.render();
        self.push(token)
    }

    /// The field's value must not already exist in the referenced record
    /// source.
    pub fn unique(self, reference: Unique) -> Self {
        let token = reference.render();
        self.push(token)
    }
}

#[cfg(test)]
mod tests {
    use super::{Exists, Unique};
    use crate::field;

    #[test]
    fn exists_with_table_only() {
        let f = field("user_id").exists(Exists::table("users"));
        assert_eq!(f.rules(), &["exists:users"]);
    }

    #[test]
    fn exists_with_column_and_connection() {
        let f = field("user_id").exists(Exists::table("users").column("id").connection("tenant"));
        assert_eq!(f.rules(), &["exists:tenant.users,id"]);
    }

    #[test]
    fn unique_with_connection_prefixes_the_table() {
        let f = field("email").unique(Unique::table("users").column("email").connection("tenant"));
        assert_eq!(f.rules(), &["unique:tenant.users,email"]);
    }

    #[test]
    fn unique_renders_supplied_qualifiers_in_order() {
        let reference = Unique::table("users")
            .column("email")
            .ignore("42")
            .id_column("user_id");
        let f = field("email").unique(reference);
        assert_eq!(f.rules(), &["unique:users,email,42,user_id"]);
    }

    #[test]
    fn skipped_qualifiers_shift_later_ones_left() {
        // No column, but an ignored id: the engine sees the id where it
        // expects the column. Deliberately not our problem to detect.
        let f = field("email").unique(Unique::table("users").ignore("42"));
        assert_eq!(f.rules(), &["unique:users,42"]);
    }
}
