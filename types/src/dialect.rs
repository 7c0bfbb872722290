//! Database dialect enum
//!
//! The dialect decides the few places where rendered SQL text differs between
//! engines: boolean literals, identifier quoting and auto-increment columns.

/// SQL dialect for database-specific rendering
///
/// # Examples
///
/// ```
/// use sqlweave_types::Dialect;
///
/// assert_eq!(Dialect::PostgreSQL.boolean_literal(true), "TRUE");
/// assert_eq!(Dialect::SQLite.boolean_literal(true), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - booleans render as `1`/`0`, `AUTOINCREMENT`
    #[default]
    SQLite,

    /// PostgreSQL - booleans render as `TRUE`/`FALSE`, identity columns
    PostgreSQL,

    /// MySQL - booleans render as `1`/`0`, backtick identifiers, `AUTO_INCREMENT`
    MySQL,
}

impl Dialect {
    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"turso"`, `"libsql"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlweave_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("sqlite")
            || s.eq_ignore_ascii_case("turso")
            || s.eq_ignore_ascii_case("libsql")
        {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else {
            None
        }
    }

    /// Literal text for a boolean value.
    #[inline]
    #[must_use]
    pub const fn boolean_literal(&self, value: bool) -> &'static str {
        match (self, value) {
            (Dialect::PostgreSQL, true) => "TRUE",
            (Dialect::PostgreSQL, false) => "FALSE",
            (Dialect::SQLite | Dialect::MySQL, true) => "1",
            (Dialect::SQLite | Dialect::MySQL, false) => "0",
        }
    }

    /// Character used to quote identifiers when quoting is enabled.
    #[inline]
    #[must_use]
    pub const fn identifier_quote(&self) -> char {
        match self {
            Dialect::MySQL => '`',
            Dialect::SQLite | Dialect::PostgreSQL => '"',
        }
    }

    /// Column option emitted for an auto-incrementing column.
    #[must_use]
    pub const fn auto_increment_keyword(&self) -> &'static str {
        match self {
            Dialect::SQLite => "AUTOINCREMENT",
            Dialect::PostgreSQL => "GENERATED BY DEFAULT AS IDENTITY",
            Dialect::MySQL => "AUTO_INCREMENT",
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialectParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_parse() {
        assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("SQLite"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("libsql"), Some(Dialect::SQLite));

        assert_eq!(Dialect::parse("postgresql"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::parse("PG"), Some(Dialect::PostgreSQL));

        assert_eq!(Dialect::parse("MySQL"), Some(Dialect::MySQL));
        assert_eq!(Dialect::parse("mariadb"), Some(Dialect::MySQL));

        assert_eq!(Dialect::parse("oracle"), None);
        assert_eq!(Dialect::parse(""), None);
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("postgres".parse::<Dialect>(), Ok(Dialect::PostgreSQL));
        assert_eq!("nope".parse::<Dialect>(), Err(DialectParseError));
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(Dialect::SQLite.boolean_literal(false), "0");
        assert_eq!(Dialect::MySQL.boolean_literal(true), "1");
        assert_eq!(Dialect::PostgreSQL.boolean_literal(false), "FALSE");
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(format!("{}", Dialect::SQLite), "sqlite");
        assert_eq!(format!("{}", Dialect::PostgreSQL), "postgresql");
        assert_eq!(format!("{}", Dialect::MySQL), "mysql");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_dialect_serde() {
        let json = serde_json::to_string(&Dialect::PostgreSQL).unwrap();
        assert_eq!(json, "\"postgresql\"");
        let back: Dialect = serde_json::from_str("\"mysql\"").unwrap();
        assert_eq!(back, Dialect::MySQL);
    }
}
