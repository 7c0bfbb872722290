//! Runtime value categories.

use crate::Dialect;

/// The semantic SQL type of an operand, known at runtime.
///
/// Compile-time code uses the zero-sized markers in `sqlweave-core::types`;
/// each marker maps onto exactly one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueCategory {
    Integer,
    Floating,
    Text,
    Boolean,
    /// SQL NULL. A real operand, unlike an absent slot.
    Null,
}

impl ValueCategory {
    /// Whether literals of this category must be escaped before they can be
    /// written into SQL text.
    #[inline]
    #[must_use]
    pub const fn requires_escaping(&self) -> bool {
        matches!(self, ValueCategory::Text)
    }

    /// Column type name used by CREATE TABLE.
    #[must_use]
    pub const fn sql_type(&self, dialect: Dialect) -> &'static str {
        match (self, dialect) {
            (ValueCategory::Integer, _) => "INTEGER",
            (ValueCategory::Floating, Dialect::PostgreSQL) => "DOUBLE PRECISION",
            (ValueCategory::Floating, _) => "REAL",
            (ValueCategory::Text, _) => "TEXT",
            (ValueCategory::Boolean, _) => "BOOLEAN",
            (ValueCategory::Null, _) => "NULL",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueCategory::Integer => "integer",
            ValueCategory::Floating => "floating",
            ValueCategory::Text => "text",
            ValueCategory::Boolean => "boolean",
            ValueCategory::Null => "null",
        }
    }
}

impl core::fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
