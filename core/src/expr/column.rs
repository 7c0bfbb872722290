//! Typed column references.

use core::marker::PhantomData;

use crate::sql::{SQL, SQLChunk, Token};
use crate::traits::ToSQL;
use crate::types::ValueType;

use super::Expr;

/// A reference to a column, optionally qualified by its table.
///
/// Renders as `name` or `table.name`; identifiers are never literal operands,
/// so columns add nothing to a node's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<T: ValueType> {
    table: Option<&'static str>,
    name: &'static str,
    _ty: PhantomData<T>,
}

impl<T: ValueType> Column<T> {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            table: None,
            name,
            _ty: PhantomData,
        }
    }

    #[inline]
    pub const fn qualified(table: &'static str, name: &'static str) -> Self {
        Self {
            table: Some(table),
            name,
            _ty: PhantomData,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn table(&self) -> Option<&'static str> {
        self.table
    }
}

/// Shorthand for an unqualified [`Column`].
///
/// ```
/// use sqlweave_core::expr::column;
/// use sqlweave_core::types::Integer;
///
/// assert_eq!(column::<Integer>("x").to_string(), "x");
/// ```
#[inline]
pub const fn column<T: ValueType>(name: &'static str) -> Column<T> {
    Column::new(name)
}

impl<'a, T: ValueType> ToSQL<'a> for Column<T> {
    fn to_sql(&self) -> SQL<'a> {
        match self.table {
            Some(table) => SQL::ident(table)
                .push(Token::DOT)
                .push(SQLChunk::ident_static(self.name)),
            None => SQL::ident(self.name),
        }
    }
}

impl<'a, T: ValueType> Expr<'a> for Column<T> {
    type ValueType = T;
}

impl<T: ValueType> core::fmt::Display for Column<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(table) = self.table {
            write!(f, "{table}.")?;
        }
        f.write_str(self.name)
    }
}
