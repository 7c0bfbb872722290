//! SQLExpr - A typed SQL expression wrapper.

use core::fmt::{self, Display};
use core::marker::PhantomData;

use crate::sql::SQL;
use crate::traits::ToSQL;
use crate::types::ValueType;

use super::Expr;

/// A SQL fragment that carries its value type.
///
/// Operators return `SQLExpr` so the value type survives composition:
/// `eq(a, b)` is a `SQLExpr<'_, Boolean>` and can be used as a CASE
/// condition or compared again.
#[derive(Debug, Clone, PartialEq)]
pub struct SQLExpr<'a, T: ValueType> {
    sql: SQL<'a>,
    _ty: PhantomData<T>,
}

impl<'a, T: ValueType> SQLExpr<'a, T> {
    /// Create a new typed expression from raw SQL.
    #[inline]
    pub fn new(sql: SQL<'a>) -> Self {
        Self {
            sql,
            _ty: PhantomData,
        }
    }

    /// Consume the wrapper and return the inner SQL.
    #[inline]
    pub fn into_sql(self) -> SQL<'a> {
        self.sql
    }

    /// Get a reference to the inner SQL.
    #[inline]
    pub fn as_sql(&self) -> &SQL<'a> {
        &self.sql
    }
}

impl<'a, T: ValueType> ToSQL<'a> for SQLExpr<'a, T> {
    fn to_sql(&self) -> SQL<'a> {
        self.sql.clone()
    }

    fn into_sql(self) -> SQL<'a> {
        self.sql
    }
}

impl<'a, T: ValueType> From<SQLExpr<'a, T>> for SQL<'a> {
    fn from(expr: SQLExpr<'a, T>) -> Self {
        expr.sql
    }
}

impl<'a, T: ValueType> Expr<'a> for SQLExpr<'a, T> {
    type ValueType = T;
}

impl<'a, T: ValueType> Display for SQLExpr<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.sql, f)
    }
}

impl<'a, T: ValueType> AsRef<SQL<'a>> for SQLExpr<'a, T> {
    fn as_ref(&self) -> &SQL<'a> {
        &self.sql
    }
}
