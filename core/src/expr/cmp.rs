//! Type-safe comparison functions.
//!
//! These functions enforce type compatibility at compile time using the
//! `Expr` trait and `Compatible` constraint. Comparing incompatible types
//! (e.g., `eq(int_column, "text")`) will fail at compile time.

use crate::sql::{SQL, Token};
use crate::traits::ToSQL;
use crate::types::{Boolean, Compatible};

use super::{Expr, SQLExpr};

fn binary_op<'a, L, R>(left: L, operator: Token, right: R) -> SQL<'a>
where
    L: ToSQL<'a>,
    R: ToSQL<'a>,
{
    left.into_sql().push(operator).append(right.into_sql())
}

/// Equality comparison (`=`).
///
/// ```
/// use sqlweave_core::expr::{column, eq};
/// use sqlweave_core::types::Integer;
///
/// assert_eq!(eq(column::<Integer>("x"), 1).to_string(), "x = 1");
/// ```
pub fn eq<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a>,
    R: Expr<'a>,
    L::ValueType: Compatible<R::ValueType>,
{
    SQLExpr::new(binary_op(left, Token::EQ, right))
}

/// Inequality comparison (`<>`).
pub fn neq<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a>,
    R: Expr<'a>,
    L::ValueType: Compatible<R::ValueType>,
{
    SQLExpr::new(binary_op(left, Token::NE, right))
}

/// Greater-than comparison (`>`).
pub fn gt<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a>,
    R: Expr<'a>,
    L::ValueType: Compatible<R::ValueType>,
{
    SQLExpr::new(binary_op(left, Token::GT, right))
}

/// Greater-than-or-equal comparison (`>=`).
pub fn gte<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a>,
    R: Expr<'a>,
    L::ValueType: Compatible<R::ValueType>,
{
    SQLExpr::new(binary_op(left, Token::GE, right))
}

/// Less-than comparison (`<`).
pub fn lt<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a>,
    R: Expr<'a>,
    L::ValueType: Compatible<R::ValueType>,
{
    SQLExpr::new(binary_op(left, Token::LT, right))
}

/// Less-than-or-equal comparison (`<=`).
pub fn lte<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a>,
    R: Expr<'a>,
    L::ValueType: Compatible<R::ValueType>,
{
    SQLExpr::new(binary_op(left, Token::LE, right))
}
