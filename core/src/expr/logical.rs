//! Logical operators over boolean expressions.

use crate::sql::{SQL, Token};
use crate::types::Boolean;

use super::{Expr, SQLExpr};

/// Logical AND of two conditions, parenthesized: `(a AND b)`.
pub fn and<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a, ValueType = Boolean>,
    R: Expr<'a, ValueType = Boolean>,
{
    SQLExpr::new(
        left.into_sql()
            .push(Token::AND)
            .append(right.into_sql())
            .parens(),
    )
}

/// Logical OR of two conditions, parenthesized: `(a OR b)`.
pub fn or<'a, L, R>(left: L, right: R) -> SQLExpr<'a, Boolean>
where
    L: Expr<'a, ValueType = Boolean>,
    R: Expr<'a, ValueType = Boolean>,
{
    SQLExpr::new(
        left.into_sql()
            .push(Token::OR)
            .append(right.into_sql())
            .parens(),
    )
}

/// Logical negation: `NOT (a)`.
pub fn not<'a, E>(expr: E) -> SQLExpr<'a, Boolean>
where
    E: Expr<'a, ValueType = Boolean>,
{
    SQLExpr::new(SQL::token(Token::NOT).append(expr.into_sql().parens()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{column, eq, gt};
    use crate::types::Integer;

    #[test]
    fn and_or_not() {
        let a = column::<Integer>("a");
        let b = column::<Boolean>("b");
        assert_eq!(and(gt(a, 1), b).to_string(), "(a > 1 AND b)");
        assert_eq!(or(b, eq(a, 0)).to_string(), "(b OR a = 0)");
        assert_eq!(not(b).to_string(), "NOT (b)");
    }
}
