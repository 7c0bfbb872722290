//! NULL handling.

use crate::sql::{SQL, Token};
use crate::types::Boolean;

use super::{Expr, SQLExpr};

/// `IS NULL` predicate.
pub fn is_null<'a, E>(expr: E) -> SQLExpr<'a, Boolean>
where
    E: Expr<'a>,
{
    SQLExpr::new(expr.into_sql().push(Token::IS).push(Token::NULL))
}

/// `IS NOT NULL` predicate.
pub fn is_not_null<'a, E>(expr: E) -> SQLExpr<'a, Boolean>
where
    E: Expr<'a>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::IS)
            .push(Token::NOT)
            .push(Token::NULL),
    )
}

/// `IF_NULL(lhs, rhs)`: `lhs` unless it is NULL, otherwise `rhs`.
///
/// The result has the value type of `rhs`.
///
/// ```
/// use sqlweave_core::expr::{column, if_null};
/// use sqlweave_core::types::Integer;
///
/// assert_eq!(if_null(column::<Integer>("n"), 0).to_string(), "IF_NULL(n, 0)");
/// ```
pub fn if_null<'a, L, R>(lhs: L, rhs: R) -> SQLExpr<'a, R::ValueType>
where
    L: Expr<'a>,
    R: Expr<'a>,
{
    SQLExpr::new(SQL::func(
        "IF_NULL",
        lhs.into_sql().push(Token::COMMA).append(rhs.into_sql()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::column;
    use crate::types::{Text, ValueType};
    use crate::value::SQLNull;
    use sqlweave_types::ValueCategory;

    #[test]
    fn null_predicates() {
        let name = column::<Text>("name");
        assert_eq!(is_null(name).to_string(), "name IS NULL");
        assert_eq!(is_not_null(name).to_string(), "name IS NOT NULL");
    }

    #[test]
    fn if_null_takes_type_of_fallback() {
        fn category<'a, E: Expr<'a>>(_: &E) -> ValueCategory {
            <E::ValueType as ValueType>::CATEGORY
        }

        let expr = if_null(SQLNull, "fallback");
        assert_eq!(category(&expr), ValueCategory::Text);
        assert_eq!(expr.to_string(), "IF_NULL(NULL, 'fallback')");
    }
}
