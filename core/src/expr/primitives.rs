//! Expr implementations for Rust primitive types.
//!
//! These implementations allow using Rust literals directly in typed SQL
//! expressions; each literal becomes a [`Value`](crate::Value) chunk.

use crate::types::{Boolean, Floating, Integer, Null, Text};
use crate::value::SQLNull;

use super::Expr;

macro_rules! impl_expr {
    ($value_type:ty => $($ty:ty),*) => {
        $(
            impl<'a> Expr<'a> for $ty {
                type ValueType = $value_type;
            }
        )*
    };
}

impl_expr!(Integer => i8, i16, i32, i64, u8, u16, u32);
impl_expr!(Floating => f32, f64);
impl_expr!(Boolean => bool);
impl_expr!(Text => String);
impl_expr!(Null => SQLNull);

impl<'a> Expr<'a> for &'a str {
    type ValueType = Text;
}

// =============================================================================
// Reference Types - Delegate to Inner
// =============================================================================

impl<'a, T> Expr<'a> for &T
where
    T: Expr<'a>,
{
    type ValueType = T::ValueType;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::traits::ToSQL;
    use crate::types::ValueType;
    use crate::value::Value;
    use sqlweave_types::ValueCategory;

    fn category_of<'a, E: Expr<'a>>(_: &E) -> ValueCategory {
        <E::ValueType as ValueType>::CATEGORY
    }

    #[test]
    fn scalars_wrap_into_values() {
        assert_eq!(category_of(&7i64), ValueCategory::Integer);
        assert_eq!(category_of(&0.5f64), ValueCategory::Floating);
        assert_eq!(category_of(&"a"), ValueCategory::Text);
        assert_eq!(category_of(&String::from("b")), ValueCategory::Text);
        assert_eq!(category_of(&false), ValueCategory::Boolean);
        assert_eq!(category_of(&SQLNull), ValueCategory::Null);

        let owned = String::from("b");
        let sql = owned.into_sql();
        assert_eq!(
            sql.values().collect::<Vec<_>>(),
            vec![&Value::Text(Cow::Owned("b".into()))]
        );
    }

    #[test]
    fn references_delegate() {
        let n = 3i32;
        assert_eq!(category_of(&&n), ValueCategory::Integer);
        assert_eq!((&n).to_sql().sql(), "3");
    }
}
