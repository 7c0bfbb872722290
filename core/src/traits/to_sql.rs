//! ToSQL trait for converting types to SQL fragments.

use crate::prelude::*;
use crate::sql::{SQL, Token};
use crate::value::{SQLNull, Value};

/// Trait for types that can be converted to SQL fragments.
///
/// The `'a` lifetime ties any borrowed literal values to the resulting SQL
/// fragment, allowing zero-copy construction when inputs are already
/// borrowed.
pub trait ToSQL<'a> {
    fn to_sql(&self) -> SQL<'a>;

    /// Consume self and return SQL without cloning.
    /// Default delegates to `to_sql()` (which clones). Types that own their SQL
    /// override this to avoid the clone.
    fn into_sql(self) -> SQL<'a>
    where
        Self: Sized,
    {
        self.to_sql()
    }

    /// Render as `<self> AS <alias>`.
    fn alias(&self, alias: &'a str) -> SQL<'a> {
        self.to_sql().alias(alias)
    }
}

impl<'a, T> ToSQL<'a> for &T
where
    T: ToSQL<'a>,
{
    fn to_sql(&self) -> SQL<'a> {
        (**self).to_sql()
    }
}

impl<'a> ToSQL<'a> for Value<'a> {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(self.clone())
    }

    fn into_sql(self) -> SQL<'a> {
        SQL::value(self)
    }
}

impl<'a> ToSQL<'a> for SQLNull {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(Value::Null)
    }
}

impl<'a, T> ToSQL<'a> for Vec<T>
where
    T: ToSQL<'a>,
{
    fn to_sql(&self) -> SQL<'a> {
        SQL::join(self.iter().map(ToSQL::to_sql), Token::COMMA)
    }
}

macro_rules! impl_to_sql_for_scalar {
    ($($ty:ty),*) => {
        $(
            impl<'a> ToSQL<'a> for $ty {
                #[inline]
                fn to_sql(&self) -> SQL<'a> {
                    SQL::value(*self)
                }
            }
        )*
    };
}

impl_to_sql_for_scalar!(i8, i16, i32, i64, u8, u16, u32, f32, f64, bool);

impl<'a> ToSQL<'a> for &'a str {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(*self)
    }
}

impl<'a> ToSQL<'a> for String {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(self.clone())
    }

    fn into_sql(self) -> SQL<'a> {
        SQL::value(self)
    }
}
