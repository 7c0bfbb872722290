//! Literal operand values.

use crate::prelude::*;
use sqlweave_types::ValueCategory;

/// A literal value embedded in a SQL fragment.
///
/// Literals are written through the [`Context`](crate::Context), which
/// decides how (and whether) each category can be rendered. Text is escaped
/// there, never here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Integer(i64),
    Floating(f64),
    Text(Cow<'a, str>),
    Boolean(bool),
    Null,
}

impl<'a> Value<'a> {
    /// The value category of this literal.
    #[inline]
    pub const fn category(&self) -> ValueCategory {
        match self {
            Value::Integer(_) => ValueCategory::Integer,
            Value::Floating(_) => ValueCategory::Floating,
            Value::Text(_) => ValueCategory::Text,
            Value::Boolean(_) => ValueCategory::Boolean,
            Value::Null => ValueCategory::Null,
        }
    }

    /// Detach the value from any borrowed text.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Integer(v) => Value::Integer(v),
            Value::Floating(v) => Value::Floating(v),
            Value::Text(v) => Value::Text(Cow::Owned(v.into_owned())),
            Value::Boolean(v) => Value::Boolean(v),
            Value::Null => Value::Null,
        }
    }
}

/// Explicit SQL NULL marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SQLNull;

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for Value<'a> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<f32> for Value<'a> {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Floating(f64::from(value))
    }
}

impl<'a> From<f64> for Value<'a> {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Floating(value)
    }
}

impl<'a> From<bool> for Value<'a> {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for Value<'a> {
    #[inline]
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        Value::Text(value)
    }
}

impl<'a> From<SQLNull> for Value<'a> {
    #[inline]
    fn from(_: SQLNull) -> Self {
        Value::Null
    }
}
