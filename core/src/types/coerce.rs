//! Comparison compatibility between value types.

use super::{Boolean, Floating, Integer, Null, Text, ValueType};

/// Marker trait indicating two value types can be compared.
///
/// - Every type compares with itself
/// - Integers and floats compare with each other
/// - NULL compares with anything (the result is NULL, but it is legal SQL)
#[diagnostic::on_unimplemented(
    message = "SQL type `{Self}` is not compatible with `{Rhs}`",
    label = "these SQL types cannot be compared",
    note = "compatible types include: integers with floats, NULL with anything, and any type with itself"
)]
pub trait Compatible<Rhs: ValueType = Self>: ValueType {}

impl<T: ValueType> Compatible<T> for T {}

impl Compatible<Floating> for Integer {}
impl Compatible<Integer> for Floating {}

impl Compatible<Null> for Integer {}
impl Compatible<Null> for Floating {}
impl Compatible<Null> for Text {}
impl Compatible<Null> for Boolean {}
impl Compatible<Integer> for Null {}
impl Compatible<Floating> for Null {}
impl Compatible<Text> for Null {}
impl Compatible<Boolean> for Null {}
