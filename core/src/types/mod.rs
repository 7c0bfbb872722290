//! SQL value-type markers for compile-time type tracking.
//!
//! Each marker is a zero-sized type standing for one [`ValueCategory`].
//! Operands carry a marker through [`Expr::ValueType`](crate::Expr), and
//! builders use it to give their result a value type without inspecting
//! anything at runtime.
//!
//! # Example
//!
//! ```
//! use sqlweave_core::types::{Integer, ValueType};
//! use sqlweave_core::ValueCategory;
//!
//! assert_eq!(Integer::CATEGORY, ValueCategory::Integer);
//! ```

mod coerce;

pub use coerce::*;
pub use sqlweave_types::ValueCategory;

mod private {
    pub trait Sealed {}
}

/// Represents a SQL value type at the type level.
///
/// Sealed: only the markers in this module implement it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a recognized SQL value type",
    label = "use a value type marker (Integer, Floating, Text, Boolean, Null)"
)]
pub trait ValueType: private::Sealed + Copy + Default + core::fmt::Debug + 'static {
    /// The runtime category this marker stands for.
    const CATEGORY: ValueCategory;
}

/// SQL INTEGER marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integer;

/// SQL REAL / DOUBLE PRECISION marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Floating;

/// SQL TEXT marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Text;

/// SQL BOOLEAN marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean;

/// Marker for the SQL NULL literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl private::Sealed for Integer {}
impl private::Sealed for Floating {}
impl private::Sealed for Text {}
impl private::Sealed for Boolean {}
impl private::Sealed for Null {}

impl ValueType for Integer {
    const CATEGORY: ValueCategory = ValueCategory::Integer;
}
impl ValueType for Floating {
    const CATEGORY: ValueCategory = ValueCategory::Floating;
}
impl ValueType for Text {
    const CATEGORY: ValueCategory = ValueCategory::Text;
}
impl ValueType for Boolean {
    const CATEGORY: ValueCategory = ValueCategory::Boolean;
}
impl ValueType for Null {
    const CATEGORY: ValueCategory = ValueCategory::Null;
}
