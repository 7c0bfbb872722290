//! Typed SQL expressions.
//!
//! [`Expr`] is the operand-wrapping seam: anything that can produce a SQL
//! fragment and declares a value type can be used where an operand is
//! expected. Rust scalars implement it directly, so `when(cond, "a")` wraps
//! the `"a"` into a text literal.

mod case;
mod cmp;
mod column;
mod logical;
mod null;
mod primitives;
mod typed;

pub use case::*;
pub use cmp::*;
pub use column::*;
pub use logical::*;
pub use null::*;
pub use typed::*;

use crate::traits::ToSQL;
use crate::types::ValueType;

/// An operand usable inside a SQL expression, carrying its value type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a SQL operand",
    label = "not a SQL expression",
    note = "use a typed expression, a column, or a supported scalar (integers, floats, bool, &str, String, SQLNull)"
)]
pub trait Expr<'a>: ToSQL<'a> {
    /// The value type this operand evaluates to.
    type ValueType: ValueType;
}
