//! Table declarations and CREATE TABLE generation.
//!
//! A [`Table`] is a name plus an ordered list of [`ColumnDef`]s. Tables are
//! usually declared with [`declare_table!`](crate::declare_table), which
//! also generates typed [`Column`](crate::expr::Column) accessors for use in
//! expressions.

mod column;
mod create_table;
mod macros;

pub use column::*;
pub use create_table::*;

use crate::prelude::*;

/// A table with a fixed name and column list.
pub trait Table {
    /// SQL name of the table.
    const NAME: &'static str;

    /// Column definitions in declaration order.
    fn columns(&self) -> Vec<ColumnDef>;
}
