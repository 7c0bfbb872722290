//! # sqlweave
//!
//! Type-safe SQL CASE expressions and CREATE TABLE statements.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlweave::prelude::*;
//!
//! declare_table! {
//!     pub struct Users = "users" {
//!         id: Integer .primary_key(),
//!         age: Integer,
//!         name: Text .with_default("anon"),
//!     }
//! }
//!
//! # fn main() -> sqlweave::Result<()> {
//! let label = case()
//!     .when(gt(Users.age(), 65), "senior")
//!     .when(gt(Users.age(), 18), "adult")
//!     .r#else("minor");
//!
//! let mut ctx = SqlContext::default();
//! serialize(&label, &mut ctx)?;
//! assert_eq!(
//!     ctx.as_str(),
//!     "CASE WHEN users.age > 65 THEN 'senior' WHEN users.age > 18 THEN 'adult' ELSE 'minor' END"
//! );
//!
//! let mut ctx = SqlContext::new(Dialect::PostgreSQL);
//! serialize(&create_table(&Users), &mut ctx)?;
//! assert_eq!(
//!     ctx.as_str(),
//!     "CREATE TABLE users(\nid INTEGER,\nage INTEGER,\nname TEXT DEFAULT 'anon'\n,PRIMARY KEY(id))"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Contexts
//!
//! | Context          | Text literals | Booleans           |
//! |------------------|---------------|--------------------|
//! | `SqlContext`     | escaped       | dialect literal    |
//! | `TrustedContext` | rejected      | dialect literal    |

#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for serialization
pub use sqlweave_core::error::Result;

/// Database dialect enum
pub use sqlweave_types::Dialect;

/// Table declaration macro
pub use sqlweave_core::declare_table;

/// Serialize a node into a context, validating its operands first
pub use sqlweave_core::serialize;

/// Error types
pub mod error {
    pub use sqlweave_core::error::SerializeError;
}

// =============================================================================
// Core module - shared functionality
// =============================================================================

/// Core types and traits.
///
/// # Module Structure
///
/// - **Fragments**: `SQL`, `SQLChunk`, `Token`, `Value`
/// - **Expressions**: `case`, `case_of`, `when`, comparisons (`eq`, `neq`,
///   `gt`, ...), logical operators (`and`, `or`, `not`), `is_null`, `if_null`
/// - **Serialization**: `Context`, `SqlContext`, `TrustedContext`,
///   `Serialize`, `Dependencies`
/// - **Schema**: `Table`, `ColumnDef`, `CreateTable`, `create_table`
pub mod core {
    pub use sqlweave_core::{SQL, SQLChunk, SQLNull, Token, Value};

    pub use sqlweave_core::{Expr, ToSQL};

    pub use sqlweave_core::{
        Context, ContextOptions, Dependencies, Dependency, OperandSlot, Serialize, SqlContext,
        TrustedContext,
    };

    /// SQL value-type markers (`Integer`, `Floating`, `Text`, `Boolean`, `Null`).
    pub use sqlweave_core::types;

    /// Typed expressions, columns and the CASE builder.
    pub use sqlweave_core::expr;

    /// Table declarations and CREATE TABLE.
    pub use sqlweave_core::schema;

    pub use sqlweave_types::ValueCategory;
}

/// Everything needed to build and serialize expressions.
pub mod prelude {
    pub use crate::core::expr::{
        Case, CaseInit, Closed, Column, Open, SQLExpr, When, and, case, case_of, column, eq, gt,
        gte, if_null, is_not_null, is_null, lt, lte, neq, not, or, when,
    };
    pub use crate::core::schema::{ColumnDef, CreateTable, Table, create_table};
    pub use crate::core::types::{Boolean, Floating, Integer, Null, Text};
    pub use crate::core::{
        Context, ContextOptions, Expr, SQL, SQLNull, Serialize, SqlContext, ToSQL,
        TrustedContext, Value, ValueCategory,
    };
    pub use crate::{Dialect, declare_table, serialize};
}
