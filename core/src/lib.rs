//! Typed SQL fragment building for sqlweave.
//!
//! The crate is organised around three ideas:
//!
//! - **Fragments**: [`SQL`] is a flat list of [`SQLChunk`]s (keywords,
//!   identifiers, raw text and literal [`Value`]s). Operators and builders
//!   produce fragments; nothing is rendered until a [`Context`] is involved.
//! - **Typed operands**: [`Expr`] attaches a value-type marker from
//!   [`types`] to anything that produces a fragment, including plain Rust
//!   scalars.
//! - **Serialization**: [`Serialize`] nodes list their literal operands as
//!   [`Dependencies`]; [`serialize`] checks them against the target
//!   [`Context`] first and only then writes text, so a rejected operand never
//!   leaves partial SQL behind.
//!
//! ```
//! use sqlweave_core::expr::{case, column, eq};
//! use sqlweave_core::types::Integer;
//! use sqlweave_core::{SqlContext, serialize};
//!
//! let x = column::<Integer>("x");
//! let expr = case().when(eq(x, 1), "one").r#else("many");
//!
//! let mut ctx = SqlContext::default();
//! serialize(&expr, &mut ctx).unwrap();
//! assert_eq!(ctx.as_str(), "CASE WHEN x = 1 THEN 'one' ELSE 'many' END");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod prelude {
    #[cfg(feature = "std")]
    pub use std::{
        borrow::Cow,
        boxed::Box,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    #[cfg(not(feature = "std"))]
    pub use alloc::{
        borrow::Cow,
        boxed::Box,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

#[macro_use]
mod trace;

pub mod context;
pub mod error;
pub mod expr;
pub mod schema;
pub mod serialize;
pub mod sql;
pub mod traits;
pub mod types;
pub mod value;

pub use context::{Context, ContextOptions, SqlContext, TrustedContext};
pub use error::{Result, SerializeError};
pub use expr::Expr;
pub use serialize::{Dependencies, Dependency, OperandSlot, Serialize, serialize};
pub use sql::{SQL, SQLChunk, Token};
pub use sqlweave_types::{Dialect, ValueCategory};
pub use traits::ToSQL;
pub use value::{SQLNull, Value};

#[doc(hidden)]
pub mod __private {
    pub use crate::prelude::{Vec, vec};
}
