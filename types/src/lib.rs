//! Shared type definitions for sqlweave
//!
//! This crate provides the small enums used across the sqlweave crates:
//!
//! - [`Dialect`] - Database dialect enum (SQLite, PostgreSQL, MySQL)
//! - [`ValueCategory`] - Runtime view of an operand's SQL value type
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

mod category;
mod dialect;

pub use category::ValueCategory;
pub use dialect::{Dialect, DialectParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Dialect, ValueCategory};
}
