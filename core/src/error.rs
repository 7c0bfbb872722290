use sqlweave_types::ValueCategory;
use thiserror::Error;

use crate::serialize::OperandSlot;

/// Errors raised while validating a node against a serialization context.
///
/// Validation runs before any text is written, so an error here always means
/// the context was left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SerializeError {
    /// An operand's value category is not accepted by the target context
    #[error("{context} context cannot serialize {category} operand in {slot}")]
    UnserializableOperand {
        slot: OperandSlot,
        category: ValueCategory,
        context: &'static str,
    },

    /// A NaN or infinite float, which has no SQL literal form
    #[error("non-finite float operand in {slot} has no SQL literal")]
    NonFiniteFloat { slot: OperandSlot },

    /// CREATE TABLE for a table without columns
    #[error("table `{0}` declares no columns")]
    EmptyTable(&'static str),
}

/// Result type for serialization
pub type Result<T> = core::result::Result<T, SerializeError>;
