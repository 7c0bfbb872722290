//! Validation and output of complete nodes.
//!
//! Serialization happens in two passes. The first collects every literal
//! operand of a node into [`Dependencies`] and asks the target [`Context`]
//! whether it can write each one; the second writes text. Only the first pass
//! can fail, so a context is either left untouched or receives the complete
//! fragment.

use core::fmt;

use smallvec::SmallVec;
use sqlweave_types::ValueCategory;

use crate::context::Context;
use crate::error::{Result, SerializeError};
use crate::expr::SQLExpr;
use crate::sql::SQL;
use crate::types::ValueType;
use crate::value::Value;

/// Where an operand sits inside the node being serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandSlot {
    /// A free-standing fragment.
    Operand,
    /// The subject of a simple CASE.
    Subject,
    /// Condition of the branch at this zero-based index.
    Condition(usize),
    /// Result of the branch at this zero-based index.
    Result(usize),
    /// The ELSE value of a CASE.
    Else,
    /// DEFAULT value of the named column.
    Default(&'static str),
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSlot::Operand => f.write_str("operand"),
            OperandSlot::Subject => f.write_str("CASE subject"),
            OperandSlot::Condition(i) => write!(f, "WHEN condition of branch {}", i + 1),
            OperandSlot::Result(i) => write!(f, "THEN result of branch {}", i + 1),
            OperandSlot::Else => f.write_str("ELSE value"),
            OperandSlot::Default(column) => write!(f, "DEFAULT of column `{column}`"),
        }
    }
}

/// One literal operand of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub slot: OperandSlot,
    pub category: ValueCategory,
}

/// The flattened literal operands of a node, in output order.
///
/// Absent slots (no subject, no ELSE) contribute nothing. NaN and infinite
/// floats are tracked separately: no dialect has a literal for them, so every
/// context rejects them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dependencies {
    items: SmallVec<[Dependency; 8]>,
    non_finite: SmallVec<[OperandSlot; 2]>,
}

impl Dependencies {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, slot: OperandSlot, category: ValueCategory) {
        self.items.push(Dependency { slot, category });
    }

    /// Add a literal value under `slot`.
    pub fn push_value(&mut self, slot: OperandSlot, value: &Value<'_>) {
        if let Value::Floating(v) = value
            && !v.is_finite()
        {
            self.non_finite.push(slot);
        }
        self.push(slot, value.category());
    }

    /// Add every literal value of `sql` under `slot`.
    pub fn extend_from_sql(&mut self, slot: OperandSlot, sql: &SQL<'_>) {
        for value in sql.values() {
            self.push_value(slot, value);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.items.iter()
    }

    /// Fail on the first non-finite float, then on the first dependency `ctx`
    /// does not accept.
    pub fn check<C: Context + ?Sized>(&self, ctx: &C) -> Result<()> {
        if let Some(&slot) = self.non_finite.first() {
            sqlweave_trace_reject!(slot, ValueCategory::Floating, ctx.kind());
            return Err(SerializeError::NonFiniteFloat { slot });
        }
        for dep in &self.items {
            if !ctx.accepts(dep.category) {
                sqlweave_trace_reject!(dep.slot, dep.category, ctx.kind());
                return Err(SerializeError::UnserializableOperand {
                    slot: dep.slot,
                    category: dep.category,
                    context: ctx.kind(),
                });
            }
        }
        Ok(())
    }
}

impl<'d> IntoIterator for &'d Dependencies {
    type Item = &'d Dependency;
    type IntoIter = core::slice::Iter<'d, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A node that can be validated against and written to a [`Context`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be serialized",
    label = "not a complete SQL node",
    note = "a CASE expression needs at least one `.when()` branch before it can be serialized"
)]
pub trait Serialize {
    /// Append this node's literal operands to `deps`.
    fn collect_dependencies(&self, deps: &mut Dependencies);

    fn dependencies(&self) -> Dependencies {
        let mut deps = Dependencies::new();
        self.collect_dependencies(&mut deps);
        deps
    }

    /// Check that `ctx` can serialize this node.
    fn validate<C: Context + ?Sized>(&self, ctx: &C) -> Result<()> {
        self.dependencies().check(ctx)
    }

    /// Write the node. Infallible; call [`validate`](Serialize::validate) first
    /// or go through [`serialize`].
    fn write_to<C: Context + ?Sized>(&self, ctx: &mut C);
}

/// Validate `node` against `ctx`, then append its text.
///
/// Returns the context so serialization composes into a larger expression's
/// output without an intermediate string.
///
/// ```
/// use sqlweave_core::expr::case;
/// use sqlweave_core::{SerializeError, SqlContext, TrustedContext, serialize};
///
/// let expr = case().when(true, 1).r#else("none");
///
/// let mut ctx = SqlContext::default();
/// assert_eq!(
///     serialize(&expr, &mut ctx).unwrap().as_str(),
///     "CASE WHEN 1 THEN 1 ELSE 'none' END"
/// );
///
/// let mut strict = TrustedContext::default();
/// assert!(matches!(
///     serialize(&expr, &mut strict),
///     Err(SerializeError::UnserializableOperand { .. })
/// ));
/// assert_eq!(strict.as_str(), "");
/// ```
pub fn serialize<'c, N, C>(node: &N, ctx: &'c mut C) -> Result<&'c mut C>
where
    N: Serialize + ?Sized,
    C: Context + ?Sized,
{
    node.validate(ctx)?;
    node.write_to(ctx);
    sqlweave_trace_serialize!(
        core::any::type_name::<N>(),
        node.dependencies().len(),
        ctx.kind()
    );
    Ok(ctx)
}

// ==================== fragment implementations ====================

impl<'a> Serialize for SQL<'a> {
    fn collect_dependencies(&self, deps: &mut Dependencies) {
        deps.extend_from_sql(OperandSlot::Operand, self);
    }

    fn write_to<C: Context + ?Sized>(&self, ctx: &mut C) {
        SQL::write_to(self, ctx);
    }
}

impl<'a, T: ValueType> Serialize for SQLExpr<'a, T> {
    fn collect_dependencies(&self, deps: &mut Dependencies) {
        self.as_sql().collect_dependencies(deps);
    }

    fn write_to<C: Context + ?Sized>(&self, ctx: &mut C) {
        self.as_sql().write_to(ctx);
    }
}

impl<N: Serialize + ?Sized> Serialize for &N {
    fn collect_dependencies(&self, deps: &mut Dependencies) {
        (**self).collect_dependencies(deps);
    }

    fn validate<C: Context + ?Sized>(&self, ctx: &C) -> Result<()> {
        (**self).validate(ctx)
    }

    fn write_to<C: Context + ?Sized>(&self, ctx: &mut C) {
        (**self).write_to(ctx);
    }
}
