//! Type-safe CASE/WHEN expressions.
//!
//! A typestate builder for SQL CASE expressions. Each step returns a new
//! type, so the legal call sequences are the only ones that compile:
//!
//! ```text
//! case() / case_of(x)  ->  CaseInit          (no branch yet, not serializable)
//!   .when(c, r)        ->  Case<T, Open>     (T = value type of r)
//!   .when(c, r)        ->  Case<T, Open>
//!   .r#else(v)         ->  Case<T, Closed>   (no further when/else)
//! ```
//!
//! Both `Open` and `Closed` expressions are complete: ELSE is optional in
//! SQL. The value type of the whole expression is the value type of the
//! first branch's result; later branches and the ELSE value are not checked
//! against it.
//!
//! # Example
//!
//! ```
//! use sqlweave_core::expr::{case, case_of, column, eq, gt};
//! use sqlweave_core::types::Integer;
//!
//! let age = column::<Integer>("age");
//!
//! // Searched CASE with ELSE
//! let label = case()
//!     .when(gt(age, 65), "Senior")
//!     .when(gt(age, 18), "Adult")
//!     .r#else("Minor");
//! assert_eq!(
//!     label.to_string(),
//!     "CASE WHEN age > 65 THEN 'Senior' WHEN age > 18 THEN 'Adult' ELSE 'Minor' END"
//! );
//!
//! // Simple CASE without ELSE
//! let x = column::<Integer>("x");
//! assert_eq!(
//!     case_of(x).when(eq(x, 1), "one").to_string(),
//!     "CASE x WHEN x = 1 THEN 'one' END"
//! );
//! ```

use core::fmt::{self, Display};
use core::marker::PhantomData;

use smallvec::SmallVec;
use sqlweave_types::ValueCategory;

use crate::context::{Context, SqlContext};
use crate::serialize::{Dependencies, OperandSlot, Serialize};
use crate::sql::{SQL, Token};
use crate::traits::ToSQL;
use crate::types::ValueType;

use super::Expr;

// =============================================================================
// Entry Points
// =============================================================================

/// Start building a searched CASE expression (`CASE WHEN <cond> ...`).
///
/// Returns a [`CaseInit`] which requires at least one `.when()` call before
/// it becomes a serializable expression.
pub fn case<'a>() -> CaseInit<'a> {
    CaseInit { subject: None }
}

/// Start building a simple CASE expression (`CASE <subject> WHEN ...`).
pub fn case_of<'a, S>(subject: S) -> CaseInit<'a>
where
    S: Expr<'a>,
{
    CaseInit {
        subject: Some(subject.into_sql()),
    }
}

/// Build a free-standing WHEN/THEN branch.
///
/// The branch takes the value category of `result`.
///
/// ```
/// use sqlweave_core::expr::when;
/// use sqlweave_core::{SqlContext, ValueCategory, serialize};
///
/// let branch = when(true, 1);
/// assert_eq!(branch.value_category(), ValueCategory::Integer);
///
/// let mut ctx = SqlContext::default();
/// serialize(&branch, &mut ctx).unwrap();
/// assert_eq!(ctx.as_str(), "WHEN 1 THEN 1");
/// ```
pub fn when<'a, C, R>(condition: C, result: R) -> When<'a>
where
    C: Expr<'a>,
    R: Expr<'a>,
{
    When {
        condition: condition.into_sql(),
        result: result.into_sql(),
        category: <R::ValueType as ValueType>::CATEGORY,
    }
}

// =============================================================================
// When — a single WHEN/THEN pair
// =============================================================================

/// One `WHEN <condition> THEN <result>` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct When<'a> {
    condition: SQL<'a>,
    result: SQL<'a>,
    category: ValueCategory,
}

impl<'a> When<'a> {
    #[inline]
    pub fn condition(&self) -> &SQL<'a> {
        &self.condition
    }

    #[inline]
    pub fn result(&self) -> &SQL<'a> {
        &self.result
    }

    /// Value category of the result operand.
    #[inline]
    pub fn value_category(&self) -> ValueCategory {
        self.category
    }

    fn collect_at(&self, index: usize, deps: &mut Dependencies) {
        deps.extend_from_sql(OperandSlot::Condition(index), &self.condition);
        deps.extend_from_sql(OperandSlot::Result(index), &self.result);
    }

    fn append_to(&self, sql: &mut SQL<'a>) {
        sql.push_mut(Token::WHEN);
        sql.append_mut(self.condition.clone());
        sql.push_mut(Token::THEN);
        sql.append_mut(self.result.clone());
    }
}

impl<'a> Serialize for When<'a> {
    fn collect_dependencies(&self, deps: &mut Dependencies) {
        self.collect_at(0, deps);
    }

    fn write_to<C: Context + ?Sized>(&self, ctx: &mut C) {
        let _ = ctx.write_str("WHEN ");
        self.condition.write_to(ctx);
        let _ = ctx.write_str(" THEN ");
        self.result.write_to(ctx);
    }
}

// =============================================================================
// CaseInit — before the first WHEN (no value type established yet)
// =============================================================================

/// Builder state before the first WHEN branch.
///
/// Holds only the optional subject. It is not an expression and does not
/// implement [`Serialize`].
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a CASE expression needs at least one `.when()` branch"]
pub struct CaseInit<'a> {
    subject: Option<SQL<'a>>,
}

impl<'a> CaseInit<'a> {
    /// Add the first WHEN branch. This establishes the value type.
    pub fn when<C, R>(self, condition: C, result: R) -> Case<'a, R::ValueType, Open>
    where
        C: Expr<'a>,
        R: Expr<'a>,
    {
        Case {
            subject: self.subject,
            branches: smallvec::smallvec![when(condition, result)],
            r#else: None,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn subject(&self) -> Option<&SQL<'a>> {
        self.subject.as_ref()
    }
}

// =============================================================================
// Builder states
// =============================================================================

mod private {
    pub trait Sealed {}
}

/// Construction state of a [`Case`].
pub trait CaseState: private::Sealed + fmt::Debug + Copy + Default + PartialEq + 'static {}

/// At least one branch, no ELSE yet: more branches or an ELSE may follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Open;

/// ELSE has been set: the expression is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Closed;

impl private::Sealed for Open {}
impl private::Sealed for Closed {}
impl CaseState for Open {}
impl CaseState for Closed {}

// =============================================================================
// Case — after at least one WHEN (value type T established)
// =============================================================================

/// A CASE expression with at least one branch.
///
/// `T` is the value type of the first branch's result and `S` the builder
/// state. Only `Case<_, Open>` offers `.when()` and `.r#else()`, so no branch
/// can follow the ELSE and the ELSE is set at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Case<'a, T: ValueType, S: CaseState = Open> {
    subject: Option<SQL<'a>>,
    branches: SmallVec<[When<'a>; 4]>,
    r#else: Option<SQL<'a>>,
    _marker: PhantomData<(T, S)>,
}

impl<'a, T, S> Case<'a, T, S>
where
    T: ValueType,
    S: CaseState,
{
    /// Name used when a CASE expression is selected without an explicit alias.
    pub const DEFAULT_ALIAS: &'static str = "case_";

    #[inline]
    pub fn subject(&self) -> Option<&SQL<'a>> {
        self.subject.as_ref()
    }

    /// Branches in the order they were added.
    #[inline]
    pub fn branches(&self) -> &[When<'a>] {
        &self.branches
    }

    #[inline]
    pub fn else_value(&self) -> Option<&SQL<'a>> {
        self.r#else.as_ref()
    }

    /// Value category of the expression: that of the first branch's result.
    #[inline]
    pub fn value_category(&self) -> ValueCategory {
        T::CATEGORY
    }

    /// Render as `<case> AS case_`.
    pub fn with_default_alias(self) -> SQL<'a> {
        self.into_sql().alias(Self::DEFAULT_ALIAS)
    }
}

impl<'a, T: ValueType> Case<'a, T, Open> {
    /// Add another WHEN branch.
    ///
    /// The result's value type does not change `T`.
    pub fn when<C, R>(mut self, condition: C, result: R) -> Self
    where
        C: Expr<'a>,
        R: Expr<'a>,
    {
        self.branches.push(when(condition, result));
        self
    }

    /// Finish the CASE expression with an ELSE clause.
    pub fn r#else<D>(self, value: D) -> Case<'a, T, Closed>
    where
        D: Expr<'a>,
    {
        Case {
            subject: self.subject,
            branches: self.branches,
            r#else: Some(value.into_sql()),
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Serialization
// =============================================================================

impl<'a, T, S> Serialize for Case<'a, T, S>
where
    T: ValueType,
    S: CaseState,
{
    fn collect_dependencies(&self, deps: &mut Dependencies) {
        if let Some(subject) = &self.subject {
            deps.extend_from_sql(OperandSlot::Subject, subject);
        }
        for (index, branch) in self.branches.iter().enumerate() {
            branch.collect_at(index, deps);
        }
        if let Some(value) = &self.r#else {
            deps.extend_from_sql(OperandSlot::Else, value);
        }
    }

    fn write_to<C: Context + ?Sized>(&self, ctx: &mut C) {
        let _ = ctx.write_str("CASE ");
        if let Some(subject) = &self.subject {
            subject.write_to(ctx);
            let _ = ctx.write_char(' ');
        }
        for (index, branch) in self.branches.iter().enumerate() {
            if index > 0 {
                let _ = ctx.write_char(' ');
            }
            branch.write_to(ctx);
        }
        if let Some(value) = &self.r#else {
            let _ = ctx.write_str(" ELSE ");
            value.write_to(ctx);
        }
        let _ = ctx.write_str(" END");
    }
}

// =============================================================================
// Expression integration
// =============================================================================

impl<'a, T, S> ToSQL<'a> for Case<'a, T, S>
where
    T: ValueType,
    S: CaseState,
{
    fn to_sql(&self) -> SQL<'a> {
        self.clone().into_sql()
    }

    fn into_sql(self) -> SQL<'a> {
        let mut sql = SQL::token(Token::CASE);
        if let Some(subject) = self.subject {
            sql.append_mut(subject);
        }
        for branch in &self.branches {
            branch.append_to(&mut sql);
        }
        if let Some(value) = self.r#else {
            sql.push_mut(Token::ELSE);
            sql.append_mut(value);
        }
        sql.push(Token::END)
    }
}

impl<'a, T, S> Expr<'a> for Case<'a, T, S>
where
    T: ValueType,
    S: CaseState,
{
    type ValueType = T;
}

impl<'a, T, S> Display for Case<'a, T, S>
where
    T: ValueType,
    S: CaseState,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = SqlContext::default();
        self.write_to(&mut ctx);
        f.write_str(ctx.as_str())
    }
}
