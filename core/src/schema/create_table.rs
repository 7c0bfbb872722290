use core::fmt::{self, Display};

use crate::context::{Context, SqlContext};
use crate::error::{Result, SerializeError};
use crate::prelude::*;
use crate::serialize::{Dependencies, OperandSlot, Serialize};

use super::{ColumnDef, ColumnOption, Table};

/// A CREATE TABLE statement.
///
/// Columns are written one per line, followed by a `PRIMARY KEY(...)` clause
/// when any column is marked as a key:
///
/// ```
/// use sqlweave_core::schema::{ColumnDef, CreateTable};
/// use sqlweave_core::{SqlContext, ValueCategory, serialize};
///
/// let stmt = CreateTable::from_columns(
///     "users",
///     [
///         ColumnDef::new("id", ValueCategory::Integer).primary_key(),
///         ColumnDef::new("name", ValueCategory::Text).with_default("anon"),
///     ],
/// );
///
/// let mut ctx = SqlContext::default();
/// serialize(&stmt, &mut ctx).unwrap();
/// assert_eq!(
///     ctx.as_str(),
///     "CREATE TABLE users(\nid INTEGER,\nname TEXT DEFAULT 'anon'\n,PRIMARY KEY(id))"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    name: &'static str,
    columns: Vec<ColumnDef>,
}

/// CREATE TABLE for a declared table.
pub fn create_table<T: Table>(table: &T) -> CreateTable {
    CreateTable {
        name: T::NAME,
        columns: table.columns(),
    }
}

impl CreateTable {
    /// CREATE TABLE from an explicit column list, e.g. the columns a query
    /// selects, under a caller-supplied table name.
    pub fn from_columns<I>(name: &'static str, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnDef>,
    {
        Self {
            name,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Primary key columns, in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|column| column.is_primary_key())
    }

    fn write_column<C: Context + ?Sized>(column: &ColumnDef, ctx: &mut C) {
        ctx.write_identifier(column.name());
        let _ = ctx.write_char(' ');
        let _ = ctx.write_str(column.category().sql_type(ctx.dialect()));

        for option in column.options() {
            match option {
                ColumnOption::Default(value) => {
                    let _ = ctx.write_str(" DEFAULT ");
                    ctx.write_value(value);
                }
                ColumnOption::AutoIncrement => {
                    let keyword = ctx.dialect().auto_increment_keyword();
                    let _ = ctx.write_char(' ');
                    let _ = ctx.write_str(keyword);
                }
                ColumnOption::PrimaryKey | ColumnOption::RequireInsert => {}
            }
        }
    }
}

impl Serialize for CreateTable {
    fn collect_dependencies(&self, deps: &mut Dependencies) {
        for column in &self.columns {
            if let Some(value) = column.default_value() {
                deps.push_value(OperandSlot::Default(column.name()), value);
            }
        }
    }

    fn validate<C: Context + ?Sized>(&self, ctx: &C) -> Result<()> {
        if self.columns.is_empty() {
            return Err(SerializeError::EmptyTable(self.name));
        }
        self.dependencies().check(ctx)
    }

    fn write_to<C: Context + ?Sized>(&self, ctx: &mut C) {
        let _ = ctx.write_str("CREATE TABLE ");
        ctx.write_identifier(self.name);
        let _ = ctx.write_str("(\n");

        for (index, column) in self.columns.iter().enumerate() {
            if index > 0 {
                let _ = ctx.write_str(",\n");
            }
            Self::write_column(column, ctx);
        }

        let mut keys = self.primary_keys().peekable();
        if keys.peek().is_some() {
            let _ = ctx.write_str("\n,PRIMARY KEY(");
            for (index, key) in keys.enumerate() {
                if index > 0 {
                    let _ = ctx.write_char(',');
                }
                ctx.write_identifier(key.name());
            }
            let _ = ctx.write_char(')');
        }

        let _ = ctx.write_char(')');
    }
}

impl Display for CreateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = SqlContext::default();
        self.write_to(&mut ctx);
        f.write_str(ctx.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TrustedContext;
    use crate::serialize;
    use sqlweave_types::ValueCategory;

    #[test]
    fn no_keys_no_key_clause() {
        let stmt = CreateTable::from_columns(
            "t",
            [
                ColumnDef::new("a", ValueCategory::Integer),
                ColumnDef::new("b", ValueCategory::Boolean),
            ],
        );
        assert_eq!(stmt.to_string(), "CREATE TABLE t(\na INTEGER,\nb BOOLEAN)");
    }

    #[test]
    fn empty_table_is_rejected() {
        let stmt = CreateTable::from_columns("empty", Vec::<ColumnDef>::new());
        let mut ctx = SqlContext::default();
        assert_eq!(
            serialize(&stmt, &mut ctx).unwrap_err(),
            SerializeError::EmptyTable("empty")
        );
        assert_eq!(ctx.as_str(), "");
    }

    #[test]
    fn text_default_needs_escaping_context() {
        let stmt = CreateTable::from_columns(
            "t",
            [ColumnDef::new("s", ValueCategory::Text).with_default("x")],
        );
        let mut ctx = TrustedContext::default();
        assert_eq!(
            serialize(&stmt, &mut ctx).unwrap_err(),
            SerializeError::UnserializableOperand {
                slot: OperandSlot::Default("s"),
                category: ValueCategory::Text,
                context: "trusted",
            }
        );
    }
}
