use smallvec::SmallVec;
use sqlweave_types::ValueCategory;

use crate::expr::Column;
use crate::types::ValueType;
use crate::value::Value;

/// A per-column option of a CREATE TABLE definition.
///
/// Options are kept in declaration order; that is the order they are
/// written in.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnOption {
    /// Part of the table's primary key. Rendered in the trailing
    /// `PRIMARY KEY(...)` clause, not on the column line.
    PrimaryKey,
    /// Must be given on insert. Has no CREATE TABLE text.
    RequireInsert,
    /// Dialect auto-increment keyword.
    AutoIncrement,
    /// `DEFAULT <value>`.
    Default(Value<'static>),
}

/// Column definition used by CREATE TABLE.
///
/// ```
/// use sqlweave_core::schema::ColumnDef;
/// use sqlweave_core::ValueCategory;
///
/// let id = ColumnDef::new("id", ValueCategory::Integer)
///     .primary_key()
///     .auto_increment();
/// assert!(id.is_primary_key());
/// assert!(id.default_value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    name: &'static str,
    category: ValueCategory,
    options: SmallVec<[ColumnOption; 4]>,
}

impl ColumnDef {
    pub fn new(name: &'static str, category: ValueCategory) -> Self {
        Self {
            name,
            category,
            options: SmallVec::new(),
        }
    }

    // ==================== builder methods ====================

    pub fn primary_key(mut self) -> Self {
        self.options.push(ColumnOption::PrimaryKey);
        self
    }

    pub fn require_insert(mut self) -> Self {
        self.options.push(ColumnOption::RequireInsert);
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.options.push(ColumnOption::AutoIncrement);
        self
    }

    pub fn with_default(mut self, value: impl Into<Value<'static>>) -> Self {
        self.options.push(ColumnOption::Default(value.into()));
        self
    }

    // ==================== accessors ====================

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn category(&self) -> ValueCategory {
        self.category
    }

    #[inline]
    pub fn options(&self) -> &[ColumnOption] {
        &self.options
    }

    pub fn is_primary_key(&self) -> bool {
        self.options.contains(&ColumnOption::PrimaryKey)
    }

    pub fn is_auto_increment(&self) -> bool {
        self.options.contains(&ColumnOption::AutoIncrement)
    }

    pub fn requires_insert(&self) -> bool {
        self.options.contains(&ColumnOption::RequireInsert)
    }

    /// The first DEFAULT value, if any.
    pub fn default_value(&self) -> Option<&Value<'static>> {
        self.options.iter().find_map(|option| match option {
            ColumnOption::Default(value) => Some(value),
            _ => None,
        })
    }
}

/// A bare definition from a typed column: name and category, no options.
impl<T: ValueType> From<Column<T>> for ColumnDef {
    fn from(column: Column<T>) -> Self {
        ColumnDef::new(column.name(), T::CATEGORY)
    }
}
