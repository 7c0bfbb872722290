use sqlweave::core::OperandSlot;
use sqlweave::error::SerializeError;
use sqlweave::prelude::*;

declare_table! {
    /// Mirrors a table with a composite set of column options.
    pub struct TestTable = "test_table" {
        int_primary_key: Integer .primary_key() .require_insert() .auto_increment(),
        int_with_default: Integer .with_default(0),
        string_with_default: Text .with_default(SQLNull),
    }
}

declare_table! {
    struct TestTable2 = "test_table2" {
        int_primary_key2: Integer .primary_key(),
        int_plain_value: Integer,
    }
}

declare_table! {
    struct Settings = "settings" {
        key: Text .primary_key(),
        label: Text .with_default("it's on"),
        enabled: Boolean .with_default(true),
        ratio: Floating .with_default(0.5),
    }
}

fn render_in(stmt: &CreateTable, dialect: Dialect) -> String {
    let mut ctx = SqlContext::new(dialect);
    serialize(stmt, &mut ctx).unwrap();
    ctx.into_string()
}

#[test]
fn test_create_table_from_declaration() {
    assert_eq!(
        render_in(&create_table(&TestTable), Dialect::SQLite),
        "CREATE TABLE test_table(\n\
         int_primary_key INTEGER AUTOINCREMENT,\n\
         int_with_default INTEGER DEFAULT 0,\n\
         string_with_default TEXT DEFAULT NULL\n\
         ,PRIMARY KEY(int_primary_key))"
    );
}

#[test]
fn test_declared_table_metadata() {
    assert_eq!(TestTable::NAME, "test_table");

    let columns = TestTable.columns();
    let names: Vec<_> = columns.iter().map(ColumnDef::name).collect();
    assert_eq!(
        names,
        vec!["int_primary_key", "int_with_default", "string_with_default"]
    );
    assert!(columns[0].requires_insert());
    assert!(columns[0].is_auto_increment());
    assert_eq!(columns[1].default_value(), Some(&Value::Integer(0)));
    assert_eq!(columns[2].category(), ValueCategory::Text);
}

#[test]
fn test_declared_columns_are_qualified() {
    let cond = eq(TestTable.int_with_default(), TestTable2.int_primary_key2());
    assert_eq!(
        cond.to_string(),
        "test_table.int_with_default = test_table2.int_primary_key2"
    );
}

#[test]
fn test_create_table_from_selected_columns() {
    // Columns of a joined selection, re-homed under a new table name.
    let stmt = CreateTable::from_columns(
        "a",
        [
            ColumnDef::from(TestTable.int_primary_key()).primary_key(),
            ColumnDef::from(TestTable.string_with_default()),
            ColumnDef::from(TestTable2.int_plain_value()),
        ],
    );

    assert_eq!(
        render_in(&stmt, Dialect::SQLite),
        "CREATE TABLE a(\n\
         int_primary_key INTEGER,\n\
         string_with_default TEXT,\n\
         int_plain_value INTEGER\n\
         ,PRIMARY KEY(int_primary_key))"
    );
}

#[test]
fn test_composite_primary_key() {
    let stmt = CreateTable::from_columns(
        "pairs",
        [
            ColumnDef::new("left_id", ValueCategory::Integer).primary_key(),
            ColumnDef::new("right_id", ValueCategory::Integer).primary_key(),
        ],
    );

    assert!(stmt.to_string().ends_with("\n,PRIMARY KEY(left_id,right_id))"));
}

#[test]
fn test_table_without_keys() {
    let stmt = CreateTable::from_columns(
        "log",
        [ColumnDef::new("line", ValueCategory::Text)],
    );
    assert_eq!(stmt.to_string(), "CREATE TABLE log(\nline TEXT)");
}

#[test]
fn test_defaults_and_types_per_dialect() {
    let stmt = create_table(&Settings);

    assert_eq!(
        render_in(&stmt, Dialect::SQLite),
        "CREATE TABLE settings(\n\
         key TEXT,\n\
         label TEXT DEFAULT 'it''s on',\n\
         enabled BOOLEAN DEFAULT 1,\n\
         ratio REAL DEFAULT 0.5\n\
         ,PRIMARY KEY(key))"
    );
    assert_eq!(
        render_in(&stmt, Dialect::PostgreSQL),
        "CREATE TABLE settings(\n\
         key TEXT,\n\
         label TEXT DEFAULT 'it''s on',\n\
         enabled BOOLEAN DEFAULT TRUE,\n\
         ratio DOUBLE PRECISION DEFAULT 0.5\n\
         ,PRIMARY KEY(key))"
    );
}

#[test]
fn test_auto_increment_keyword_per_dialect() {
    let stmt = CreateTable::from_columns(
        "t",
        [ColumnDef::new("id", ValueCategory::Integer).auto_increment()],
    );

    assert_eq!(
        render_in(&stmt, Dialect::PostgreSQL),
        "CREATE TABLE t(\nid INTEGER GENERATED BY DEFAULT AS IDENTITY)"
    );
    assert_eq!(
        render_in(&stmt, Dialect::MySQL),
        "CREATE TABLE t(\nid INTEGER AUTO_INCREMENT)"
    );
}

#[test]
fn test_options_render_in_declaration_order() {
    let stmt = CreateTable::from_columns(
        "t",
        [ColumnDef::new("id", ValueCategory::Integer)
            .auto_increment()
            .with_default(1)],
    );
    assert_eq!(
        stmt.to_string(),
        "CREATE TABLE t(\nid INTEGER AUTOINCREMENT DEFAULT 1)"
    );
}

#[test]
fn test_quoted_identifiers() {
    let mut ctx = SqlContext::with_options(ContextOptions {
        dialect: Dialect::MySQL,
        quote_identifiers: true,
    });
    serialize(&create_table(&TestTable2), &mut ctx).unwrap();
    assert_eq!(
        ctx.as_str(),
        "CREATE TABLE `test_table2`(\n\
         `int_primary_key2` INTEGER,\n\
         `int_plain_value` INTEGER\n\
         ,PRIMARY KEY(`int_primary_key2`))"
    );
}

#[test]
fn test_empty_table_is_an_error() {
    let stmt = CreateTable::from_columns("nothing", Vec::<ColumnDef>::new());
    let mut ctx = SqlContext::default();
    let err = serialize(&stmt, &mut ctx).unwrap_err();

    assert_eq!(err, SerializeError::EmptyTable("nothing"));
    assert_eq!(err.to_string(), "table `nothing` declares no columns");
    assert_eq!(ctx.as_str(), "");
}

#[test]
fn test_trusted_context_rejects_text_default() {
    let mut ctx = TrustedContext::default();
    let err = serialize(&create_table(&Settings), &mut ctx).unwrap_err();
    assert_eq!(
        err,
        SerializeError::UnserializableOperand {
            slot: OperandSlot::Default("label"),
            category: ValueCategory::Text,
            context: "trusted",
        }
    );
    assert_eq!(ctx.as_str(), "");

    // NULL and integer defaults need no escaping.
    let mut ctx = TrustedContext::default();
    serialize(&create_table(&TestTable), &mut ctx).unwrap();
    assert!(ctx.as_str().starts_with("CREATE TABLE test_table(\n"));
}

#[test]
fn test_create_table_dependencies() {
    let deps = create_table(&Settings).dependencies();
    let slots: Vec<_> = deps.iter().map(|d| d.slot).collect();
    assert_eq!(
        slots,
        vec![
            OperandSlot::Default("label"),
            OperandSlot::Default("enabled"),
            OperandSlot::Default("ratio"),
        ]
    );
}
