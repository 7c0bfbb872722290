/// Declare a table: a unit struct implementing [`Table`](crate::schema::Table)
/// with one typed column accessor per column.
///
/// Each column is `name: Marker` followed by any number of
/// [`ColumnDef`](crate::schema::ColumnDef) builder calls, where `Marker` is
/// one of the value-type markers in [`types`](crate::types).
///
/// ```
/// use sqlweave_core::declare_table;
/// use sqlweave_core::expr::eq;
/// use sqlweave_core::schema::{Table, create_table};
/// use sqlweave_core::SQLNull;
///
/// declare_table! {
///     pub struct Users = "users" {
///         id: Integer .primary_key() .auto_increment(),
///         name: Text .with_default(SQLNull),
///     }
/// }
///
/// assert_eq!(Users::NAME, "users");
/// assert_eq!(eq(Users.id(), 1).to_string(), "users.id = 1");
/// assert_eq!(
///     create_table(&Users).to_string(),
///     "CREATE TABLE users(\nid INTEGER AUTOINCREMENT,\nname TEXT DEFAULT NULL\n,PRIMARY KEY(id))"
/// );
/// ```
#[macro_export]
macro_rules! declare_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $sql_name:literal {
            $(
                $column:ident : $marker:ident $( . $func:ident ( $($arg:expr),* ) )*
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $name {
            $(
                #[inline]
                pub const fn $column(&self) -> $crate::expr::Column<$crate::types::$marker> {
                    $crate::expr::Column::qualified($sql_name, stringify!($column))
                }
            )*
        }

        impl $crate::schema::Table for $name {
            const NAME: &'static str = $sql_name;

            fn columns(&self) -> $crate::__private::Vec<$crate::schema::ColumnDef> {
                $crate::__private::vec![
                    $(
                        $crate::schema::ColumnDef::new(
                            stringify!($column),
                            <$crate::types::$marker as $crate::types::ValueType>::CATEGORY,
                        )
                        $( .$func($($arg),*) )*
                    ),*
                ]
            }
        }
    };
}
