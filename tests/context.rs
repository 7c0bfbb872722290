use core::fmt;

use sqlweave::core::OperandSlot;
use sqlweave::error::SerializeError;
use sqlweave::prelude::*;

/// Context that only renders integers, e.g. for a numeric-only sink.
#[derive(Debug, Default)]
struct IntegerOnly {
    out: String,
}

impl fmt::Write for IntegerOnly {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}

impl Context for IntegerOnly {
    fn kind(&self) -> &'static str {
        "integer-only"
    }

    fn dialect(&self) -> Dialect {
        Dialect::SQLite
    }

    fn accepts(&self, category: ValueCategory) -> bool {
        category == ValueCategory::Integer
    }
}

#[test]
fn test_custom_context_capability() {
    let x = column::<Integer>("x");

    let mut ctx = IntegerOnly::default();
    serialize(&case().when(eq(x, 1), 10).r#else(20), &mut ctx).unwrap();
    assert_eq!(ctx.out, "CASE WHEN x = 1 THEN 10 ELSE 20 END");

    let mut ctx = IntegerOnly::default();
    let err = serialize(&case_of(x).when(1, 2.5), &mut ctx).unwrap_err();
    assert_eq!(
        err,
        SerializeError::UnserializableOperand {
            slot: OperandSlot::Result(0),
            category: ValueCategory::Floating,
            context: "integer-only",
        }
    );
    assert!(ctx.out.is_empty());
}

#[test]
fn test_serialize_returns_context_for_chaining() {
    let x = column::<Integer>("x");
    let mut ctx = SqlContext::default();

    let ctx = serialize(&case().when(gt(x, 0), "pos"), &mut ctx).unwrap();
    fmt::Write::write_str(ctx, ", ").unwrap();
    serialize(&case().when(lt(x, 0), "neg"), ctx).unwrap();

    assert_eq!(
        ctx.as_str(),
        "CASE WHEN x > 0 THEN 'pos' END, CASE WHEN x < 0 THEN 'neg' END"
    );
}

#[test]
fn test_dyn_context() {
    let mut sql = SqlContext::default();
    let mut trusted = TrustedContext::default();
    let targets: [&mut dyn Context; 2] = [&mut sql, &mut trusted];

    let results: Vec<bool> = targets
        .into_iter()
        .map(|ctx| serialize(&case().when(true, "yes"), ctx).is_ok())
        .collect();

    assert_eq!(results, vec![true, false]);
    assert_eq!(sql.as_str(), "CASE WHEN 1 THEN 'yes' END");
    assert_eq!(trusted.as_str(), "");
}

#[test]
fn test_validation_without_output() {
    let expr = case().when(true, "a");
    assert!(expr.validate(&SqlContext::default()).is_ok());
    assert!(expr.validate(&TrustedContext::default()).is_err());
}

#[test]
fn test_dialect_from_str() {
    assert_eq!("pg".parse::<Dialect>().unwrap(), Dialect::PostgreSQL);
    assert_eq!("SQLite".parse::<Dialect>().unwrap(), Dialect::SQLite);
    assert_eq!("mariadb".parse::<Dialect>().unwrap(), Dialect::MySQL);
    assert!("oracle".parse::<Dialect>().is_err());
}

#[test]
fn test_context_options_default() {
    let options = SqlContext::default().options();
    assert_eq!(options.dialect, Dialect::SQLite);
    assert!(!options.quote_identifiers);
}

#[test]
fn test_fragment_values_are_checked() {
    let fragment = eq(column::<Text>("name"), "bob").into_sql();
    let mut ctx = TrustedContext::default();
    assert!(matches!(
        serialize(&fragment, &mut ctx),
        Err(SerializeError::UnserializableOperand {
            slot: OperandSlot::Operand,
            ..
        })
    ));
}

/// Sink with a fixed capacity that records overflow instead of failing.
#[derive(Debug)]
struct Capped {
    out: String,
    capacity: usize,
    overflowed: bool,
}

impl fmt::Write for Capped {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.out.len() + s.len() > self.capacity {
            self.overflowed = true;
        } else {
            self.out.push_str(s);
        }
        Ok(())
    }
}

impl Context for Capped {
    fn kind(&self) -> &'static str {
        "capped"
    }

    fn dialect(&self) -> Dialect {
        Dialect::SQLite
    }
}

#[test]
fn test_sink_failures_are_recorded_by_the_context() {
    let expr = case().when(true, "a long enough result").r#else("b");

    let mut ctx = Capped {
        out: String::new(),
        capacity: 16,
        overflowed: false,
    };
    serialize(&expr, &mut ctx).unwrap();
    assert!(ctx.overflowed);
    assert!(ctx.out.len() <= 16);

    let mut ctx = Capped {
        out: String::new(),
        capacity: 64,
        overflowed: false,
    };
    serialize(&expr, &mut ctx).unwrap();
    assert!(!ctx.overflowed);
    assert_eq!(ctx.out, "CASE WHEN 1 THEN 'a long enough result' ELSE 'b' END");
}
