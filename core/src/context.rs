//! Serialization targets.
//!
//! A [`Context`] accumulates SQL text and decides how literals are rendered.
//! It also answers the capability question asked by validation: can this
//! context write a literal of a given [`ValueCategory`]?

use core::fmt::Write;

use crate::prelude::*;
use crate::value::Value;
use sqlweave_types::{Dialect, ValueCategory};

/// Output target for serialization.
///
/// Implementors only need to provide text output (via [`core::fmt::Write`]),
/// a [`kind`](Context::kind) for diagnostics and a [`dialect`](Context::dialect);
/// the rendering of identifiers and literals has defaults that can be
/// overridden.
///
/// `write_str` must not fail. Serialization checks a node before writing it
/// and then writes without looking at [`core::fmt::Error`], so a context whose
/// sink can fail has to buffer (or record the failure itself) rather than
/// return an error.
pub trait Context: Write {
    /// Short name used in diagnostics (`"sql"`, `"trusted"`, ...).
    fn kind(&self) -> &'static str;

    /// Dialect used for boolean literals and dialect-specific keywords.
    fn dialect(&self) -> Dialect;

    /// Whether literals of `category` can be written by this context.
    fn accepts(&self, category: ValueCategory) -> bool {
        let _ = category;
        true
    }

    /// Escape text for use inside a single-quoted SQL string literal.
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if text.contains('\'') {
            Cow::Owned(text.replace('\'', "''"))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Write an identifier (column, table or alias name).
    fn write_identifier(&mut self, name: &str) {
        let _ = self.write_str(name);
    }

    /// Write a literal value.
    fn write_value(&mut self, value: &Value<'_>) {
        match value {
            Value::Integer(v) => {
                let _ = write!(self, "{v}");
            }
            Value::Floating(v) => {
                let _ = write!(self, "{v:?}");
            }
            Value::Text(text) => {
                let escaped = self.escape(text).into_owned();
                let _ = self.write_char('\'');
                let _ = self.write_str(&escaped);
                let _ = self.write_char('\'');
            }
            Value::Boolean(v) => {
                let literal = self.dialect().boolean_literal(*v);
                let _ = self.write_str(literal);
            }
            Value::Null => {
                let _ = self.write_str("NULL");
            }
        }
    }
}

/// Options for [`SqlContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextOptions {
    pub dialect: Dialect,
    /// Quote identifiers with the dialect's quote character.
    pub quote_identifiers: bool,
}

/// General-purpose context: escapes text and accepts every value category.
///
/// ```
/// use sqlweave_core::{Context, Dialect, SqlContext, Value};
///
/// let mut ctx = SqlContext::new(Dialect::PostgreSQL);
/// ctx.write_value(&Value::from("it's"));
/// ctx.write_value(&Value::from(true));
/// assert_eq!(ctx.as_str(), "'it''s'TRUE");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlContext {
    buf: String,
    options: ContextOptions,
}

impl SqlContext {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_options(ContextOptions {
            dialect,
            ..ContextOptions::default()
        })
    }

    pub fn with_options(options: ContextOptions) -> Self {
        Self {
            buf: String::with_capacity(128),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> ContextOptions {
        self.options
    }

    /// Text written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Discard accumulated text, keeping the options.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Write for SqlContext {
    #[inline]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl Context for SqlContext {
    fn kind(&self) -> &'static str {
        "sql"
    }

    fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    /// Doubles `'`. MySQL also treats `\` as an escape character inside string
    /// literals, so there it is doubled too.
    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let backslashes = self.options.dialect == Dialect::MySQL;
        if !text.contains('\'') && !(backslashes && text.contains('\\')) {
            return Cow::Borrowed(text);
        }

        let mut escaped = String::with_capacity(text.len() + 2);
        for c in text.chars() {
            match c {
                '\'' => escaped.push_str("''"),
                '\\' if backslashes => escaped.push_str("\\\\"),
                c => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    }

    fn write_identifier(&mut self, name: &str) {
        if !self.options.quote_identifiers {
            self.buf.push_str(name);
            return;
        }

        let quote = self.options.dialect.identifier_quote();
        self.buf.push(quote);
        for c in name.chars() {
            if c == quote {
                self.buf.push(quote);
            }
            self.buf.push(c);
        }
        self.buf.push(quote);
    }
}

/// Strict context for trusted operands only.
///
/// It performs no escaping, so it refuses every category whose literals would
/// need it. Validation rejects such operands before any text is written.
#[derive(Debug, Clone, Default)]
pub struct TrustedContext {
    buf: String,
    dialect: Dialect,
}

impl TrustedContext {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            buf: String::new(),
            dialect,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Write for TrustedContext {
    #[inline]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl Context for TrustedContext {
    fn kind(&self) -> &'static str {
        "trusted"
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn accepts(&self, category: ValueCategory) -> bool {
        !category.requires_escaping()
    }

    fn escape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(text)
    }
}
