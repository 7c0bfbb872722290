mod chunk;
mod tokens;

use crate::context::{Context, SqlContext};
use crate::prelude::*;
use crate::traits::ToSQL;
use crate::value::Value;
pub use chunk::*;
use core::fmt::Display;
use smallvec::SmallVec;
pub use tokens::*;

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SQL<'a> {
    pub chunks: SmallVec<[SQLChunk<'a>; 8]>,
}

impl<'a> SQL<'a> {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates SQL with an identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL with raw text
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single literal value
    #[inline]
    pub fn value(value: impl Into<Value<'a>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Value(value.into())],
        }
    }

    /// Creates SQL for a function call: NAME(args)
    #[inline]
    pub fn func(name: &'static str, args: SQL<'a>) -> Self {
        SQL::raw(name)
            .push(Token::LPAREN)
            .append(args)
            .push(Token::RPAREN)
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL<'a>>) -> Self {
        let other = other.into();

        if self.chunks.is_empty() {
            return other;
        }
        if other.chunks.is_empty() {
            return self;
        }

        self.chunks.extend(other.chunks);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL<'a>>) {
        let other = other.into();

        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk<'a>>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk<'a>>) {
        self.chunks.push(chunk.into());
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator
    pub fn join<T>(sqls: T, separator: Token) -> SQL<'a>
    where
        T: IntoIterator,
        T::Item: ToSQL<'a>,
    {
        let mut iter = sqls.into_iter();
        let Some(first) = iter.next() else {
            return SQL::empty();
        };

        let mut result = first.into_sql();
        for item in iter {
            result.chunks.push(SQLChunk::Token(separator));
            result.chunks.extend(item.into_sql().chunks);
        }
        result
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    /// Creates an aliased version: self AS name
    pub fn alias(self, name: impl Into<Cow<'a, str>>) -> SQL<'a> {
        self.push(Token::AS).push(SQLChunk::Ident(name.into()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    // ==================== output methods ====================

    /// Returns an iterator over the literal values of this fragment, in order.
    pub fn values(&self) -> impl Iterator<Item = &Value<'a>> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            SQLChunk::Value(value) => Some(value),
            _ => None,
        })
    }

    /// Write the fragment to a context, inserting spaces between chunks.
    ///
    /// No validation happens here; see [`serialize`](crate::serialize) for the
    /// checked entry point.
    pub fn write_to<C: Context + ?Sized>(&self, ctx: &mut C) {
        for (i, chunk) in self.chunks.iter().enumerate() {
            chunk.write(ctx);
            if self.needs_space(i) {
                let _ = ctx.write_char(' ');
            }
        }
    }

    /// Renders the fragment with a default [`SqlContext`].
    pub fn sql(&self) -> String {
        let mut ctx = SqlContext::default();
        self.write_to(&mut ctx);
        ctx.into_string()
    }

    fn needs_space(&self, index: usize) -> bool {
        let Some(next) = self.chunks.get(index + 1) else {
            return false;
        };

        chunk_needs_space(&self.chunks[index], next)
    }
}

/// Canonical spacing logic for SQL chunk rendering.
pub(crate) fn chunk_needs_space(current: &SQLChunk<'_>, next: &SQLChunk<'_>) -> bool {
    match (current, next) {
        // No space before closing/separator punctuation
        (_, SQLChunk::Token(Token::RPAREN | Token::COMMA | Token::DOT)) => false,
        // No space after opening punctuation
        (SQLChunk::Token(Token::LPAREN | Token::DOT), _) => false,
        // Function call: NAME(
        (SQLChunk::Raw(_), SQLChunk::Token(Token::LPAREN)) => false,
        // Space after comma
        (SQLChunk::Token(Token::COMMA), _) => true,
        // Space after closing paren if next is word-like (e.g., ") THEN")
        (SQLChunk::Token(Token::RPAREN), next) => next.is_word_like(),
        // Space before opening paren if preceded by word-like (e.g., "WHEN (")
        (current, SQLChunk::Token(Token::LPAREN)) => current.is_word_like(),
        // Space around comparison operators
        (SQLChunk::Token(t), _) if t.is_operator() => true,
        (_, SQLChunk::Token(t)) if t.is_operator() => true,
        // Space between all word-like chunks
        _ => current.is_word_like() && next.is_word_like(),
    }
}

// ==================== trait implementations ====================

impl<'a> Default for SQL<'a> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> From<Token> for SQL<'a> {
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl<'a> Display for SQL<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.sql())
    }
}

impl<'a> ToSQL<'a> for SQL<'a> {
    fn to_sql(&self) -> SQL<'a> {
        self.clone()
    }

    fn into_sql(self) -> SQL<'a> {
        self
    }
}

impl<'a, T> FromIterator<T> for SQL<'a>
where
    SQLChunk<'a>: From<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let chunks = SmallVec::from_iter(iter.into_iter().map(SQLChunk::from));
        Self { chunks }
    }
}

impl<'a> IntoIterator for SQL<'a> {
    type Item = SQLChunk<'a>;
    type IntoIter = smallvec::IntoIter<[SQLChunk<'a>; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_operators_are_spaced() {
        let sql = SQL::ident("x").push(Token::EQ).push(Value::from(1));
        assert_eq!(sql.sql(), "x = 1");
    }

    #[test]
    fn qualified_identifiers_have_no_spaces() {
        let sql = SQL::ident("users").push(Token::DOT).push(SQLChunk::ident("id"));
        assert_eq!(sql.sql(), "users.id");
    }

    #[test]
    fn function_calls_hug_their_parens() {
        let args = SQL::ident("a").push(Token::COMMA).push(Value::from(0));
        assert_eq!(SQL::func("IF_NULL", args).sql(), "IF_NULL(a, 0)");
    }

    #[test]
    fn keywords_around_parens() {
        let inner = SQL::ident("a").push(Token::AND).push(SQLChunk::ident("b"));
        let sql = SQL::token(Token::WHEN)
            .append(inner.parens())
            .push(Token::THEN)
            .push(Value::from(1));
        assert_eq!(sql.sql(), "WHEN (a AND b) THEN 1");
    }

    #[test]
    fn join_skips_separator_for_single_item() {
        let sql = SQL::join([SQL::ident("a")], Token::COMMA);
        assert_eq!(sql.sql(), "a");
        assert!(SQL::join(Vec::<SQL<'_>>::new(), Token::COMMA).is_empty());
    }

    #[test]
    fn values_iterates_literals_only() {
        let sql = SQL::ident("x")
            .push(Token::EQ)
            .push(Value::from("a"))
            .push(Token::OR)
            .push(Value::from(2));
        let categories: Vec<_> = sql.values().map(Value::category).collect();
        assert_eq!(
            categories,
            vec![
                sqlweave_types::ValueCategory::Text,
                sqlweave_types::ValueCategory::Integer
            ]
        );
    }
}
