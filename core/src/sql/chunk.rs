use crate::context::Context;
use crate::prelude::*;
use crate::sql::tokens::Token;
use crate::value::Value;

/// A SQL chunk represents a part of an SQL fragment.
///
/// - `Token` - SQL keywords and punctuation (CASE, WHEN, =, etc.)
/// - `Ident` - Identifiers (column, table and alias names)
/// - `Raw` - Unquoted raw SQL text (function names)
/// - `Value` - Literal operand, rendered and escaped by the context
#[derive(Debug, Clone, PartialEq)]
pub enum SQLChunk<'a> {
    /// SQL keywords and punctuation: CASE, WHEN, =, (, etc.
    Token(Token),

    /// Identifier for user-provided names.
    /// Renders bare or quoted depending on the context options.
    Ident(Cow<'a, str>),

    /// Raw SQL text, written as-is.
    Raw(Cow<'a, str>),

    /// Literal operand value.
    Value(Value<'a>),
}

impl<'a> SQLChunk<'a> {
    /// Creates a token chunk - const
    #[inline]
    pub const fn token(t: Token) -> Self {
        Self::Token(t)
    }

    /// Creates an identifier from a static string - const
    #[inline]
    pub const fn ident_static(name: &'static str) -> Self {
        Self::Ident(Cow::Borrowed(name))
    }

    /// Creates raw SQL text from a static string - const
    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    /// Creates an identifier from a runtime string
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates raw SQL text from a runtime string
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Raw(text.into())
    }

    /// Creates a literal value chunk
    #[inline]
    pub fn value(value: impl Into<Value<'a>>) -> Self {
        Self::Value(value.into())
    }

    /// Write chunk content to a context
    pub(crate) fn write<C: Context + ?Sized>(&self, ctx: &mut C) {
        match self {
            SQLChunk::Token(token) => {
                let _ = ctx.write_str(token.as_str());
            }
            SQLChunk::Ident(name) => ctx.write_identifier(name),
            SQLChunk::Raw(text) => {
                let _ = ctx.write_str(text);
            }
            SQLChunk::Value(value) => ctx.write_value(value),
        }
    }

    /// Check if this chunk is "word-like" (needs space separation from other word-like chunks)
    #[inline]
    pub(crate) const fn is_word_like(&self) -> bool {
        match self {
            SQLChunk::Token(t) => !matches!(
                t,
                Token::LPAREN
                    | Token::RPAREN
                    | Token::COMMA
                    | Token::DOT
                    | Token::EQ
                    | Token::NE
                    | Token::LT
                    | Token::GT
                    | Token::LE
                    | Token::GE
            ),
            SQLChunk::Ident(_) | SQLChunk::Raw(_) | SQLChunk::Value(_) => true,
        }
    }
}

impl<'a> From<Token> for SQLChunk<'a> {
    #[inline]
    fn from(value: Token) -> Self {
        Self::Token(value)
    }
}

impl<'a> From<Value<'a>> for SQLChunk<'a> {
    #[inline]
    fn from(value: Value<'a>) -> Self {
        Self::Value(value)
    }
}
