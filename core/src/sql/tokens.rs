/// SQL keywords and punctuation used by the fragment builders.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Conditional expressions
    CASE,
    WHEN,
    THEN,
    ELSE,
    END,

    // Logical / predicates
    AND,
    OR,
    NOT,
    IS,
    NULL,

    AS,

    // Comparison operators
    EQ,
    NE,
    LT,
    GT,
    LE,
    GE,

    // Punctuation
    LPAREN,
    RPAREN,
    COMMA,
    DOT,
}

impl Token {
    /// Rendered text of the token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::CASE => "CASE",
            Token::WHEN => "WHEN",
            Token::THEN => "THEN",
            Token::ELSE => "ELSE",
            Token::END => "END",
            Token::AND => "AND",
            Token::OR => "OR",
            Token::NOT => "NOT",
            Token::IS => "IS",
            Token::NULL => "NULL",
            Token::AS => "AS",
            Token::EQ => "=",
            Token::NE => "<>",
            Token::LT => "<",
            Token::GT => ">",
            Token::LE => "<=",
            Token::GE => ">=",
            Token::LPAREN => "(",
            Token::RPAREN => ")",
            Token::COMMA => ",",
            Token::DOT => ".",
        }
    }

    /// Binary comparison operators are always surrounded by spaces.
    #[inline]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::EQ | Token::NE | Token::LT | Token::GT | Token::LE | Token::GE
        )
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
