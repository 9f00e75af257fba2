use std::fmt;

use crate::lexer::prelude::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Integer,
    Atom,
    Key,
    Value,
    Boolean,
    LeftSquareBracket,
    RightSquareBracket,
    LeftCurlyBrace,
    RightCurlyBrace,
    PercentLeftCurlyBrace,
    Comma,
    RightArrow,
    Underscore,
    Colon,
    EmptySpace,
    Eof,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Atom => "ATOM",
            TokenKind::Key => "KEY",
            TokenKind::Value => "VALUE",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            TokenKind::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            TokenKind::LeftCurlyBrace => "LEFT_CURLY_BRACE",
            TokenKind::RightCurlyBrace => "RIGHT_CURLY_BRACE",
            TokenKind::PercentLeftCurlyBrace => "PERCENT_LEFT_CURLY_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::RightArrow => "RIGHT_ARROW",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::Colon => "COLON",
            TokenKind::EmptySpace => "EMPTY_SPACE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Integer => "an integer",
            TokenKind::Atom => "an atom",
            TokenKind::Key => "a key",
            TokenKind::Value => "a quoted value",
            TokenKind::Boolean => "a boolean",
            TokenKind::LeftSquareBracket => "'['",
            TokenKind::RightSquareBracket => "']'",
            TokenKind::LeftCurlyBrace => "'{'",
            TokenKind::RightCurlyBrace => "'}'",
            TokenKind::PercentLeftCurlyBrace => "'%{'",
            TokenKind::Comma => "','",
            TokenKind::RightArrow => "'=>'",
            TokenKind::Underscore => "'_'",
            TokenKind::Colon => "':'",
            TokenKind::EmptySpace => "empty space",
            TokenKind::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// A lexed token. `end` is the byte offset just past the lexeme.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, end: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            end,
        }
    }

    pub fn eof(end: usize) -> Self {
        Token::new(TokenKind::Eof, EOF_LEXEME, end)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @{}", self.kind.name(), self.lexeme, self.end)
    }
}

pub const EOF_LEXEME: &str = "<EOF>";

const INTEGER: &str = "[0-9]+(_[0-9]+)*";
const IDENTIFIER: &str = "[a-zA-Z_][a-zA-Z0-9_]*";

/// Characters allowed right after `true` or `false`.
pub const BOOLEAN_FOLLOWERS: &str = " ,\n\t";

/// A quote, the shortest run of characters on the same line that is followed
/// by an integer and the same quote, then that integer and quote.
fn quoted_value() -> RcLexer {
    let quoted = |q: char| {
        let tail = seq(&[pattern(INTEGER), is(q)]);
        seq(&[is(q), many_until(not(is('\n')), tail.clone()), tail])
    };
    alt(&[quoted('\''), quoted('"')])
}

/// Whitespace and `#` comments between tokens.
pub fn skip() -> RcLexer {
    let comment = seq(&[is('#'), many(not(is('\n')))]);
    some(alt(&[one_of(" \t\n"), comment]))
}

/// Rows are tried top to bottom; the first non-empty match wins.
pub fn token_table() -> TokenTable<TokenKind> {
    token_table!(
        TokenKind::Integer => pattern(INTEGER),
        TokenKind::Atom => pattern(&format!(":{}", IDENTIFIER)),
        TokenKind::Comma => is(','),
        TokenKind::Colon => is(':'),
        TokenKind::Key => pattern(&format!("{}:", IDENTIFIER)),
        TokenKind::Value => quoted_value(),
        TokenKind::Boolean => pattern("true|false"),
        TokenKind::LeftSquareBracket => is('['),
        TokenKind::RightSquareBracket => is(']'),
        TokenKind::LeftCurlyBrace => is('{'),
        TokenKind::RightCurlyBrace => is('}'),
        TokenKind::PercentLeftCurlyBrace => exact("%{"),
        TokenKind::RightArrow => exact("=>"),
        TokenKind::Underscore => is('_'),
        TokenKind::EmptySpace => pattern("( |\t)*"),
        TokenKind::Eof => exact(EOF_LEXEME),
    )
}
