//! Recursive-descent parser, one method per grammar production.
//!
//! ```text
//! sentence      := { data-literal }
//! data-literal  := list | tuple | map | atom | key | value | integer | boolean
//! list          := '[' [ data-literal { ',' data-literal } ] ']'
//! tuple         := '{' [ data-literal { ',' data-literal } ] '}'
//! map           := '%{' [ key-pair { ',' key-pair } ] '}'
//! key-pair      := data-literal ( '=>' | ':' )? data-literal
//! ```
//!
//! Every decision looks at the kind of the current token only. A stray `:`,
//! `=>` or EOF token in literal position is consumed and yields nothing.

use log::debug;

use crate::ast::{DataLiteral, Integer, KeyPair, Sentence};
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token {lexeme:?} at position {position}: expected {expected}")]
    UnexpectedToken {
        lexeme: String,
        position: usize,
        expected: String,
    },
    #[error("expected {expected} before end of input")]
    MissingCloser { expected: TokenKind },
    #[error("trailing comma before {closer} at position {position}")]
    TrailingComma { closer: TokenKind, position: usize },
    #[error("invalid key-pair at position {position}: {reason}")]
    InvalidKeyPair { position: usize, reason: &'static str },
}

/// Kinds that may start a data literal, in dispatch order.
const LITERAL_STARTS: [TokenKind; 8] = [
    TokenKind::LeftSquareBracket,
    TokenKind::LeftCurlyBrace,
    TokenKind::PercentLeftCurlyBrace,
    TokenKind::Atom,
    TokenKind::Key,
    TokenKind::Value,
    TokenKind::Integer,
    TokenKind::Boolean,
];

/// Parses a whole token stream, as produced by
/// [`tokenize`](crate::tokenizer::tokenize), into a sentence.
pub fn parse(tokens: &[Token]) -> Result<Sentence, ParseError> {
    let sentence = Parser::new(tokens).sentence()?;
    debug!("parsed {} top-level literals", sentence.0.len());
    Ok(sentence)
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// No tokens left apart from the closing EOF.
    fn at_end(&self) -> bool {
        match &self.tokens[self.pos..] {
            [] => true,
            [last] => last.kind == TokenKind::Eof,
            _ => false,
        }
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.peek_kind() == Some(kind) {
            self.advance()
        } else {
            None
        }
    }

    fn sentence(&mut self) -> Result<Sentence, ParseError> {
        let mut literals = vec![];
        while self.peek().is_some() {
            if let Some(literal) = self.data_literal()? {
                literals.push(literal);
            }
        }
        Ok(Sentence(literals))
    }

    /// `Ok(None)` for the productions that consume a token and build nothing.
    fn data_literal(&mut self) -> Result<Option<DataLiteral>, ParseError> {
        let token = match self.advance() {
            Some(token) => token,
            None => return Ok(None),
        };
        let literal = match token.kind {
            TokenKind::LeftSquareBracket => {
                DataLiteral::List(self.sequence(TokenKind::RightSquareBracket, Self::data_literal)?)
            }
            TokenKind::LeftCurlyBrace => {
                DataLiteral::Tuple(self.sequence(TokenKind::RightCurlyBrace, Self::data_literal)?)
            }
            TokenKind::PercentLeftCurlyBrace => {
                DataLiteral::Map(self.sequence(TokenKind::RightCurlyBrace, Self::key_pair)?)
            }
            TokenKind::Colon | TokenKind::RightArrow => return Ok(None),
            TokenKind::Atom => DataLiteral::Atom(token.lexeme[1..].to_string()),
            TokenKind::Key => DataLiteral::Key(token.lexeme.clone()),
            TokenKind::Value => DataLiteral::Value(token.lexeme.clone()),
            TokenKind::Eof => return Ok(None),
            TokenKind::Integer => DataLiteral::Integer(Integer::from_lexeme(&token.lexeme)),
            TokenKind::Boolean => DataLiteral::Boolean(token.lexeme == "true"),
            _ => return Err(unexpected(token)),
        };
        Ok(Some(literal))
    }

    /// Elements up to and including `closer`. The opening token has already
    /// been consumed.
    fn sequence<T>(
        &mut self,
        closer: TokenKind,
        mut element: impl FnMut(&mut Self) -> Result<Option<T>, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![];
        loop {
            if self.at_end() {
                return Err(ParseError::MissingCloser { expected: closer });
            }
            if self.eat(closer).is_some() {
                return Ok(items);
            }
            if let Some(item) = element(self)? {
                items.push(item);
            }
            if let Some(comma) = self.eat(TokenKind::Comma) {
                if self.peek_kind() == Some(closer) {
                    return Err(ParseError::TrailingComma {
                        closer,
                        position: comma.end,
                    });
                }
            }
        }
    }

    fn key_pair(&mut self) -> Result<Option<KeyPair>, ParseError> {
        let position = self.peek().map_or(0, |t| t.end);
        let key = self.data_literal()?.ok_or(ParseError::InvalidKeyPair {
            position,
            reason: "missing key",
        })?;

        if self.peek().is_none() {
            return Err(ParseError::InvalidKeyPair {
                position,
                reason: "missing value",
            });
        }
        // Without a separator the next literal is the value.
        if self.eat(TokenKind::RightArrow).is_none() {
            self.eat(TokenKind::Colon);
        }
        let value = self.data_literal()?.ok_or(ParseError::InvalidKeyPair {
            position,
            reason: "missing value",
        })?;
        Ok(Some(KeyPair { key, value }))
    }
}

fn unexpected(token: &Token) -> ParseError {
    let expected = crate::join_with_last(
        LITERAL_STARTS.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ", ",
        ", or ",
    );
    ParseError::UnexpectedToken {
        lexeme: token.lexeme.clone(),
        position: token.end,
        expected: format!("one of {}", expected),
    }
}
