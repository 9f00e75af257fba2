use log::{debug, trace};

use crate::token::{skip, token_table, Token, TokenKind, BOOLEAN_FOLLOWERS};

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("invalid token at position {position}: unexpected {found:?}")]
    NoMatch { position: usize, found: char },
    #[error("invalid token at position {position}: {found:?} cannot follow a boolean")]
    BooleanBoundary { position: usize, found: char },
}

/// Splits `input` into tokens, ending with a single EOF token positioned one
/// past the end of the input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let table = token_table();
    let skip = skip();

    let mut tokens = vec![];
    let mut pos = 0;
    while pos < input.len() {
        if let Some(n) = skip.lex(&input[pos..]) {
            pos += n;
        }
        let rest = &input[pos..];
        let found = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };

        let (kind, n) = table
            .first_match(rest)
            .ok_or(LexError::NoMatch { position: pos, found })?;
        pos += n;
        let token = Token::new(kind, &rest[..n], pos);
        trace!("lexed {}", token);
        tokens.push(token);

        if kind == TokenKind::Boolean {
            // End of input is an acceptable boundary.
            if let Some(next) = input[pos..].chars().next() {
                if !BOOLEAN_FOLLOWERS.contains(next) {
                    return Err(LexError::BooleanBoundary {
                        position: pos,
                        found: next,
                    });
                }
            }
        }
    }

    tokens.push(Token::eof(input.len() + 1));
    debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(tokenize("").unwrap(), vec![Token::eof(1)]);
        assert_eq!(tokenize("  \n\t# comment\n# another").unwrap(), vec![Token::eof(24)]);
    }

    #[test]
    fn positions_are_end_offsets() {
        let tokens = tokenize("[1, :a]").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::LeftSquareBracket, "[", 1),
                Token::new(TokenKind::Integer, "1", 2),
                Token::new(TokenKind::Comma, ",", 3),
                Token::new(TokenKind::Atom, ":a", 6),
                Token::new(TokenKind::RightSquareBracket, "]", 7),
                Token::eof(8),
            ]
        );
    }

    #[test]
    fn map_tokens() {
        use TokenKind::*;
        assert_eq!(
            kinds("%{ a: 22, :b => 33 }"),
            vec![
                PercentLeftCurlyBrace,
                Key,
                Integer,
                Comma,
                Atom,
                RightArrow,
                Integer,
                RightCurlyBrace,
                Eof
            ]
        );
    }

    #[test]
    fn comments_between_tokens() {
        use TokenKind::*;
        assert_eq!(kinds("1 # one\n2#two"), vec![Integer, Integer, Eof]);
    }

    #[test]
    fn booleans_need_a_boundary() {
        use TokenKind::*;
        assert_eq!(kinds("true false"), vec![Boolean, Boolean, Eof]);
        assert_eq!(kinds("true,false\n"), vec![Boolean, Comma, Boolean, Eof]);
        assert_eq!(
            tokenize("truefalse"),
            Err(LexError::BooleanBoundary {
                position: 4,
                found: 'f'
            })
        );
        assert!(matches!(tokenize("[true]"), Err(LexError::BooleanBoundary { .. })));
    }

    #[test]
    fn unmatched_input() {
        assert_eq!(
            tokenize("[1, @]"),
            Err(LexError::NoMatch {
                position: 4,
                found: '@'
            })
        );
        assert_eq!(
            tokenize("a :"),
            Err(LexError::NoMatch {
                position: 0,
                found: 'a'
            })
        );
        assert_eq!(
            tokenize("1\r\n"),
            Err(LexError::NoMatch {
                position: 1,
                found: '\r'
            })
        );
    }
}
