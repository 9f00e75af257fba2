//! Reader for a small data-literal notation.
//!
//! Text such as `%{ a: 22, :b => [1, 2_000] }` goes through three passes:
//! [`tokenizer::tokenize`] turns it into [`token::Token`]s using the ordered
//! table in [`token`], [`parser::parse`] builds an [`ast::Sentence`], and
//! [`ast::Project`] turns the tree into generic [`value::Value`]s ready to be
//! written out as JSON.

use std::ops::{Bound, RangeBounds};

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod tokenizer;
pub mod value;

use ast::{Project, Sentence};
use parser::ParseError;
use tokenizer::LexError;
use value::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tokenizes and parses `input`.
pub fn parse_str(input: &str) -> Result<Sentence, Error> {
    let tokens = tokenizer::tokenize(input)?;
    Ok(parser::parse(&tokens)?)
}

/// Tokenizes, parses and projects `input` into generic values.
pub fn project_str(input: &str) -> Result<Vec<Value>, Error> {
    parse_str(input).map(|sentence| sentence.project())
}

/// Serializes projected values, indented by two spaces when `pretty` is set.
///
/// Output is pure ASCII: anything else is written as `\uXXXX` escapes.
pub fn to_json(values: &[Value], pretty: bool) -> Result<String, Error> {
    let json = if pretty {
        serde_json::to_string_pretty(values)?
    } else {
        serde_json::to_string(values)?
    };
    Ok(escape_non_ascii(&json))
}

/// serde_json only emits non-ASCII characters inside string literals, so they
/// can be escaped after the fact.
fn escape_non_ascii(json: &str) -> String {
    let mut buf = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            buf.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                buf.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    buf
}

fn get_bounds(bounds: impl RangeBounds<usize>) -> (usize, Option<usize>) {
    let min = match bounds.start_bound() {
        Bound::Included(n) => *n,
        Bound::Excluded(n) => *n + 1,
        Bound::Unbounded => 0,
    };
    let max = match bounds.end_bound() {
        Bound::Included(n) => {
            if *n < usize::MAX {
                Some(*n + 1)
            } else {
                None
            }
        }
        Bound::Excluded(n) => Some(*n),
        Bound::Unbounded => None,
    };
    (min, max)
}

pub(crate) fn join_with_last<S: ToString>(items: impl AsRef<[S]>, sep: &str, last_sep: &str) -> String {
    let items = items.as_ref();

    let mut buf = String::new();

    let mut iter = items.iter();
    let mut first = true;
    let mut next = iter.next();
    while let Some(item) = next {
        let item = item.to_string();
        next = iter.next();

        let last = next.is_none();
        if !first {
            buf.push_str(if last { last_sep } else { sep });
        }
        buf.push_str(&item);
        first = false;
    }

    buf
}
