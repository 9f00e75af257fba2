//! Anchored text matchers and the priority-ordered table built from them.
//!
//! A [`Lexer`] looks at the start of its input and reports how many bytes it
//! matches. Matchers compose with [`seq`], [`alt`], [`repeat`] and friends, and
//! a [`TokenTable`] tries a list of them in order, so earlier rows shadow later
//! ones on overlapping prefixes.

use std::ops::RangeBounds;
use std::rc::Rc;

use regex::Regex;

pub trait Lexer {
    /// Length in bytes of the match at the start of `input`, if any.
    fn lex(&self, input: &str) -> Option<usize>;
}

pub type RcLexer = Rc<dyn Lexer>;

pub struct Is(char);

impl Lexer for Is {
    fn lex(&self, input: &str) -> Option<usize> {
        input.chars().next().and_then(|c| {
            if c == self.0 {
                Some(c.len_utf8())
            } else {
                None
            }
        })
    }
}

pub fn is(c: char) -> RcLexer {
    Rc::new(Is(c))
}

pub struct Exact(String);

impl Lexer for Exact {
    fn lex(&self, input: &str) -> Option<usize> {
        if input.starts_with(&self.0) {
            Some(self.0.len())
        } else {
            None
        }
    }
}

pub fn exact(string: impl AsRef<str>) -> RcLexer {
    Rc::new(Exact(string.as_ref().to_string()))
}

pub struct OneOf(String);

impl Lexer for OneOf {
    fn lex(&self, input: &str) -> Option<usize> {
        input.chars().next().and_then(|c| {
            if self.0.contains(c) {
                Some(c.len_utf8())
            } else {
                None
            }
        })
    }
}

pub fn one_of(chars: impl AsRef<str>) -> RcLexer {
    Rc::new(OneOf(chars.as_ref().to_string()))
}

pub struct Any;

impl Lexer for Any {
    fn lex(&self, input: &str) -> Option<usize> {
        input.chars().next().map(char::len_utf8)
    }
}

pub fn any() -> RcLexer {
    Rc::new(Any)
}

/// A regular expression anchored at the start of the input.
pub struct Pattern(Regex);

impl Lexer for Pattern {
    fn lex(&self, input: &str) -> Option<usize> {
        self.0.find(input).map(|m| m.end())
    }
}

/// # Panics
///
/// Panics if `re` is not a valid regular expression. Patterns are expected to
/// be constants.
pub fn pattern(re: &str) -> RcLexer {
    let anchored = format!("^(?:{})", re);
    Rc::new(Pattern(
        Regex::new(&anchored).expect("invalid token pattern"),
    ))
}

pub struct Repeat {
    lexer: RcLexer,
    min: usize,
    max: Option<usize>,
}

impl Lexer for Repeat {
    fn lex(&self, input: &str) -> Option<usize> {
        let mut count = 0;
        let mut len = 0;
        while count < self.max.unwrap_or(usize::MAX) {
            match self.lexer.lex(&input[len..]) {
                // An empty match would repeat forever.
                Some(0) => break,
                Some(n) => {
                    count += 1;
                    len += n;
                }
                None => break,
            }
        }
        if count >= self.min { Some(len) } else { None }
    }
}

pub fn repeat(lexer: RcLexer, bounds: impl RangeBounds<usize>) -> RcLexer {
    let (min, max) = crate::get_bounds(bounds);
    Rc::new(Repeat { lexer, min, max })
}

pub fn some(lexer: RcLexer) -> RcLexer {
    repeat(lexer, 1..)
}

pub fn many(lexer: RcLexer) -> RcLexer {
    repeat(lexer, ..)
}

pub struct Alt(Vec<RcLexer>);

impl Lexer for Alt {
    fn lex(&self, input: &str) -> Option<usize> {
        for lexer in &self.0 {
            if let Some(len) = lexer.lex(input) {
                return Some(len);
            }
        }
        None
    }
}

pub fn alt(lexers: impl AsRef<[RcLexer]>) -> RcLexer {
    Rc::new(Alt(lexers.as_ref().into()))
}

pub struct Seq(Vec<RcLexer>);

impl Lexer for Seq {
    fn lex(&self, input: &str) -> Option<usize> {
        let mut len = 0;
        for lexer in &self.0 {
            if let Some(n) = lexer.lex(&input[len..]) {
                len += n;
            } else {
                return None;
            }
        }
        Some(len)
    }
}

pub fn seq(lexers: impl AsRef<[RcLexer]>) -> RcLexer {
    Rc::new(Seq(lexers.as_ref().into()))
}

struct Reject(RcLexer);

impl Lexer for Reject {
    fn lex(&self, input: &str) -> Option<usize> {
        if self.0.lex(input).is_none() {
            Some(0)
        } else {
            None
        }
    }
}

pub fn reject(lexer: RcLexer) -> RcLexer {
    Rc::new(Reject(lexer))
}

/// Any single character that `lexer` does not match.
pub fn not(lexer: RcLexer) -> RcLexer {
    seq(&[reject(lexer), any()])
}

/// Shortest run of `lexer` after which `stop_before` matches.
///
/// The run stops at the first position where `stop_before` matches, which is
/// what a lazy `.*?` followed by `stop_before` does in a regular expression.
pub fn many_until(lexer: RcLexer, stop_before: RcLexer) -> RcLexer {
    many(seq(&[reject(stop_before), lexer]))
}

/// Priority-ordered list of `(kind, matcher)` rows.
pub struct TokenTable<K>(Vec<(K, RcLexer)>);

impl<K: Copy> TokenTable<K> {
    pub fn new(rows: Vec<(K, RcLexer)>) -> Self {
        TokenTable(rows)
    }

    /// The first row, in table order, with a non-empty match at the start of
    /// `input`.
    pub fn first_match(&self, input: &str) -> Option<(K, usize)> {
        self.0.iter().find_map(|(kind, lexer)| match lexer.lex(input) {
            Some(n) if n > 0 => Some((*kind, n)),
            _ => None,
        })
    }
}

/// Builds a [`TokenTable`] from `kind => matcher` rows, highest priority first.
#[macro_export]
macro_rules! token_table {
    ($($kind:expr => $lexer:expr),* $(,)?) => {
        $crate::lexer::TokenTable::new(vec![$(
            ($kind, $lexer),
        )*])
    };
}

pub mod prelude {
    pub use super::{
        alt,
        any,
        exact,
        is,
        many,
        many_until,
        not,
        one_of,
        pattern,
        reject,
        repeat,
        seq,
        some,
        Lexer,
        RcLexer,
        TokenTable,
    };
    pub use crate::token_table;
}
