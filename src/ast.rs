//! Syntax tree for the data-literal language and its projection to [`Value`].

use crate::value::Value;

/// Conversion of a syntax node into its generic value.
pub trait Project {
    type Output;

    fn project(&self) -> Self::Output;
}

/// Top-level sequence of literals.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Sentence(pub Vec<DataLiteral>);

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DataLiteral {
    List(Vec<DataLiteral>),
    Tuple(Vec<DataLiteral>),
    Map(Vec<KeyPair>),
    Integer(Integer),
    /// Identifier without its leading colon.
    Atom(String),
    /// Raw `identifier:` lexeme.
    Key(String),
    /// Raw quoted lexeme, quotes included.
    Value(String),
    Boolean(bool),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KeyPair {
    pub key: DataLiteral,
    pub value: DataLiteral,
}

/// Integer literal; the lexeme may contain `_` separators between digits.
/// There is no width limit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Integer {
    lexeme: String,
}

impl Integer {
    pub fn from_lexeme(lexeme: &str) -> Self {
        Integer {
            lexeme: lexeme.to_string(),
        }
    }

    /// Decimal digits without separators or leading zeros.
    pub fn digits(&self) -> String {
        let digits: String = self.lexeme.chars().filter(|&c| c != '_').collect();
        match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        }
    }
}

impl Project for Sentence {
    type Output = Vec<Value>;

    fn project(&self) -> Vec<Value> {
        project_all(&self.0)
    }
}

fn project_all(literals: &[DataLiteral]) -> Vec<Value> {
    literals.iter().map(Project::project).collect()
}

impl Project for DataLiteral {
    type Output = Value;

    fn project(&self) -> Value {
        match self {
            DataLiteral::List(items) => Value::List(project_all(items)),
            DataLiteral::Tuple(items) => Value::Tuple(project_all(items)),
            DataLiteral::Map(pairs) => Value::Map(pairs.iter().map(Project::project).collect()),
            DataLiteral::Integer(n) => Value::Int(n.digits()),
            DataLiteral::Atom(name) => Value::Atom(name.clone()),
            // The whole lexeme is reversed, colon included: `ab:` becomes `:ba`.
            DataLiteral::Key(lexeme) => Value::Atom(lexeme.chars().rev().collect()),
            DataLiteral::Value(text) => Value::Str(text.clone()),
            DataLiteral::Boolean(b) => Value::Bool(*b),
        }
    }
}

impl Project for KeyPair {
    type Output = (Value, Value);

    fn project(&self) -> (Value, Value) {
        (self.key.project(), self.value.project())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(lexeme: &str) -> DataLiteral {
        DataLiteral::Integer(Integer::from_lexeme(lexeme))
    }

    #[test]
    fn integer_separators() {
        assert_eq!(Integer::from_lexeme("123_456_789").digits(), "123456789");
        assert_eq!(Integer::from_lexeme("007").digits(), "7");
        assert_eq!(Integer::from_lexeme("0_000").digits(), "0");
        assert_eq!(
            Integer::from_lexeme("99_999_999_999_999_999_999_999").digits(),
            "99999999999999999999999"
        );
    }

    #[test]
    fn key_is_reversed_with_its_colon() {
        assert_eq!(
            DataLiteral::Key("a:".to_string()).project(),
            Value::Atom(":a".to_string())
        );
        assert_eq!(
            DataLiteral::Key("name:".to_string()).project(),
            Value::Atom(":eman".to_string())
        );
    }

    #[test]
    fn nested_projection() {
        let sentence = Sentence(vec![
            DataLiteral::Map(vec![KeyPair {
                key: DataLiteral::Atom("x".to_string()),
                value: DataLiteral::Tuple(vec![int("1"), DataLiteral::Boolean(true)]),
            }]),
            DataLiteral::List(vec![]),
            DataLiteral::Value("'v1'".to_string()),
        ]);
        assert_eq!(
            sentence.project(),
            vec![
                Value::Map(vec![(
                    Value::Atom("x".to_string()),
                    Value::Tuple(vec![Value::Int("1".to_string()), Value::Bool(true)]),
                )]),
                Value::List(vec![]),
                Value::Str("'v1'".to_string()),
            ]
        );
    }

    #[test]
    fn empty_sentence() {
        assert_eq!(Sentence::default().project(), Vec::<Value>::new());
    }
}
