use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};
use serde_json::Number;

/// Generic, serialization-ready form of a data literal.
///
/// Tagged variants serialize as `{"%k": kind, "%v": value}`. Map entries keep
/// source order and serialize as `[key, value]` pairs, so keys need not be
/// unique or scalar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Value {
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Decimal digits of any width, serialized as a JSON number.
    Int(String),
    Atom(String),
    Bool(bool),
    /// Raw quoted text, serialized as a bare string.
    Str(String),
}

fn tagged<S, V>(serializer: S, kind: &str, value: &V) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("%k", kind)?;
    map.serialize_entry("%v", value)?;
    map.end()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::List(items) => tagged(serializer, "list", items),
            Value::Tuple(items) => tagged(serializer, "tuple", items),
            Value::Map(pairs) => tagged(serializer, "map", pairs),
            Value::Int(digits) => {
                let n: Number = digits.parse().map_err(S::Error::custom)?;
                tagged(serializer, "int", &n)
            }
            Value::Atom(name) => tagged(serializer, "atom", name),
            Value::Bool(b) => tagged(serializer, "bool", b),
            Value::Str(text) => serializer.serialize_str(text),
        }
    }
}
