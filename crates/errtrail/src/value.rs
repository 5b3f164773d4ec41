//! Parameter values attached at a call site.

use std::fmt;

/// Dynamically-typed payload of one annotation.
///
/// The library never interprets a value, it only renders it. Conversions
/// cover the shapes annotations actually carry, so call sites read as
/// plain literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free-form text.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Sequence of strings, rendered as `[a, b, c]`.
    List(Vec<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(text) => write!(f, "{}", text),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(items: [&str; N]) -> Self {
        Value::List(items.iter().map(|item| (*item).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::from("a name").to_string(), "a name");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(["1", "2", "3"]).to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_list_conversions_agree() {
        let from_array = Value::from(["a", "b"]);
        let from_vec = Value::from(vec!["a", "b"]);
        let from_owned = Value::from(vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(from_array, from_vec);
        assert_eq!(from_vec, from_owned);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(Value::from(Vec::<String>::new()).to_string(), "[]");
    }
}
