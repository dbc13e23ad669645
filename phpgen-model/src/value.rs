//! Runtime values used as parameter defaults, constant values and
//! property initializers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A value that the printer turns into a PHP literal.
///
/// In model documents values are written naturally (`42`, `"text"`,
/// `[1, 2]`, `{ key = "value" }`). Raw PHP code is written as a table with
/// a single `@php` key, e.g. `{ "@php" = "self::DEFAULT" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// `null`
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Array with implicit sequential keys.
    List(Vec<Value>),
    /// Raw PHP expression emitted verbatim (`PHP_EOL`, `self::FOO`, ...).
    #[serde(with = "literal")]
    Literal(String),
    /// Array with explicit keys, in insertion order.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Create a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a raw PHP expression.
    pub fn literal(code: impl Into<String>) -> Self {
        Self::Literal(code.into())
    }

    /// Create a list value.
    pub fn list(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Create a keyed array value.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true for `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

mod literal {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Repr {
        #[serde(rename = "@php")]
        code: String,
    }

    pub fn serialize<S>(code: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Repr {
            code: code.to_string(),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Repr::deserialize(deserializer).map(|repr| repr.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        value: Value,
    }

    fn from_toml(src: &str) -> Value {
        toml::from_str::<Holder>(src).unwrap().value
    }

    #[test]
    fn test_deserialize_scalars() {
        assert_eq!(from_toml("value = 42"), Value::Int(42));
        assert_eq!(from_toml("value = 1.5"), Value::Float(1.5));
        assert_eq!(from_toml("value = true"), Value::Bool(true));
        assert_eq!(from_toml("value = 'abc'"), Value::string("abc"));
    }

    #[test]
    fn test_deserialize_arrays() {
        assert_eq!(from_toml("value = [1, 2]"), Value::list([1, 2]));
        assert_eq!(
            from_toml("value = { a = 1, b = 'x' }"),
            Value::map([("a", Value::Int(1)), ("b", Value::string("x"))])
        );
    }

    #[test]
    fn test_deserialize_literal() {
        assert_eq!(
            from_toml(r#"value = { "@php" = "self::FOO" }"#),
            Value::literal("self::FOO")
        );
    }

    #[test]
    fn test_php_key_next_to_others_is_a_map() {
        let value = from_toml(r#"value = { "@php" = "x", other = 1 }"#);
        assert!(matches!(value, Value::Map(_)));
    }

    #[test]
    fn test_json_null() {
        let holder: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(holder.value.is_null());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::string("a"));
    }
}
