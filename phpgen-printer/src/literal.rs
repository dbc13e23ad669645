//! Literal serialization.
//!
//! [`LiteralSerializer`] is the capability the printer uses for parameter
//! defaults, constant values and property initializers. [`PhpDumper`]
//! is the stock implementation producing short array syntax.

use phpgen_model::Value;

use crate::{Error, Indent, Result, layout::WRAP_LENGTH};

/// Arrays nested deeper than this are rejected.
pub const MAX_DEPTH: usize = 50;

/// Turns a [`Value`] into PHP source text.
pub trait LiteralSerializer {
    /// Serialize `value` as a PHP literal.
    fn serialize(&self, value: &Value) -> Result<String>;
}

impl<T: LiteralSerializer + ?Sized> LiteralSerializer for &T {
    fn serialize(&self, value: &Value) -> Result<String> {
        (**self).serialize(value)
    }
}

/// Default PHP literal serializer.
///
/// # Example
///
/// ```
/// use phpgen_model::Value;
/// use phpgen_printer::{LiteralSerializer, PhpDumper};
///
/// let dumper = PhpDumper::default();
/// let value = Value::map([("debug", Value::Bool(true)), ("retries", Value::Int(3))]);
/// assert_eq!(dumper.serialize(&value).unwrap(), "['debug' => true, 'retries' => 3]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhpDumper {
    indent: Indent,
}

impl PhpDumper {
    /// Create a dumper that indents wrapped arrays with `indent`.
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    fn dump(&self, value: &Value, level: usize) -> Result<String> {
        match value {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => dump_float(*f),
            Value::String(s) => Ok(dump_string(s)),
            Value::Literal(code) => Ok(code.clone()),
            Value::List(items) => {
                let entries = items.iter().map(|item| (None, item));
                self.dump_array(entries, items.len(), level)
            }
            Value::Map(map) => {
                let mut counter: i64 = 0;
                let mut entries = Vec::with_capacity(map.len());
                for (key, item) in map {
                    let key_text = match int_key(key) {
                        Some(k) => {
                            let hidden = k == counter;
                            counter = counter.max(k.saturating_add(1));
                            (!hidden).then(|| k.to_string())
                        }
                        None => Some(dump_string(key)),
                    };
                    entries.push((key_text, item));
                }
                self.dump_array(entries.into_iter(), map.len(), level)
            }
        }
    }

    fn dump_array<'a>(
        &self,
        entries: impl Iterator<Item = (Option<String>, &'a Value)>,
        len: usize,
        level: usize,
    ) -> Result<String> {
        if len == 0 {
            return Ok("[]".to_string());
        }
        if level > MAX_DEPTH {
            return Err(Error::NestingTooDeep { limit: MAX_DEPTH });
        }

        let unit = self.indent.as_str();
        let space = unit.repeat(level);
        let mut items = Vec::with_capacity(len);
        for (key, item) in entries {
            let rendered = self.dump(item, level + 1)?;
            items.push(match key {
                Some(key) => format!("{} => {}", key, rendered),
                None => rendered,
            });
        }

        let single = items.join(", ");
        let budget = WRAP_LENGTH.saturating_sub(level * self.indent.width());
        if single.contains('\n') || single.len() > budget {
            let mut out = format!("[\n{}", space);
            for item in &items {
                out.push_str(unit);
                out.push_str(item);
                out.push_str(",\n");
                out.push_str(&space);
            }
            out.push(']');
            Ok(out)
        } else {
            Ok(format!("[{}]", single))
        }
    }
}

impl LiteralSerializer for PhpDumper {
    fn serialize(&self, value: &Value) -> Result<String> {
        self.dump(value, 0)
    }
}

/// Keys PHP itself would store as integers.
fn int_key(key: &str) -> Option<i64> {
    let n: i64 = key.parse().ok()?;
    (n.to_string() == key).then_some(n)
}

/// Significant digits PHP keeps when it turns a float into text.
const FLOAT_PRECISION: i32 = 14;

fn dump_float(f: f64) -> Result<String> {
    if !f.is_finite() {
        return Err(Error::UnrepresentableValue {
            value: f.to_string(),
        });
    }

    // The exponent of the rounded value picks the notation.
    let sci = format!("{:.*e}", (FLOAT_PRECISION - 1) as usize, f);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..FLOAT_PRECISION).contains(&exponent) {
        let mantissa = with_fraction(trim_fraction(mantissa));
        return Ok(format!("{}E{:+}", mantissa, exponent));
    }

    let decimals = usize::try_from(FLOAT_PRECISION - 1 - exponent).unwrap_or(0);
    let fixed = format!("{:.*}", decimals, f);
    Ok(with_fraction(trim_fraction(&fixed)))
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn with_fraction(digits: &str) -> String {
    if digits.contains('.') {
        digits.to_string()
    } else {
        format!("{}.0", digits)
    }
}

/// Characters that force the double-quoted escaped form.
fn needs_escaping(c: char) -> bool {
    !(c == '\t' || (' '..='~').contains(&c) || c >= '\u{a0}')
}

fn dump_string(s: &str) -> String {
    if s.chars().any(needs_escaping) {
        return dump_escaped_string(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' => out.push_str("\\'"),
            // A backslash only needs doubling where it could start an escape.
            '\\' if matches!(chars.peek(), None | Some('\'') | Some('\\')) => {
                out.push_str("\\\\")
            }
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn dump_escaped_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '$' => out.push_str("\\$"),
            '"' => out.push_str("\\\""),
            c if u32::from(c) < 0x20 || u32::from(c) == 0x7f => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c if u32::from(c) >= 0x80 => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("\\x{:02x}", byte));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(value: Value) -> String {
        PhpDumper::default().serialize(&value).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(dump(Value::Null), "null");
        assert_eq!(dump(Value::Bool(true)), "true");
        assert_eq!(dump(Value::Bool(false)), "false");
        assert_eq!(dump(Value::Int(-42)), "-42");
    }

    #[test]
    fn test_floats() {
        assert_eq!(dump(Value::Float(1.0)), "1.0");
        assert_eq!(dump(Value::Float(-2.5)), "-2.5");
        assert_eq!(dump(Value::Float(0.0)), "0.0");
        assert_eq!(dump(Value::Float(1e25)), "1.0E+25");
        assert_eq!(dump(Value::Float(1.5e-7)), "1.5E-7");
    }

    #[test]
    fn test_floats_use_fourteen_significant_digits() {
        assert_eq!(dump(Value::Float(0.1 + 0.2)), "0.3");
        assert_eq!(dump(Value::Float(1.0 / 3.0)), "0.33333333333333");
        assert_eq!(dump(Value::Float(99999999999999.0)), "99999999999999.0");
        assert_eq!(dump(Value::Float(1e14)), "1.0E+14");
        assert_eq!(dump(Value::Float(1e-4)), "0.0001");
        assert_eq!(dump(Value::Float(1.5e-5)), "1.5E-5");
    }

    #[test]
    fn test_non_finite_float_fails() {
        let err = PhpDumper::default()
            .serialize(&Value::Float(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, Error::UnrepresentableValue { .. }));
        assert!(
            PhpDumper::default()
                .serialize(&Value::Float(f64::INFINITY))
                .is_err()
        );
    }

    #[test]
    fn test_single_quoted_strings() {
        assert_eq!(dump(Value::string("hello")), "'hello'");
        assert_eq!(dump(Value::string("it's")), r"'it\'s'");
        assert_eq!(dump(Value::string(r"a\b")), r"'a\b'");
        assert_eq!(dump(Value::string(r"a\\b")), r"'a\\\b'");
        assert_eq!(dump(Value::string(r"end\")), r"'end\\'");
        assert_eq!(dump(Value::string("žluťoučký")), "'žluťoučký'");
    }

    #[test]
    fn test_double_quoted_strings() {
        assert_eq!(dump(Value::string("a\nb")), r#""a\nb""#);
        assert_eq!(dump(Value::string("$x\r\n")), r#""\$x\r\n""#);
        assert_eq!(dump(Value::string("\u{1}\"")), r#""\x01\"""#);
        assert_eq!(dump(Value::string("\né")), r#""\n\xc3\xa9""#);
    }

    #[test]
    fn test_literal_verbatim() {
        assert_eq!(dump(Value::literal("self::FOO")), "self::FOO");
    }

    #[test]
    fn test_lists() {
        assert_eq!(dump(Value::List(vec![])), "[]");
        assert_eq!(dump(Value::list([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(
            dump(Value::list([Value::list(["a"]), Value::Null])),
            "[['a'], null]"
        );
    }

    #[test]
    fn test_maps() {
        assert_eq!(
            dump(Value::map([("a", 1), ("b", 2)])),
            "['a' => 1, 'b' => 2]"
        );
        assert_eq!(
            dump(Value::map([("0", "x"), ("1", "y"), ("5", "z"), ("6", "w")])),
            "['x', 'y', 5 => 'z', 'w']"
        );
        assert_eq!(dump(Value::map([("01", 1)])), "['01' => 1]");
    }

    #[test]
    fn test_long_array_wraps() {
        let words: Vec<Value> = (0..10).map(|i| Value::string(format!("item{}", i))).collect();
        let expected = "[\n\t'item0',\n\t'item1',\n\t'item2',\n\t'item3',\n\t'item4',\n\t'item5',\n\t'item6',\n\t'item7',\n\t'item8',\n\t'item9',\n]";
        assert_eq!(dump(Value::List(words)), expected);
    }

    #[test]
    fn test_nested_wrap_indents_by_level() {
        let inner: Vec<Value> = (0..12).map(|i| Value::Int(1_000_000 + i)).collect();
        let value = Value::map([("numbers", Value::List(inner))]);
        let out = dump(value);
        assert!(out.starts_with("[\n\t'numbers' => [\n\t\t1000000,\n"));
        assert!(out.ends_with("\t\t1000011,\n\t],\n]"));
    }

    #[test]
    fn test_multibyte_array_wraps_by_byte_length() {
        let words: Vec<Value> = (0..3).map(|_| Value::string("ž".repeat(12))).collect();
        let out = dump(Value::List(words));
        assert!(out.starts_with("[\n\t'žžž"));
        assert!(out.ends_with("',\n]"));
    }

    #[test]
    fn test_spaces_indent() {
        let words: Vec<Value> = (0..10).map(|i| Value::string(format!("item{}", i))).collect();
        let out = PhpDumper::new(Indent::Spaces(2))
            .serialize(&Value::List(words))
            .unwrap();
        assert!(out.starts_with("[\n  'item0',\n  'item1',"));
    }

    #[test]
    fn test_too_deep() {
        let mut value = Value::list([1]);
        for _ in 0..MAX_DEPTH + 1 {
            value = Value::List(vec![value]);
        }
        let err = PhpDumper::default().serialize(&value).unwrap_err();
        assert_eq!(err, Error::NestingTooDeep { limit: MAX_DEPTH });
    }
}
