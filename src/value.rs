use std::fmt;

/// A runtime value produced by evaluating an expression.
///
/// Values only exist during evaluation; the AST never stores them.
///
/// # No Implicit Coercion
///
/// Binary operators require both operands to be the same variant. Adding a
/// number to text, or comparing a boolean with a number, is a type error.
///
/// # Examples
///
/// ```
/// use calc_lang::Value;
///
/// let number = Value::Number(42.0);
/// let boolean = Value::Boolean(true);
/// let text = Value::Text("hello".to_string());
///
/// // Host integers are widened to double precision
/// assert_eq!(Value::from(7_i32), Value::Number(7.0));
/// assert_eq!(Value::from(7_u64), Value::Number(7.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Double-precision number
    Number(f64),

    /// Boolean, produced by comparisons and logical operators
    Boolean(bool),

    /// UTF-8 text
    Text(String),

    /// Host value of any other shape (JSON null, array or object)
    ///
    /// Passed through untouched; only `==` and `!=` accept it.
    Opaque(serde_json::Value),
}

impl Value {
    /// Human-readable name of the variant, used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Text(_) => "text",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
            Value::Opaque(json) => write!(f, "{}", json),
        }
    }
}

macro_rules! widen_to_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

widen_to_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Numbers, booleans and strings map onto their native variants; `null`,
/// arrays and objects stay opaque.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Opaque(serde_json::Value::Number(n)),
            },
            other => Value::Opaque(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_widening() {
        assert_eq!(Value::from(-3_i8), Value::Number(-3.0));
        assert_eq!(Value::from(70_000_u32), Value::Number(70000.0));
        assert_eq!(Value::from(1.5_f32), Value::Number(1.5));
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(Value::from(json!(16)), Value::Number(16.0));
        assert_eq!(Value::from(json!("a")), Value::Text("a".into()));
        assert_eq!(Value::from(json!(false)), Value::Boolean(false));
        assert_eq!(Value::from(json!(null)), Value::Opaque(json!(null)));
        assert_eq!(Value::from(json!([1, 2])), Value::Opaque(json!([1, 2])));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::Text("t".into()).as_text(), Some("t"));
        assert_eq!(Value::Text("t".into()).as_number(), None);
        assert_eq!(Value::Number(1.0).type_name(), "number");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(512.0).to_string(), "512");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Text("ab".into()).to_string(), "ab");
        assert_eq!(Value::Opaque(json!({"k": 1})).to_string(), r#"{"k":1}"#);
    }
}
