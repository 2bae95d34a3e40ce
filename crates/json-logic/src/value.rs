//! The value model: truthiness, numeric coercion, equality and ordering
//! over `serde_json::Value`.
//!
//! Every comparison and arithmetic operator derives its semantics from
//! the primitives here instead of re-implementing coercion per operator.

use serde_json::Value;
use std::cmp::Ordering;

/// Returns the truthiness of a value.
///
/// Falsy: `null`, `false`, `0`, the empty string and the empty array.
/// Everything else is truthy, including the empty object.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Coerces a value toward a double.
///
/// Numbers of any source width normalize to `f64`, booleans to 0/1, and
/// numeric-looking strings parse. `null` and containers have no numeric
/// form.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Strict equality: both tag and value must match.
///
/// Numbers compare by their normalized double (`1 === 1.0`); sequences
/// and mappings compare structurally under the same rule.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| strict_equals(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).map(|w| strict_equals(v, w)).unwrap_or(false))
        }
        _ => false,
    }
}

/// Loose equality: numbers, booleans and numeric-looking strings compare
/// by numeric value; matching tags compare structurally; `null` equals
/// only `null`; mismatched non-coercible tags are unequal.
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, _) | (_, Value::Null) => matches!((a, b), (Value::Null, Value::Null)),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            strict_equals(a, b)
        }
        _ => match (coerce_number(a), coerce_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Three-way comparison after coercing both operands toward numbers.
///
/// `None` when either side has no numeric form; the caller decides how
/// to fail.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let x = coerce_number(a)?;
    let y = coerce_number(b)?;
    x.partial_cmp(&y)
}

/// Display coercion used by `cat`, `in` and `log`.
///
/// Integral doubles print without a trailing `.0`; containers print as
/// JSON.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Lifts a double into a `Value`.
///
/// Non-finite doubles have no JSON representation and become `null`,
/// matching how the reference implementation serializes `Infinity` and
/// `NaN`.
pub fn number(n: f64) -> Value {
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// The value's type name, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
