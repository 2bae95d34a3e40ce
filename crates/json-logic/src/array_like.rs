//! Uniform view over sequence-shaped values.

use crate::error::EvalError;
use serde_json::Value;

/// Borrowed, indexable, length-queryable view over any array-eligible
/// value.
///
/// Operators that take an array-typed argument (`any`, `all`, `none`,
/// `map`, `filter`, `reduce`, `merge`, `in`) go through this adapter
/// instead of matching on the concrete shape, and fail uniformly when
/// handed something else.
#[derive(Debug, Clone, Copy)]
pub struct ArrayLike<'a> {
    items: &'a [Value],
}

impl<'a> ArrayLike<'a> {
    /// Whether the adapter can wrap `value`.
    pub fn is_eligible(value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    /// Wraps an array-eligible value.
    pub fn from_value(value: &'a Value) -> Option<ArrayLike<'a>> {
        match value {
            Value::Array(items) => Some(ArrayLike { items }),
            _ => None,
        }
    }

    /// Wraps `value`, or fails with an [`EvalError::ArgumentType`]
    /// naming the operator and the offending 1-based argument position.
    pub fn required(
        value: &'a Value,
        operator: &'static str,
        position: usize,
    ) -> Result<ArrayLike<'a>, EvalError> {
        Self::from_value(value).ok_or(EvalError::ArgumentType {
            operator,
            position,
            expected: "an array",
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.items.get(index)
    }

    /// Forward iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'a, Value> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for ArrayLike<'a> {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
