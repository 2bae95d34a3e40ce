//! Lifts an already-parsed JSON document into a rule [`Node`] tree.
//!
//! Textual JSON parsing stays in `serde_json`; this adapter only decides
//! which shapes are operations and normalizes numeric literals to
//! double precision.

use crate::ast::Node;
use serde_json::Value;

/// Builds the AST for a rule.
///
/// A JSON object with exactly one key is an operation; its value is the
/// argument list, where a non-array value is the single-argument sugar
/// form (`{"var": "x"}`). Any other object is plain data. Arrays become
/// [`Node::Array`] so that nested operations inside them still
/// evaluate; everything else is a literal.
pub fn parse(rule: &Value) -> Node {
    match rule {
        Value::Object(map) => match map.iter().next() {
            Some((operator, operands)) if map.len() == 1 => Node::Operation {
                operator: operator.clone(),
                args: parse_args(operands),
            },
            _ => Node::Literal(normalize(rule)),
        },
        Value::Array(items) => Node::Array(items.iter().map(parse).collect()),
        other => Node::Literal(normalize(other)),
    }
}

fn parse_args(operands: &Value) -> Vec<Node> {
    match operands {
        Value::Array(items) => items.iter().map(parse).collect(),
        single => vec![parse(single)],
    }
}

/// Normalizes every number in a literal to double precision, so that
/// arithmetic and comparisons never see the original numeric subtype.
fn normalize(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => crate::value::number(f),
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
