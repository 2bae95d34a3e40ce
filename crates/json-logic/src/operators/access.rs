//! Data access operators: `var`, `missing` and `missing_some`.

use crate::array_like::ArrayLike;
use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::sync::Arc;

/// Outcome of a path walk.
///
/// A key or index that exists but holds an explicit `null` is
/// `Present(Null)`, which is not the same thing as `Missing`: only
/// `Missing` lets `var` fall back to its default.
enum Resolved<'a> {
    Present(&'a Value),
    Missing,
}

/// Walks `data` one dot-delimited segment at a time. Mappings look up
/// by key; array-eligible containers require the segment to parse as a
/// non-negative index, bounds-checked. Any failed step ends the walk as
/// `Missing`.
fn resolve_str<'a>(data: &'a Value, path: &str) -> Resolved<'a> {
    if path.is_empty() {
        return Resolved::Present(data);
    }
    let mut current = data;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(v) => v,
                None => return Resolved::Missing,
            },
            Value::Array(items) => {
                match segment.parse::<usize>().ok().and_then(|i| items.get(i)) {
                    Some(v) => v,
                    None => return Resolved::Missing,
                }
            }
            _ => return Resolved::Missing,
        };
    }
    Resolved::Present(current)
}

/// Resolves an evaluated path value against the data context. `null`
/// and the empty string address the whole context; integral
/// non-negative numbers address a single index or key.
fn resolve<'a>(
    operator: &'static str,
    data: &'a Value,
    path: &Value,
) -> Result<Resolved<'a>, EvalError> {
    match path {
        Value::Null => Ok(Resolved::Present(data)),
        Value::String(s) => Ok(resolve_str(data, s)),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 => {
                Ok(resolve_str(data, &format!("{}", f as u64)))
            }
            _ => Ok(Resolved::Missing),
        },
        _ => Err(EvalError::ArgumentType {
            operator,
            position: 1,
            expected: "a string, number or null",
        }),
    }
}

fn var_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let path = evaluator.evaluate(&args[0], data)?;
    match resolve("var", data, &path)? {
        // An explicit null is present, so the default is not consulted.
        Resolved::Present(value) => Ok(value.clone()),
        Resolved::Missing => match args.get(1) {
            // The default only substitutes for absence, and is only
            // evaluated when absence actually occurred.
            Some(default) => evaluator.evaluate(default, data),
            None => Ok(Value::Null),
        },
    }
}

fn missing_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let mut paths = Vec::with_capacity(args.len());
    for arg in args {
        paths.push(evaluator.evaluate(arg, data)?);
    }
    // A single argument that evaluates to an array supplies the whole
    // path list, as in `{"missing": {"merge": [...]}}`.
    if paths.len() == 1 {
        if let Value::Array(list) = &paths[0] {
            paths = list.clone();
        }
    }
    let mut absent = Vec::new();
    for path in &paths {
        if let Resolved::Missing = resolve("missing", data, path)? {
            absent.push(path.clone());
        }
    }
    Ok(Value::Array(absent))
}

fn missing_some_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let min_val = evaluator.evaluate(&args[0], data)?;
    let min = value::coerce_number(&min_val).ok_or(EvalError::ArgumentType {
        operator: "missing_some",
        position: 1,
        expected: "a number",
    })?;
    let paths_val = evaluator.evaluate(&args[1], data)?;
    let paths = ArrayLike::required(&paths_val, "missing_some", 2)?;

    let mut absent = Vec::new();
    for path in paths.iter() {
        if let Resolved::Missing = resolve("missing_some", data, path)? {
            absent.push(path.clone());
        }
    }
    let present = paths.len() - absent.len();
    if present as f64 >= min {
        Ok(Value::Array(Vec::new()))
    } else {
        Ok(Value::Array(absent))
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "var",
            aliases: &[],
            arity: Arity::Range(1, Some(2)),
            eval_fn: var_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "missing",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: missing_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "missing_some",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: missing_some_eval,
        }),
    ]
}
