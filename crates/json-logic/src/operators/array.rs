//! Array iteration operators: `any`, `all`, `none`, `map`, `filter`,
//! `reduce`, `merge`, `in`.
//!
//! The sequence argument goes through the [`ArrayLike`] adapter; a
//! non-eligible value is an argument type error. Iteration rebinds the
//! data context: each element becomes the context the predicate or
//! transform evaluates against.

use crate::array_like::ArrayLike;
use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::sync::Arc;

fn any_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let seq = evaluator.evaluate(&args[0], data)?;
    let items = ArrayLike::required(&seq, "any", 1)?;
    // Vacuously false for the empty sequence.
    for item in items.iter() {
        if value::truthy(&evaluator.evaluate(&args[1], item)?) {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

fn all_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let seq = evaluator.evaluate(&args[0], data)?;
    let items = ArrayLike::required(&seq, "all", 1)?;
    // Vacuously true for the empty sequence.
    for item in items.iter() {
        if !value::truthy(&evaluator.evaluate(&args[1], item)?) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn none_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let seq = evaluator.evaluate(&args[0], data)?;
    let items = ArrayLike::required(&seq, "none", 1)?;
    for item in items.iter() {
        if value::truthy(&evaluator.evaluate(&args[1], item)?) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn map_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let seq = evaluator.evaluate(&args[0], data)?;
    let items = ArrayLike::required(&seq, "map", 1)?;
    let mut mapped = Vec::with_capacity(items.len());
    for item in items.iter() {
        mapped.push(evaluator.evaluate(&args[1], item)?);
    }
    Ok(Value::Array(mapped))
}

fn filter_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let seq = evaluator.evaluate(&args[0], data)?;
    let items = ArrayLike::required(&seq, "filter", 1)?;
    let mut kept = Vec::new();
    for item in items.iter() {
        if value::truthy(&evaluator.evaluate(&args[1], item)?) {
            kept.push(item.clone());
        }
    }
    Ok(Value::Array(kept))
}

/// Left fold. Each step evaluates the combiner against a synthetic
/// context exposing `current` and `accumulator`.
fn reduce_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let seq = evaluator.evaluate(&args[0], data)?;
    let items = ArrayLike::required(&seq, "reduce", 1)?;
    let mut accumulator = evaluator.evaluate(&args[2], data)?;
    for item in items.iter() {
        let mut scope = serde_json::Map::with_capacity(2);
        scope.insert("current".to_string(), item.clone());
        scope.insert("accumulator".to_string(), accumulator);
        accumulator = evaluator.evaluate(&args[1], &Value::Object(scope))?;
    }
    Ok(accumulator)
}

/// Flattens one level of nested array arguments; non-array arguments
/// are kept as single elements.
fn merge_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let mut merged = Vec::new();
    for arg in args {
        let val = evaluator.evaluate(arg, data)?;
        match ArrayLike::from_value(&val) {
            Some(items) => merged.extend(items.iter().cloned()),
            None => merged.push(val),
        }
    }
    Ok(Value::Array(merged))
}

/// Membership: needle in an array (strict element equality) or
/// substring in a string.
fn in_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let needle = evaluator.evaluate(&args[0], data)?;
    let haystack = evaluator.evaluate(&args[1], data)?;
    if let Value::String(s) = &haystack {
        return Ok(Value::Bool(s.contains(value::coerce_string(&needle).as_str())));
    }
    match ArrayLike::from_value(&haystack) {
        Some(items) => Ok(Value::Bool(
            items.iter().any(|item| value::strict_equals(item, &needle)),
        )),
        None => Err(EvalError::ArgumentType {
            operator: "in",
            position: 2,
            expected: "an array or a string",
        }),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "any",
            aliases: &["some"],
            arity: Arity::Fixed(2),
            eval_fn: any_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "all",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: all_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "none",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: none_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "map",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: map_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "filter",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: filter_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "reduce",
            aliases: &[],
            arity: Arity::Fixed(3),
            eval_fn: reduce_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "merge",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: merge_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "in",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: in_eval,
        }),
    ]
}
