//! Logical and conditional operators: `and`, `or`, `!`, `!!`, `if`.
//!
//! All of them short-circuit: only as many arguments are evaluated as
//! the outcome requires.

use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::sync::Arc;

fn and_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let mut acc = evaluator.evaluate(&args[0], data)?;
    for arg in &args[1..] {
        if !value::truthy(&acc) {
            return Ok(acc);
        }
        acc = evaluator.evaluate(arg, data)?;
    }
    Ok(acc)
}

fn or_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let mut acc = evaluator.evaluate(&args[0], data)?;
    for arg in &args[1..] {
        if value::truthy(&acc) {
            return Ok(acc);
        }
        acc = evaluator.evaluate(arg, data)?;
    }
    Ok(acc)
}

fn not_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let val = evaluator.evaluate(&args[0], data)?;
    Ok(Value::Bool(!value::truthy(&val)))
}

fn double_not_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let val = evaluator.evaluate(&args[0], data)?;
    Ok(Value::Bool(value::truthy(&val)))
}

/// `if` takes `(condition, consequent)` pairs followed by an optional
/// final alternate: `if(c1, t1, c2, t2, ..., else)`. Conditions are
/// tried in order and nothing past the chosen branch is evaluated.
fn if_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let mut i = 0;
    while i + 1 < args.len() {
        let condition = evaluator.evaluate(&args[i], data)?;
        if value::truthy(&condition) {
            return evaluator.evaluate(&args[i + 1], data);
        }
        i += 2;
    }
    match args.get(i) {
        Some(alternate) => evaluator.evaluate(alternate, data),
        None => Ok(Value::Null),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "and",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: and_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "or",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: or_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: not_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!!",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: double_not_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "if",
            aliases: &["?:"],
            arity: Arity::Any,
            eval_fn: if_eval,
        }),
    ]
}
