//! Equality operators: loose (`==`, `!=`) and strict (`===`, `!==`).

use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::sync::Arc;

fn loose_eq_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let left = evaluator.evaluate(&args[0], data)?;
    let right = evaluator.evaluate(&args[1], data)?;
    Ok(Value::Bool(value::loose_equals(&left, &right)))
}

fn loose_ne_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let left = evaluator.evaluate(&args[0], data)?;
    let right = evaluator.evaluate(&args[1], data)?;
    Ok(Value::Bool(!value::loose_equals(&left, &right)))
}

fn strict_eq_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let left = evaluator.evaluate(&args[0], data)?;
    let right = evaluator.evaluate(&args[1], data)?;
    Ok(Value::Bool(value::strict_equals(&left, &right)))
}

fn strict_ne_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let left = evaluator.evaluate(&args[0], data)?;
    let right = evaluator.evaluate(&args[1], data)?;
    Ok(Value::Bool(!value::strict_equals(&left, &right)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "==",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: loose_eq_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!=",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: loose_ne_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "===",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: strict_eq_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "!==",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: strict_ne_eval,
        }),
    ]
}
