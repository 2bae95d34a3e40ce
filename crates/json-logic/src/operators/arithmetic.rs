//! Arithmetic operators: `+`, `-`, `*`, `/`, `%`, `min`, `max`.
//!
//! Operands coerce toward numbers through the value model's single
//! coercion table; a non-coercible operand fails with an argument type
//! error naming the operator and position. Non-finite results lift to
//! `null`.

use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::sync::Arc;

fn operand(operator: &'static str, position: usize, val: &Value) -> Result<f64, EvalError> {
    value::coerce_number(val).ok_or(EvalError::ArgumentType {
        operator,
        position,
        expected: "a numeric value",
    })
}

fn add_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    // A single operand is the unary numeric cast, `+"3.14"`.
    let mut sum = 0.0;
    for (i, arg) in args.iter().enumerate() {
        sum += operand("+", i + 1, &evaluator.evaluate(arg, data)?)?;
    }
    Ok(value::number(sum))
}

fn subtract_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let first = operand("-", 1, &evaluator.evaluate(&args[0], data)?)?;
    match args.get(1) {
        Some(arg) => {
            let second = operand("-", 2, &evaluator.evaluate(arg, data)?)?;
            Ok(value::number(first - second))
        }
        // Unary negation.
        None => Ok(value::number(-first)),
    }
}

fn multiply_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let mut product = 1.0;
    for (i, arg) in args.iter().enumerate() {
        product *= operand("*", i + 1, &evaluator.evaluate(arg, data)?)?;
    }
    Ok(value::number(product))
}

fn divide_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let dividend = operand("/", 1, &evaluator.evaluate(&args[0], data)?)?;
    let divisor = operand("/", 2, &evaluator.evaluate(&args[1], data)?)?;
    Ok(value::number(dividend / divisor))
}

fn modulo_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let dividend = operand("%", 1, &evaluator.evaluate(&args[0], data)?)?;
    let divisor = operand("%", 2, &evaluator.evaluate(&args[1], data)?)?;
    Ok(value::number(dividend % divisor))
}

fn min_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let mut min = f64::INFINITY;
    for (i, arg) in args.iter().enumerate() {
        min = min.min(operand("min", i + 1, &evaluator.evaluate(arg, data)?)?);
    }
    Ok(value::number(min))
}

fn max_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let mut max = f64::NEG_INFINITY;
    for (i, arg) in args.iter().enumerate() {
        max = max.max(operand("max", i + 1, &evaluator.evaluate(arg, data)?)?);
    }
    Ok(value::number(max))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "+",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: add_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "-",
            aliases: &[],
            arity: Arity::Range(1, Some(2)),
            eval_fn: subtract_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "*",
            aliases: &[],
            arity: Arity::Variadic,
            eval_fn: multiply_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "/",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: divide_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "%",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: modulo_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "min",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: min_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "max",
            aliases: &[],
            arity: Arity::Range(1, None),
            eval_fn: max_eval,
        }),
    ]
}
