//! Ordering operators: `<`, `<=`, `>`, `>=`.
//!
//! Each accepts a chained three-argument form checking
//! `a OP b && b OP c`. Operands coerce toward numbers; a non-coercible
//! operand fails the evaluation with a comparison error.

use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

fn compare_pair(operator: &'static str, a: &Value, b: &Value) -> Result<Ordering, EvalError> {
    value::compare(a, b).ok_or(EvalError::Comparison {
        operator,
        left: value::type_name(a),
        right: value::type_name(b),
    })
}

fn ordered_eval(
    operator: &'static str,
    accept: fn(Ordering) -> bool,
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let a = evaluator.evaluate(&args[0], data)?;
    let b = evaluator.evaluate(&args[1], data)?;
    if !accept(compare_pair(operator, &a, &b)?) {
        return Ok(Value::Bool(false));
    }
    // Chained form: the third operand is only evaluated when the first
    // comparison held.
    if let Some(third) = args.get(2) {
        let c = evaluator.evaluate(third, data)?;
        return Ok(Value::Bool(accept(compare_pair(operator, &b, &c)?)));
    }
    Ok(Value::Bool(true))
}

fn lt_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    ordered_eval("<", |o| o == Ordering::Less, evaluator, args, data)
}

fn le_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    ordered_eval("<=", |o| o != Ordering::Greater, evaluator, args, data)
}

fn gt_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    ordered_eval(">", |o| o == Ordering::Greater, evaluator, args, data)
}

fn ge_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    ordered_eval(">=", |o| o != Ordering::Less, evaluator, args, data)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "<",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: lt_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "<=",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: le_eval,
        }),
        Arc::new(OperatorDefinition {
            name: ">",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: gt_eval,
        }),
        Arc::new(OperatorDefinition {
            name: ">=",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: ge_eval,
        }),
    ]
}
