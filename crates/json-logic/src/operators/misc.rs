//! `log`: surfaces a value through the `log` facade and returns it
//! unchanged. Installing a logger is the host's responsibility.

use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::sync::Arc;

fn log_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let val = evaluator.evaluate(&args[0], data)?;
    log::info!(target: "json_logic", "{}", value::coerce_string(&val));
    Ok(val)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "log",
        aliases: &[],
        arity: Arity::Fixed(1),
        eval_fn: log_eval,
    })]
}
