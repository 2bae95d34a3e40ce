//! String operators: `cat` and `substr`.

use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value;
use serde_json::Value;
use std::sync::Arc;

fn cat_eval(evaluator: &Evaluator<'_>, args: &[Node], data: &Value) -> Result<Value, EvalError> {
    let mut result = String::new();
    for arg in args {
        let val = evaluator.evaluate(arg, data)?;
        result.push_str(&value::coerce_string(&val));
    }
    Ok(Value::String(result))
}

fn index(operator: &'static str, position: usize, val: &Value) -> Result<i64, EvalError> {
    value::coerce_number(val)
        .map(|f| f as i64)
        .ok_or(EvalError::ArgumentType {
            operator,
            position,
            expected: "a numeric index",
        })
}

/// `substr(source, start)` or `substr(source, start, length)`.
///
/// A negative start counts back from the end of the string; a negative
/// length stops that many characters short of the end. Offsets are in
/// characters, not bytes.
fn substr_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let source = value::coerce_string(&evaluator.evaluate(&args[0], data)?);
    let from = index("substr", 2, &evaluator.evaluate(&args[1], data)?)?;
    let length = match args.get(2) {
        Some(arg) => Some(index("substr", 3, &evaluator.evaluate(arg, data)?)?),
        None => None,
    };

    let chars: Vec<char> = source.chars().collect();
    let len = chars.len() as i64;
    let start = if from < 0 {
        (len + from).max(0)
    } else {
        from.min(len)
    };
    let end = match length {
        None => len,
        Some(l) if l < 0 => (len + l).max(start),
        Some(l) => (start + l).min(len),
    };
    let end = end.max(start);

    let result: String = chars[start as usize..end as usize].iter().collect();
    Ok(Value::String(result))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "cat",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: cat_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "substr",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: substr_eval,
        }),
    ]
}
