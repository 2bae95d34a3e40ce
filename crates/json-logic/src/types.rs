use crate::ast::Node;
use crate::error::EvalError;
use crate::evaluate::Evaluator;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Operator arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    /// Skip the arity check.
    Any,
    /// Exactly `n` operands.
    Fixed(usize),
    /// At least two operands.
    Variadic,
    /// Between `min` and `max` operands; `None` for no upper bound.
    Range(usize, Option<usize>),
}

/// The type of an operator evaluation function.
///
/// `args` are the unevaluated argument nodes. The operator decides which
/// of them to evaluate, and in what order — this is what makes
/// `and`/`or`/`if` short-circuiting and `var`'s lazy default possible.
pub type EvalFn = fn(&Evaluator<'_>, &[Node], &Value) -> Result<Value, EvalError>;

/// A named, stateless unit of evaluation logic.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub eval_fn: EvalFn,
}

/// Map of operator name/alias to definition. Lookup is case-sensitive
/// and exact-match.
pub type OperatorMap = HashMap<String, Arc<OperatorDefinition>>;

/// Asserts that an operation has an acceptable number of arguments.
pub fn assert_arity(
    operator: &'static str,
    arity: &Arity,
    given: usize,
) -> Result<(), EvalError> {
    let expected = match arity {
        Arity::Any => return Ok(()),
        Arity::Fixed(n) => {
            if given == *n {
                return Ok(());
            }
            format!("exactly {}", n)
        }
        Arity::Variadic => {
            if given >= 2 {
                return Ok(());
            }
            "at least 2".to_string()
        }
        Arity::Range(min, max) => {
            if given >= *min && max.map(|m| given <= m).unwrap_or(true) {
                return Ok(());
            }
            match max {
                Some(m) => format!("between {} and {}", min, m),
                None => format!("at least {}", min),
            }
        }
    };
    Err(EvalError::Arity {
        operator,
        expected,
        actual: given,
    })
}

/// Builds an `OperatorMap` from a list of operator definitions,
/// registering each name and then its aliases; the last registration
/// for a name wins.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> OperatorMap {
    let mut map = HashMap::new();
    for op in operators {
        map.insert(op.name.to_string(), Arc::clone(&op));
        for alias in op.aliases {
            map.insert(alias.to_string(), Arc::clone(&op));
        }
    }
    map
}
