use thiserror::Error;

/// Evaluation-time failures.
///
/// Every variant aborts the evaluation that raised it; there is no
/// per-branch recovery and no retry. A `var` path that resolves to
/// nothing is not an error — it yields `null` or the supplied default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator received the wrong number of operands.
    #[error("\"{operator}\" operator expects {expected} operands, got {actual}")]
    Arity {
        operator: &'static str,
        expected: String,
        actual: usize,
    },

    /// A shape-constrained operand did not have the required shape.
    /// `position` is 1-based.
    #[error("\"{operator}\" operator: argument {position} must be {expected}")]
    ArgumentType {
        operator: &'static str,
        position: usize,
        expected: &'static str,
    },

    /// An operation node named an operator that is not in the registry.
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    /// An ordering was requested between operands that cannot be coerced
    /// to a common numeric form.
    #[error("\"{operator}\" operator: cannot compare {left} with {right}")]
    Comparison {
        operator: &'static str,
        left: &'static str,
        right: &'static str,
    },
}

/// Top-level error for the [`JsonLogic`](crate::JsonLogic) facade.
#[derive(Error, Debug)]
pub enum Error {
    /// The rule text was not valid JSON.
    #[error("invalid rule: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
