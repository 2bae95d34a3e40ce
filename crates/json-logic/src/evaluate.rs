//! The recursive evaluation core.

use crate::ast::Node;
use crate::error::EvalError;
use crate::types::{assert_arity, OperatorMap};
use serde_json::Value;

/// Evaluates rule nodes against a data context by dispatching operation
/// nodes through an operator registry.
///
/// The registry is borrowed, never owned: populate it fully before the
/// first evaluation and it can serve any number of concurrent
/// evaluations without locking. Evaluation itself is a plain recursive
/// walk — stack depth equals rule nesting depth, and bounding it is the
/// caller's responsibility.
pub struct Evaluator<'e> {
    operators: &'e OperatorMap,
}

impl<'e> Evaluator<'e> {
    pub fn new(operators: &'e OperatorMap) -> Self {
        Evaluator { operators }
    }

    /// Produces the value of `node` against `data`.
    ///
    /// Literals evaluate to themselves; array nodes evaluate element-wise
    /// in order. Operation nodes dispatch to the registered operator with
    /// their arguments unevaluated, after an arity check.
    pub fn evaluate(&self, node: &Node, data: &Value) -> Result<Value, EvalError> {
        match node {
            Node::Literal(value) => Ok(value.clone()),
            Node::Array(children) => {
                let mut items = Vec::with_capacity(children.len());
                for child in children {
                    items.push(self.evaluate(child, data)?);
                }
                Ok(Value::Array(items))
            }
            Node::Operation { operator, args } => {
                let def = self
                    .operators
                    .get(operator)
                    .ok_or_else(|| EvalError::UnknownOperator(operator.clone()))?;
                assert_arity(def.name, &def.arity, args.len())?;
                (def.eval_fn)(self, args, data)
            }
        }
    }
}
