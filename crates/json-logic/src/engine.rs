//! The host-facing entry point.

use crate::ast::Node;
use crate::error::{Error, EvalError};
use crate::evaluate::Evaluator;
use crate::operators::operators_map;
use crate::parser;
use crate::types::{OperatorDefinition, OperatorMap};
use serde_json::Value;
use std::sync::Arc;

/// A rule engine holding an operator registry.
///
/// The registry is explicit configuration rather than process-wide
/// state: build it — built-ins plus any extensions — before the first
/// evaluation, then share the engine freely across threads. Evaluation
/// never mutates it, and independent engines may carry different
/// registries.
///
/// ```
/// use json_logic::JsonLogic;
/// use serde_json::json;
///
/// let engine = JsonLogic::new();
/// let data = json!({"temp": 55});
/// let result = engine.apply(r#"{"<": [{"var": "temp"}, 60]}"#, &data).unwrap();
///
/// assert_eq!(result, json!(true));
/// ```
pub struct JsonLogic {
    operators: OperatorMap,
}

impl JsonLogic {
    /// An engine with every built-in operator registered.
    pub fn new() -> Self {
        JsonLogic {
            operators: operators_map(),
        }
    }

    /// Registers an additional operator, or replaces a built-in of the
    /// same name — registration is idempotent by name and the last one
    /// wins. Finish registering before the first evaluation.
    pub fn add_operator(&mut self, op: Arc<OperatorDefinition>) {
        self.operators.insert(op.name.to_string(), Arc::clone(&op));
        for alias in op.aliases {
            self.operators.insert(alias.to_string(), Arc::clone(&op));
        }
    }

    /// Read access to the registry, e.g. to drive an [`Evaluator`]
    /// directly over pre-built rule trees.
    pub fn operators(&self) -> &OperatorMap {
        &self.operators
    }

    /// Parses a JSON rule text, builds its AST and evaluates it against
    /// `data`.
    pub fn apply(&self, rule: &str, data: &Value) -> Result<Value, Error> {
        let rule: Value = serde_json::from_str(rule)?;
        let node = parser::parse(&rule);
        Ok(self.apply_parsed(&node, data)?)
    }

    /// Evaluates an already-built rule tree against `data`.
    pub fn apply_parsed(&self, node: &Node, data: &Value) -> Result<Value, EvalError> {
        Evaluator::new(&self.operators).evaluate(node, data)
    }
}

impl Default for JsonLogic {
    fn default() -> Self {
        Self::new()
    }
}
