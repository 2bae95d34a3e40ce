//! Built-in operator definitions, one module per family.

pub mod access;
pub mod arithmetic;
pub mod array;
pub mod equality;
pub mod logic;
pub mod misc;
pub mod ordering;
pub mod string;

use crate::types::{operators_to_map, OperatorDefinition, OperatorMap};
use std::sync::Arc;

/// All built-in operators.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(access::operators());
    ops.extend(logic::operators());
    ops.extend(equality::operators());
    ops.extend(ordering::operators());
    ops.extend(arithmetic::operators());
    ops.extend(array::operators());
    ops.extend(string::operators());
    ops.extend(misc::operators());
    ops
}

/// Builds the registry of built-in operators.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}
