//! The abstract syntax tree a rule evaluates from.

use serde_json::Value;

/// One node of a parsed rule.
///
/// A rule document is exactly one `Node`. Children are owned by their
/// parent; nodes are immutable once built and may be shared across
/// concurrent evaluations by reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A constant value.
    Literal(Value),
    /// An ordered sequence of sub-rules. Evaluates every element, in
    /// order — array construction never short-circuits.
    Array(Vec<Node>),
    /// An operator application. Arguments stay unevaluated until the
    /// operator decides to evaluate them, which is what enables
    /// short-circuiting and lazy defaults.
    Operation {
        operator: String,
        args: Vec<Node>,
    },
}
