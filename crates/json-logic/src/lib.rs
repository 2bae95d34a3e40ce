//! JsonLogic rule evaluator.
//!
//! # Overview
//!
//! Rules are data, not code: a JSON document of the form
//! `{"operator": [arguments]}`, evaluated against a runtime data
//! context and producing a single value. The same rule document is
//! interpreted identically wherever this engine runs.
//!
//! # Example
//!
//! ```
//! use json_logic::JsonLogic;
//! use serde_json::json;
//!
//! let engine = JsonLogic::new();
//! let data = json!({"temp": 55, "pie": {"filling": "apple"}});
//! let rule = r#"{"and": [
//!     {"<": [{"var": "temp"}, 110]},
//!     {"==": [{"var": "pie.filling"}, "apple"]}
//! ]}"#;
//!
//! assert_eq!(engine.apply(rule, &data).unwrap(), json!(true));
//! ```

pub mod array_like;
pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod operators;
pub mod parser;
pub mod types;
pub mod value;

// Re-export the core public API
pub use array_like::ArrayLike;
pub use ast::Node;
pub use engine::JsonLogic;
pub use error::{Error, EvalError};
pub use evaluate::Evaluator;
pub use operators::operators_map;
pub use parser::parse;
pub use types::{Arity, EvalFn, OperatorDefinition, OperatorMap};
pub use value::{loose_equals, strict_equals, truthy};
