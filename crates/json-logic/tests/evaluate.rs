//! Integration tests for the built-in operators, end to end through
//! `JsonLogic::apply`.

use json_logic::{Arity, EvalError, Evaluator, JsonLogic, Node, OperatorDefinition};
use serde_json::{json, Value};
use std::sync::Arc;

fn apply(rule: &Value, data: &Value) -> Value {
    JsonLogic::new()
        .apply(&rule.to_string(), data)
        .unwrap_or_else(|e| panic!("apply({}) failed: {}", rule, e))
}

fn check(rule: Value, expected: Value, data: Value) {
    let result = apply(&rule, &data);
    assert_eq!(result, expected, "rule: {} data: {}", rule, data);
}

fn check_err(rule: Value, data: Value) -> String {
    JsonLogic::new()
        .apply(&rule.to_string(), &data)
        .err()
        .unwrap_or_else(|| panic!("expected error for {}", rule))
        .to_string()
}

// ------------------------------------------------------------- Literals

#[test]
fn test_literal_rules() {
    check(json!("hello"), json!("hello"), json!(null));
    check(json!(true), json!(true), json!(null));
    check(json!(null), json!(null), json!(null));
    // Numeric literals normalize to doubles on ingestion.
    check(json!(17), json!(17.0), json!(null));
}

#[test]
fn test_array_rule_evaluates_elementwise() {
    check(
        json!([1, {"+": [1, 1]}, "x"]),
        json!([1.0, 2.0, "x"]),
        json!(null),
    );
}

#[test]
fn test_multi_key_object_is_data() {
    check(
        json!({"a": 1, "b": 2}),
        json!({"a": 1.0, "b": 2.0}),
        json!(null),
    );
}

// ----------------------------------------------------------- Arithmetic

#[test]
fn test_add() {
    check(json!({"+": [1, 2]}), json!(3.0), json!(null));
    check(json!({"+": [1, 2, 3, 4]}), json!(10.0), json!(null));
    check(json!({"+": ["1", "10.5"]}), json!(11.5), json!(null));
    check(json!({"+": [true, 1]}), json!(2.0), json!(null));
}

#[test]
fn test_add_unary_cast() {
    check(json!({"+": ["3.14"]}), json!(3.14), json!(null));
}

#[test]
fn test_subtract() {
    check(json!({"-": [5, 2]}), json!(3.0), json!(null));
    check(json!({"-": [2]}), json!(-2.0), json!(null));
}

#[test]
fn test_multiply() {
    check(json!({"*": [3, 2]}), json!(6.0), json!(null));
    check(json!({"*": [2, 3, 4]}), json!(24.0), json!(null));
}

#[test]
fn test_divide() {
    check(json!({"/": [10, 4]}), json!(2.5), json!(null));
    // Non-finite results have no JSON representation.
    check(json!({"/": [1, 0]}), json!(null), json!(null));
}

#[test]
fn test_modulo() {
    check(json!({"%": [101, 2]}), json!(1.0), json!(null));
    check(json!({"%": [7, 3]}), json!(1.0), json!(null));
}

#[test]
fn test_min_max() {
    check(json!({"min": [3, 1, 2]}), json!(1.0), json!(null));
    check(json!({"max": [3, 1, 2]}), json!(3.0), json!(null));
}

#[test]
fn test_arithmetic_type_errors() {
    let err = check_err(json!({"+": [1, "abc"]}), json!(null));
    assert!(err.contains("argument 2 must be a numeric value"), "got: {}", err);
    let err = check_err(json!({"*": [[1], 2]}), json!(null));
    assert!(err.contains("argument 1 must be a numeric value"), "got: {}", err);
}

#[test]
fn test_arithmetic_arity_errors() {
    let err = check_err(json!({"/": [1]}), json!(null));
    assert!(err.contains("exactly 2"), "got: {}", err);
    let err = check_err(json!({"*": [1]}), json!(null));
    assert!(err.contains("at least 2"), "got: {}", err);
}

// ------------------------------------------------------------- Equality

#[test]
fn test_loose_equals() {
    check(json!({"==": [1, 1]}), json!(true), json!(null));
    check(json!({"==": [1, "1"]}), json!(true), json!(null));
    check(json!({"==": [1, 1.0]}), json!(true), json!(null));
    check(json!({"==": [true, 1]}), json!(true), json!(null));
    check(json!({"==": [null, null]}), json!(true), json!(null));
    check(json!({"==": [null, 0]}), json!(false), json!(null));
    check(json!({"==": ["abc", 1]}), json!(false), json!(null));
    check(json!({"==": [[1], [1.0]]}), json!(true), json!(null));
}

#[test]
fn test_loose_not_equals() {
    check(json!({"!=": [1, 2]}), json!(true), json!(null));
    check(json!({"!=": [1, "1"]}), json!(false), json!(null));
}

#[test]
fn test_strict_equals() {
    check(json!({"===": [1, 1.0]}), json!(true), json!(null));
    check(json!({"===": [1, "1"]}), json!(false), json!(null));
    check(json!({"===": [[1], [1]]}), json!(true), json!(null));
}

#[test]
fn test_strict_not_equals() {
    // Same value, same type after numeric normalization.
    check(json!({"!==": [1, 1.0]}), json!(false), json!(null));
    // Same value, different type.
    check(json!({"!==": [1, "1"]}), json!(true), json!(null));
}

// ------------------------------------------------------------- Ordering

#[test]
fn test_ordering() {
    check(json!({">": [2, 1]}), json!(true), json!(null));
    check(json!({">": [1, 2]}), json!(false), json!(null));
    check(json!({"<": [1, 2]}), json!(true), json!(null));
    check(json!({">=": [2, 2]}), json!(true), json!(null));
    check(json!({"<=": [1, 2]}), json!(true), json!(null));
}

#[test]
fn test_ordering_coerces_numeric_strings() {
    check(json!({"<": ["2", "10"]}), json!(true), json!(null));
    check(json!({">": ["10", 2]}), json!(true), json!(null));
}

#[test]
fn test_ordering_chained() {
    check(json!({"<": [1, 2, 3]}), json!(true), json!(null));
    check(json!({"<": [1, 1, 3]}), json!(false), json!(null));
    check(json!({"<": [1, 4, 3]}), json!(false), json!(null));
    check(json!({"<=": [1, 1, 3]}), json!(true), json!(null));
    check(json!({">": [3, 2, 1]}), json!(true), json!(null));
    check(json!({">=": [3, 3, 1]}), json!(true), json!(null));
}

#[test]
fn test_ordering_comparison_errors() {
    let err = check_err(json!({"<": [1, "abc"]}), json!(null));
    assert!(err.contains("cannot compare"), "got: {}", err);
    let err = check_err(json!({"<": [[], 1]}), json!(null));
    assert!(err.contains("cannot compare array with number"), "got: {}", err);
}

// ---------------------------------------------------------------- Logic

#[test]
fn test_and_returns_first_falsy_or_last() {
    check(json!({"and": [true, true]}), json!(true), json!(null));
    check(json!({"and": [true, ""]}), json!(""), json!(null));
    check(json!({"and": [1, 2]}), json!(2.0), json!(null));
}

#[test]
fn test_or_returns_first_truthy_or_last() {
    check(json!({"or": [false, "a"]}), json!("a"), json!(null));
    check(json!({"or": [1, 2]}), json!(1.0), json!(null));
    check(json!({"or": [false, 0]}), json!(0.0), json!(null));
}

#[test]
fn test_logic_short_circuits() {
    // The second operand would fail if it were ever evaluated.
    check(json!({"or": [true, {"bogus": [1]}]}), json!(true), json!(null));
    check(json!({"and": [false, {"bogus": [1]}]}), json!(false), json!(null));
}

#[test]
fn test_not() {
    check(json!({"!": [true]}), json!(false), json!(null));
    check(json!({"!": ""}), json!(true), json!(null));
    check(json!({"!": [0]}), json!(true), json!(null));
}

#[test]
fn test_double_not() {
    // The empty array is falsy, the empty object and "0" are truthy.
    check(json!({"!!": [[]]}), json!(false), json!(null));
    check(json!({"!!": [{}]}), json!(true), json!(null));
    check(json!({"!!": ["0"]}), json!(true), json!(null));
}

#[test]
fn test_if() {
    check(json!({"if": [true, "yes", "no"]}), json!("yes"), json!(null));
    check(json!({"if": [false, "yes", "no"]}), json!("no"), json!(null));
    check(json!({"if": [false, 1]}), json!(null), json!(null));
    check(json!({"if": []}), json!(null), json!(null));
    check(json!({"?:": [true, 1, 2]}), json!(1.0), json!(null));
}

#[test]
fn test_if_elif_chain() {
    check(json!({"if": [false, 1, true, 2, 3]}), json!(2.0), json!(null));
    check(json!({"if": [false, 1, false, 2, 3]}), json!(3.0), json!(null));
}

#[test]
fn test_if_is_lazy() {
    check(json!({"if": [true, 1, {"bogus": []}]}), json!(1.0), json!(null));
}

// ------------------------------------------------------ Array iteration

#[test]
fn test_any_empty_array() {
    check(
        json!({"any": [[], {">": [{"var": ""}, 0]}]}),
        json!(false),
        json!(null),
    );
}

#[test]
fn test_any() {
    check(
        json!({"any": [[1, 2, 3], {">": [{"var": ""}, 0]}]}),
        json!(true),
        json!(null),
    );
    check(
        json!({"any": [[1, 2, 3], {">": [{"var": ""}, 1]}]}),
        json!(true),
        json!(null),
    );
    check(
        json!({"any": [[1, 2, 3], {"<": [{"var": ""}, 1]}]}),
        json!(false),
        json!(null),
    );
}

#[test]
fn test_some_is_an_alias_for_any() {
    check(
        json!({"some": [[1, 2, 3], {">": [{"var": ""}, 2]}]}),
        json!(true),
        json!(null),
    );
}

#[test]
fn test_all() {
    // Vacuously true on the empty sequence.
    check(json!({"all": [[], {"<": [{"var": ""}, 0]}]}), json!(true), json!(null));
    check(
        json!({"all": [[1, 2, 3], {">": [{"var": ""}, 0]}]}),
        json!(true),
        json!(null),
    );
    check(
        json!({"all": [[1, 2, 3], {">": [{"var": ""}, 2]}]}),
        json!(false),
        json!(null),
    );
}

#[test]
fn test_none() {
    check(json!({"none": [[], {">": [{"var": ""}, 0]}]}), json!(true), json!(null));
    check(
        json!({"none": [[1, 2, 3], {"<": [{"var": ""}, 1]}]}),
        json!(true),
        json!(null),
    );
    check(
        json!({"none": [[1, 2, 3], {">": [{"var": ""}, 2]}]}),
        json!(false),
        json!(null),
    );
}

#[test]
fn test_iteration_argument_errors() {
    let err = check_err(json!({"any": [5, true]}), json!(null));
    assert!(err.contains("argument 1 must be an array"), "got: {}", err);
    let err = check_err(json!({"any": [[1]]}), json!(null));
    assert!(err.contains("exactly 2"), "got: {}", err);
}

#[test]
fn test_map() {
    check(
        json!({"map": [[1, 2, 3], {"*": [{"var": ""}, 2]}]}),
        json!([2.0, 4.0, 6.0]),
        json!(null),
    );
    check(
        json!({"map": [{"var": "ints"}, {"+": [{"var": ""}, 1]}]}),
        json!([2.0, 3.0]),
        json!({"ints": [1, 2]}),
    );
}

#[test]
fn test_filter() {
    check(
        json!({"filter": [[1, 2, 3, 4], {"%": [{"var": ""}, 2]}]}),
        json!([1.0, 3.0]),
        json!(null),
    );
}

#[test]
fn test_reduce() {
    check(
        json!({"reduce": [
            [1, 2, 3, 4],
            {"+": [{"var": "current"}, {"var": "accumulator"}]},
            0
        ]}),
        json!(10.0),
        json!(null),
    );
}

#[test]
fn test_merge() {
    check(
        json!({"merge": [[1, 2], [3, 4]]}),
        json!([1.0, 2.0, 3.0, 4.0]),
        json!(null),
    );
    // Non-array arguments are kept as single elements.
    check(json!({"merge": [1, 2, [3]]}), json!([1.0, 2.0, 3.0]), json!(null));
    check(json!({"merge": []}), json!([]), json!(null));
}

#[test]
fn test_in_array() {
    check(json!({"in": [1, [1, 2, 3]]}), json!(true), json!(null));
    check(json!({"in": [4, [1, 2, 3]]}), json!(false), json!(null));
    // Membership is strict.
    check(json!({"in": ["1", [1, 2, 3]]}), json!(false), json!(null));
}

#[test]
fn test_in_string() {
    check(json!({"in": ["Spring", "Springfield"]}), json!(true), json!(null));
    check(json!({"in": ["i", "team"]}), json!(false), json!(null));
}

#[test]
fn test_in_rejects_scalar_haystack() {
    let err = check_err(json!({"in": [1, 5]}), json!(null));
    assert!(err.contains("argument 2 must be an array or a string"), "got: {}", err);
}

// --------------------------------------------------------------- String

#[test]
fn test_cat() {
    check(json!({"cat": ["I love", " pie"]}), json!("I love pie"), json!(null));
    check(
        json!({"cat": ["Magic number: ", 42]}),
        json!("Magic number: 42"),
        json!(null),
    );
    check(json!({"cat": []}), json!(""), json!(null));
}

#[test]
fn test_substr() {
    check(json!({"substr": ["jsonlogic", 4]}), json!("logic"), json!(null));
    check(json!({"substr": ["jsonlogic", -5]}), json!("logic"), json!(null));
    check(json!({"substr": ["jsonlogic", 1, 3]}), json!("son"), json!(null));
    check(json!({"substr": ["jsonlogic", 4, -2]}), json!("log"), json!(null));
    check(json!({"substr": ["jsonlogic", 20]}), json!(""), json!(null));
}

// ----------------------------------------------------------------- Misc

#[test]
fn test_log_returns_its_operand() {
    check(json!({"log": ["apple"]}), json!("apple"), json!(null));
}

#[test]
fn test_unknown_operator() {
    let err = check_err(json!({"fubar": [1]}), json!(null));
    assert!(err.contains("unknown operator"), "got: {}", err);
}

#[test]
fn test_invalid_rule_text() {
    let err = JsonLogic::new()
        .apply("{not json", &json!(null))
        .err()
        .expect("expected a parse error")
        .to_string();
    assert!(err.contains("invalid rule"), "got: {}", err);
}

// --------------------------------------------------------------- Engine

fn twice_eval(
    evaluator: &Evaluator<'_>,
    args: &[Node],
    data: &Value,
) -> Result<Value, EvalError> {
    let val = evaluator.evaluate(&args[0], data)?;
    let n = val.as_f64().unwrap_or(0.0);
    Ok(json!(n * 2.0))
}

#[test]
fn test_custom_operator_registration() {
    let mut engine = JsonLogic::new();
    engine.add_operator(Arc::new(OperatorDefinition {
        name: "twice",
        aliases: &[],
        arity: Arity::Fixed(1),
        eval_fn: twice_eval,
    }));
    let result = engine.apply(r#"{"twice": [21]}"#, &json!(null)).unwrap();
    assert_eq!(result, json!(42.0));
}

#[test]
fn test_concurrent_evaluations_share_one_engine() {
    let engine = JsonLogic::new();
    let rule = json_logic::parse(&json!({"+": [{"var": "n"}, 1]}));
    std::thread::scope(|scope| {
        for n in 0..4i64 {
            let engine = &engine;
            let rule = &rule;
            scope.spawn(move || {
                let result = engine.apply_parsed(rule, &json!({"n": n})).unwrap();
                assert_eq!(result, json!((n + 1) as f64));
            });
        }
    });
}
