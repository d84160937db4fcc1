use serde_json::json;
use treescan::engine::{Rule, scan, scan_once};
use treescan::orbit::orbit;
use treescan::pattern::{Pattern, eqv, memory, number, refer, regex};
use treescan::value::Value;

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

fn binop_pattern(op: &str) -> Pattern {
    Pattern::object([("type", eqv(op)), ("left", number()), ("right", number())])
}

fn fold_rule(op: &str, f: fn(f64, f64) -> f64) -> Rule {
    Rule::new(binop_pattern(op), move |m| {
        let l = m.get("left").and_then(Value::as_f64).unwrap();
        let r = m.get("right").and_then(Value::as_f64).unwrap();
        Value::Number(f(l, r))
    })
}

#[test]
fn scan_folds_nested_additions_to_a_number() {
    let rules = [fold_rule("add", |l, r| l + r)];
    let source = v(json!({
        "type": "add",
        "left": {"type": "add", "left": 1, "right": 2},
        "right": {"type": "add", "left": 3, "right": 4}
    }));
    assert_eq!(scan(&rules, &source), v(json!(10)));
}

#[test]
fn scan_applies_multiple_rules_in_list_order() {
    let rules = [
        fold_rule("add", |l, r| l + r),
        fold_rule("sub", |l, r| l - r),
    ];
    let source = v(json!({
        "type": "add",
        "left": {"type": "add", "left": 1, "right": 2},
        "right": {"type": "sub", "left": 3, "right": 4}
    }));
    assert_eq!(scan(&rules, &source), v(json!(2)));
}

#[test]
fn scan_once_replaces_exactly_one_subtree() {
    let rules = [fold_rule("add", |l, r| l + r)];
    let source = v(json!({
        "type": "add",
        "left": {"type": "add", "left": 1, "right": 2},
        "right": {"type": "add", "left": 3, "right": 4}
    }));
    // members are visited in key order, so "left" folds first
    let expected = v(json!({
        "type": "add",
        "left": 3,
        "right": {"type": "add", "left": 3, "right": 4}
    }));
    assert_eq!(scan_once(&rules, &source), Some(expected));
}

#[test]
fn scan_once_reports_no_match() {
    let rules = [fold_rule("mul", |l, r| l * r)];
    let source = v(json!({"type": "add", "left": 1, "right": 2}));
    assert!(scan_once(&rules, &source).is_none());
}

#[test]
fn scan_once_can_replace_the_whole_tree() {
    let rules = [fold_rule("add", |l, r| l + r)];
    let source = v(json!({"type": "add", "left": 4, "right": 5}));
    assert_eq!(scan_once(&rules, &source), Some(v(json!(9))));
}

#[test]
fn scan_once_never_mutates_its_input() {
    let rules = [fold_rule("add", |l, r| l + r)];
    let source = v(json!({"type": "add", "left": 4, "right": 5}));
    let before = source.clone();
    let _ = scan_once(&rules, &source);
    let _ = scan(&rules, &source);
    assert_eq!(source, before);
}

#[test]
fn empty_rule_list_is_the_identity() {
    let source = v(json!({"a": [1, {"b": null}], "c": "s"}));
    assert_eq!(scan(&[], &source), source);
    assert!(scan_once(&[], &source).is_none());
}

#[test]
fn scan_stops_when_an_action_makes_no_progress() {
    // action regenerates an equal-but-new structure; without the
    // convergence guard this would loop forever
    let rules = [Rule::new(Pattern::object([("type", eqv("loop"))]), |m| {
        m.clone()
    })];
    let source = v(json!({"type": "loop", "n": 1}));
    assert_eq!(scan(&rules, &source), source);
}

#[test]
fn rewrite_rules_substitute_a_fixed_template() {
    let rules = [Rule::rewrite(eqv("a"), v(json!("b")))];
    assert_eq!(scan(&rules, &v(json!(["a", "x", "a"]))), v(json!(["b", "x", "b"])));
}

#[test]
fn memory_scope_is_one_candidate_per_scan() {
    // the capture in the first (failing) candidate must not satisfy
    // the refer in the second
    let rules = [Rule::rewrite(
        Pattern::object([("left", memory("x")), ("right", refer("x"))]),
        v(json!("same")),
    )];
    let source = v(json!([
        {"left": 1, "right": 2},
        {"left": 3, "right": 3}
    ]));
    assert_eq!(
        scan_once(&rules, &source),
        Some(v(json!([{"left": 1, "right": 2}, "same"])))
    );
}

#[test]
fn scan_replaces_deep_matches_before_moving_on() {
    let rules = [fold_rule("add", |l, r| l + r)];
    let source = v(json!({
        "outer": [{"type": "add", "left": 1, "right": 1}],
        "plain": true
    }));
    assert_eq!(
        scan(&rules, &source),
        v(json!({"outer": [2], "plain": true}))
    );
}

#[test]
fn orbit_records_every_intermediate_tree() {
    let rules = [fold_rule("add", |l, r| l + r)];
    let seed = v(json!({
        "type": "add",
        "left": {"type": "add", "left": 1, "right": 2},
        "right": {"type": "add", "left": 3, "right": 4}
    }));
    let seq = orbit(&rules, seed.clone(), 100);
    assert_eq!(seq.len(), 4);
    assert_eq!(seq[0], seed);
    assert_eq!(seq[3], v(json!(10)));
}

#[test]
fn orbit_honors_its_step_bound() {
    let rules = [fold_rule("add", |l, r| l + r)];
    let seed = v(json!({
        "type": "add",
        "left": {"type": "add", "left": 1, "right": 2},
        "right": {"type": "add", "left": 3, "right": 4}
    }));
    let seq = orbit(&rules, seed, 1);
    assert_eq!(seq.len(), 2);
}

#[test]
fn scan_uppercases_until_no_lowercase_strings_remain() {
    let lowercase = regex::Regex::new("^[a-z]+$").unwrap();
    let rules = [Rule::new(regex(lowercase), |m| {
        Value::String(m.as_str().unwrap().to_uppercase())
    })];
    let source = v(json!({"words": ["ab", "cd"], "n": 7}));
    assert_eq!(
        scan(&rules, &source),
        v(json!({"words": ["AB", "CD"], "n": 7}))
    );
}

#[test]
fn convergence_is_idempotent() {
    let rules = [
        fold_rule("add", |l, r| l + r),
        fold_rule("sub", |l, r| l - r),
    ];
    let source = v(json!({
        "type": "sub",
        "left": {"type": "add", "left": 10, "right": 5},
        "right": 3
    }));
    let once = scan(&rules, &source);
    assert_eq!(scan(&rules, &once), once);
}
