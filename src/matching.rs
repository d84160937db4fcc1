use std::collections::HashMap;

use crate::pattern::{Pattern, Predicate};
use crate::value::Value;

/// Match-scoped memory: capture name → deep-copied value.
///
/// A store lives for exactly one top-level [`match_pattern`] call
/// against one candidate. The scanner hands every candidate a fresh
/// store, so a capture is only visible to sibling and descendant
/// predicates within the same pattern, never across candidates or
/// across scan steps.
pub type Memory = HashMap<String, Value>;

/// Try to match `pattern` against `candidate`, threading `memory`
/// through every predicate invocation.
///
/// `candidate` is `None` when the position the pattern names is absent
/// on the subject - a missing object key, an out-of-range index, or a
/// member access on a scalar. Absence is not an error; it simply fails
/// every leaf except the ones defined to tolerate it.
///
/// Rules:
///   - `Literal` leaf: strict scalar equality against the candidate.
///   - `Pred` leaf: invoke the predicate with `(candidate, memory)`.
///   - `Object` pattern: every key the pattern names must match the
///     candidate's same-named member. Keys the candidate has but the
///     pattern does not name are ignored.
///   - `Array` pattern: every index the pattern names must match the
///     candidate's same-indexed element; the candidate may be longer.
///
/// Matching short-circuits on the first failing key, in the pattern's
/// own (deterministic) member order.
pub fn match_pattern(pattern: &Pattern, candidate: Option<&Value>, memory: &mut Memory) -> bool {
    match pattern {
        Pattern::Literal(lit) => candidate.is_some_and(|c| strict_eq(lit, c)),

        Pattern::Pred(pred) => test_predicate(pred, candidate, memory),

        Pattern::Object(entries) => {
            for (key, sub) in entries {
                let member = candidate.and_then(|c| c.get(key));
                if !match_pattern(sub, member, memory) {
                    return false;
                }
            }
            true
        }

        Pattern::Array(items) => {
            for (i, sub) in items.iter().enumerate() {
                let element = candidate.and_then(|c| c.index(i));
                if !match_pattern(sub, element, memory) {
                    return false;
                }
            }
            true
        }
    }
}

/// Strict equality: scalars by value, structures never (identity does
/// not survive the deep copy the drivers take).
fn strict_eq(a: &Value, b: &Value) -> bool {
    match a {
        Value::Array(_) | Value::Object(_) => false,
        _ => a == b,
    }
}

fn test_predicate(pred: &Predicate, candidate: Option<&Value>, memory: &mut Memory) -> bool {
    match pred {
        Predicate::Eqv(v) => candidate.is_some_and(|c| strict_eq(v, c)),

        Predicate::Equal(v) => candidate.is_some_and(|c| c == v),

        Predicate::Any => candidate.is_some_and(|c| !matches!(c, Value::Null)),

        Predicate::IsNumber => matches!(candidate, Some(Value::Number(_))),
        Predicate::IsString => matches!(candidate, Some(Value::String(_))),
        Predicate::IsObject => matches!(candidate, Some(Value::Object(_))),
        Predicate::IsArray => matches!(candidate, Some(Value::Array(_))),

        Predicate::Matches(re) => {
            matches!(candidate, Some(Value::String(s)) if re.is_match(s))
        }

        Predicate::Range(lo, hi) => {
            matches!(candidate, Some(Value::Number(n)) if *lo <= *n && *n <= *hi)
        }

        // Element tests share the enclosing match's memory store.
        Predicate::All(sub) => match candidate {
            Some(Value::Array(items)) => items
                .iter()
                .all(|item| match_pattern(sub, Some(item), memory)),
            _ => false,
        },

        Predicate::Exists(sub) => match candidate {
            Some(Value::Array(items)) => items
                .iter()
                .any(|item| match_pattern(sub, Some(item), memory)),
            _ => false,
        },

        // Capture always succeeds; an absent candidate records nothing,
        // so a later `refer` to the name fails the match.
        Predicate::Capture(name) => {
            if let Some(c) = candidate {
                memory.insert(name.clone(), c.clone());
            }
            true
        }

        Predicate::Refer(name) => match (candidate, memory.get(name)) {
            (Some(c), Some(stored)) => c == stored,
            _ => false,
        },
    }
}
