//! Rewrite rules and the drivers that apply them.
//!
//! `scan_once` performs a single replacement: the first rule, in list
//! order, whose pattern matches anywhere in the tree has its action
//! applied to the first matching subtree (depth-first). `scan` repeats
//! that to a fixpoint.

use std::collections::BTreeMap;

use tracing::debug;

use crate::matching::{Memory, match_pattern};
use crate::pattern::Pattern;
use crate::value::Value;

/// Computes a replacement from the matched subtree. Actions are
/// expected to be pure; the drivers hand them a freshly copied tree,
/// so even a misbehaving action cannot reach the caller's input.
pub type Action = Box<dyn Fn(&Value) -> Value>;

/// One rewrite rule: a pattern and the action that replaces whatever
/// the pattern matched. Rules carry no priority beyond their position
/// in the rule list.
pub struct Rule {
    pub pattern: Pattern,
    pub action: Action,
}

impl Rule {
    pub fn new(pattern: Pattern, action: impl Fn(&Value) -> Value + 'static) -> Rule {
        Rule {
            pattern,
            action: Box::new(action),
        }
    }

    /// Rule whose action ignores the matched subtree and substitutes a
    /// fixed template.
    pub fn rewrite(pattern: Pattern, template: Value) -> Rule {
        Rule::new(pattern, move |_| template.clone())
    }
}

/// Key under which the subject tree is wrapped so that a match of the
/// whole tree is representable the same way as a match of any interior
/// member.
const ROOT_KEY: &str = "root";

/// Depth-first scan for the first member whose value matches
/// `pattern`; on a hit, overwrite that member with the action's result
/// and stop.
///
/// Each candidate gets a fresh memory store, so captures never leak
/// between candidates. Note the node's own top-level value is never
/// tested, only its members - the drivers wrap the subject for exactly
/// that reason.
fn scan_pattern(pattern: &Pattern, node: &mut Value, action: &Action) -> bool {
    match node {
        Value::Object(entries) => scan_members(pattern, entries.values_mut(), action),
        Value::Array(items) => scan_members(pattern, items.iter_mut(), action),
        _ => false,
    }
}

fn scan_members<'a>(
    pattern: &Pattern,
    members: impl Iterator<Item = &'a mut Value>,
    action: &Action,
) -> bool {
    for member in members {
        let mut memory = Memory::new();
        if match_pattern(pattern, Some(member), &mut memory) {
            *member = action(member);
            return true;
        }
        if member.is_structure() && scan_pattern(pattern, member, action) {
            return true;
        }
    }
    false
}

/// Apply at most one rewrite: try each rule's pattern in list order
/// against a copy of `source`; the first rule to match anywhere has
/// its action applied at the match site.
///
/// Returns the rewritten tree, or `None` if no rule matched anywhere.
/// `source` is never mutated.
pub fn scan_once(rules: &[Rule], source: &Value) -> Option<Value> {
    let mut wrapped = Value::Object(BTreeMap::from([(ROOT_KEY.to_string(), source.clone())]));
    for (index, rule) in rules.iter().enumerate() {
        if scan_pattern(&rule.pattern, &mut wrapped, &rule.action) {
            debug!(rule = index, "pattern matched, subtree replaced");
            return match wrapped {
                Value::Object(mut entries) => entries.remove(ROOT_KEY),
                _ => None,
            };
        }
    }
    None
}

/// Rewrite to a fixpoint: keep feeding `scan_once`'s output back in
/// until no rule matches anywhere, or until an iteration produces a
/// tree structurally equal to its input (the no-progress guard against
/// actions that regenerate an equivalent structure forever).
///
/// Returns the final tree; a copy of `source` when no rule ever
/// matched.
pub fn scan(rules: &[Rule], source: &Value) -> Value {
    let mut current = source.clone();
    loop {
        match scan_once(rules, &current) {
            Some(next) => {
                if next == current {
                    debug!("rewrite made no structural progress, stopping");
                    return next;
                }
                current = next;
            }
            None => return current,
        }
    }
}
