use tracing::debug;

use crate::engine::{Rule, scan_once};
use crate::value::Value;

/// Compute the rewrite orbit of a seed tree under a rule list.
///
/// Behavior:
///   - At each step, apply at most one rewrite via [`scan_once`].
///   - Stop when no rule matches, when a step makes no structural
///     progress, or when `max_steps` rewrites have been recorded.
///
/// The returned Vec includes the seed as the first element, so its
/// length is at most `max_steps + 1`. This is also the bounded
/// alternative to [`crate::engine::scan`] for rule sets that are not
/// trusted to terminate.
pub fn orbit(rules: &[Rule], seed: Value, max_steps: usize) -> Vec<Value> {
    let mut seq = Vec::new();
    let mut current = seed;

    // Always include the starting point.
    seq.push(current.clone());

    for step in 0..max_steps {
        match scan_once(rules, &current) {
            Some(next) => {
                if next == current {
                    debug!(step, "orbit closed without structural progress");
                    break;
                }
                current = next;
                seq.push(current.clone());
            }
            None => break,
        }
    }

    seq
}
