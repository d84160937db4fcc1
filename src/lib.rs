//! Tree pattern matching and rewriting to a fixpoint.
//!
//! Given a list of (pattern, action) rules and a nested [`value::Value`]
//! tree, [`engine::scan_once`] finds the first subtree matching some
//! rule's pattern and replaces it with the rule's result;
//! [`engine::scan`] repeats that until no rule matches anywhere.
//! Patterns are built from the factories in [`pattern`], including the
//! `memory`/`refer` pair for backreferences within one match.

pub mod engine;
pub mod json;
pub mod matching;
pub mod orbit;
pub mod pattern;
pub mod value;
