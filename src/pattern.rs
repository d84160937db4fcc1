//! Pattern templates and the predicate factories that form their
//! leaves.
//!
//! A pattern is a tree shaped like the data it should match. Interior
//! positions are structures; each leaf is either a literal scalar
//! (strict equality) or a predicate. The `Literal | Pred | Structure`
//! distinction is resolved here, at construction time, not by runtime
//! inspection of the candidate.

use std::collections::BTreeMap;

use regex::Regex;

use crate::value::Value;

/// A structural template tested against candidate subtrees.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Literal scalar leaf, compared by strict equality.
    Literal(Value),
    /// Predicate leaf, invoked with the candidate and the match-scoped
    /// memory store.
    Pred(Predicate),
    /// Index-keyed template; the candidate must be an array with a
    /// matching element at every index the pattern names.
    Array(Vec<Pattern>),
    /// Key-keyed template; every key named here must match the
    /// candidate's same-named member.
    Object(BTreeMap<String, Pattern>),
}

impl Pattern {
    /// Object pattern from key/sub-pattern pairs.
    pub fn object<K, I>(entries: I) -> Pattern
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Pattern)>,
    {
        Pattern::Object(entries.into_iter().map(|(k, p)| (k.into(), p)).collect())
    }

    /// Array pattern from sub-patterns.
    pub fn array<I: IntoIterator<Item = Pattern>>(items: I) -> Pattern {
        Pattern::Array(items.into_iter().collect())
    }
}

// Scalar literals can be written inline in a pattern without wrapping
// them in `eqv`.
impl From<Value> for Pattern {
    fn from(v: Value) -> Pattern {
        Pattern::Literal(v)
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Pattern {
        Pattern::Literal(Value::Bool(b))
    }
}

impl From<f64> for Pattern {
    fn from(n: f64) -> Pattern {
        Pattern::Literal(Value::Number(n))
    }
}

impl From<i64> for Pattern {
    fn from(n: i64) -> Pattern {
        Pattern::Literal(Value::Number(n as f64))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Pattern {
        Pattern::Literal(Value::String(s.to_string()))
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Pattern {
        Pattern::Literal(Value::String(s))
    }
}

/// A pure boolean test over a candidate value and the match-scoped
/// memory store. Evaluation lives in [`crate::matching`].
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Strict equality with a scalar. Never matches a structure: the
    /// drivers deep-copy their input, so identity with a structure
    /// argument cannot survive.
    Eqv(Value),
    /// Deep structural equality with a value.
    Equal(Value),
    /// Present and not null.
    Any,
    IsNumber,
    IsString,
    IsObject,
    IsArray,
    /// String candidate matching a compiled regex.
    Matches(Regex),
    /// Number candidate within inclusive bounds.
    Range(f64, f64),
    /// Array candidate whose every element matches the sub-pattern.
    /// Vacuously true for an empty array.
    All(Box<Pattern>),
    /// Array candidate with at least one element matching the
    /// sub-pattern. Vacuously false for an empty array.
    Exists(Box<Pattern>),
    /// Always matches; records a deep copy of the candidate under the
    /// given name in the memory store.
    Capture(String),
    /// Matches iff the candidate deep-equals the value previously
    /// captured under the given name. An unknown name never matches.
    Refer(String),
}

pub fn eqv(v: impl Into<Value>) -> Pattern {
    Pattern::Pred(Predicate::Eqv(v.into()))
}

pub fn equal(v: impl Into<Value>) -> Pattern {
    Pattern::Pred(Predicate::Equal(v.into()))
}

pub fn any() -> Pattern {
    Pattern::Pred(Predicate::Any)
}

pub fn number() -> Pattern {
    Pattern::Pred(Predicate::IsNumber)
}

pub fn string() -> Pattern {
    Pattern::Pred(Predicate::IsString)
}

pub fn object() -> Pattern {
    Pattern::Pred(Predicate::IsObject)
}

pub fn array() -> Pattern {
    Pattern::Pred(Predicate::IsArray)
}

pub fn regex(re: Regex) -> Pattern {
    Pattern::Pred(Predicate::Matches(re))
}

pub fn range(lo: f64, hi: f64) -> Pattern {
    Pattern::Pred(Predicate::Range(lo, hi))
}

pub fn all(p: impl Into<Pattern>) -> Pattern {
    Pattern::Pred(Predicate::All(Box::new(p.into())))
}

pub fn exists(p: impl Into<Pattern>) -> Pattern {
    Pattern::Pred(Predicate::Exists(Box::new(p.into())))
}

pub fn memory(name: impl Into<String>) -> Pattern {
    Pattern::Pred(Predicate::Capture(name.into()))
}

pub fn refer(name: impl Into<String>) -> Pattern {
    Pattern::Pred(Predicate::Refer(name.into()))
}
