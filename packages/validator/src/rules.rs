//! Stateless predicates used to feed `Validator::check`.

use std::collections::HashSet;
use std::hash::Hash;

use regex::Regex;

/// True when `value` equals at least one entry of `permitted`
pub fn permitted_value<T: PartialEq>(value: T, permitted: &[T]) -> bool {
    permitted.contains(&value)
}

/// Apply `rx` to `value`. Anchoring is whatever the pattern itself says.
pub fn matches(value: &str, rx: &Regex) -> bool {
    rx.is_match(value)
}

/// True when no two entries of `values` are equal
pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value))
}
