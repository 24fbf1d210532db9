//! Pool filtering.
//!
//! [`Filter`] is the one traversal in the crate: it walks a borrowed slice
//! once and keeps the items the given specification accepts. It never looks
//! inside the specification, so new predicate types pass through it
//! unchanged.

use crate::spec::Specification;

/// Abstract interface for applying a specification to a pool of items.
pub trait Filter<T> {
    /// Return the items satisfying `spec`, in their original relative order.
    ///
    /// The input is borrowed and never mutated. The caller must not mutate
    /// the slice concurrently during the call.
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

/// Single-pass filter over an in-memory slice.
///
/// Runs in one specification evaluation per item and keeps input order, so
/// filtering an already-filtered pool with the same specification changes
/// nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearFilter;

impl LinearFilter {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Filter<T> for LinearFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}
