//! # Specifications
//!
//! A specification is a reusable boolean predicate over one item type.
//! Instead of a filter growing one method per criterion, and one more per
//! combination of criteria, each criterion is its own type implementing
//! [`Specification`], and a combination is itself a specification built out
//! of other specifications.
//!
//! Leaves for the candidate model live in `candidate`; the generic
//! composites live in `composite`. Both sides stay open: adding a leaf or a
//! combinator is adding a type, with no change to the filter layer.
//!
//! ## Usage
//!
//! ```
//! use shortlist::filter::{Filter, LinearFilter};
//! use shortlist::model::{Candidate, Education, Skill};
//! use shortlist::spec::{EducationSpec, MinExperienceSpec, SpecificationExt};
//!
//! let pool = vec![
//!     Candidate::new("Abigail", Skill::Cpp, Education::Doctor, 3).unwrap(),
//!     Candidate::new("Kent", Skill::JavaScript, Education::Undergrad, 0).unwrap(),
//! ];
//!
//! let wanted = EducationSpec::new(Education::Doctor).and(MinExperienceSpec::new(3));
//! let hits = LinearFilter::new().filter(&pool, &wanted);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Abigail");
//! ```

use std::sync::Arc;

mod candidate;
mod composite;

pub use candidate::{AppliedSinceSpec, EducationSpec, MinExperienceSpec, SkillSpec};
pub use composite::{AndSpec, NotSpec, OrSpec};

/// A boolean predicate over items of type `T`.
///
/// `is_satisfied` must be total and side-effect free: the same item always
/// gets the same answer, and evaluation changes nothing observable. This is
/// what lets composites short-circuit and lets one specification instance
/// be evaluated against many items.
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

/// Shared specifications evaluate through the pointer, so one child can sit
/// inside several composites at once.
impl<T, S> Specification<T> for Arc<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Combinator sugar for building composites from owned specifications.
///
/// Blanket-implemented for every sized specification. Each method wraps its
/// operands in [`Arc`], so the results compose further without copying the
/// underlying predicates.
pub trait SpecificationExt<T: 'static>: Specification<T> + Sized + 'static {
    /// Both this specification and `other` must hold.
    fn and<S>(self, other: S) -> AndSpec<T>
    where
        S: Specification<T> + 'static,
    {
        AndSpec::pair(Arc::new(self), Arc::new(other))
    }

    /// At least one of this specification and `other` must hold.
    fn or<S>(self, other: S) -> OrSpec<T>
    where
        S: Specification<T> + 'static,
    {
        OrSpec::pair(Arc::new(self), Arc::new(other))
    }

    /// This specification must not hold.
    fn not(self) -> NotSpec<T> {
        NotSpec::new(Arc::new(self))
    }
}

impl<T: 'static, S> SpecificationExt<T> for S where S: Specification<T> + Sized + 'static {}
