//! Generic composites over specifications.
//!
//! Composites hold their children behind [`Arc`] so the same child can be
//! reused in several composites without duplicating the predicate itself.
//! Children are read-only during evaluation; a composite's answer is a pure
//! function of its children's answers for the same item.

use std::sync::Arc;

use super::Specification;
use crate::error::{Result, ShortlistError};

/// Satisfied iff every child specification is satisfied.
///
/// Evaluation stops at the first failing child. Children must be
/// side-effect free, so the early exit cannot change the result.
pub struct AndSpec<T> {
    children: Vec<Arc<dyn Specification<T>>>,
}

impl<T> AndSpec<T> {
    /// Build a conjunction from an ordered list of children.
    ///
    /// Fails with [`ShortlistError::EmptyComposite`] on an empty list: a
    /// composite with nothing to check has no meaningful answer, and the
    /// failure belongs here, not at evaluation time.
    pub fn new(children: Vec<Arc<dyn Specification<T>>>) -> Result<Self> {
        if children.is_empty() {
            return Err(ShortlistError::EmptyComposite);
        }
        Ok(Self { children })
    }

    /// Build the common two-child conjunction.
    pub fn pair(first: Arc<dyn Specification<T>>, second: Arc<dyn Specification<T>>) -> Self {
        Self {
            children: vec![first, second],
        }
    }
}

impl<T> Specification<T> for AndSpec<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().all(|child| child.is_satisfied(item))
    }
}

/// Satisfied iff at least one child specification is satisfied.
///
/// Evaluation stops at the first passing child.
pub struct OrSpec<T> {
    children: Vec<Arc<dyn Specification<T>>>,
}

impl<T> OrSpec<T> {
    /// Build a disjunction from an ordered list of children.
    ///
    /// Fails with [`ShortlistError::EmptyComposite`] on an empty list.
    pub fn new(children: Vec<Arc<dyn Specification<T>>>) -> Result<Self> {
        if children.is_empty() {
            return Err(ShortlistError::EmptyComposite);
        }
        Ok(Self { children })
    }

    /// Build the common two-child disjunction.
    pub fn pair(first: Arc<dyn Specification<T>>, second: Arc<dyn Specification<T>>) -> Self {
        Self {
            children: vec![first, second],
        }
    }
}

impl<T> Specification<T> for OrSpec<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().any(|child| child.is_satisfied(item))
    }
}

/// Inverts exactly one child specification.
pub struct NotSpec<T> {
    child: Arc<dyn Specification<T>>,
}

impl<T> NotSpec<T> {
    pub fn new(child: Arc<dyn Specification<T>>) -> Self {
        Self { child }
    }
}

impl<T> Specification<T> for NotSpec<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.child.is_satisfied(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{candidate, sample_pool};
    use crate::model::{Candidate, Education, Skill};
    use crate::spec::{EducationSpec, MinExperienceSpec, SkillSpec, SpecificationExt};

    #[test]
    fn and_agrees_with_its_children() {
        let edu = EducationSpec::new(Education::Doctor);
        let exp = MinExperienceSpec::new(3);
        let both = AndSpec::pair(
            Arc::new(EducationSpec::new(Education::Doctor)),
            Arc::new(MinExperienceSpec::new(3)),
        );

        for cand in sample_pool() {
            assert_eq!(
                both.is_satisfied(&cand),
                edu.is_satisfied(&cand) && exp.is_satisfied(&cand),
                "disagreement for {}",
                cand.name
            );
        }
    }

    #[test]
    fn or_agrees_with_its_children() {
        let doctor = EducationSpec::new(Education::Doctor);
        let senior = MinExperienceSpec::new(5);
        let either = OrSpec::pair(
            Arc::new(EducationSpec::new(Education::Doctor)),
            Arc::new(MinExperienceSpec::new(5)),
        );

        for cand in sample_pool() {
            assert_eq!(
                either.is_satisfied(&cand),
                doctor.is_satisfied(&cand) || senior.is_satisfied(&cand),
                "disagreement for {}",
                cand.name
            );
        }
    }

    #[test]
    fn not_inverts_its_child() {
        let python = SkillSpec::new(Skill::Python);
        let not_python = NotSpec::new(Arc::new(SkillSpec::new(Skill::Python)));

        for cand in sample_pool() {
            assert_eq!(not_python.is_satisfied(&cand), !python.is_satisfied(&cand));
        }
    }

    #[test]
    fn and_generalizes_past_two_children() {
        let strict = AndSpec::new(vec![
            Arc::new(SkillSpec::new(Skill::Python)) as Arc<dyn Specification<Candidate>>,
            Arc::new(EducationSpec::new(Education::Master)),
            Arc::new(MinExperienceSpec::new(4)),
        ])
        .unwrap();

        let joshua = candidate("Joshua", Skill::Python, Education::Master, 5);
        let timothy = candidate("Timothy", Skill::Python, Education::Master, 3);
        assert!(strict.is_satisfied(&joshua));
        assert!(!strict.is_satisfied(&timothy));
    }

    #[test]
    fn empty_and_is_rejected_at_construction() {
        match AndSpec::<Candidate>::new(vec![]) {
            Err(ShortlistError::EmptyComposite) => {}
            Err(other) => panic!("Expected EmptyComposite, got {other:?}"),
            Ok(_) => panic!("Expected EmptyComposite, got a composite"),
        }
    }

    #[test]
    fn empty_or_is_rejected_at_construction() {
        assert!(OrSpec::<Candidate>::new(vec![]).is_err());
    }

    #[test]
    fn single_child_and_behaves_like_the_child() {
        let only = AndSpec::new(vec![
            Arc::new(SkillSpec::new(Skill::Bash)) as Arc<dyn Specification<Candidate>>
        ])
        .unwrap();
        let bash = candidate("Lee", Skill::Bash, Education::Undergrad, 1);
        let python = candidate("Ada", Skill::Python, Education::Doctor, 9);
        assert!(only.is_satisfied(&bash));
        assert!(!only.is_satisfied(&python));
    }

    #[test]
    fn child_is_reusable_across_composites() {
        let python: Arc<dyn Specification<Candidate>> = Arc::new(SkillSpec::new(Skill::Python));
        let senior = AndSpec::pair(python.clone(), Arc::new(MinExperienceSpec::new(4)));
        let junior = AndSpec::pair(python.clone(), Arc::new(MinExperienceSpec::new(4).not()));

        let joshua = candidate("Joshua", Skill::Python, Education::Master, 5);
        let timothy = candidate("Timothy", Skill::Python, Education::Master, 3);

        assert!(senior.is_satisfied(&joshua));
        assert!(!senior.is_satisfied(&timothy));
        assert!(junior.is_satisfied(&timothy));
        assert!(!junior.is_satisfied(&joshua));
    }

    #[test]
    fn composites_nest() {
        // (Python or JavaScript) and not Doctor
        let scripting = SkillSpec::new(Skill::Python).or(SkillSpec::new(Skill::JavaScript));
        let wanted = scripting.and(EducationSpec::new(Education::Doctor).not());

        assert!(wanted.is_satisfied(&candidate("Kent", Skill::JavaScript, Education::Undergrad, 0)));
        assert!(!wanted.is_satisfied(&candidate("Abigail", Skill::Cpp, Education::Doctor, 3)));
        assert!(!wanted.is_satisfied(&candidate("Dana", Skill::Python, Education::Doctor, 2)));
    }
}
