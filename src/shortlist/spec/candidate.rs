//! Leaf specifications for the candidate model.
//!
//! Each leaf fixes one reference value at construction and compares a single
//! candidate attribute against it:
//!
//! | Leaf | Attribute | Comparison |
//! |------|-----------|------------|
//! | [`SkillSpec`] | `skill` | equality |
//! | [`EducationSpec`] | `education` | equality |
//! | [`MinExperienceSpec`] | `years_experience` | greater-or-equal |
//! | [`AppliedSinceSpec`] | `applied_at` | greater-or-equal |
//!
//! Leaves are plain value types. Adding a new one means adding a type that
//! implements [`Specification<Candidate>`]; composites and the filter layer
//! pick it up unchanged.

use chrono::{DateTime, Utc};

use super::Specification;
use crate::model::{Candidate, Education, Skill};

/// Matches candidates whose skill equals the required skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSpec {
    skill: Skill,
}

impl SkillSpec {
    pub fn new(skill: Skill) -> Self {
        Self { skill }
    }
}

impl Specification<Candidate> for SkillSpec {
    fn is_satisfied(&self, item: &Candidate) -> bool {
        item.skill == self.skill
    }
}

/// Matches candidates whose education level equals the required level.
///
/// Equality, not ordering: a `Doctor` does not satisfy a `Master`
/// requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationSpec {
    education: Education,
}

impl EducationSpec {
    pub fn new(education: Education) -> Self {
        Self { education }
    }
}

impl Specification<Candidate> for EducationSpec {
    fn is_satisfied(&self, item: &Candidate) -> bool {
        item.education == self.education
    }
}

/// Matches candidates with at least the given years of experience.
///
/// The threshold is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinExperienceSpec {
    years: u8,
}

impl MinExperienceSpec {
    pub fn new(years: u8) -> Self {
        Self { years }
    }
}

impl Specification<Candidate> for MinExperienceSpec {
    fn is_satisfied(&self, item: &Candidate) -> bool {
        item.years_experience >= self.years
    }
}

/// Matches candidates who applied at or after the given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedSinceSpec {
    cutoff: DateTime<Utc>,
}

impl AppliedSinceSpec {
    pub fn new(cutoff: DateTime<Utc>) -> Self {
        Self { cutoff }
    }
}

impl Specification<Candidate> for AppliedSinceSpec {
    fn is_satisfied(&self, item: &Candidate) -> bool {
        item.applied_at >= self.cutoff
    }
}
