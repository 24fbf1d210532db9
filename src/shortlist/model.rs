//! Core data types for the candidate pool.
//!
//! A [`Candidate`] is immutable while a pool is being screened: leaves read
//! its attributes, nothing writes them. The record carries identity and an
//! application timestamp so downstream clients can store or display a
//! filtered pool without consulting this crate again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ShortlistError};

/// Primary skill a candidate applies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Cpp,
    Python,
    JavaScript,
    Bash,
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    Undergrad,
    Master,
    Doctor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub skill: Skill,
    pub education: Education,
    pub years_experience: u8,
    pub applied_at: DateTime<Utc>,
}

impl Candidate {
    /// Create a candidate applying now.
    ///
    /// Rejects an empty or whitespace-only name.
    pub fn new(
        name: impl Into<String>,
        skill: Skill,
        education: Education,
        years_experience: u8,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ShortlistError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            skill,
            education,
            years_experience,
            applied_at: Utc::now(),
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The four applicants used across the unit tests.
    pub fn sample_pool() -> Vec<Candidate> {
        vec![
            candidate("Timothy", Skill::Python, Education::Master, 3),
            candidate("Kent", Skill::JavaScript, Education::Undergrad, 0),
            candidate("Abigail", Skill::Cpp, Education::Doctor, 3),
            candidate("Joshua", Skill::Python, Education::Master, 5),
        ]
    }

    pub fn candidate(name: &str, skill: Skill, education: Education, years: u8) -> Candidate {
        Candidate::new(name, skill, education, years).unwrap()
    }
}
