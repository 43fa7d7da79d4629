use serde::Deserialize;

pub const MISSING_SECTIONS_MESSAGE: &str =
    "Please fill at least the three main sections (Hard, Soft, Areas to Grow).";

/// A person's free-text answers, as posted by the form and as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct SelfAssessment {
    pub hard_skills: String,
    pub soft_skills: String,
    pub areas_to_grow: String,
    pub in_5_years: String,
    pub fun_fact: String,
    pub superpower: String,
}

impl SelfAssessment {
    /// Trim surrounding whitespace from every answer
    pub fn trimmed(self) -> Self {
        fn trim(s: String) -> String {
            s.trim().to_string()
        }

        Self {
            hard_skills: trim(self.hard_skills),
            soft_skills: trim(self.soft_skills),
            areas_to_grow: trim(self.areas_to_grow),
            in_5_years: trim(self.in_5_years),
            fun_fact: trim(self.fun_fact),
            superpower: trim(self.superpower),
        }
    }

    /// The hard skills, soft skills and areas-to-grow answers are required
    pub fn is_complete(&self) -> bool {
        !self.hard_skills.is_empty() && !self.soft_skills.is_empty() && !self.areas_to_grow.is_empty()
    }
}
