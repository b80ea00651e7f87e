//! Questionnaire diagnosis: scores every catalog college against an answer
//! set and returns the best matches.

pub mod domain;
pub mod router;
mod rules;
pub mod service;
mod tables;

#[cfg(test)]
mod tests;

pub use domain::{AnswerSet, CareerAspiration, DiagnosisRequest, Interest, Personality, Subject};
pub use router::diagnosis_router;
pub use rules::BASE_SCORE;
pub use service::{DiagnosisError, DiagnosisService};

use crate::catalog::{CollegeCatalog, CollegeRecord};
use serde::Serialize;

/// Number of colleges a diagnosis returns.
pub const RESULT_LIMIT: usize = 5;

/// Stateless scorer ranking a catalog against one answer set.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    limit: usize,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            limit: RESULT_LIMIT,
        }
    }
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine returning up to `limit` colleges instead of the standard five.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn score(&self, answers: &AnswerSet, college: &CollegeRecord) -> ScoredCollege {
        let (components, match_rate, match_reason) = rules::score_college(answers, college);

        ScoredCollege {
            college: college.clone(),
            match_rate,
            match_reason,
            components,
        }
    }

    /// Score every college, order by match rate (ties keep catalog order),
    /// and keep the top entries.
    pub fn rank(&self, answers: &AnswerSet, catalog: &CollegeCatalog) -> Vec<ScoredCollege> {
        let mut scored: Vec<ScoredCollege> = catalog
            .colleges()
            .iter()
            .map(|college| self.score(answers, college))
            .collect();

        scored.sort_by(|left, right| right.match_rate.cmp(&left.match_rate));
        scored.truncate(self.limit);
        scored
    }
}

/// Scoring rule that contributed to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    InterestDepartment,
    SubjectCorrelation,
    CareerAspiration,
    PersonalitySynergy,
    DormitoryPreference,
    InternationalPreference,
}

impl MatchRule {
    pub fn label(self) -> &'static str {
        match self {
            MatchRule::InterestDepartment => "interest matches a department",
            MatchRule::SubjectCorrelation => "favourite subject suits the interest",
            MatchRule::CareerAspiration => "career aspiration",
            MatchRule::PersonalitySynergy => "working style suits the interest",
            MatchRule::DormitoryPreference => "wants dormitory life",
            MatchRule::InternationalPreference => "wants an international environment",
        }
    }
}

/// Discrete contribution to a match, kept so a score can be explained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: MatchRule,
    pub points: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A college together with its match rate and reason, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCollege {
    #[serde(flatten)]
    pub college: CollegeRecord,
    #[serde(rename = "matchRate")]
    pub match_rate: i16,
    #[serde(rename = "matchReason")]
    pub match_reason: String,
    #[serde(skip)]
    pub components: Vec<ScoreComponent>,
}
