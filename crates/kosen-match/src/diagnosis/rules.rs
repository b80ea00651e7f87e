use super::domain::{AnswerSet, Interest, Personality};
use super::tables::{correlated_interests, department_keywords};
use super::{MatchRule, ScoreComponent};
use crate::catalog::CollegeRecord;

pub const BASE_SCORE: i16 = 50;
pub(crate) const MAX_SCORE: i16 = 100;
pub(crate) const DEFAULT_REASON: &str = "a college that may align with your preferences";

const INTEREST_MATCH_POINTS: i16 = 25;
const SUBJECT_MATCH_POINTS: i16 = 15;
const CAREER_POINTS: i16 = 5;
const PERSONALITY_POINTS: i16 = 10;
const ENVIRONMENT_POINTS: i16 = 5;
const ENVIRONMENT_THRESHOLD: f64 = 70.0;

/// Score one college. Returns the triggered components, the capped match
/// rate, and the reason text.
pub(crate) fn score_college(
    answers: &AnswerSet,
    college: &CollegeRecord,
) -> (Vec<ScoreComponent>, i16, String) {
    let mut components = Vec::new();

    if let Some(interest) = answers.interests {
        let offered = department_keywords(interest)
            .iter()
            .any(|keyword| college.offers(keyword));
        if offered {
            components.push(ScoreComponent {
                rule: MatchRule::InterestDepartment,
                points: INTEREST_MATCH_POINTS,
                note: Some(format!(
                    "Offers departments that match your interest in {}.",
                    interest.as_str()
                )),
            });
        }
    }

    if let (Some(subject), Some(interest)) = (answers.subjects, answers.interests) {
        if correlated_interests(subject).contains(&interest) {
            components.push(ScoreComponent {
                rule: MatchRule::SubjectCorrelation,
                points: SUBJECT_MATCH_POINTS,
                note: Some(format!(
                    "Your strength in {} carries over to {} studies.",
                    subject.as_str(),
                    interest.as_str()
                )),
            });
        }
    }

    if answers
        .future
        .as_ref()
        .is_some_and(|future| future.earns_bonus())
    {
        components.push(ScoreComponent {
            rule: MatchRule::CareerAspiration,
            points: CAREER_POINTS,
            note: None,
        });
    }

    let synergy = match (&answers.personality, answers.interests) {
        (Some(Personality::Logical), Some(Interest::Information | Interest::Electrical)) => true,
        (Some(Personality::Practical), Some(Interest::Mechanical | Interest::Architecture)) => {
            true
        }
        _ => false,
    };
    if synergy {
        components.push(ScoreComponent {
            rule: MatchRule::PersonalitySynergy,
            points: PERSONALITY_POINTS,
            note: None,
        });
    }

    if answers
        .environment_score("dormitory")
        .is_some_and(|score| score > ENVIRONMENT_THRESHOLD)
    {
        components.push(ScoreComponent {
            rule: MatchRule::DormitoryPreference,
            points: ENVIRONMENT_POINTS,
            note: None,
        });
    }

    if answers
        .environment_score("international")
        .is_some_and(|score| score > ENVIRONMENT_THRESHOLD)
    {
        components.push(ScoreComponent {
            rule: MatchRule::InternationalPreference,
            points: ENVIRONMENT_POINTS,
            note: None,
        });
    }

    let total: i16 = BASE_SCORE
        + components
            .iter()
            .map(|component| component.points)
            .sum::<i16>();
    // Only the ceiling is enforced.
    let match_rate = total.min(MAX_SCORE);

    let notes: Vec<&str> = components
        .iter()
        .filter_map(|component| component.note.as_deref())
        .collect();
    let reason = if notes.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        notes.join(" ")
    };

    (components, match_rate, reason)
}
