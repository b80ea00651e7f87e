use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Field of engineering the student is drawn to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Mechanical,
    Electrical,
    Information,
    Chemical,
    Architecture,
    Marine,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::Mechanical,
        Interest::Electrical,
        Interest::Information,
        Interest::Chemical,
        Interest::Architecture,
        Interest::Marine,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|interest| interest.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Interest::Mechanical => "mechanical",
            Interest::Electrical => "electrical",
            Interest::Information => "information",
            Interest::Chemical => "chemical",
            Interest::Architecture => "architecture",
            Interest::Marine => "marine",
        }
    }
}

/// Academic subject the student enjoys most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Math,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
        }
    }
}

/// Career the student pictures after graduating. Unrecognised tokens earn nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareerAspiration {
    Engineer,
    Creative,
    Researcher,
    Other(String),
}

impl CareerAspiration {
    pub fn from_token(token: &str) -> Self {
        match token {
            "engineer" => Self::Engineer,
            "creative" => Self::Creative,
            "researcher" => Self::Researcher,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn earns_bonus(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Self-described working style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Personality {
    Logical,
    Practical,
    Other(String),
}

impl Personality {
    pub fn from_token(token: &str) -> Self {
        match token {
            "logical" => Self::Logical,
            "practical" => Self::Practical,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Structured questionnaire answers.
///
/// Built leniently from arbitrary JSON: every field is optional, and a field
/// with an unexpected shape is treated as unanswered rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct AnswerSet {
    pub interests: Option<Interest>,
    pub subjects: Option<Subject>,
    pub future: Option<CareerAspiration>,
    pub personality: Option<Personality>,
    /// Preference key (e.g. `dormitory`) to importance on a 0-100 scale.
    /// Any JSON number is kept; non-integer values are compared as-is.
    pub environment: BTreeMap<String, f64>,
}

impl AnswerSet {
    pub fn from_value(value: &Value) -> Self {
        let token = |key: &str| value.get(key).and_then(Value::as_str);

        let environment: BTreeMap<String, f64> = value
            .get("environment")
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(key, score)| score.as_f64().map(|score| (key.clone(), score)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            interests: token("interests").and_then(Interest::from_token),
            subjects: token("subjects").and_then(Subject::from_token),
            future: token("future").map(CareerAspiration::from_token),
            personality: token("personality").map(Personality::from_token),
            environment,
        }
    }

    /// Importance given to an environment preference, if answered.
    pub fn environment_score(&self, key: &str) -> Option<f64> {
        self.environment.get(key).copied()
    }
}

impl From<Value> for AnswerSet {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Body accepted by the diagnosis endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosisRequest {
    /// `None` when the key is absent or `null`.
    #[serde(default)]
    pub answers: Option<AnswerSet>,
    /// Accepted for a future free-text classifier; never read by scoring.
    #[serde(default, rename = "freeformText", deserialize_with = "lenient_text")]
    pub freeform_text: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(text) => Some(text),
        _ => None,
    }))
}
