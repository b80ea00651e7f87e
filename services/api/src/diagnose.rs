use crate::infra::{load_catalog, parse_json_object};
use clap::Args;
use kosen_match::catalog::{CatalogSource, CollegeRecord};
use kosen_match::config::AppConfig;
use kosen_match::diagnosis::{
    AnswerSet, DiagnosisRequest, DiagnosisService, MatchEngine, ScoredCollege, BASE_SCORE,
    RESULT_LIMIT,
};
use kosen_match::error::AppError;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DiagnoseArgs {
    /// Answers object as inline JSON, e.g. '{"interests":"marine"}'
    #[arg(long, value_parser = parse_json_object, conflicts_with = "answers_file")]
    pub(crate) answers: Option<Value>,
    /// Path to a JSON file holding the answers object
    #[arg(long)]
    pub(crate) answers_file: Option<PathBuf>,
    /// Interest token (mechanical, electrical, information, chemical, architecture, marine)
    #[arg(long)]
    pub(crate) interests: Option<String>,
    /// Favourite subject token (math, physics, chemistry, biology)
    #[arg(long)]
    pub(crate) subjects: Option<String>,
    /// Career aspiration token
    #[arg(long)]
    pub(crate) future: Option<String>,
    /// Working style token
    #[arg(long)]
    pub(crate) personality: Option<String>,
    /// Importance of dormitory life (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) dormitory: Option<u8>,
    /// Importance of an international environment (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) international: Option<u8>,
    /// Free-text description of what the student wants to do
    #[arg(long)]
    pub(crate) freeform_text: Option<String>,
    /// Catalog file (CSV or JSON) to rank instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Number of colleges to show
    #[arg(long, default_value_t = RESULT_LIMIT)]
    pub(crate) top: usize,
    /// Print the raw JSON response instead of the annotated listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogListArgs {
    /// Catalog file (CSV or JSON) to list instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_path = args.catalog.clone().or(config.catalog.path);
    let catalog = load_catalog(catalog_path.as_deref())?;

    let request = DiagnosisRequest {
        answers: answers_from_args(&args)?.map(AnswerSet::from),
        freeform_text: args.freeform_text.clone(),
    };

    let service =
        DiagnosisService::with_engine(Arc::new(catalog), MatchEngine::with_limit(args.top));
    let results = service.diagnose(request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        render_results(&results);
    }

    Ok(())
}

pub(crate) fn run_catalog_list(args: CatalogListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_path = args.catalog.or(config.catalog.path);
    let catalog = load_catalog(catalog_path.as_deref())?.colleges()?;

    println!("College catalog ({} entries)", catalog.len());
    for college in catalog.colleges() {
        render_college(college);
    }

    Ok(())
}

/// Merge the answer sources: file or inline JSON first, then individual flags.
/// Returns `None` when nothing was supplied.
fn answers_from_args(args: &DiagnoseArgs) -> Result<Option<Value>, AppError> {
    let mut base = match (&args.answers, &args.answers_file) {
        (Some(value), _) => Some(value.clone()),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(path)?;
            Some(serde_json::from_str::<Value>(&raw)?)
        }
        (None, None) => None,
    };

    let mut flags = Map::new();
    let tokens = [
        ("interests", &args.interests),
        ("subjects", &args.subjects),
        ("future", &args.future),
        ("personality", &args.personality),
    ];
    for (key, token) in tokens {
        if let Some(token) = token {
            flags.insert(key.to_string(), Value::String(token.clone()));
        }
    }

    let mut environment = Map::new();
    if let Some(score) = args.dormitory {
        environment.insert("dormitory".to_string(), Value::from(score));
    }
    if let Some(score) = args.international {
        environment.insert("international".to_string(), Value::from(score));
    }

    if flags.is_empty() && environment.is_empty() {
        return Ok(base);
    }

    let answers = base.get_or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(object) = answers {
        object.extend(flags);
        if !environment.is_empty() {
            let entry = object
                .entry("environment")
                .or_insert_with(|| Value::Object(Map::new()));
            match entry {
                Value::Object(existing) => existing.extend(environment),
                other => *other = Value::Object(environment),
            }
        }
    }

    Ok(base)
}

fn render_results(results: &[ScoredCollege]) {
    println!("Kosen match results");

    if results.is_empty() {
        println!("No colleges in the catalog.");
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        println!(
            "\n{}. {} ({}) | match {}%",
            rank + 1,
            result.college.name,
            result.college.location,
            result.match_rate
        );
        println!("   Departments: {}", result.college.departments.join(", "));
        println!("   Reason: {}", result.match_reason);
        println!("   Score breakdown: base {}", BASE_SCORE);
        for component in &result.components {
            println!("     - {}: +{}", component.rule.label(), component.points);
        }
    }
}

fn render_college(college: &CollegeRecord) {
    println!("- {} | {} | {}", college.id.0, college.name, college.location);
    println!("  Departments: {}", college.departments.join(", "));
    if let Some(description) = &college.description {
        println!("  {}", description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_answer_sources_yields_none() {
        let args = DiagnoseArgs::default();
        assert!(answers_from_args(&args).expect("no io").is_none());
    }

    #[test]
    fn flags_build_an_answers_object() {
        let args = DiagnoseArgs {
            interests: Some("mechanical".to_string()),
            personality: Some("practical".to_string()),
            dormitory: Some(80),
            ..DiagnoseArgs::default()
        };

        let answers = answers_from_args(&args).expect("no io").expect("answers built");

        assert_eq!(
            answers,
            json!({
                "interests": "mechanical",
                "personality": "practical",
                "environment": { "dormitory": 80 }
            })
        );
    }

    #[test]
    fn flags_override_inline_json() {
        let args = DiagnoseArgs {
            answers: Some(json!({
                "interests": "marine",
                "subjects": "physics",
                "environment": { "international": 90 }
            })),
            interests: Some("electrical".to_string()),
            dormitory: Some(75),
            ..DiagnoseArgs::default()
        };

        let answers = answers_from_args(&args).expect("no io").expect("answers built");

        assert_eq!(answers["interests"], json!("electrical"));
        assert_eq!(answers["subjects"], json!("physics"));
        assert_eq!(
            answers["environment"],
            json!({ "international": 90, "dormitory": 75 })
        );
    }
}
