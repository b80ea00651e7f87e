use super::common::*;
use serde_json::json;
use std::sync::Arc;

use crate::catalog::CatalogError;
use crate::diagnosis::{DiagnosisError, DiagnosisService, MatchEngine};

#[test]
fn missing_answers_is_a_validation_error() {
    let service = build_service(neutral_catalog());

    let err = service
        .diagnose(request(json!({ "freeformText": "ロボコンに出たい" })))
        .expect_err("answers are required");

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "missing answer data");
}

#[test]
fn validation_happens_before_the_catalog_is_read() {
    let service = DiagnosisService::new(Arc::new(UnavailableCatalog));

    let err = service
        .diagnose(request(json!({ "answers": null })))
        .expect_err("answers are required");

    assert!(matches!(err, DiagnosisError::Validation(_)));
}

#[test]
fn catalog_failures_are_not_validation_errors() {
    let service = DiagnosisService::new(Arc::new(UnavailableCatalog));

    let err = service
        .diagnose(request(json!({ "answers": {} })))
        .expect_err("catalog offline");

    assert!(!err.is_validation());
    assert!(matches!(
        err,
        DiagnosisError::Catalog(CatalogError::Unavailable(_))
    ));
}

#[test]
fn empty_answers_return_first_five_catalog_entries() {
    let service = build_service(neutral_catalog());

    let results = service
        .diagnose(request(json!({ "answers": {} })))
        .expect("diagnosis succeeds");

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].college.id.0, "neutral-1");
    assert_eq!(results[4].college.id.0, "neutral-5");
}

#[test]
fn freeform_text_does_not_affect_scores() {
    let service = build_service(catalog(vec![information_college(), mechanical_college()]));

    let without = service
        .diagnose(request(json!({ "answers": { "interests": "mechanical" } })))
        .expect("diagnosis succeeds");
    let with = service
        .diagnose(request(json!({
            "answers": { "interests": "mechanical" },
            "freeformText": "情報系にも興味があります"
        })))
        .expect("diagnosis succeeds");

    assert_eq!(without, with);
}

#[test]
fn custom_engine_limit_is_respected() {
    let service = DiagnosisService::with_engine(
        Arc::new(crate::catalog::StaticCatalog::new(neutral_catalog())),
        MatchEngine::with_limit(2),
    );

    let results = service
        .diagnose(request(json!({ "answers": {} })))
        .expect("diagnosis succeeds");

    assert_eq!(service.engine().limit(), 2);
    assert_eq!(results.len(), 2);
}
