use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::catalog::CollegeCatalog;
use crate::diagnosis::router::{diagnose_handler, GENERIC_FAILURE};
use crate::diagnosis::{diagnosis_router, DiagnosisService};

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::post("/api/diagnosis")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

#[tokio::test]
async fn diagnosis_route_returns_ranked_colleges() {
    let router = router_with_catalog(CollegeCatalog::builtin());
    let body = serde_json::to_vec(&json!({
        "answers": { "interests": "information", "subjects": "math" },
        "freeformText": "プログラミングが好き"
    }))
    .expect("serializes");

    let response = router.oneshot(post_json(body)).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let results = payload.as_array().expect("array body");
    assert_eq!(results.len(), 5);
    assert_eq!(results[0]["matchRate"], json!(90));
    let rates: Vec<i64> = results
        .iter()
        .filter_map(|result| result["matchRate"].as_i64())
        .collect();
    assert!(rates.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(results
        .iter()
        .all(|result| result.get("name").is_some() && result.get("location").is_some()));
}

#[tokio::test]
async fn diagnosis_route_rejects_missing_answers() {
    let router = router_with_catalog(CollegeCatalog::builtin());

    let response = router
        .oneshot(post_json(r#"{"freeformText": "hello"}"#))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "error": "missing answer data" }));
}

#[tokio::test]
async fn diagnosis_route_rejects_unparseable_bodies() {
    let router = router_with_catalog(CollegeCatalog::builtin());

    let response = router
        .oneshot(post_json("{not json"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("invalid request body"));
}

#[tokio::test]
async fn diagnosis_route_accepts_malformed_answer_fields() {
    let router = router_with_catalog(neutral_catalog());

    let response = router
        .oneshot(post_json(
            r#"{"answers": {"interests": 7, "environment": [80]}, "freeformText": false}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload
        .as_array()
        .expect("array body")
        .iter()
        .all(|result| result["matchRate"] == json!(50)));
}

#[tokio::test]
async fn handler_hides_catalog_failures_behind_generic_message() {
    let service = Arc::new(DiagnosisService::new(Arc::new(UnavailableCatalog)));

    let response = diagnose_handler::<UnavailableCatalog>(
        State(service),
        Ok(Json(request(json!({ "answers": {} })))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = read_json_body(response).await;
    assert_eq!(payload["error"], json!(GENERIC_FAILURE));
    assert!(!payload.to_string().contains("offline"));
}

#[tokio::test]
async fn router_serves_only_post() {
    let router = diagnosis_router(Arc::new(build_service(neutral_catalog())));

    let response = router
        .oneshot(
            Request::get("/api/diagnosis")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
