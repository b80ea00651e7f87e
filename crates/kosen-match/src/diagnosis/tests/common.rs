use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{
    CatalogError, CatalogSource, CollegeCatalog, CollegeId, CollegeRecord, StaticCatalog,
};
use crate::diagnosis::{diagnosis_router, AnswerSet, DiagnosisRequest, DiagnosisService};

pub(super) fn college(id: &str, departments: &[&str]) -> CollegeRecord {
    CollegeRecord {
        id: CollegeId(id.to_string()),
        name: format!("{id}工業高等専門学校"),
        location: "東京都".to_string(),
        departments: departments.iter().map(|dept| dept.to_string()).collect(),
        description: None,
    }
}

pub(super) fn information_college() -> CollegeRecord {
    college("info", &["情報工学科"])
}

pub(super) fn mechanical_college() -> CollegeRecord {
    college("mech", &["機械工学科", "電子制御工学科"])
}

pub(super) fn catalog(colleges: Vec<CollegeRecord>) -> CollegeCatalog {
    CollegeCatalog::new(colleges).expect("fixture catalog is valid")
}

/// Seven colleges with no overlap with any interest keyword.
pub(super) fn neutral_catalog() -> CollegeCatalog {
    catalog(
        (1..=7)
            .map(|index| college(&format!("neutral-{index}"), &["総合教養科"]))
            .collect(),
    )
}

pub(super) fn answers(value: Value) -> AnswerSet {
    AnswerSet::from_value(&value)
}

pub(super) fn request(value: Value) -> DiagnosisRequest {
    serde_json::from_value(value).expect("request fixture parses")
}

pub(super) fn build_service(catalog: CollegeCatalog) -> DiagnosisService<StaticCatalog> {
    DiagnosisService::new(Arc::new(StaticCatalog::new(catalog)))
}

pub(super) fn router_with_catalog(catalog: CollegeCatalog) -> axum::Router {
    diagnosis_router(Arc::new(build_service(catalog)))
}

pub(super) struct UnavailableCatalog;

impl CatalogSource for UnavailableCatalog {
    fn colleges(&self) -> Result<Arc<CollegeCatalog>, CatalogError> {
        Err(CatalogError::Unavailable("catalog store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
