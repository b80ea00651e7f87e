use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::domain::DiagnosisRequest;
use super::service::{DiagnosisError, DiagnosisService};
use crate::catalog::CatalogSource;

pub(crate) const GENERIC_FAILURE: &str = "failed to run diagnosis";

/// Router builder exposing the diagnosis endpoint.
pub fn diagnosis_router<C>(service: Arc<DiagnosisService<C>>) -> Router
where
    C: CatalogSource + 'static,
{
    Router::new()
        .route("/api/diagnosis", post(diagnose_handler::<C>))
        .with_state(service)
}

pub(crate) async fn diagnose_handler<C>(
    State(service): State<Arc<DiagnosisService<C>>>,
    payload: Result<Json<DiagnosisRequest>, JsonRejection>,
) -> Response
where
    C: CatalogSource + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%rejection, "rejected diagnosis payload");
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("invalid request body: {}", rejection.body_text()),
            );
        }
    };

    match service.diagnose(request) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(DiagnosisError::Validation(message)) => {
            warn!(%message, "diagnosis request failed validation");
            error_response(StatusCode::BAD_REQUEST, &message)
        }
        Err(other) => {
            error!(error = %other, "diagnosis failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
