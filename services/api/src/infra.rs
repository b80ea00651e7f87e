use kosen_match::catalog::{CatalogError, CollegeCatalog, StaticCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog from `path`, or the built-in list when no path is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog, CatalogError> {
    let catalog = match path {
        Some(path) => {
            let catalog = CollegeCatalog::from_path(path)?;
            info!(path = %path.display(), colleges = catalog.len(), "loaded catalog file");
            catalog
        }
        None => {
            let catalog = CollegeCatalog::builtin();
            info!(colleges = catalog.len(), "using built-in catalog");
            catalog
        }
    };

    Ok(StaticCatalog::new(catalog))
}

pub(crate) fn parse_json_object(raw: &str) -> Result<Value, String> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|err| format!("invalid JSON ({err})"))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err("expected a JSON object".to_string())
    }
}
