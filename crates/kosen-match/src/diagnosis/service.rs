use std::sync::Arc;

use tracing::{debug, info};

use super::domain::DiagnosisRequest;
use super::{MatchEngine, ScoredCollege};
use crate::catalog::{CatalogError, CatalogSource};

pub(crate) const MISSING_ANSWERS: &str = "missing answer data";

/// Service composing the catalog source and the match engine.
pub struct DiagnosisService<C> {
    catalog: Arc<C>,
    engine: MatchEngine,
}

impl<C> DiagnosisService<C>
where
    C: CatalogSource + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_engine(catalog, MatchEngine::default())
    }

    pub fn with_engine(catalog: Arc<C>, engine: MatchEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Rank the catalog for the submitted answers.
    ///
    /// Fails before any scoring when `answers` is missing.
    pub fn diagnose(
        &self,
        request: DiagnosisRequest,
    ) -> Result<Vec<ScoredCollege>, DiagnosisError> {
        let DiagnosisRequest {
            answers,
            freeform_text,
        } = request;

        let answers =
            answers.ok_or_else(|| DiagnosisError::Validation(MISSING_ANSWERS.to_string()))?;
        let catalog = self.catalog.colleges()?;

        debug!(
            ?answers,
            freeform_chars = freeform_text.as_deref().map_or(0, |text| text.chars().count()),
            colleges = catalog.len(),
            "scoring catalog"
        );

        let results = self.engine.rank(&answers, &catalog);

        info!(
            returned = results.len(),
            top_rate = results.first().map(|result| result.match_rate),
            "diagnosis completed"
        );

        Ok(results)
    }
}

/// Error raised by the diagnosis service.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisError {
    /// The request itself is unusable; safe to show to the caller.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl DiagnosisError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DiagnosisError::Validation(_))
    }
}
