//! College catalog: the read-only list of kosen the scorer ranks.

mod builtin;
mod parser;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollegeId(pub String);

/// A college as published in the catalog. Department names are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeRecord {
    pub id: CollegeId,
    pub name: String,
    pub location: String,
    pub departments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CollegeRecord {
    /// True when any department name contains `keyword`.
    pub fn offers(&self, keyword: &str) -> bool {
        self.departments
            .iter()
            .any(|department| department.contains(keyword))
    }
}

/// Ordered, immutable collection of colleges. Order is significant: ties in
/// match score keep catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollegeCatalog {
    colleges: Vec<CollegeRecord>,
}

impl CollegeCatalog {
    pub fn new(colleges: Vec<CollegeRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, college) in colleges.iter().enumerate() {
            if college.id.0.trim().is_empty() {
                return Err(CatalogError::MissingId { entry: index + 1 });
            }
            if !seen.insert(college.id.0.as_str()) {
                return Err(CatalogError::DuplicateId(college.id.0.clone()));
            }
        }

        Ok(Self { colleges })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            colleges: builtin::colleges(),
        }
    }

    /// Load a catalog file. `.json` files hold an array of records, anything
    /// else is read as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_reader(file)
        } else {
            Self::from_csv_reader(file)
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let colleges = parser::parse_records(reader)?;
        Self::new(colleges)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let colleges: Vec<CollegeRecord> = serde_json::from_reader(reader)?;
        Self::new(colleges)
    }

    pub fn colleges(&self) -> &[CollegeRecord] {
        &self.colleges
    }

    pub fn get(&self, id: &CollegeId) -> Option<&CollegeRecord> {
        self.colleges.iter().find(|college| &college.id == id)
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }
}

/// Read access to a catalog so the diagnosis service can be exercised in isolation.
pub trait CatalogSource: Send + Sync {
    fn colleges(&self) -> Result<Arc<CollegeCatalog>, CatalogError>;
}

/// Catalog held in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Arc<CollegeCatalog>,
}

impl StaticCatalog {
    pub fn new(catalog: CollegeCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn builtin() -> Self {
        Self::new(CollegeCatalog::builtin())
    }
}

impl CatalogSource for StaticCatalog {
    fn colleges(&self) -> Result<Arc<CollegeCatalog>, CatalogError> {
        Ok(Arc::clone(&self.catalog))
    }
}

/// Failures raised while loading or serving a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid catalog JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog entry {entry} has no id")]
    MissingId { entry: usize },
    #[error("catalog id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
