use super::{CatalogError, CollegeId, CollegeRecord};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const DEPARTMENT_SEPARATOR: char = ';';

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CollegeRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = record?;
        if row.id.is_empty() {
            return Err(CatalogError::MissingId { entry: index + 1 });
        }
        records.push(row.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    departments: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl CatalogRow {
    fn into_record(self) -> CollegeRecord {
        CollegeRecord {
            id: CollegeId(self.id),
            name: self.name,
            location: self.location,
            departments: split_departments(&self.departments),
            description: self.description,
        }
    }
}

fn split_departments(raw: &str) -> Vec<String> {
    raw.split(DEPARTMENT_SEPARATOR)
        .map(str::trim)
        .filter(|department| !department.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
