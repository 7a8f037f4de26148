//! Dataset Loader Module
//!
//! Parses the JSON region table into the dataset model.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::dataset::{City, Dataset, Region};
use crate::error::Result;
use crate::language::LocalizedNames;

/// Dataset shipped with the crate.
const BUILTIN_DATASET: &str = include_str!("../../data/regions.json");

#[derive(Debug, Deserialize)]
struct RawDataset {
    regions: Vec<RawRegion>,
    #[serde(default)]
    unassigned_cities: Vec<RawCity>,
}

#[derive(Debug, Deserialize)]
struct RawRegion {
    region_id: String,
    region_english: String,
    region_french: String,
    region_arabic: String,
    #[serde(default)]
    cities: Vec<RawCity>,
}

#[derive(Debug, Deserialize)]
struct RawCity {
    city_id: u32,
    city_english: String,
    city_french: String,
    city_arabic: String,
}

impl From<RawCity> for City {
    fn from(raw: RawCity) -> Self {
        City::new(
            raw.city_id,
            LocalizedNames::new(raw.city_english, raw.city_french, raw.city_arabic),
        )
    }
}

impl From<RawRegion> for Region {
    fn from(raw: RawRegion) -> Self {
        Region::new(
            raw.region_id,
            LocalizedNames::new(raw.region_english, raw.region_french, raw.region_arabic),
            raw.cities.into_iter().map(City::from).collect(),
        )
    }
}

impl Dataset {
    /// Parses a dataset from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;

        Ok(Dataset::new(
            raw.regions.into_iter().map(Region::from).collect(),
            raw.unassigned_cities.into_iter().map(City::from).collect(),
        ))
    }

    /// Reads and parses a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        info!(path = %path.display(), "Loaded dataset from file");
        Ok(dataset)
    }

    /// The embedded dataset of Moroccan regions and cities.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetProvider;
    use crate::error::AtlasError;
    use crate::language::Language;

    #[test]
    fn test_builtin_dataset_shape() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.regions().len(), 12);
        assert_eq!(dataset.unassigned_cities().len(), 6);

        let casablanca = &dataset.regions()[5];
        assert_eq!(casablanca.name(Language::English), "Casablanca-Settat");
        assert_eq!(casablanca.cities()[0].name(Language::Arabic), "الدار البيضاء");
    }

    #[test]
    fn test_from_json_str_without_unassigned() {
        let json = r#"{"regions":[{"region_id":"x","region_english":"A","region_french":"A","region_arabic":"أ","cities":[]}]}"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.regions().len(), 1);
        assert!(dataset.unassigned_cities().is_empty());
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = Dataset::from_json_str(r#"{"regions": 3}"#);
        assert!(matches!(result, Err(AtlasError::Parse(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Dataset::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(AtlasError::Io(_))));
    }
}
