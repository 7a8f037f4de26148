//! Lookup result types and their cached representation.

use serde::Serialize;

use crate::dataset::{City, Region};
use crate::language::Language;

// == Region Summary ==
/// A region viewed in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub region_id: String,
    pub region_name: String,
}

impl RegionSummary {
    pub fn from_region(region: &Region, language: Language) -> Self {
        Self {
            region_id: region.region_id.clone(),
            region_name: region.name(language).to_string(),
        }
    }
}

// == City Details ==
/// A city viewed in one language, with its owning region if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDetails {
    pub city_id: u32,
    pub city_name: String,
    pub region_id: Option<String>,
    pub region_name: Option<String>,
    pub is_assigned: bool,
}

impl CityDetails {
    pub fn assigned(city: &City, region: &Region, language: Language) -> Self {
        Self {
            city_id: city.city_id,
            city_name: city.name(language).to_string(),
            region_id: Some(region.region_id.clone()),
            region_name: Some(region.name(language).to_string()),
            is_assigned: true,
        }
    }

    pub fn unassigned(city: &City, language: Language) -> Self {
        Self {
            city_id: city.city_id,
            city_name: city.name(language).to_string(),
            region_id: None,
            region_name: None,
            is_assigned: false,
        }
    }
}

// == Cached Value ==
/// Engine results as held in the shared cache, one variant per result shape.
///
/// A `None` inside `Region` or `CityDetails` is a cached negative lookup,
/// which is distinct from the store reporting a miss.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Region(Option<RegionSummary>),
    CityDetails(Option<CityDetails>),
    Regions(Vec<RegionSummary>),
    Names(Vec<String>),
    Count(usize),
}
