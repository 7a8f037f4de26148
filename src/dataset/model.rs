//! Dataset Model Module
//!
//! Regions, cities, and the immutable table holding them.

use serde::Serialize;

use crate::language::{Language, LocalizedNames};

// == City ==
/// A city with its localized names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub city_id: u32,
    pub names: LocalizedNames,
}

impl City {
    pub fn new(city_id: u32, names: LocalizedNames) -> Self {
        Self { city_id, names }
    }

    pub fn name(&self, language: Language) -> &str {
        self.names.get(language)
    }
}

// == Region ==
/// A region and the cities assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub region_id: String,
    pub names: LocalizedNames,
    pub cities: Vec<City>,
}

impl Region {
    pub fn new(region_id: impl Into<String>, names: LocalizedNames, cities: Vec<City>) -> Self {
        Self {
            region_id: region_id.into(),
            names,
            cities,
        }
    }

    pub fn name(&self, language: Language) -> &str {
        self.names.get(language)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

// == Dataset Provider ==
/// Read-only source of regions and unassigned cities.
///
/// Implementations must return the same data for the lifetime of the process.
pub trait DatasetProvider: Send + Sync {
    /// Regions in dataset order.
    fn regions(&self) -> &[Region];

    /// Cities that belong to no region.
    fn unassigned_cities(&self) -> &[City];

    /// Finds a region by exact ID.
    fn region(&self, region_id: &str) -> Option<&Region> {
        self.regions().iter().find(|r| r.region_id == region_id)
    }

    /// Assigned cities (regions in order) followed by unassigned ones.
    fn all_cities(&self) -> Box<dyn Iterator<Item = &City> + '_> {
        Box::new(
            self.regions()
                .iter()
                .flat_map(|r| r.cities.iter())
                .chain(self.unassigned_cities().iter()),
        )
    }
}

// == Dataset ==
/// In-memory dataset, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    regions: Vec<Region>,
    unassigned_cities: Vec<City>,
}

impl Dataset {
    pub fn new(regions: Vec<Region>, unassigned_cities: Vec<City>) -> Self {
        Self {
            regions,
            unassigned_cities,
        }
    }
}

impl DatasetProvider for Dataset {
    fn regions(&self) -> &[Region] {
        &self.regions
    }

    fn unassigned_cities(&self) -> &[City] {
        &self.unassigned_cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec![Region::new(
                "r1",
                LocalizedNames::new("North", "Nord", "الشمال"),
                vec![City::new(1, LocalizedNames::new("Alpha", "Alpha", "ألفا"))],
            )],
            vec![City::new(2, LocalizedNames::new("Beta", "Bêta", "بيتا"))],
        )
    }

    #[test]
    fn test_region_lookup_by_id() {
        let dataset = sample();
        assert_eq!(dataset.region("r1").map(|r| r.name(Language::French)), Some("Nord"));
        assert!(dataset.region("r2").is_none());
    }

    #[test]
    fn test_all_cities_order() {
        let dataset = sample();
        let ids: Vec<u32> = dataset.all_cities().map(|c| c.city_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
