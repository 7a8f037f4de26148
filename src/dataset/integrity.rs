//! Dataset integrity checks and statistics.

use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::{City, DatasetProvider};
use crate::error::{AtlasError, Result};
use crate::language::Language;

/// Outcome of [`validate_integrity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Outcome of [`health_check`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCheckReport {
    /// Valid and complete
    pub is_healthy: bool,
    pub integrity: IntegrityReport,
    pub statistics: DatasetStatistics,
    pub is_complete: bool,
    pub recommendations: Vec<String>,
}

/// Completeness floors for a national region table.
pub const MIN_REGIONS: usize = 10;
pub const MIN_TOTAL_CITIES: usize = 50;
pub const MIN_AVERAGE_CITIES_PER_REGION: f64 = 1.0;

/// Below this average, regions are reported as thin.
pub const TARGET_AVERAGE_CITIES_PER_REGION: f64 = 5.0;

/// Share of unassigned to assigned cities above which assignment is advised.
pub const MAX_UNASSIGNED_RATIO: f64 = 0.1;

/// Counts describing a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStatistics {
    pub regions_count: usize,
    pub assigned_cities_count: usize,
    pub unassigned_cities_count: usize,
    pub total_cities_count: usize,
    /// Rounded to two decimals
    pub average_cities_per_region: f64,
}

/// Checks IDs and names for emptiness and uniqueness.
pub fn validate_integrity(dataset: &dyn DatasetProvider) -> IntegrityReport {
    let mut errors = Vec::new();

    for (index, region) in dataset.regions().iter().enumerate() {
        if region.region_id.trim().is_empty() {
            errors.push(format!("Region at index {} has an empty region_id", index));
        }
        for language in Language::ALL {
            if region.name(language).trim().is_empty() {
                errors.push(format!(
                    "Region at index {} has an empty {} name",
                    index, language
                ));
            }
        }
        for (city_index, city) in region.cities().iter().enumerate() {
            check_city(
                city,
                &format!("City at index {} in region {}", city_index, region.region_id),
                &mut errors,
            );
        }
    }

    for (index, city) in dataset.unassigned_cities().iter().enumerate() {
        check_city(
            city,
            &format!("Unassigned city at index {}", index),
            &mut errors,
        );
    }

    let mut region_ids = HashSet::new();
    if !dataset
        .regions()
        .iter()
        .all(|r| region_ids.insert(r.region_id.as_str()))
    {
        errors.push("Duplicate region IDs found".to_string());
    }

    let mut city_ids = HashSet::new();
    if !dataset.all_cities().all(|c| city_ids.insert(c.city_id)) {
        errors.push("Duplicate city IDs found".to_string());
    }

    IntegrityReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn check_city(city: &City, label: &str, errors: &mut Vec<String>) {
    if city.city_id == 0 {
        errors.push(format!("{} has an invalid city_id", label));
    }
    for language in Language::ALL {
        if city.name(language).trim().is_empty() {
            errors.push(format!("{} has an empty {} name", label, language));
        }
    }
}

/// Like [`validate_integrity`], failing with every problem joined by `; `.
pub fn validate_integrity_strict(dataset: &dyn DatasetProvider) -> Result<()> {
    let report = validate_integrity(dataset);
    if report.is_valid {
        Ok(())
    } else {
        Err(AtlasError::DataIntegrity(report.errors.join("; ")))
    }
}

/// Region, city and average-per-region counts.
pub fn statistics(dataset: &dyn DatasetProvider) -> DatasetStatistics {
    let regions_count = dataset.regions().len();
    let assigned_cities_count: usize = dataset.regions().iter().map(|r| r.cities().len()).sum();
    let unassigned_cities_count = dataset.unassigned_cities().len();

    let average = if regions_count == 0 {
        0.0
    } else {
        assigned_cities_count as f64 / regions_count as f64
    };

    DatasetStatistics {
        regions_count,
        assigned_cities_count,
        unassigned_cities_count,
        total_cities_count: assigned_cities_count + unassigned_cities_count,
        average_cities_per_region: (average * 100.0).round() / 100.0,
    }
}

fn meets_completeness_floors(stats: &DatasetStatistics) -> bool {
    stats.regions_count >= MIN_REGIONS
        && stats.total_cities_count >= MIN_TOTAL_CITIES
        && stats.average_cities_per_region >= MIN_AVERAGE_CITIES_PER_REGION
}

/// Whether the dataset has enough regions and cities to be useful.
pub fn is_dataset_complete(dataset: &dyn DatasetProvider) -> bool {
    meets_completeness_floors(&statistics(dataset))
}

/// Integrity, statistics and completeness in one report, with a list of
/// suggested fixes.
pub fn health_check(dataset: &dyn DatasetProvider) -> HealthCheckReport {
    let integrity = validate_integrity(dataset);
    let statistics = statistics(dataset);
    let is_complete = meets_completeness_floors(&statistics);

    let mut recommendations = Vec::new();
    if !integrity.is_valid {
        recommendations.push("Fix data integrity issues".to_string());
    }
    if !is_complete {
        recommendations.push("Consider adding more cities and regions".to_string());
    }
    if statistics.average_cities_per_region < TARGET_AVERAGE_CITIES_PER_REGION {
        recommendations.push("Some regions might need more cities".to_string());
    }
    if statistics.unassigned_cities_count as f64
        > statistics.assigned_cities_count as f64 * MAX_UNASSIGNED_RATIO
    {
        recommendations.push("Consider assigning unassigned cities to regions".to_string());
    }

    HealthCheckReport {
        is_healthy: integrity.is_valid && is_complete,
        integrity,
        statistics,
        is_complete,
        recommendations,
    }
}
