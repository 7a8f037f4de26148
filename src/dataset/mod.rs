//! Dataset Module
//!
//! The immutable table of regions and cities the engine searches.

mod integrity;
mod loader;
mod model;

pub use integrity::{
    health_check, is_dataset_complete, statistics, validate_integrity, validate_integrity_strict,
    DatasetStatistics, HealthCheckReport, IntegrityReport,
};
pub use model::{City, Dataset, DatasetProvider, Region};
