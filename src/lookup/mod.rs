//! Lookup Module
//!
//! The cached search engine over the region dataset.

mod engine;
mod results;
mod sampling;

pub use engine::LookupEngine;
pub use results::{CachedValue, CityDetails, RegionSummary};
pub use sampling::sample_without_replacement;
