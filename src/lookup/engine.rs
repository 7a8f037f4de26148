//! Lookup Engine Module
//!
//! Cached point lookups, substring search, counting, and random sampling
//! over the dataset.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cache::CacheStore;
use crate::cache_key;
use crate::dataset::{City, DatasetProvider};
use crate::error::{AtlasError, Result};
use crate::language::Language;
use crate::lookup::sampling::sample_without_replacement;
use crate::lookup::{CachedValue, CityDetails, RegionSummary};

// == Lookup Engine ==
/// Language-aware lookups that consult the cache before scanning the dataset.
///
/// Cache keys are namespaced by operation, lowercased query text, and
/// language. Negative point lookups are cached like any other result.
pub struct LookupEngine {
    dataset: Arc<dyn DatasetProvider>,
    cache: Arc<CacheStore<CachedValue>>,
    rng: Mutex<StdRng>,
}

impl LookupEngine {
    // == Constructors ==
    /// Creates an engine with an OS-seeded random source.
    pub fn new(dataset: Arc<dyn DatasetProvider>, cache: Arc<CacheStore<CachedValue>>) -> Self {
        Self::with_rng(dataset, cache, StdRng::from_os_rng())
    }

    /// Creates an engine with the given random source.
    pub fn with_rng(
        dataset: Arc<dyn DatasetProvider>,
        cache: Arc<CacheStore<CachedValue>>,
        rng: StdRng,
    ) -> Self {
        Self {
            dataset,
            cache,
            rng: Mutex::new(rng),
        }
    }

    /// Dataset the engine searches.
    pub fn dataset(&self) -> &dyn DatasetProvider {
        self.dataset.as_ref()
    }

    /// Store holding every cached lookup result.
    pub fn cache(&self) -> &Arc<CacheStore<CachedValue>> {
        &self.cache
    }

    /// Serves `key` from the cache, or computes and stores it.
    ///
    /// A cached value of the wrong shape counts as a miss and is replaced.
    fn cached<T: Clone>(
        &self,
        key: String,
        unwrap: impl FnOnce(CachedValue) -> Option<T>,
        wrap: impl FnOnce(T) -> CachedValue,
        compute: impl FnOnce() -> T,
    ) -> T {
        if let Some(value) = self.cache.get(&key).and_then(unwrap) {
            debug!(key = %key, "Cache hit");
            return value;
        }

        debug!(key = %key, "Cache miss");
        let value = compute();
        self.cache.set(key, wrap(value.clone()), None);
        value
    }

    // == Find Region By Name ==
    /// Case-insensitive exact match on the region name in `language`.
    pub fn find_region_by_name(&self, name: &str, language: Language) -> Option<RegionSummary> {
        let needle = name.to_lowercase();
        let key = cache_key!("region-by-name", needle, language);

        self.cached(
            key,
            |v| match v {
                CachedValue::Region(region) => Some(region),
                _ => None,
            },
            CachedValue::Region,
            || {
                self.dataset
                    .regions()
                    .iter()
                    .find(|r| r.name(language).to_lowercase() == needle)
                    .map(|r| RegionSummary::from_region(r, language))
            },
        )
    }

    // == Find City Details ==
    /// Case-insensitive exact match on the city name in `language`.
    ///
    /// Assigned cities are searched first, regions in dataset order, then
    /// unassigned cities. The first match wins.
    pub fn find_city_details(&self, name: &str, language: Language) -> Option<CityDetails> {
        let needle = name.to_lowercase();
        let key = cache_key!("city-details", needle, language);

        self.cached(
            key,
            |v| match v {
                CachedValue::CityDetails(details) => Some(details),
                _ => None,
            },
            CachedValue::CityDetails,
            || {
                let matches = |city: &&City| city.name(language).to_lowercase() == needle;

                self.dataset
                    .regions()
                    .iter()
                    .find_map(|region| {
                        region
                            .cities()
                            .iter()
                            .find(matches)
                            .map(|city| CityDetails::assigned(city, region, language))
                    })
                    .or_else(|| {
                        self.dataset
                            .unassigned_cities()
                            .iter()
                            .find(matches)
                            .map(|city| CityDetails::unassigned(city, language))
                    })
            },
        )
    }

    // == Search Regions ==
    /// Case-insensitive substring search over region names, in dataset order.
    ///
    /// A blank query returns nothing and never touches the cache.
    pub fn search_regions(&self, query: &str, language: Language) -> Vec<RegionSummary> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let key = cache_key!("search-regions", needle, language);

        self.cached(
            key,
            |v| match v {
                CachedValue::Regions(regions) => Some(regions),
                _ => None,
            },
            CachedValue::Regions,
            || {
                self.dataset
                    .regions()
                    .iter()
                    .filter(|r| r.name(language).to_lowercase().contains(&needle))
                    .map(|r| RegionSummary::from_region(r, language))
                    .collect()
            },
        )
    }

    // == Search Cities ==
    /// Case-insensitive substring search over assigned then unassigned city
    /// names, deduplicated in first-seen order.
    ///
    /// A blank query returns nothing and never touches the cache.
    pub fn search_cities(&self, query: &str, language: Language) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let key = cache_key!("search-cities", needle, language);

        self.cached(key, unwrap_names, CachedValue::Names, || {
            let mut seen = HashSet::new();
            self.dataset
                .all_cities()
                .map(|c| c.name(language))
                .filter(|name| name.to_lowercase().contains(&needle))
                .filter(|name| seen.insert(*name))
                .map(str::to_string)
                .collect()
        })
    }

    // == Count Cities In Region ==
    /// Number of cities assigned to the region with this exact ID.
    ///
    /// Unlike the name lookups, an unknown ID is an error.
    pub fn count_cities_in_region(&self, region_id: &str) -> Result<usize> {
        let key = cache_key!("cities-count", region_id);

        if let Some(CachedValue::Count(count)) = self.cache.get(&key) {
            debug!(key = %key, "Cache hit");
            return Ok(count);
        }

        let region = self
            .dataset
            .region(region_id)
            .ok_or_else(|| AtlasError::InvalidRegionId(region_id.to_string()))?;
        let count = region.cities().len();
        self.cache.set(key, CachedValue::Count(count), None);
        Ok(count)
    }

    // == List All Cities ==
    /// Every city name, assigned and unassigned, deduplicated and sorted.
    pub fn list_all_cities(&self, language: Language) -> Vec<String> {
        let key = cache_key!("all-cities", language);

        self.cached(key, unwrap_names, CachedValue::Names, || {
            let mut names: Vec<String> = self
                .dataset
                .all_cities()
                .map(|c| c.name(language).to_string())
                .collect();
            names.sort();
            names.dedup();
            names
        })
    }

    // == Existence Checks ==
    /// True when [`find_city_details`](Self::find_city_details) finds the name.
    pub fn city_exists(&self, name: &str, language: Language) -> bool {
        self.find_city_details(name, language).is_some()
    }

    /// True when [`find_region_by_name`](Self::find_region_by_name) finds the name.
    pub fn region_exists(&self, name: &str, language: Language) -> bool {
        self.find_region_by_name(name, language).is_some()
    }

    // == Random Sampling ==
    /// Up to `count` distinct regions, drawn with the engine's random source.
    ///
    /// Never cached.
    pub fn random_regions(&self, count: usize, language: Language) -> Vec<RegionSummary> {
        let mut rng = self.rng.lock();
        self.random_regions_with(count, language, &mut *rng)
    }

    /// [`random_regions`](Self::random_regions) drawing from `rng`.
    pub fn random_regions_with<R: Rng + ?Sized>(
        &self,
        count: usize,
        language: Language,
        rng: &mut R,
    ) -> Vec<RegionSummary> {
        sample_without_replacement(self.all_regions(language), count, rng)
    }

    /// Up to `count` distinct city names from [`list_all_cities`](Self::list_all_cities).
    ///
    /// Never cached.
    pub fn random_cities(&self, count: usize, language: Language) -> Vec<String> {
        let mut rng = self.rng.lock();
        self.random_cities_with(count, language, &mut *rng)
    }

    /// [`random_cities`](Self::random_cities) drawing from `rng`.
    pub fn random_cities_with<R: Rng + ?Sized>(
        &self,
        count: usize,
        language: Language,
        rng: &mut R,
    ) -> Vec<String> {
        sample_without_replacement(self.list_all_cities(language), count, rng)
    }

    // == Catalog ==
    /// Every region, in dataset order.
    pub fn all_regions(&self, language: Language) -> Vec<RegionSummary> {
        self.dataset
            .regions()
            .iter()
            .map(|r| RegionSummary::from_region(r, language))
            .collect()
    }

    /// Every region ID, in dataset order.
    pub fn region_ids(&self) -> Vec<String> {
        self.dataset
            .regions()
            .iter()
            .map(|r| r.region_id.clone())
            .collect()
    }

    /// City names of one region. Unknown IDs yield an empty list.
    pub fn region_cities(&self, region_id: &str, language: Language) -> Vec<String> {
        self.dataset
            .region(region_id)
            .map(|r| names_of(r.cities(), language))
            .unwrap_or_default()
    }

    /// Names of every assigned city, regions in dataset order.
    pub fn assigned_cities(&self, language: Language) -> Vec<String> {
        self.dataset
            .regions()
            .iter()
            .flat_map(|r| r.cities().iter())
            .map(|c| c.name(language).to_string())
            .collect()
    }

    /// Names of cities with no region.
    pub fn unassigned_cities(&self, language: Language) -> Vec<String> {
        names_of(self.dataset.unassigned_cities(), language)
    }

    /// Number of regions.
    pub fn count_regions(&self) -> usize {
        self.dataset.regions().len()
    }

    /// Number of cities belonging to a region.
    pub fn count_assigned_cities(&self) -> usize {
        self.dataset.regions().iter().map(|r| r.cities().len()).sum()
    }

    /// Number of cities with no region.
    pub fn count_unassigned_cities(&self) -> usize {
        self.dataset.unassigned_cities().len()
    }

    /// Assigned plus unassigned cities, duplicates included.
    pub fn count_all_cities(&self) -> usize {
        self.count_assigned_cities() + self.count_unassigned_cities()
    }
}

fn unwrap_names(value: CachedValue) -> Option<Vec<String>> {
    match value {
        CachedValue::Names(names) => Some(names),
        _ => None,
    }
}

fn names_of(cities: &[City], language: Language) -> Vec<String> {
    cities.iter().map(|c| c.name(language).to_string()).collect()
}
