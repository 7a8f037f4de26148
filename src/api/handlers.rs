//! API Handlers
//!
//! HTTP request handlers for the lookup, cache, dataset and settings endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::extract::{ApiJson, ApiQuery};
use crate::cache::{CacheStats, CacheStore};
use crate::config::{Config, Settings, SettingsHandle, SettingsUpdate};
use crate::dataset::{
    self, DatasetProvider, DatasetStatistics, HealthCheckReport, IntegrityReport,
};
use crate::error::{AtlasError, Result};
use crate::language::Language;
use crate::lookup::{CachedValue, CityDetails, LookupEngine, RegionSummary};
use crate::models::{
    CityCountResponse, CityListResponse, CleanupResponse, ClearResponse, HealthResponse,
    LanguageQuery, RandomQuery, RegionListResponse, SearchQuery,
};
use crate::validation::validate_language_with_mode;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached lookup engine
    pub engine: Arc<LookupEngine>,
    /// The engine's cache, shared with the cleanup task
    pub cache: Arc<CacheStore<CachedValue>>,
    /// Live settings, shared with the cache
    pub settings: SettingsHandle,
}

impl AppState {
    /// Creates a new AppState over the given dataset and settings.
    pub fn new(dataset: Arc<dyn DatasetProvider>, settings: SettingsHandle) -> Self {
        let cache = Arc::new(CacheStore::new(settings.clone()));
        let engine = Arc::new(LookupEngine::new(dataset, cache.clone()));
        Self {
            engine,
            cache,
            settings,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config, dataset: Arc<dyn DatasetProvider>) -> Self {
        Self::new(dataset, SettingsHandle::new(config.settings.clone()))
    }

    /// Resolves the `lang` query parameter.
    ///
    /// Absent → the default language. Unknown → the default language, or
    /// an error under strict validation.
    pub fn resolve_language(&self, lang: Option<&str>) -> Result<Language> {
        let settings = self.settings.snapshot();
        match lang {
            Some(lang) => validate_language_with_mode(lang, &settings),
            None => Ok(settings.default_language),
        }
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Regions ==

/// Handler for GET /regions
pub async fn list_regions_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<RegionListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let regions = state.engine.all_regions(language);
    Ok(Json(RegionListResponse::new(language, regions)))
}

/// Handler for GET /regions/search
pub async fn search_regions_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<RegionListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let regions = state.engine.search_regions(&query.q, language);
    Ok(Json(RegionListResponse::new(language, regions)))
}

/// Handler for GET /regions/random
pub async fn random_regions_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<RegionListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let regions = state.engine.random_regions(query.count(), language);
    Ok(Json(RegionListResponse::new(language, regions)))
}

/// Handler for GET /regions/by-name/:name
pub async fn region_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<RegionSummary>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    state
        .engine
        .find_region_by_name(&name, language)
        .map(Json)
        .ok_or_else(|| AtlasError::NotFound(format!("Region '{}'", name)))
}

/// Handler for GET /regions/:region_id/cities
pub async fn region_cities_handler(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<CityListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let cities = state.engine.region_cities(&region_id, language);
    Ok(Json(CityListResponse::new(language, cities)))
}

/// Handler for GET /regions/:region_id/cities/count
pub async fn region_city_count_handler(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<Json<CityCountResponse>> {
    let count = state.engine.count_cities_in_region(&region_id)?;
    Ok(Json(CityCountResponse { region_id, count }))
}

// == Cities ==

/// Handler for GET /cities
pub async fn list_cities_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<CityListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let cities = state.engine.list_all_cities(language);
    Ok(Json(CityListResponse::new(language, cities)))
}

/// Handler for GET /cities/search
pub async fn search_cities_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<CityListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let cities = state.engine.search_cities(&query.q, language);
    Ok(Json(CityListResponse::new(language, cities)))
}

/// Handler for GET /cities/random
pub async fn random_cities_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<CityListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let cities = state.engine.random_cities(query.count(), language);
    Ok(Json(CityListResponse::new(language, cities)))
}

/// Handler for GET /cities/unassigned
pub async fn unassigned_cities_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<CityListResponse>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    let cities = state.engine.unassigned_cities(language);
    Ok(Json(CityListResponse::new(language, cities)))
}

/// Handler for GET /cities/details/:name
pub async fn city_details_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiQuery(query): ApiQuery<LanguageQuery>,
) -> Result<Json<CityDetails>> {
    let language = state.resolve_language(query.lang.as_deref())?;
    state
        .engine
        .find_city_details(&name, language)
        .map(Json)
        .ok_or_else(|| AtlasError::NotFound(format!("City '{}'", name)))
}

// == Dataset ==

/// Handler for GET /dataset/stats
pub async fn dataset_stats_handler(State(state): State<AppState>) -> Json<DatasetStatistics> {
    Json(dataset::statistics(state.engine.dataset()))
}

/// Handler for GET /dataset/integrity
pub async fn dataset_integrity_handler(State(state): State<AppState>) -> Json<IntegrityReport> {
    Json(dataset::validate_integrity(state.engine.dataset()))
}

/// Handler for GET /dataset/health
pub async fn dataset_health_handler(State(state): State<AppState>) -> Json<HealthCheckReport> {
    Json(dataset::health_check(state.engine.dataset()))
}

// == Cache ==

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.len();
    state.cache.clear();
    Json(ClearResponse::new(cleared))
}

/// Handler for POST /cache/cleanup
pub async fn cleanup_cache_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    Json(CleanupResponse {
        removed: state.cache.cleanup_expired(),
    })
}

// == Settings ==

/// Handler for GET /config
pub async fn get_config_handler(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.snapshot())
}

/// Handler for PATCH /config
pub async fn update_config_handler(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<SettingsUpdate>,
) -> Result<Json<Settings>> {
    Ok(Json(state.settings.apply(update)?))
}

/// Handler for DELETE /config
pub async fn reset_config_handler(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.reset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn test_state() -> AppState {
        let dataset = Dataset::builtin().unwrap();
        AppState::new(Arc::new(dataset), SettingsHandle::default())
    }

    fn lang(lang: &str) -> ApiQuery<LanguageQuery> {
        ApiQuery(LanguageQuery {
            lang: Some(lang.to_string()),
        })
    }

    #[tokio::test]
    async fn test_region_by_name_handler() {
        let state = test_state();

        let response = region_by_name_handler(
            State(state),
            Path("souss-massa".to_string()),
            lang("french"),
        )
        .await
        .unwrap();

        assert_eq!(response.region_name, "Souss-Massa");
    }

    #[tokio::test]
    async fn test_region_by_name_not_found() {
        let state = test_state();

        let result =
            region_by_name_handler(State(state), Path("Atlantis".to_string()), lang("english"))
                .await;
        assert!(matches!(result, Err(AtlasError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_city_details_handler_assigned() {
        let state = test_state();

        let response =
            city_details_handler(State(state), Path("Fès".to_string()), lang("french"))
                .await
                .unwrap();

        assert_eq!(response.city_id, 9);
        assert!(response.is_assigned);
        assert_eq!(response.region_name.as_deref(), Some("Fès-Meknès"));
    }

    #[tokio::test]
    async fn test_city_count_handler_invalid_region() {
        let state = test_state();

        let result = region_city_count_handler(State(state), Path("bogus".to_string())).await;
        assert!(matches!(result, Err(AtlasError::InvalidRegionId(_))));
    }

    #[tokio::test]
    async fn test_missing_lang_uses_default_language() {
        let state = test_state();
        state.settings.set_default_language(Language::Arabic);

        let response = list_regions_handler(State(state), ApiQuery(LanguageQuery::default()))
            .await
            .unwrap();

        assert_eq!(response.language, Language::Arabic);
        assert_eq!(response.regions[1].region_name, "الشرق");
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_unknown_lang() {
        let state = test_state();
        state.settings.set_strict_validation(true);

        let result = list_cities_handler(State(state), lang("german")).await;
        assert!(matches!(result, Err(AtlasError::InvalidLanguage(_))));
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let state = test_state();
        state.engine.list_all_cities(Language::English);
        assert_eq!(state.cache.len(), 1);

        let response = clear_cache_handler(State(state.clone())).await;
        assert_eq!(response.cleared, 1);
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_update_config_handler() {
        let state = test_state();
        let update = SettingsUpdate {
            enable_caching: Some(false),
            ..Default::default()
        };

        let response = update_config_handler(State(state.clone()), ApiJson(update))
            .await
            .unwrap();

        assert!(!response.enable_caching);
        assert!(!state.cache.stats().is_enabled);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
