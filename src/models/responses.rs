//! Response DTOs for the atlas API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::language::Language;
use crate::lookup::RegionSummary;

/// Response body for endpoints returning regions
#[derive(Debug, Clone, Serialize)]
pub struct RegionListResponse {
    /// Language the names are in
    pub language: Language,
    pub count: usize,
    pub regions: Vec<RegionSummary>,
}

impl RegionListResponse {
    pub fn new(language: Language, regions: Vec<RegionSummary>) -> Self {
        Self {
            language,
            count: regions.len(),
            regions,
        }
    }
}

/// Response body for endpoints returning city names
#[derive(Debug, Clone, Serialize)]
pub struct CityListResponse {
    /// Language the names are in
    pub language: Language,
    pub count: usize,
    pub cities: Vec<String>,
}

impl CityListResponse {
    pub fn new(language: Language, cities: Vec<String>) -> Self {
        Self {
            language,
            count: cities.len(),
            cities,
        }
    }
}

/// Response body for GET /regions/:region_id/cities/count
#[derive(Debug, Clone, Serialize)]
pub struct CityCountResponse {
    pub region_id: String,
    pub count: usize,
}

/// Response body for POST /cache/cleanup
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    /// Number of expired entries removed
    pub removed: usize,
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cache cleared ({} entries)", cleared),
            cleared,
        }
    }
}

/// Response body for the health check endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status of the server
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_list_counts() {
        let resp = RegionListResponse::new(
            Language::French,
            vec![RegionSummary {
                region_id: "r".to_string(),
                region_name: "Souss-Massa".to_string(),
            }],
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["language"], "french");
        assert_eq!(json["count"], 1);
        assert_eq!(json["regions"][0]["region_name"], "Souss-Massa");
    }

    #[test]
    fn test_city_list_counts() {
        let resp = CityListResponse::new(Language::English, vec!["Rabat".into(), "Sale".into()]);
        assert_eq!(resp.count, 2);
    }

    #[test]
    fn test_clear_response_message() {
        let resp = ClearResponse::new(3);
        assert!(resp.message.contains('3'));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
