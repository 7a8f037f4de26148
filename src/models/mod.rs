//! Request and Response models for the atlas API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{LanguageQuery, RandomQuery, SearchQuery};
pub use responses::{
    CityCountResponse, CityListResponse, CleanupResponse, ClearResponse, HealthResponse,
    RegionListResponse,
};
