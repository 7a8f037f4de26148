//! API Module
//!
//! HTTP handlers and routing for the atlas REST API.
//!
//! # Endpoints
//! - `GET /regions`, `/regions/search`, `/regions/random`, `/regions/by-name/:name`
//! - `GET /regions/:region_id/cities`, `/regions/:region_id/cities/count`
//! - `GET /cities`, `/cities/search`, `/cities/random`, `/cities/unassigned`,
//!   `/cities/details/:name`
//! - `GET /dataset/stats`, `/dataset/integrity`, `/dataset/health`
//! - `GET /cache/stats`, `DELETE /cache`, `POST /cache/cleanup`
//! - `GET|PATCH|DELETE /config`
//! - `GET /health`

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::{ApiJson, ApiQuery};
pub use handlers::*;
pub use routes::create_router;
