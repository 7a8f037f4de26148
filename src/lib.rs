//! Region Atlas - cached lookups over Moroccan regions and cities
//!
//! Provides language-aware search over an immutable region table, backed by
//! an in-process TTL cache with memoization.

pub mod api;
pub mod cache;
pub mod config;
pub mod dataset;
pub mod error;
pub mod language;
pub mod lookup;
pub mod models;
pub mod tasks;
pub mod validation;

pub use api::AppState;
pub use config::{Config, Settings, SettingsHandle};
pub use dataset::{Dataset, DatasetProvider};
pub use error::{AtlasError, Result};
pub use language::Language;
pub use lookup::LookupEngine;
pub use tasks::spawn_cleanup_task;
