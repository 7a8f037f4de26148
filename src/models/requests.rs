//! Request DTOs for the atlas API
//!
//! Query-string parameters accepted by the lookup endpoints.

use serde::Deserialize;

/// Default number of elements returned by the random endpoints.
pub const DEFAULT_RANDOM_COUNT: usize = 1;

/// `?lang=` on any endpoint returning localized names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

/// `?q=&lang=` for the search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// `?count=&lang=` for the random endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomQuery {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl RandomQuery {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_RANDOM_COUNT)
    }
}
