//! Cache key composition.

use std::fmt::Display;

/// Separator between key parts.
pub const KEY_DELIMITER: &str = ":";

/// Joins key parts with [`KEY_DELIMITER`].
///
/// Parts are written verbatim. Callers lowercase free text beforehand so
/// equivalent queries map to the same key.
pub fn create_cache_key<P: Display>(parts: &[P]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(KEY_DELIMITER)
}

/// Builds a cache key from heterogeneous parts.
///
/// ```
/// use region_atlas::cache_key;
/// assert_eq!(cache_key!("a", 1, "b"), "a:1:b");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($($part:expr),+ $(,)?) => {
        [$(::std::string::ToString::to_string(&$part)),+].join($crate::cache::KEY_DELIMITER)
    };
}
