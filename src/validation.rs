//! Validation Module
//!
//! Input guards used before a value reaches the lookup engine.

use crate::config::Settings;
use crate::dataset::DatasetProvider;
use crate::error::{AtlasError, Result};
use crate::language::Language;

/// Lenient language normalization: unknown input falls back to `fallback`.
pub fn validate_language(input: &str, fallback: Language) -> Language {
    input.parse().unwrap_or(fallback)
}

/// Strict language normalization: unknown input is an error.
pub fn validate_language_strict(input: &str) -> Result<Language> {
    input.parse()
}

/// Strict or lenient depending on `settings.strict_validation`.
///
/// Lenient mode falls back to `settings.default_language`.
pub fn validate_language_with_mode(input: &str, settings: &Settings) -> Result<Language> {
    if settings.strict_validation {
        validate_language_strict(input)
    } else {
        Ok(validate_language(input, settings.default_language))
    }
}

pub fn validate_languages(inputs: &[&str], fallback: Language) -> Vec<Language> {
    inputs
        .iter()
        .map(|input| validate_language(input, fallback))
        .collect()
}

pub fn is_language_supported(input: &str) -> bool {
    input.parse::<Language>().is_ok()
}

pub fn supported_languages() -> &'static [Language] {
    &Language::ALL
}

/// True if the dataset has a region with this exact ID.
pub fn validate_region_id(dataset: &dyn DatasetProvider, region_id: &str) -> bool {
    dataset.region(region_id).is_some()
}

pub fn validate_region_id_strict(dataset: &dyn DatasetProvider, region_id: &str) -> Result<()> {
    if validate_region_id(dataset, region_id) {
        Ok(())
    } else {
        Err(AtlasError::InvalidRegionId(region_id.to_string()))
    }
}

/// City IDs are positive integers.
pub fn validate_city_id(city_id: i64) -> bool {
    city_id > 0 && city_id <= u32::MAX as i64
}

pub fn validate_city_id_strict(city_id: i64) -> Result<u32> {
    if validate_city_id(city_id) {
        Ok(city_id as u32)
    } else {
        Err(AtlasError::InvalidCityId(city_id.to_string()))
    }
}

/// True for strings with at least one non-whitespace character.
pub fn validate_non_empty(input: &str) -> bool {
    !input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_validate_language_fallback() {
        assert_eq!(validate_language(" FRENCH", Language::English), Language::French);
        assert_eq!(validate_language("german", Language::Arabic), Language::Arabic);
    }

    #[test]
    fn test_validate_language_strict() {
        assert_eq!(validate_language_strict("arabic").unwrap(), Language::Arabic);
        assert!(matches!(
            validate_language_strict("german"),
            Err(AtlasError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_validate_language_with_mode() {
        let mut settings = Settings {
            default_language: Language::French,
            ..Settings::default()
        };
        assert_eq!(
            validate_language_with_mode("german", &settings).unwrap(),
            Language::French
        );

        settings.strict_validation = true;
        assert!(validate_language_with_mode("german", &settings).is_err());
        assert_eq!(
            validate_language_with_mode("english", &settings).unwrap(),
            Language::English
        );
    }

    #[test]
    fn test_validate_languages() {
        let languages = validate_languages(&["arabic", "?", "French"], Language::English);
        assert_eq!(
            languages,
            vec![Language::Arabic, Language::English, Language::French]
        );
    }

    #[test]
    fn test_supported_languages() {
        assert_eq!(supported_languages().len(), 3);
        assert!(is_language_supported("English"));
        assert!(!is_language_supported("berber"));
    }

    #[test]
    fn test_validate_region_id() {
        let dataset = Dataset::builtin().unwrap();
        let id = dataset.regions()[0].region_id.clone();

        assert!(validate_region_id(&dataset, &id));
        assert!(!validate_region_id(&dataset, "not-a-region"));
        assert!(matches!(
            validate_region_id_strict(&dataset, "not-a-region"),
            Err(AtlasError::InvalidRegionId(v)) if v == "not-a-region"
        ));
    }

    #[test]
    fn test_validate_city_id() {
        assert!(validate_city_id(1));
        assert!(!validate_city_id(0));
        assert!(!validate_city_id(-4));
        assert_eq!(validate_city_id_strict(12).unwrap(), 12);
        assert!(matches!(
            validate_city_id_strict(0),
            Err(AtlasError::InvalidCityId(_))
        ));
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty(" x "));
        assert!(!validate_non_empty("   "));
        assert!(!validate_non_empty(""));
    }
}
