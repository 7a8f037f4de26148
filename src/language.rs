//! Language Module
//!
//! The closed set of languages every region and city name is available in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;

// == Language ==
/// Language selector for localized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Arabic,
}

impl Language {
    /// Every supported language, in canonical order.
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Arabic];

    /// Lowercase name used in queries and cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::Arabic => "arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = AtlasError;

    /// Parses a selector, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "french" => Ok(Language::French),
            "arabic" => Ok(Language::Arabic),
            _ => Err(AtlasError::InvalidLanguage(s.to_string())),
        }
    }
}

// == Localized Names ==
/// A name in each supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedNames {
    pub english: String,
    pub french: String,
    pub arabic: String,
}

impl LocalizedNames {
    pub fn new(
        english: impl Into<String>,
        french: impl Into<String>,
        arabic: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            french: french.into(),
            arabic: arabic.into(),
        }
    }

    /// Returns the name in the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::French => &self.french,
            Language::Arabic => &self.arabic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" French ".parse::<Language>().unwrap(), Language::French);
        assert_eq!("ARABIC".parse::<Language>().unwrap(), Language::Arabic);
    }

    #[test]
    fn test_parse_unknown_language() {
        let result = "spanish".parse::<Language>();
        assert!(matches!(result, Err(AtlasError::InvalidLanguage(v)) if v == "spanish"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Arabic).unwrap();
        assert_eq!(json, "\"arabic\"");
        let parsed: Language = serde_json::from_str("\"french\"").unwrap();
        assert_eq!(parsed, Language::French);
    }

    #[test]
    fn test_localized_names_get() {
        let names = LocalizedNames::new("Fez", "Fès", "فاس");
        assert_eq!(names.get(Language::English), "Fez");
        assert_eq!(names.get(Language::French), "Fès");
        assert_eq!(names.get(Language::Arabic), "فاس");
    }
}
