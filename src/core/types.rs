//! Common types used across the application

use std::collections::BTreeMap;

/// Language used when a key or a requested language cannot be resolved
pub const FALLBACK_LANGUAGE: &str = "en";

/// A language the application can display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguage {
    /// Short identifier (e.g., "en")
    pub code: String,
    /// Human-readable display name (e.g., "English")
    pub name: String,
    /// Region-qualified locale tag used for formatting (e.g., "en-US")
    pub locale: String,
}

impl SupportedLanguage {
    pub fn new(code: &str, name: &str, locale: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            locale: locale.to_string(),
        }
    }
}

/// Fixed mapping from language code to its description.
///
/// Built once at start-up; this is the only source of truth for which
/// codes are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    languages: BTreeMap<String, SupportedLanguage>,
}

impl SupportedLanguages {
    pub fn new(languages: impl IntoIterator<Item = SupportedLanguage>) -> Self {
        Self {
            languages: languages
                .into_iter()
                .map(|lang| (lang.code.to_ascii_lowercase(), lang))
                .collect(),
        }
    }

    /// Get a language by its exact code
    pub fn get(&self, code: &str) -> Option<&SupportedLanguage> {
        self.languages.get(&code.to_ascii_lowercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Resolve a possibly region-qualified code ("da-DK", "en_US") to a
    /// supported language, trying the exact code before the base language.
    pub fn resolve(&self, code: &str) -> Option<&SupportedLanguage> {
        let code = code.trim().replace('_', "-");
        if code.is_empty() {
            return None;
        }
        if let Some(lang) = self.get(&code) {
            return Some(lang);
        }
        let base = code.split('-').next().unwrap_or_default();
        self.get(base)
    }

    /// All registered codes, in sorted order
    pub fn codes(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SupportedLanguage> {
        self.languages.values()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self::new([
            SupportedLanguage::new("da", "Dansk", "da-DK"),
            SupportedLanguage::new("en", "English", "en-US"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_languages() {
        let langs = SupportedLanguages::default();

        assert_eq!(langs.codes(), vec!["da", "en"]);
        assert_eq!(langs.get("da").unwrap().name, "Dansk");
        assert_eq!(langs.get("da").unwrap().locale, "da-DK");
        assert_eq!(langs.get("en").unwrap().locale, "en-US");
        assert!(!langs.contains("fr"));
    }

    #[test]
    fn test_resolve_region_qualified() {
        let langs = SupportedLanguages::default();

        assert_eq!(langs.resolve("da-DK").unwrap().code, "da");
        assert_eq!(langs.resolve("en_GB").unwrap().code, "en");
        assert_eq!(langs.resolve("EN").unwrap().code, "en");
        assert!(langs.resolve("fr-FR").is_none());
        assert!(langs.resolve("").is_none());
    }
}
