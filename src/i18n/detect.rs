//! Preferred language detection

use crate::core::{DetectionConfig, DetectionSource, SupportedLanguages};

/// Language preference signals read from the hosting environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSignals {
    /// Candidates from locale environment variables, in precedence order
    pub variables: Vec<String>,
    /// Locales reported by the operating system
    pub system: Vec<String>,
}

impl EnvironmentSignals {
    /// Read the configured environment variables and the OS locales
    pub fn capture(config: &DetectionConfig) -> Self {
        let variables = config
            .env_vars
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .flat_map(|value| {
                // LANGUAGE holds a colon-separated priority list
                value.split(':').map(str::to_string).collect::<Vec<_>>()
            })
            .collect();

        Self {
            variables,
            system: sys_locale::get_locales().collect(),
        }
    }

    fn candidates(&self) -> impl Iterator<Item = &str> {
        self.variables
            .iter()
            .chain(self.system.iter())
            .map(String::as_str)
    }
}

/// Normalize a POSIX or BCP 47 locale ("da_DK.UTF-8@euro") to a tag ("da-DK").
///
/// Returns `None` for empty values and the "C"/"POSIX" locales.
pub fn normalize_locale(raw: &str) -> Option<String> {
    let tag = raw
        .split('.')
        .next()
        .unwrap_or_default()
        .split('@')
        .next()
        .unwrap_or_default()
        .trim()
        .replace('_', "-");

    if tag.is_empty() || tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
        None
    } else {
        Some(tag)
    }
}

/// Detect the preferred language.
///
/// Sources are consulted in the configured order and the first candidate
/// that resolves to a supported language wins. Returns the supported code,
/// or `None` when nothing matched and the fallback should be used.
pub fn detect_language(
    order: &[DetectionSource],
    signals: &EnvironmentSignals,
    stored: Option<&str>,
    languages: &SupportedLanguages,
) -> Option<String> {
    for source in order {
        let found = match source {
            DetectionSource::Environment => signals
                .candidates()
                .filter_map(normalize_locale)
                .find_map(|tag| languages.resolve(&tag)),
            DetectionSource::Stored => stored
                .and_then(normalize_locale)
                .and_then(|tag| languages.resolve(&tag)),
        };

        if let Some(lang) = found {
            log::debug!("Detected language '{}' from {:?}", lang.code, source);
            return Some(lang.code.clone());
        }
    }

    None
}
