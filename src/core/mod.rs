//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{BackendConfig, Config, DetectionConfig, DetectionSource, GeneralConfig};
pub use error::{Error, Result};
pub use types::{SupportedLanguage, SupportedLanguages, FALLBACK_LANGUAGE};
