//! Internationalization module
//!
//! Provides translations for Danish (da) and English (en), bundled with the
//! application, plus remote loading for languages that are not bundled.
//! Supports automatic language detection and falls back to English for
//! missing keys and unsupported languages.
//!
//! Interpolated values are never escaped here; see [`Unescaped`].

mod backend;
mod bundled;
mod detect;
mod format;
mod table;

pub use backend::{HttpBackend, TranslationBackend};
pub use bundled::bundled_tables;
pub use detect::{detect_language, normalize_locale, EnvironmentSignals};
pub use format::LocaleFormat;
pub use table::{interpolate, TranslationTable, Unescaped};

use crate::core::{Config, Error, Result, SupportedLanguages, FALLBACK_LANGUAGE};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Locale tag used when the active language has no registered locale
const DEFAULT_LOCALE: &str = "en-US";

/// Cache slot of a single language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotRequested,
    Pending,
    Ready(TranslationTable),
    Failed(String),
}

impl LoadState {
    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::NotRequested => LoadStatus::NotRequested,
            LoadState::Pending => LoadStatus::Pending,
            LoadState::Ready(_) => LoadStatus::Ready,
            LoadState::Failed(_) => LoadStatus::Failed,
        }
    }
}

/// Observable state of a language slot, without its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    NotRequested,
    Pending,
    Ready,
    Failed,
}

/// Localization state: active language, fallback, and the table cache
#[derive(Debug)]
pub struct I18n {
    languages: SupportedLanguages,
    fallback: String,
    requested: String,
    cache: HashMap<String, LoadState>,
    debug: bool,
}

impl I18n {
    pub fn builder() -> I18nBuilder {
        I18nBuilder::default()
    }

    /// Set up the application localization: supported languages, bundled
    /// tables, detected language and English fallback.
    pub fn bootstrap(config: &Config) -> Self {
        let signals = EnvironmentSignals::capture(&config.detection);
        Self::bootstrap_with(config, &signals)
    }

    /// Same as [`I18n::bootstrap`] with explicit environment signals
    pub fn bootstrap_with(config: &Config, signals: &EnvironmentSignals) -> Self {
        let languages = SupportedLanguages::default();
        let detected = detect_language(
            &config.detection.order,
            signals,
            config.stored_language(),
            &languages,
        );

        let mut builder = Self::builder()
            .languages(languages)
            .fallback(FALLBACK_LANGUAGE)
            .debug(config.debug_enabled());
        for (code, table) in bundled_tables() {
            builder = builder.bundle(code, table);
        }
        if let Some(code) = detected {
            builder = builder.language(&code);
        }

        let i18n = builder.build();
        log::info!("Language set to: {}", i18n.language());
        i18n
    }

    /// Get a translated string by key.
    ///
    /// Looks in the active language, then the fallback language, and
    /// returns the key itself when neither has it.
    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                if self.debug {
                    log::debug!("Missing key '{}' for language '{}'", key, self.language());
                }
                key.to_string()
            }
        }
    }

    /// Translate and fill `{{name}}` placeholders; values are not escaped
    pub fn translate_with(&self, key: &str, values: &[(&str, &str)]) -> Unescaped {
        Unescaped::new(interpolate(&self.translate(key), values))
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        let active = self.language();
        self.table(active)
            .and_then(|table| table.get(key))
            .or_else(|| {
                if active == self.fallback {
                    return None;
                }
                self.table(&self.fallback).and_then(|table| table.get(key))
            })
    }

    fn table(&self, code: &str) -> Option<&TranslationTable> {
        match self.cache.get(code) {
            Some(LoadState::Ready(table)) => Some(table),
            _ => None,
        }
    }

    /// Resolved active language; always a supported code or the fallback
    pub fn language(&self) -> &str {
        self.languages
            .resolve(&self.requested)
            .map(|lang| lang.code.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    /// Language code as last requested, which may be unsupported
    pub fn requested_language(&self) -> &str {
        &self.requested
    }

    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    /// Locale tag of the active language (e.g., "da-DK")
    pub fn locale(&self) -> &str {
        self.languages
            .get(self.language())
            .map(|lang| lang.locale.as_str())
            .unwrap_or(DEFAULT_LOCALE)
    }

    pub fn formatter(&self) -> LocaleFormat {
        LocaleFormat::for_locale(self.locale())
    }

    pub fn languages(&self) -> &SupportedLanguages {
        &self.languages
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn load_status(&self, code: &str) -> LoadStatus {
        self.cache
            .get(code)
            .map(LoadState::status)
            .unwrap_or(LoadStatus::NotRequested)
    }

    /// Switch the active language.
    ///
    /// The code is not validated; unsupported codes resolve to the fallback
    /// at lookup time. Returns the code whose table must be fetched, if any;
    /// its slot is then `Pending`.
    pub fn change_language(&mut self, code: &str) -> Option<String> {
        self.requested = code.to_string();
        if self.debug {
            log::debug!("Language changed to '{}' (resolved '{}')", code, self.language());
        }

        self.request_active()
    }

    /// Mark the active language `Pending` when its table still has to be
    /// fetched, returning its code. Unsupported requests never fetch.
    pub fn request_active(&mut self) -> Option<String> {
        let resolved = self.languages.resolve(&self.requested)?.code.clone();
        match self.load_status(&resolved) {
            LoadStatus::NotRequested | LoadStatus::Failed => {
                self.cache.insert(resolved.clone(), LoadState::Pending);
                Some(resolved)
            }
            LoadStatus::Pending | LoadStatus::Ready => None,
        }
    }

    /// Store the outcome of a fetch in the slot of `code`.
    ///
    /// Only that slot changes; the active language is left alone.
    pub fn complete_load(&mut self, code: &str, result: Result<TranslationTable>) -> LoadStatus {
        let state = match result {
            Ok(table) => {
                if self.debug {
                    log::debug!("Loaded {} translations for '{}'", table.len(), code);
                }
                LoadState::Ready(table)
            }
            Err(e) => {
                log::warn!("Failed to load translations for '{}': {}", code, e);
                if self.load_status(code) == LoadStatus::Ready {
                    return LoadStatus::Ready;
                }
                LoadState::Failed(e.to_string())
            }
        };

        let status = state.status();
        self.cache.insert(code.to_string(), state);
        status
    }

    /// Get all effective translations: fallback entries overlaid by the active language
    pub fn translations(&self) -> HashMap<String, String> {
        let mut all = HashMap::new();
        for code in [self.fallback.as_str(), self.language()] {
            if let Some(table) = self.table(code) {
                all.extend(table.iter().map(|(k, v)| (k.to_string(), v.to_string())));
            }
        }
        all
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::bootstrap(&Config::default())
    }
}

/// Builder for [`I18n`]
#[derive(Debug)]
pub struct I18nBuilder {
    languages: SupportedLanguages,
    fallback: String,
    language: Option<String>,
    bundles: Vec<(String, TranslationTable)>,
    debug: bool,
}

impl Default for I18nBuilder {
    fn default() -> Self {
        Self {
            languages: SupportedLanguages::default(),
            fallback: FALLBACK_LANGUAGE.to_string(),
            language: None,
            bundles: Vec::new(),
            debug: false,
        }
    }
}

impl I18nBuilder {
    pub fn languages(mut self, languages: SupportedLanguages) -> Self {
        self.languages = languages;
        self
    }

    pub fn fallback(mut self, code: &str) -> Self {
        self.fallback = code.to_string();
        self
    }

    /// Initial language; defaults to the fallback
    pub fn language(mut self, code: &str) -> Self {
        self.language = Some(code.to_string());
        self
    }

    /// Seed the cache with a table that needs no fetching
    pub fn bundle(mut self, code: &str, table: TranslationTable) -> Self {
        self.bundles.push((code.to_string(), table));
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn build(self) -> I18n {
        let cache = self
            .bundles
            .into_iter()
            .map(|(code, table)| (code, LoadState::Ready(table)))
            .collect();

        I18n {
            requested: self.language.unwrap_or_else(|| self.fallback.clone()),
            languages: self.languages,
            fallback: self.fallback,
            cache,
            debug: self.debug,
        }
    }
}

/// Shared handle to the localization state and its remote backend.
///
/// Created once at start-up and cloned into every component that needs
/// translations.
pub struct Localizer<B = HttpBackend> {
    state: Arc<RwLock<I18n>>,
    backend: Arc<B>,
    /// Bumped every time a fetch completes
    loads: Arc<watch::Sender<u64>>,
}

impl<B> Clone for Localizer<B> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            backend: Arc::clone(&self.backend),
            loads: Arc::clone(&self.loads),
        }
    }
}

impl Localizer<HttpBackend> {
    /// Bootstrap the localization with the HTTP backend from the config
    pub fn bootstrap(config: &Config) -> Result<Self> {
        let backend = HttpBackend::new(&config.backend)?;
        Ok(Self::new(I18n::bootstrap(config), backend))
    }
}

impl<B: TranslationBackend + 'static> Localizer<B> {
    /// Wrap the state and start fetching the initial language if its
    /// table is neither bundled nor cached.
    pub fn new(i18n: I18n, backend: B) -> Self {
        let (loads, _) = watch::channel(0);
        let localizer = Self {
            state: Arc::new(RwLock::new(i18n)),
            backend: Arc::new(backend),
            loads: Arc::new(loads),
        };

        let pending = localizer.write().request_active();
        if let Some(code) = pending {
            localizer.spawn_fetch(code);
        }
        localizer
    }

    fn read(&self) -> RwLockReadGuard<'_, I18n> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, I18n> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn translate(&self, key: &str) -> String {
        self.read().translate(key)
    }

    pub fn translate_with(&self, key: &str, values: &[(&str, &str)]) -> Unescaped {
        self.read().translate_with(key, values)
    }

    pub fn current_language(&self) -> String {
        self.read().language().to_string()
    }

    pub fn requested_language(&self) -> String {
        self.read().requested_language().to_string()
    }

    pub fn current_locale(&self) -> String {
        self.read().locale().to_string()
    }

    pub fn formatter(&self) -> LocaleFormat {
        self.read().formatter()
    }

    pub fn languages(&self) -> SupportedLanguages {
        self.read().languages().clone()
    }

    pub fn load_status(&self, code: &str) -> LoadStatus {
        self.read().load_status(code)
    }

    pub fn translations(&self) -> HashMap<String, String> {
        self.read().translations()
    }

    /// Switch language without waiting for its table.
    ///
    /// When the table must be fetched, the fetch runs on the current tokio
    /// runtime and its handle is returned. Lookups use the fallback until
    /// the table is ready.
    pub fn change_language(&self, code: &str) -> Option<JoinHandle<LoadStatus>> {
        let pending = self.write().change_language(code)?;
        self.spawn_fetch(pending)
    }

    /// Switch language and wait until its table is loaded or has failed
    pub async fn load_language(&self, code: &str) -> LoadStatus {
        let pending = self.write().change_language(code);

        match pending {
            Some(pending) => {
                Self::fetch(
                    Arc::clone(&self.state),
                    Arc::clone(&self.backend),
                    Arc::clone(&self.loads),
                    pending,
                )
                .await
            }
            None => {
                let active = self.current_language();
                self.wait_loaded(&active).await
            }
        }
    }

    /// Wait while the slot of `code` is `Pending`, then return its status
    pub async fn wait_loaded(&self, code: &str) -> LoadStatus {
        let mut loads = self.loads.subscribe();
        loop {
            let status = self.load_status(code);
            if status != LoadStatus::Pending {
                return status;
            }
            if loads.changed().await.is_err() {
                return self.load_status(code);
            }
        }
    }

    fn spawn_fetch(&self, code: String) -> Option<JoinHandle<LoadStatus>> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => Some(handle.spawn(Self::fetch(
                Arc::clone(&self.state),
                Arc::clone(&self.backend),
                Arc::clone(&self.loads),
                code,
            ))),
            Err(_) => {
                self.write().complete_load(&code, Err(Error::NoRuntime));
                self.loads.send_modify(|n| *n += 1);
                None
            }
        }
    }

    async fn fetch(
        state: Arc<RwLock<I18n>>,
        backend: Arc<B>,
        loads: Arc<watch::Sender<u64>>,
        code: String,
    ) -> LoadStatus {
        let result = backend.fetch(&code).await;
        let status = state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .complete_load(&code, result);
        loads.send_modify(|n| *n += 1);
        status
    }
}
