//! Internationalization
//!
//! Holds the translation table fetched from the backend together with the
//! current language. Lookups fall back to English, then to the key itself.
//! Templates use `{name}` placeholders replaced by literal substitution.

mod fallback;
pub mod keys;

use std::collections::BTreeMap;

use crate::api::BoilerApi;
use crate::logging::get_logger;
use crate::persistence::{PREFERRED_LANGUAGE_KEY, PreferenceStore};

/// language code -> key -> template
pub type TranslationTable = BTreeMap<String, BTreeMap<String, String>>;

pub const DEFAULT_LANGUAGE: &str = "en";

const RTL_LANGUAGES: [&str; 5] = ["he", "ar", "fa", "ur", "yi"];

/// Layout direction of the current language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn for_language(code: &str) -> Self {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        if RTL_LANGUAGES.contains(&primary.to_ascii_lowercase().as_str()) {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

/// Current language plus the translation table
pub struct LocalizationStore {
    table: TranslationTable,
    current: String,
    prefs: Box<dyn PreferenceStore>,
    logger: crate::logging::StructuredLogger,
}

impl LocalizationStore {
    /// Store using the built-in English table until `load` succeeds
    pub fn new(prefs: Box<dyn PreferenceStore>) -> Self {
        Self::with_table(fallback::table(), prefs)
    }

    pub fn with_table(table: TranslationTable, prefs: Box<dyn PreferenceStore>) -> Self {
        let mut store = Self {
            table,
            current: DEFAULT_LANGUAGE.to_string(),
            prefs,
            logger: get_logger("i18n"),
        };
        store.ensure_english();
        store
    }

    /// Fetch the translation table; on failure keep the built-in English one
    pub async fn load(&mut self, api: &dyn BoilerApi) {
        match api.fetch_languages().await {
            Ok(table) if !table.is_empty() => {
                self.logger
                    .info(&format!("Loaded translations for {} languages", table.len()));
                self.table = table;
            }
            Ok(_) => {
                self.logger
                    .warn("Translation table is empty, using built-in English");
                self.table = fallback::table();
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "Error loading translations, using built-in English: {}",
                    e
                ));
                self.table = fallback::table();
            }
        }
        self.ensure_english();
        if !self.is_known(&self.current) {
            self.current = DEFAULT_LANGUAGE.to_string();
        }
    }

    /// English is the lookup fallback for every language, so keys the remote
    /// table lacks are filled from the built-in strings.
    fn ensure_english(&mut self) {
        let english = self.table.entry(DEFAULT_LANGUAGE.to_string()).or_default();
        for (key, value) in fallback::english() {
            english.entry(key).or_insert(value);
        }
    }

    /// Pick the startup language: the saved preference when it names a known
    /// language, else `default_language` when known, else English.
    pub fn resolve_preference(&mut self, default_language: &str) -> &str {
        let saved = self.prefs.get(PREFERRED_LANGUAGE_KEY);
        self.current = match saved {
            Some(code) if self.is_known(&code) => {
                self.logger.debug(&format!("Using saved language: {}", code));
                code
            }
            _ if self.is_known(default_language) => default_language.to_string(),
            _ => DEFAULT_LANGUAGE.to_string(),
        };
        &self.current
    }

    /// Switch language and persist the choice. Unknown codes are ignored and
    /// return `false`; the caller re-renders on `true`.
    pub fn set_language(&mut self, code: &str) -> bool {
        if !self.is_known(code) {
            self.logger
                .debug(&format!("Ignoring unknown language: {}", code));
            return false;
        }
        self.current = code.to_string();
        if let Err(e) = self.prefs.set(PREFERRED_LANGUAGE_KEY, code) {
            self.logger
                .warn(&format!("Could not save language preference: {}", e));
        }
        self.logger.info(&format!("Language set to: {}", code));
        true
    }

    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.table.contains_key(code)
    }

    /// Known language codes with their display names
    pub fn languages(&self) -> Vec<(String, String)> {
        self.table
            .iter()
            .map(|(code, strings)| {
                let name = strings
                    .get(keys::LANGUAGE_NAME)
                    .cloned()
                    .unwrap_or_else(|| code.clone());
                (code.clone(), name)
            })
            .collect()
    }

    pub fn direction(&self) -> TextDirection {
        TextDirection::for_language(&self.current)
    }

    /// Raw template for `key` in the current language, English fallback
    fn template(&self, key: &str) -> Option<&str> {
        self.table
            .get(&self.current)
            .and_then(|strings| strings.get(key))
            .or_else(|| {
                self.table
                    .get(DEFAULT_LANGUAGE)
                    .and_then(|strings| strings.get(key))
            })
            .map(String::as_str)
    }

    /// Translate `key` without placeholders
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }

    /// Translate `key`, replacing each `{name}` with its value. Placeholders
    /// without a value are left as they are.
    pub fn translate(&self, key: &str, params: &[(&str, String)]) -> String {
        let Some(template) = self.template(key) else {
            self.logger
                .debug(&format!("Missing translation key: {}", key));
            return key.to_string();
        };
        substitute(template, params)
    }
}

/// Literal `{name}` substitution
pub fn substitute(template: &str, params: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}
