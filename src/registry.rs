use std::collections::HashMap;
use tracing::{debug, warn};

use crate::dictionary::MessageDictionary;
use crate::locale::LocaleCode;

/// Options accepted by [`LocaleRegistry::initialize`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Locale consulted when the active locale lacks a key.
    pub fallback_locale: LocaleCode,
    /// Locale active right after initialization. `None` activates the fallback.
    pub initial_locale: Option<LocaleCode>,
    /// Log a warning for every lookup that resolves nowhere.
    pub warn_on_missing: bool,
}

impl InitOptions {
    pub fn new(fallback_locale: LocaleCode) -> Self {
        Self {
            fallback_locale,
            initial_locale: None,
            warn_on_missing: true,
        }
    }

    pub fn initial_locale(mut self, locale: LocaleCode) -> Self {
        self.initial_locale = Some(locale);
        self
    }
}

/// Locale code to message dictionary mapping, plus the active and fallback locales.
///
/// Registration happens through `&mut self` during startup; after
/// [`initialize`](Self::initialize) the registry is only read.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    dictionaries: HashMap<LocaleCode, MessageDictionary>,
    current: Option<LocaleCode>,
    fallback: Option<LocaleCode>,
    initialized: bool,
    warn_on_missing: bool,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `dictionary` with `locale`.
    ///
    /// Registering a locale twice merges the dictionaries: keys only in the
    /// first registration survive, keys in both take the later value.
    pub fn register_dictionary(&mut self, locale: LocaleCode, dictionary: MessageDictionary) {
        debug!(locale = %locale, keys = dictionary.len(), "registering dictionary");
        match self.dictionaries.get_mut(&locale) {
            Some(existing) => existing.merge(dictionary),
            None => {
                self.dictionaries.insert(locale, dictionary);
            }
        }
    }

    /// Activate the registry. Unregistered locales are accepted with a warning.
    pub fn initialize(&mut self, options: InitOptions) {
        let InitOptions {
            fallback_locale,
            initial_locale,
            warn_on_missing,
        } = options;
        let current = initial_locale.unwrap_or_else(|| fallback_locale.clone());

        for (role, locale) in [("fallback", &fallback_locale), ("initial", &current)] {
            if !self.dictionaries.contains_key(locale) {
                warn!(locale = %locale, "{} locale has no registered dictionary", role);
            }
        }

        debug!(current = %current, fallback = %fallback_locale, "locale registry initialized");
        self.current = Some(current);
        self.fallback = Some(fallback_locale);
        self.initialized = true;
        self.warn_on_missing = warn_on_missing;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Switch the active locale. Does not initialize the registry or touch
    /// the registered dictionaries.
    pub fn set_locale(&mut self, locale: LocaleCode) {
        if !self.dictionaries.contains_key(&locale) {
            warn!(locale = %locale, "switching to a locale with no registered dictionary");
        }
        self.current = Some(locale);
    }

    pub fn current_locale(&self) -> Option<&LocaleCode> {
        self.current.as_ref()
    }

    pub fn fallback_locale(&self) -> Option<&LocaleCode> {
        self.fallback.as_ref()
    }

    /// Registered locale codes, sorted.
    pub fn locales(&self) -> Vec<&LocaleCode> {
        let mut locales: Vec<_> = self.dictionaries.keys().collect();
        locales.sort();
        locales
    }

    pub fn dictionary(&self, locale: &str) -> Option<&MessageDictionary> {
        self.dictionaries.get(locale)
    }

    /// Resolve `key` against the active locale. `None` before initialization.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if !self.initialized {
            return None;
        }
        let current = self.current.as_ref()?;
        self.lookup_in(current, key)
    }

    /// Resolve `key` starting from `locale`: the locale, its parents, then
    /// the fallback locale and its parents.
    pub fn lookup_in(&self, locale: &LocaleCode, key: &str) -> Option<&str> {
        let found = self
            .resolution_chain(locale)
            .iter()
            .find_map(|code| self.dictionaries.get(code).and_then(|d| d.get(key)));

        if found.is_none() && self.warn_on_missing {
            warn!(locale = %locale, key, "missing message");
        }
        found
    }

    /// Like [`lookup`](Self::lookup), returning the key itself when unresolved.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// Keys the fallback dictionary defines that `locale` (or its parents) does not.
    pub fn missing_keys(&self, locale: &LocaleCode) -> Vec<&str> {
        let Some(reference) = self.fallback.as_ref().and_then(|f| self.dictionaries.get(f))
        else {
            return vec![];
        };
        let own: Vec<&MessageDictionary> = locale
            .with_parents()
            .iter()
            .filter_map(|code| self.dictionaries.get(code))
            .collect();

        reference
            .keys()
            .filter(|key| !own.iter().any(|d| d.contains_key(key)))
            .collect()
    }

    fn resolution_chain(&self, locale: &LocaleCode) -> Vec<LocaleCode> {
        let mut chain = locale.with_parents();
        if let Some(fallback) = &self.fallback {
            for code in fallback.with_parents() {
                if !chain.contains(&code) {
                    chain.push(code);
                }
            }
        }
        chain
    }
}
