pub mod bundled;
pub mod directory;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::dictionary::MessageDictionary;
use crate::locale::LocaleCode;
use crate::registry::LocaleRegistry;

/// Locales every deployment must ship a dictionary for.
pub const REQUIRED_LOCALES: &[&str] = &["en", "ru", "ja"];

pub trait DictionarySource {
    /// Load all dictionaries this source provides, in registration order.
    fn load(&self) -> Result<Vec<(LocaleCode, MessageDictionary)>>;
    fn source_name(&self) -> &'static str;
}

/// Load every dictionary from `source` into `registry`.
pub fn register_all(registry: &mut LocaleRegistry, source: &dyn DictionarySource) -> Result<()> {
    for (locale, dictionary) in source.load()? {
        registry.register_dictionary(locale, dictionary);
    }
    Ok(())
}

pub fn create_source(dir: Option<PathBuf>) -> Box<dyn DictionarySource> {
    let dir = dir.or_else(|| std::env::var_os("LINGO_LOCALES_DIR").map(PathBuf::from));
    match dir {
        Some(dir) => Box::new(directory::DirectorySource::new(dir, REQUIRED_LOCALES)),
        None => Box::new(bundled::BundledSource),
    }
}

/// User dictionaries merged on top of the base source. Read from
/// `LINGO_OVERLAY_DIR` if set, else `<config dir>/lingo/locales`.
pub fn overlay_source() -> Option<directory::DirectorySource> {
    let dir = match std::env::var_os("LINGO_OVERLAY_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join("lingo").join("locales"),
    };
    overlay_source_in(&dir)
}

/// Overlay from `dir`, if the directory exists.
pub fn overlay_source_in(dir: &Path) -> Option<directory::DirectorySource> {
    if dir.is_dir() {
        Some(directory::DirectorySource::new(dir, &[]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InitOptions;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overlay_merges_into_bundled() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ru.json"), r#"{"greeting": "Здравствуйте"}"#).unwrap();

        let mut registry = LocaleRegistry::new();
        register_all(&mut registry, &bundled::BundledSource).unwrap();
        let overlay = overlay_source_in(tmp.path()).unwrap();
        register_all(&mut registry, &overlay).unwrap();

        let ru = LocaleCode::new("ru").unwrap();
        registry.initialize(InitOptions::new(LocaleCode::new("en").unwrap()).initial_locale(ru));

        assert_eq!(registry.lookup("greeting"), Some("Здравствуйте"));
        assert_eq!(registry.lookup("nav.home"), Some("Главная"));
        assert_eq!(registry.lookup("settings.save"), Some("Сохранить"));
        assert_eq!(registry.locales().len(), 3);
    }

    #[test]
    fn test_overlay_missing_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(overlay_source_in(&tmp.path().join("absent")).is_none());
    }
}
