use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::DictionarySource;
use crate::dictionary::MessageDictionary;
use crate::locale::LocaleCode;

/// Loads `<code>.json` files from a directory.
pub struct DirectorySource {
    dir: PathBuf,
    required: Vec<String>,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, required: &[&str]) -> Self {
        Self {
            dir: dir.into(),
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn dictionary_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = vec![];
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read locales dir: {:?}", self.dir))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl DictionarySource for DirectorySource {
    fn load(&self) -> Result<Vec<(LocaleCode, MessageDictionary)>> {
        let mut files = vec![];
        for path in self.dictionary_files()? {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("non UTF-8 dictionary file name: {:?}", path))?;
            let locale = LocaleCode::new(stem)
                .with_context(|| format!("dictionary file is not named after a locale: {:?}", path))?;
            files.push((locale, path));
        }

        // File names are matched by locale code, so `RU.json` satisfies `ru`.
        for code in &self.required {
            let required = LocaleCode::new(code)?;
            if !files.iter().any(|(locale, _)| *locale == required) {
                let path = self.dir.join(format!("{}.json", code));
                anyhow::bail!("missing dictionary file for locale {}: {:?}", code, path);
            }
        }

        let mut loaded = vec![];
        for (locale, path) in files {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read dictionary: {:?}", path))?;
            let dictionary = MessageDictionary::from_json_str(&text)
                .with_context(|| format!("malformed dictionary: {:?}", path))?;
            loaded.push((locale, dictionary));
        }
        Ok(loaded)
    }

    fn source_name(&self) -> &'static str {
        "directory"
    }
}
