use anyhow::{Context, Result};

use super::DictionarySource;
use crate::dictionary::MessageDictionary;
use crate::locale::LocaleCode;

/// Dictionaries compiled into the binary. Add a locale by adding a pair.
const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("ru", include_str!("../../locales/ru.json")),
    ("ja", include_str!("../../locales/ja.json")),
];

pub struct BundledSource;

impl DictionarySource for BundledSource {
    fn load(&self) -> Result<Vec<(LocaleCode, MessageDictionary)>> {
        BUNDLED
            .iter()
            .map(|(code, text)| -> Result<(LocaleCode, MessageDictionary)> {
                let locale = LocaleCode::new(code)?;
                let dictionary = MessageDictionary::from_json_str(text)
                    .with_context(|| format!("malformed bundled dictionary: {}", code))?;
                Ok((locale, dictionary))
            })
            .collect()
    }

    fn source_name(&self) -> &'static str {
        "bundled"
    }
}
