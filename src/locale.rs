use anyhow::Result;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A validated locale identifier such as `en`, `ru` or `ja-JP`.
///
/// Codes are case-insensitive and stored in canonical form: underscores
/// become `-`, the language is lowercased, scripts are titlecased and
/// regions uppercased, so `EN_us` and `en-US` name the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: &str) -> Result<Self> {
        let normalized = code.trim().replace('_', "-");
        if normalized.is_empty() {
            anyhow::bail!("locale code must not be empty");
        }
        if normalized.starts_with('-')
            || normalized.ends_with('-')
            || normalized.contains("--")
            || !normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            anyhow::bail!("invalid locale code: {:?}", code);
        }
        Ok(Self(canonicalize(&normalized)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`ru` for `ru-RU`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// This code followed by each shorter prefix: `zh-Hant-TW`, `zh-Hant`, `zh`.
    pub fn with_parents(&self) -> Vec<LocaleCode> {
        let mut chain = vec![self.clone()];
        let mut current = self.0.as_str();
        while let Some((parent, _)) = current.rsplit_once('-') {
            chain.push(Self(parent.to_string()));
            current = parent;
        }
        chain
    }
}

fn canonicalize(code: &str) -> String {
    code.split('-')
        .enumerate()
        .map(|(i, subtag)| {
            if i == 0 {
                subtag.to_ascii_lowercase()
            } else if subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                let (head, tail) = subtag.split_at(1);
                head.to_ascii_uppercase() + &tail.to_ascii_lowercase()
            } else if subtag.len() == 2 {
                subtag.to_ascii_uppercase()
            } else {
                subtag.to_ascii_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

impl FromStr for LocaleCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_code() {
        let code = LocaleCode::new("en").unwrap();
        assert_eq!(code.as_str(), "en");
        assert_eq!(code.language(), "en");
    }

    #[test]
    fn test_underscore_and_whitespace_normalized() {
        let code = LocaleCode::new("  en_US ").unwrap();
        assert_eq!(code.as_str(), "en-US");
        assert_eq!(code, "en-US".parse().unwrap());
    }

    #[test]
    fn test_case_folded() {
        assert_eq!(LocaleCode::new("RU").unwrap().as_str(), "ru");
        assert_eq!(LocaleCode::new("Ja").unwrap().as_str(), "ja");
        assert_eq!(LocaleCode::new("EN-us").unwrap().as_str(), "en-US");
        assert_eq!(LocaleCode::new("zh-hant-tw").unwrap().as_str(), "zh-Hant-TW");
        assert_eq!(LocaleCode::new("es-419").unwrap().as_str(), "es-419");
        assert_eq!(LocaleCode::new("EN_us").unwrap(), LocaleCode::new("en-US").unwrap());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(LocaleCode::new("").is_err());
        assert!(LocaleCode::new("   ").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(LocaleCode::new("en US").is_err());
        assert!(LocaleCode::new("en.json").is_err());
        assert!(LocaleCode::new("-en").is_err());
        assert!(LocaleCode::new("en--US").is_err());
    }

    #[test]
    fn test_with_parents() {
        let code = LocaleCode::new("zh-Hant-TW").unwrap();
        let chain: Vec<String> = code.with_parents().iter().map(|c| c.to_string()).collect();
        assert_eq!(chain, vec!["zh-Hant-TW", "zh-Hant", "zh"]);
        assert_eq!(code.language(), "zh");
    }

    #[test]
    fn test_with_parents_single_subtag() {
        let code = LocaleCode::new("ja").unwrap();
        assert_eq!(code.with_parents(), vec![code.clone()]);
    }
}
