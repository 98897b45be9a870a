use anyhow::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Flat mapping from message key to template string for one locale.
///
/// Nested JSON objects are flattened into dot-separated keys, so
/// `{"nav": {"home": "Home"}}` is stored as `nav.home`. A literal dotted key
/// that collides with a flattened one keeps whichever value is visited
/// last, with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDictionary {
    messages: BTreeMap<String, String>,
}

impl MessageDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &Value) -> Result<Self> {
        if !json.is_object() {
            anyhow::bail!("dictionary root must be a JSON object");
        }
        let mut dictionary = Self::new();
        flatten_into(json, None, &mut dictionary.messages);
        Ok(dictionary)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Add every message from `other`; keys present in both take `other`'s value.
    pub fn merge(&mut self, other: MessageDictionary) {
        self.messages.extend(other.messages);
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_into(json: &Value, prefix: Option<&str>, out: &mut BTreeMap<String, String>) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key = match prefix {
                    Some(p) => format!("{}.{}", p, key),
                    None => key.clone(),
                };
                flatten_into(value, Some(&full_key), out);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                let full_key = match prefix {
                    Some(p) => format!("{}[{}]", p, index),
                    None => format!("[{}]", index),
                };
                flatten_into(value, Some(&full_key), out);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                insert_unique(out, key, s.clone());
            }
        }
        other => {
            if let Some(key) = prefix {
                insert_unique(out, key, other.to_string());
            }
        }
    }
}

fn insert_unique(out: &mut BTreeMap<String, String>, key: &str, value: String) {
    if let Some(previous) = out.insert(key.to_string(), value) {
        warn!(key, previous = %previous, "message key defined twice after flattening");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_object() {
        let dict = MessageDictionary::from_json(&json!({
            "greeting": "Hello",
            "farewell": "Bye"
        }))
        .unwrap();

        assert_eq!(dict.get("greeting"), Some("Hello"));
        assert_eq!(dict.get("farewell"), Some("Bye"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_nested_object_flattened() {
        let dict = MessageDictionary::from_json(&json!({
            "nav": {
                "home": "Home",
                "settings": { "title": "Settings" }
            }
        }))
        .unwrap();

        assert_eq!(dict.get("nav.home"), Some("Home"));
        assert_eq!(dict.get("nav.settings.title"), Some("Settings"));
        assert_eq!(dict.get("nav"), None);
    }

    #[test]
    fn test_arrays_and_scalars() {
        let dict = MessageDictionary::from_json(&json!({
            "steps": ["one", "two"],
            "limit": 42,
            "enabled": true
        }))
        .unwrap();

        assert_eq!(dict.get("steps[0]"), Some("one"));
        assert_eq!(dict.get("steps[1]"), Some("two"));
        assert_eq!(dict.get("limit"), Some("42"));
        assert_eq!(dict.get("enabled"), Some("true"));
    }

    #[test]
    fn test_placeholders_kept_verbatim() {
        let dict = MessageDictionary::from_json_str(r#"{"welcome": "Hi, {name}!"}"#).unwrap();
        assert_eq!(dict.get("welcome"), Some("Hi, {name}!"));
    }

    #[test]
    fn test_dotted_key_collision_keeps_one_value() {
        let dict = MessageDictionary::from_json(&json!({
            "a.b": "x",
            "a": { "b": "y" }
        }))
        .unwrap();

        assert_eq!(dict.len(), 1);
        assert!(matches!(dict.get("a.b"), Some("x") | Some("y")));
    }

    #[test]
    fn test_non_object_root_rejected() {
        assert!(MessageDictionary::from_json(&json!(["a", "b"])).is_err());
        assert!(MessageDictionary::from_json(&json!("hello")).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(MessageDictionary::from_json_str(r#"{"greeting": "Hello""#).is_err());
    }

    #[test]
    fn test_empty_object() {
        let dict = MessageDictionary::from_json_str("{}").unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_merge_later_value_wins() {
        let mut base: MessageDictionary = [("a", "1"), ("b", "2")].into_iter().collect();
        let update: MessageDictionary = [("b", "20"), ("c", "30")].into_iter().collect();

        base.merge(update);

        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("20"));
        assert_eq!(base.get("c"), Some("30"));
        assert_eq!(base.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
