//! Translation tables and placeholder interpolation

use crate::core::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Key separator used when flattening nested tables
const KEY_SEPARATOR: char = '.';

/// Mapping from translation key to string template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Parse a JSON table. Nested objects are flattened with `.` separators.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::InvalidTable(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidTable("top level must be an object".to_string()));
        };

        let mut entries = HashMap::new();
        for (key, value) in map {
            flatten(&key, value, &mut entries);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn flatten(prefix: &str, value: Value, out: &mut HashMap<String, String>) {
    match value {
        Value::String(s) => {
            out.insert(prefix.to_string(), s);
        }
        Value::Object(map) => {
            for (key, value) in map {
                flatten(&format!("{prefix}{KEY_SEPARATOR}{key}"), value, out);
            }
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        // Arrays and nulls are not addressable by key
        Value::Array(_) | Value::Null => {}
    }
}

/// Translated text with interpolated values left unescaped.
///
/// The localization layer never escapes: whoever renders this text is
/// responsible for escaping it for the output context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unescaped(String);

impl Unescaped {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Escape for an HTML text or attribute context
    pub fn escape_html(&self) -> String {
        let mut escaped = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl fmt::Display for Unescaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace `{{name}}` placeholders with the given values.
///
/// Whitespace inside the braces is ignored. Placeholders without a value
/// are kept verbatim.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after[..end].trim();
        match values.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_table_is_flattened() {
        let table = TranslationTable::from_json_str(
            r#"{
                "clearChat": "Clear chat",
                "labels": { "askQuestion": "Ask", "retrieval": { "mode": "Mode" } },
                "count": 3,
                "ignored": ["a", "b"]
            }"#,
        )
        .unwrap();

        assert_eq!(table.get("clearChat"), Some("Clear chat"));
        assert_eq!(table.get("labels.askQuestion"), Some("Ask"));
        assert_eq!(table.get("labels.retrieval.mode"), Some("Mode"));
        assert_eq!(table.get("count"), Some("3"));
        assert_eq!(table.get("labels"), None);
        assert_eq!(table.get("ignored"), None);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_invalid_tables() {
        assert!(matches!(
            TranslationTable::from_json_str("not json"),
            Err(Error::InvalidTable(_))
        ));
        assert!(matches!(
            TranslationTable::from_json_str(r#"["a"]"#),
            Err(Error::InvalidTable(_))
        ));
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("Hello {{name}}, {{ count }} new", &[("name", "Ada"), ("count", "2")]),
            "Hello Ada, 2 new"
        );
        assert_eq!(interpolate("Hi {{missing}}!", &[]), "Hi {{missing}}!");
        assert_eq!(interpolate("Unclosed {{name", &[("name", "x")]), "Unclosed {{name");
        assert_eq!(interpolate("Plain", &[("name", "x")]), "Plain");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let text = Unescaped::new(interpolate("Q: {{q}}", &[("q", "<b>&</b>")]));

        assert_eq!(text.as_str(), "Q: <b>&</b>");
        assert_eq!(text.escape_html(), "Q: &lt;b&gt;&amp;&lt;/b&gt;");
    }
}
