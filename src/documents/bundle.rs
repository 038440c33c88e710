//! Field bundles: the untyped applicant and family data a document is drawn from.
//!
//! Keys are dotted `role.field` paths (`applicant.firstName`,
//! `motherGrandma.emigrationDate`). Nothing is required; absent keys render
//! blank.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Flat map of dotted field names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBundle {
    values: BTreeMap<String, FieldValue>,
}

impl FieldBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Text of a field; empty when absent. Flags render as `true`/`false`.
    pub fn text(&self, key: &str) -> String {
        self.values
            .get(key)
            .map(|value| value.as_text().trim().to_string())
            .unwrap_or_default()
    }

    /// Whether a field holds a non-blank value.
    pub fn is_set(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|value| !value.is_blank())
    }

    /// Truthiness of a field: a boolean flag, or text such as `yes`, `x`, `1`.
    pub fn flag(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(FieldValue::Flag(flag)) => *flag,
            Some(FieldValue::Text(text)) => matches!(
                text.trim().to_lowercase().as_str(),
                "true" | "yes" | "tak" | "x" | "1" | "on"
            ),
            None => false,
        }
    }

    /// Non-empty values of `keys`, joined by single spaces.
    pub fn joined(&self, keys: &[&str]) -> String {
        keys.iter()
            .map(|key| self.text(key))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether any field under `role.` holds a value.
    pub fn role_present(&self, role: &str) -> bool {
        let prefix = format!("{role}.");
        self.values
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .any(|(_, value)| !value.is_blank())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a bundle from flat dotted keys and/or nested role objects.
    ///
    /// Numbers keep their textual form; `null` and arrays are skipped.
    pub fn from_json(value: &Value) -> Self {
        let mut bundle = Self::new();
        flatten_json("", value, &mut bundle.values);
        bundle
    }
}

fn flatten_json(prefix: &str, value: &Value, values: &mut BTreeMap<String, FieldValue>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_json(&path, nested, values);
            }
        }
        _ if prefix.is_empty() => {}
        Value::String(text) => {
            values.insert(prefix.to_string(), FieldValue::Text(text.clone()));
        }
        Value::Bool(flag) => {
            values.insert(prefix.to_string(), FieldValue::Flag(*flag));
        }
        Value::Number(number) => {
            values.insert(prefix.to_string(), FieldValue::Text(number.to_string()));
        }
        Value::Null | Value::Array(_) => {}
    }
}

impl<'de> Deserialize<'de> for FieldBundle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(FieldBundle::from_json(&value))
    }
}

impl Serialize for FieldBundle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldBundle
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (key, value) in iter {
            bundle.insert(key, value);
        }
        bundle
    }
}

impl fmt::Display for FieldBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldBundle({} fields)", self.values.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_and_nested_json_are_equivalent() {
        let flat: FieldBundle =
            serde_json::from_value(json!({"applicant.firstName": "Jan", "applicant.married": true}))
                .unwrap();
        let nested: FieldBundle =
            serde_json::from_value(json!({"applicant": {"firstName": "Jan", "married": true}}))
                .unwrap();
        assert_eq!(flat, nested);
        assert_eq!(flat.text("applicant.firstName"), "Jan");
        assert!(flat.flag("applicant.married"));
    }

    #[test]
    fn test_numbers_nulls_and_arrays() {
        let bundle = FieldBundle::from_json(&json!({
            "case": {"progress": 42, "note": null, "tags": ["a", "b"]}
        }));
        assert_eq!(bundle.text("case.progress"), "42");
        assert!(bundle.get("case.note").is_none());
        assert!(bundle.get("case.tags").is_none());
    }

    #[test]
    fn test_non_object_input_yields_empty_bundle() {
        assert!(FieldBundle::from_json(&json!("oops")).is_empty());
    }

    #[test]
    fn test_joined_skips_blank_parts() {
        let bundle = FieldBundle::new()
            .with("applicant.firstName", "Jan")
            .with("applicant.middleName", "  ")
            .with("applicant.lastName", "Kowalski");
        assert_eq!(
            bundle.joined(&[
                "applicant.firstName",
                "applicant.middleName",
                "applicant.lastName"
            ]),
            "Jan Kowalski"
        );
    }

    #[test]
    fn test_role_present_ignores_blank_values() {
        let bundle = FieldBundle::new()
            .with("father.firstName", "")
            .with("fatherGrandpa.firstName", "Adam");
        assert!(!bundle.role_present("father"));
        assert!(bundle.role_present("fatherGrandpa"));
        assert!(!bundle.role_present("mother"));
    }

    #[test]
    fn test_text_flags() {
        let bundle = FieldBundle::new()
            .with("application.previousDecision", "Tak")
            .with("applicant.hasChildren", false);
        assert!(bundle.flag("application.previousDecision"));
        assert_eq!(bundle.text("applicant.hasChildren"), "false");
        assert!(!bundle.flag("missing"));
    }
}
