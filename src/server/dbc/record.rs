//! Records produced by the flat-table reader.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

/// A single cell: a base-10 integer when the whole trimmed cell parses as one,
/// the original text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FlatValue {
    Int(i64),
    Text(String),
}

impl FlatValue {
    /// Classifies a raw cell.
    ///
    /// # Arguments
    /// - `raw` - Cell text exactly as it appeared in the extract
    ///
    /// # Returns
    /// - `FlatValue::Int` - The trimmed cell is a valid `i64`
    /// - `FlatValue::Text` - Anything else, keeping the untrimmed original
    pub fn parse(raw: String) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(value) => FlatValue::Int(value),
            Err(_) => FlatValue::Text(raw),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FlatValue::Int(value) => Some(*value),
            FlatValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlatValue::Text(value) => Some(value),
            FlatValue::Int(_) => None,
        }
    }

    fn into_json(self) -> serde_json::Value {
        match self {
            FlatValue::Int(value) => serde_json::Value::from(value),
            FlatValue::Text(value) => serde_json::Value::String(value),
        }
    }
}

/// One data row of a flat table, keyed by normalized header names.
///
/// Fields keep the order of the source header. Every record of a table shares the
/// same name set; names are reference counted so rows do not duplicate them.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    fields: Vec<(Arc<str>, FlatValue)>,
}

impl FlatRecord {
    pub(crate) fn new(fields: Vec<(Arc<str>, FlatValue)>) -> Self {
        Self { fields }
    }

    /// Looks up a cell by normalized field name.
    pub fn get(&self, name: &str) -> Option<&FlatValue> {
        self.fields
            .iter()
            .find(|(field, _)| field.as_ref() == name)
            .map(|(_, value)| value)
    }

    /// Looks up a cell by its position among the retained fields.
    pub fn get_index(&self, index: usize) -> Option<&FlatValue> {
        self.fields.get(index).map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the record into a typed row.
    ///
    /// # Returns
    /// - `Ok(T)` - Row deserialized from the field map
    /// - `Err(serde_json::Error)` - A field has an incompatible value
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.into_json()))
            .collect();

        serde_json::from_value(serde_json::Value::Object(map))
    }
}

/// Serde helpers for typed rows.
pub mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(i64),
    }

    /// Accepts a text field whose cell happened to look numeric.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match TextOrNumber::deserialize(deserializer)? {
            TextOrNumber::Text(value) => value,
            TextOrNumber::Number(value) => value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        id: u32,
        #[serde(deserialize_with = "de::text")]
        name_lang0: String,
    }

    fn record(fields: &[(&str, FlatValue)]) -> FlatRecord {
        FlatRecord::new(
            fields
                .iter()
                .map(|(name, value)| (Arc::from(*name), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn parses_whole_integers_only() {
        assert_eq!(FlatValue::parse("42".into()), FlatValue::Int(42));
        assert_eq!(FlatValue::parse(" -7 ".into()), FlatValue::Int(-7));
        assert_eq!(FlatValue::parse("1.5".into()), FlatValue::Text("1.5".into()));
        assert_eq!(FlatValue::parse("12abc".into()), FlatValue::Text("12abc".into()));
        assert_eq!(FlatValue::parse("".into()), FlatValue::Text("".into()));
    }

    #[test]
    fn looks_up_by_name_and_position() {
        let row = record(&[
            ("id", FlatValue::Int(1)),
            ("nameLang0", FlatValue::Text("Sword".into())),
        ]);

        assert_eq!(row.get("nameLang0"), Some(&FlatValue::Text("Sword".into())));
        assert_eq!(row.get_index(0), Some(&FlatValue::Int(1)));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.names().collect::<Vec<_>>(), vec!["id", "nameLang0"]);
    }

    #[test]
    fn deserializes_numeric_looking_text() {
        let row = record(&[
            ("id", FlatValue::Int(3)),
            ("nameLang0", FlatValue::Int(1000)),
        ]);

        let typed: Row = row.deserialize().unwrap();
        assert_eq!(
            typed,
            Row {
                id: 3,
                name_lang0: "1000".into()
            }
        );
    }
}
