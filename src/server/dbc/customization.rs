//! Character customization catalog.
//!
//! One JSON document per (race, gender) describing the customization options of the
//! modern character model and the choices of each option.

use std::{collections::HashMap, path::Path};

use serde::Deserialize;

use crate::server::error::dbc::DbcError;

/// Races with a customization document.
pub const CUSTOMIZATION_RACES: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 10, 11];
pub const CUSTOMIZATION_GENDERS: [u8; 2] = [0, 1];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomizationData {
    pub options: Vec<CustomizationOption>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomizationOption {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub choices: Vec<CustomizationChoice>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomizationChoice {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub order_index: i64,
}

impl CustomizationData {
    pub fn option(&self, name: &str) -> Option<&CustomizationOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

impl CustomizationOption {
    pub fn choice_by_index(&self, index: i64) -> Option<&CustomizationChoice> {
        self.choices.iter().find(|choice| choice.order_index == index)
    }

    pub fn choice_by_name(&self, name: &str) -> Option<&CustomizationChoice> {
        self.choices.iter().find(|choice| choice.name == name)
    }
}

#[derive(Debug, Default)]
pub struct CustomizationCatalog {
    data: HashMap<(u8, u8), CustomizationData>,
}

impl CustomizationCatalog {
    /// Loads every (race, gender) document from `<data_dir>/meta/charactercustomization2`.
    ///
    /// # Arguments
    /// - `data_dir` - Root of the reference data directory
    ///
    /// # Returns
    /// - `Ok(CustomizationCatalog)` - All documents parsed
    /// - `Err(DbcError)` - A document is missing or malformed
    pub async fn load(data_dir: &Path) -> Result<Self, DbcError> {
        let dir = data_dir.join("meta").join("charactercustomization2");
        let mut data = HashMap::new();

        for race in CUSTOMIZATION_RACES {
            for gender in CUSTOMIZATION_GENDERS {
                let path = dir.join(format!("{race}_{gender}.json"));
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|source| match source.kind() {
                        std::io::ErrorKind::NotFound => DbcError::Missing { path: path.clone() },
                        _ => DbcError::Io {
                            path: path.clone(),
                            source,
                        },
                    })?;
                let document = serde_json::from_slice(&bytes)
                    .map_err(|source| DbcError::Customization { path, source })?;

                data.insert((race, gender), document);
            }
        }

        Ok(Self { data })
    }

    pub fn get(&self, race: u8, gender: u8) -> Option<&CustomizationData> {
        self.data.get(&(race, gender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[tokio::test]
    async fn loads_every_race_and_gender() {
        let data = fixture::dbc::reference_data().unwrap();
        let catalog = CustomizationCatalog::load(data.path()).await.unwrap();

        for race in CUSTOMIZATION_RACES {
            for gender in CUSTOMIZATION_GENDERS {
                assert!(catalog.get(race, gender).is_some());
            }
        }
        assert!(catalog.get(9, 0).is_none());

        let human = catalog.get(1, 0).unwrap();
        let face = human.option("Face").unwrap();
        assert!(face.choice_by_index(0).is_some());
    }

    #[tokio::test]
    async fn missing_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CustomizationCatalog::load(dir.path()).await;

        assert!(matches!(result, Err(DbcError::Missing { .. })));
    }

    #[tokio::test]
    async fn malformed_document_is_an_error() {
        let data = fixture::dbc::reference_data().unwrap();
        let path = data
            .path()
            .join("meta/charactercustomization2/5_1.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = CustomizationCatalog::load(data.path()).await;
        assert!(matches!(result, Err(DbcError::Customization { .. })));
    }
}
