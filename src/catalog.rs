//! Sample data shared by the demo binaries.
//!
//! The catalog is compiled into the crate from `data/catalog.toml` and parsed
//! with `serde` + `toml`, so the binaries read no files at runtime.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CatalogError;

const EMBEDDED: &str = include_str!("../data/catalog.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<MovieEntry>,
    #[serde(default)]
    pub computers: Vec<ComputerPreset>,
    #[serde(default)]
    pub prototypes: Vec<PrototypeEntry>,
    pub premises: PremisesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieEntry {
    pub id: String,
    pub title: String,
}

/// A named computer configuration. Absent fields keep the builder defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ComputerPreset {
    pub name: String,
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub gpu: Option<String>,
    pub bluetooth: Option<bool>,
    pub wifi: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrototypeEntry {
    pub key: String,
    #[serde(flatten)]
    pub shape: ShapeSpec,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Circle {
        color: String,
        radius: f64,
    },
    Rectangle {
        color: String,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PremisesConfig {
    pub floors: u32,
    pub rooms_per_floor: u32,
}

impl Catalog {
    /// Parses the catalog compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml_str(EMBEDDED)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn computer(&self, name: &str) -> Option<&ComputerPreset> {
        self.computers.iter().find(|preset| preset.name == name)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        if let Some(dup) = self.movies.iter().find(|m| !seen.insert(m.id.as_str())) {
            return Err(CatalogError::invalid(format!(
                "duplicate movie id '{}'",
                dup.id
            )));
        }

        if self.premises.floors == 0 || self.premises.rooms_per_floor == 0 {
            return Err(CatalogError::invalid(
                "premises floors and rooms_per_floor must be positive",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.movies.len(), 5);
        assert_eq!(catalog.computers.len(), 2);
        assert!(catalog.prototypes.len() >= 2);
        assert_eq!(
            catalog.premises,
            PremisesConfig {
                floors: 5,
                rooms_per_floor: 3
            }
        );
    }

    #[test]
    fn test_shape_spec_tagging() {
        let catalog = Catalog::embedded().unwrap();
        let circle = catalog
            .prototypes
            .iter()
            .find(|p| p.key == "red_circle")
            .unwrap();
        assert_eq!(
            circle.shape,
            ShapeSpec::Circle {
                color: "red".into(),
                radius: 10.0
            }
        );
    }

    #[test]
    fn test_office_preset_leaves_gpu_unset() {
        let catalog = Catalog::embedded().unwrap();
        let office = catalog.computer("office").unwrap();
        assert_eq!(office.gpu, None);
        assert_eq!(office.wifi, None);
        assert_eq!(office.bluetooth, Some(true));
        assert!(catalog.computer("server").is_none());
    }

    #[test]
    fn test_duplicate_movie_id_rejected() {
        let source = r#"
            [[movies]]
            id = "1"
            title = "A"

            [[movies]]
            id = "1"
            title = "B"

            [premises]
            floors = 2
            rooms_per_floor = 2
        "#;
        let err = Catalog::from_toml_str(source).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert!(err.to_string().contains("duplicate movie id '1'"));
    }

    #[test]
    fn test_zero_floors_rejected() {
        let source = "[premises]\nfloors = 0\nrooms_per_floor = 3\n";
        assert!(matches!(
            Catalog::from_toml_str(source),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_premises_is_parse_error() {
        assert!(matches!(
            Catalog::from_toml_str("movies = []"),
            Err(CatalogError::Parse(_))
        ));
    }
}
