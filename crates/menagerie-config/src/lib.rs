//! Configuration for the menagerie allocator.
//!
//! Load the species catalog and enclosure inventory from TOML or YAML files
//! instead of baking them into code.
//!
//! # Examples
//!
//! Load a zoo from a TOML string:
//!
//! ```
//! use menagerie_config::ZooFile;
//!
//! let zoo = ZooFile::from_toml_str(r#"
//!     [species.lion]
//!     unit_size = 3
//!     biomes = ["savanna"]
//!     carnivore = true
//!
//!     [species.monkey]
//!     unit_size = 1
//!     biomes = ["savanna", "forest"]
//!     gregarious = true
//!
//!     [[enclosures]]
//!     id = 1
//!     biomes = ["savanna"]
//!     capacity = 10
//!     residents = [{ species = "monkey", count = 3 }]
//! "#).unwrap();
//!
//! assert_eq!(zoo.species.len(), 2);
//! assert_eq!(zoo.enclosures.len(), 1);
//! zoo.validate().unwrap();
//! ```
//!
//! Fall back to the built-in reference zoo when no file is given:
//!
//! ```
//! use menagerie_config::ZooFile;
//!
//! let zoo = ZooFile::load("zoo.toml").unwrap_or_else(|_| ZooFile::reference());
//! let (catalog, enclosures) = zoo.into_parts();
//! assert!(catalog.contains("hippopotamus"));
//! assert_eq!(enclosures.len(), 5);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use menagerie_core::{Enclosure, ResidentGroup, SpeciesCatalog, SpeciesTraits};

/// Configuration error
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid zoo file: {0}")]
    Invalid(String),
}

/// Serde model of a zoo file: a species catalog plus an enclosure
/// inventory.
///
/// Parsing does not validate; call [`ZooFile::validate`] to check the
/// invariants the allocator assumes before handing the data to it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ZooFile {
    /// Known species, keyed by name (matched case-insensitively later).
    #[serde(default)]
    pub species: BTreeMap<String, SpeciesEntry>,

    /// Enclosure inventory, in listing order.
    #[serde(default)]
    pub enclosures: Vec<EnclosureEntry>,
}

/// One species in the catalog section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SpeciesEntry {
    /// Space units one individual occupies.
    pub unit_size: i64,

    /// Biome tags this species can inhabit.
    pub biomes: Vec<String>,

    /// Whether the species is carnivorous.
    #[serde(default)]
    pub carnivore: bool,

    /// Whether the species is gregarious.
    #[serde(default)]
    pub gregarious: bool,
}

/// One enclosure in the inventory section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EnclosureEntry {
    /// Unique positive id.
    pub id: u32,

    /// Biome tags offered by the enclosure. A compound habitat is listed
    /// as its constituent tags, e.g. `["savanna", "river"]`.
    pub biomes: Vec<String>,

    /// Total capacity in space units.
    pub capacity: i64,

    /// Populations already present.
    #[serde(default)]
    pub residents: Vec<ResidentEntry>,
}

/// One resident population of an enclosure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResidentEntry {
    /// Species name; must be present in the species section.
    pub species: String,

    /// Number of individuals, >= 1.
    pub count: u32,
}

impl ZooFile {
    /// Creates an empty zoo file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a zoo file from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_toml_file(path)
    }

    /// Loads a zoo file from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a zoo file from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a zoo file from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a zoo file from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a species, builder style.
    pub fn with_species(mut self, name: impl Into<String>, entry: SpeciesEntry) -> Self {
        self.species.insert(name.into(), entry);
        self
    }

    /// Adds an enclosure, builder style.
    pub fn with_enclosure(mut self, entry: EnclosureEntry) -> Self {
        self.enclosures.push(entry);
        self
    }

    /// The built-in reference zoo.
    pub fn reference() -> Self {
        ZooFile {
            species: BTreeMap::from([
                (
                    "lion".to_string(),
                    SpeciesEntry {
                        unit_size: 3,
                        biomes: vec!["savanna".to_string()],
                        carnivore: true,
                        gregarious: false,
                    },
                ),
                (
                    "leopard".to_string(),
                    SpeciesEntry {
                        unit_size: 2,
                        biomes: vec!["savanna".to_string()],
                        carnivore: true,
                        gregarious: false,
                    },
                ),
                (
                    "crocodile".to_string(),
                    SpeciesEntry {
                        unit_size: 3,
                        biomes: vec!["river".to_string()],
                        carnivore: true,
                        gregarious: false,
                    },
                ),
                (
                    "monkey".to_string(),
                    SpeciesEntry {
                        unit_size: 1,
                        biomes: vec!["savanna".to_string(), "forest".to_string()],
                        carnivore: false,
                        gregarious: true,
                    },
                ),
                (
                    "gazelle".to_string(),
                    SpeciesEntry {
                        unit_size: 2,
                        biomes: vec!["savanna".to_string()],
                        carnivore: false,
                        gregarious: false,
                    },
                ),
                (
                    "hippopotamus".to_string(),
                    SpeciesEntry {
                        unit_size: 4,
                        biomes: vec!["savanna".to_string(), "river".to_string()],
                        carnivore: false,
                        gregarious: false,
                    },
                ),
            ]),
            enclosures: vec![
                EnclosureEntry {
                    id: 1,
                    biomes: vec!["savanna".to_string()],
                    capacity: 10,
                    residents: vec![ResidentEntry {
                        species: "monkey".to_string(),
                        count: 3,
                    }],
                },
                EnclosureEntry {
                    id: 2,
                    biomes: vec!["forest".to_string()],
                    capacity: 5,
                    residents: vec![],
                },
                EnclosureEntry {
                    id: 3,
                    biomes: vec!["savanna".to_string(), "river".to_string()],
                    capacity: 7,
                    residents: vec![ResidentEntry {
                        species: "gazelle".to_string(),
                        count: 1,
                    }],
                },
                EnclosureEntry {
                    id: 4,
                    biomes: vec!["river".to_string()],
                    capacity: 8,
                    residents: vec![],
                },
                EnclosureEntry {
                    id: 5,
                    biomes: vec!["savanna".to_string()],
                    capacity: 9,
                    residents: vec![ResidentEntry {
                        species: "lion".to_string(),
                        count: 1,
                    }],
                },
            ],
        }
    }

    /// Checks the invariants the allocator assumes of its inputs.
    ///
    /// Positive unit sizes and capacities, non-empty biome sets, unique
    /// positive enclosure ids, resident counts of at least 1, resident
    /// species present in the catalog, and residents fitting within their
    /// enclosure's capacity.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut unit_sizes = BTreeMap::new();
        for (name, entry) in &self.species {
            if entry.unit_size <= 0 {
                return Err(CatalogError::Invalid(format!(
                    "species {name}: unit_size must be positive"
                )));
            }
            if entry.biomes.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "species {name}: biomes must not be empty"
                )));
            }
            unit_sizes.insert(SpeciesCatalog::canonical_name(name), entry.unit_size);
        }

        let mut seen_ids = std::collections::BTreeSet::new();
        for enclosure in &self.enclosures {
            if enclosure.id == 0 {
                return Err(CatalogError::Invalid(
                    "enclosure ids must be positive".to_string(),
                ));
            }
            if !seen_ids.insert(enclosure.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate enclosure id {}",
                    enclosure.id
                )));
            }
            if enclosure.capacity <= 0 {
                return Err(CatalogError::Invalid(format!(
                    "enclosure {}: capacity must be positive",
                    enclosure.id
                )));
            }
            if enclosure.biomes.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "enclosure {}: biomes must not be empty",
                    enclosure.id
                )));
            }

            let mut occupied = 0i64;
            for resident in &enclosure.residents {
                if resident.count == 0 {
                    return Err(CatalogError::Invalid(format!(
                        "enclosure {}: resident counts must be at least 1",
                        enclosure.id
                    )));
                }
                let canonical = SpeciesCatalog::canonical_name(&resident.species);
                let Some(unit_size) = unit_sizes.get(&canonical) else {
                    return Err(CatalogError::Invalid(format!(
                        "enclosure {}: unknown resident species {}",
                        enclosure.id, resident.species
                    )));
                };
                occupied += i64::from(resident.count) * unit_size;
            }
            if occupied > enclosure.capacity {
                return Err(CatalogError::Invalid(format!(
                    "enclosure {}: residents occupy {} of {} space units",
                    enclosure.id, occupied, enclosure.capacity
                )));
            }
        }

        Ok(())
    }

    /// Converts the file into the core catalog and enclosure types.
    ///
    /// Names and biome tags are canonicalized to lowercase. This is a pure
    /// conversion; run [`ZooFile::validate`] first when the data comes from
    /// outside.
    pub fn into_parts(self) -> (SpeciesCatalog, Vec<Enclosure>) {
        let catalog = self
            .species
            .into_iter()
            .map(|(name, entry)| {
                let mut traits = SpeciesTraits::new(entry.unit_size, entry.biomes);
                if entry.carnivore {
                    traits = traits.carnivore();
                }
                if entry.gregarious {
                    traits = traits.gregarious();
                }
                (name, traits)
            })
            .collect();

        let enclosures = self
            .enclosures
            .into_iter()
            .map(|entry| {
                Enclosure::new(entry.id, entry.biomes, entry.capacity).with_residents(
                    entry
                        .residents
                        .into_iter()
                        .map(|r| ResidentGroup::new(r.species, r.count))
                        .collect(),
                )
            })
            .collect();

        (catalog, enclosures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            [species.lion]
            unit_size = 3
            biomes = ["savanna"]
            carnivore = true

            [species.gazelle]
            unit_size = 2
            biomes = ["savanna"]

            [[enclosures]]
            id = 1
            biomes = ["savanna"]
            capacity = 9
            residents = [{ species = "lion", count = 1 }]

            [[enclosures]]
            id = 2
            biomes = ["savanna", "river"]
            capacity = 7
        "#;

        let zoo = ZooFile::from_toml_str(toml).unwrap();
        assert!(zoo.species["lion"].carnivore);
        assert!(!zoo.species["gazelle"].carnivore);
        assert_eq!(zoo.enclosures[0].residents.len(), 1);
        assert!(zoo.enclosures[1].residents.is_empty());
        zoo.validate().unwrap();
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            species:
              monkey:
                unit_size: 1
                biomes: [savanna, forest]
                gregarious: true
            enclosures:
              - id: 1
                biomes: [savanna]
                capacity: 10
                residents:
                  - species: monkey
                    count: 3
        "#;

        let zoo = ZooFile::from_yaml_str(yaml).unwrap();
        assert!(zoo.species["monkey"].gregarious);
        assert_eq!(zoo.enclosures[0].capacity, 10);
        zoo.validate().unwrap();
    }

    #[test]
    fn test_builder() {
        let zoo = ZooFile::new()
            .with_species(
                "gazelle",
                SpeciesEntry {
                    unit_size: 2,
                    biomes: vec!["savanna".to_string()],
                    carnivore: false,
                    gregarious: false,
                },
            )
            .with_enclosure(EnclosureEntry {
                id: 1,
                biomes: vec!["savanna".to_string()],
                capacity: 8,
                residents: vec![],
            });

        assert_eq!(zoo.species.len(), 1);
        assert_eq!(zoo.enclosures.len(), 1);
        zoo.validate().unwrap();
    }

    #[test]
    fn test_reference_zoo_is_valid() {
        let zoo = ZooFile::reference();
        zoo.validate().unwrap();

        let (catalog, enclosures) = zoo.into_parts();
        assert_eq!(catalog.len(), 6);
        assert_eq!(enclosures.len(), 5);
        assert!(catalog.get("leopard").unwrap().carnivore);
        assert!(catalog.get("monkey").unwrap().gregarious);
        assert!(enclosures[2].biomes.contains("savanna"));
        assert!(enclosures[2].biomes.contains("river"));
    }

    #[test]
    fn test_into_parts_canonicalizes_names() {
        let zoo = ZooFile::new()
            .with_species(
                "Gazelle",
                SpeciesEntry {
                    unit_size: 2,
                    biomes: vec!["Savanna".to_string()],
                    carnivore: false,
                    gregarious: false,
                },
            )
            .with_enclosure(EnclosureEntry {
                id: 1,
                biomes: vec!["Savanna".to_string()],
                capacity: 8,
                residents: vec![ResidentEntry {
                    species: "GAZELLE".to_string(),
                    count: 2,
                }],
            });

        let (catalog, enclosures) = zoo.into_parts();
        assert!(catalog.contains("gazelle"));
        assert!(enclosures[0].biomes.contains("savanna"));
        assert_eq!(enclosures[0].residents[0].species, "gazelle");
        assert_eq!(enclosures[0].occupied_space(&catalog), 4);
    }

    #[test]
    fn test_validate_rejects_bad_unit_size() {
        let zoo = ZooFile::reference().with_species(
            "wisp",
            SpeciesEntry {
                unit_size: 0,
                biomes: vec!["forest".to_string()],
                carnivore: false,
                gregarious: false,
            },
        );
        assert!(matches!(zoo.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let zoo = ZooFile::reference().with_enclosure(EnclosureEntry {
            id: 3,
            biomes: vec!["river".to_string()],
            capacity: 4,
            residents: vec![],
        });
        assert!(matches!(zoo.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_resident() {
        let zoo = ZooFile::reference().with_enclosure(EnclosureEntry {
            id: 6,
            biomes: vec!["river".to_string()],
            capacity: 4,
            residents: vec![ResidentEntry {
                species: "kraken".to_string(),
                count: 1,
            }],
        });
        assert!(matches!(zoo.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_overfull_enclosure() {
        let zoo = ZooFile::reference().with_enclosure(EnclosureEntry {
            id: 6,
            biomes: vec!["savanna".to_string()],
            capacity: 3,
            residents: vec![ResidentEntry {
                species: "gazelle".to_string(),
                count: 2,
            }],
        });
        assert!(matches!(zoo.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_count_resident() {
        let zoo = ZooFile::reference().with_enclosure(EnclosureEntry {
            id: 6,
            biomes: vec!["savanna".to_string()],
            capacity: 3,
            residents: vec![ResidentEntry {
                species: "gazelle".to_string(),
                count: 0,
            }],
        });
        assert!(matches!(zoo.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = ZooFile::load("definitely-not-here.toml");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
