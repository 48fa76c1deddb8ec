//! Species reference data.
//!
//! The catalog maps species names to their immutable traits. Names are
//! canonicalized to lowercase on insert, so lookup is case-insensitive.

use std::collections::{BTreeSet, HashMap};

/// Immutable traits of one species.
///
/// # Examples
///
/// ```
/// use menagerie_core::SpeciesTraits;
///
/// let lion = SpeciesTraits::new(3, ["savanna"]).carnivore();
/// assert_eq!(lion.unit_size, 3);
/// assert!(lion.carnivore);
///
/// let monkey = SpeciesTraits::new(1, ["savanna", "forest"]).gregarious();
/// assert!(monkey.gregarious);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesTraits {
    /// Space units one individual occupies.
    pub unit_size: i64,

    /// Atomic biome tags this species can inhabit. Non-empty, lowercase.
    pub biomes: BTreeSet<String>,

    /// Carnivores tolerate only their own species in an enclosure.
    pub carnivore: bool,

    /// Gregarious species are distressed when a group of one is left alone.
    pub gregarious: bool,
}

impl SpeciesTraits {
    /// Creates non-carnivorous, non-gregarious traits.
    ///
    /// Biome tags are lowercased.
    pub fn new<I, S>(unit_size: i64, biomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SpeciesTraits {
            unit_size,
            biomes: biomes
                .into_iter()
                .map(|b| b.into().to_lowercase())
                .collect(),
            carnivore: false,
            gregarious: false,
        }
    }

    /// Marks this species as carnivorous.
    pub fn carnivore(mut self) -> Self {
        self.carnivore = true;
        self
    }

    /// Marks this species as gregarious.
    pub fn gregarious(mut self) -> Self {
        self.gregarious = true;
        self
    }

    /// Returns true if at least one of this species' biomes is offered by
    /// the given enclosure biome set.
    pub fn lives_in(&self, offered: &BTreeSet<String>) -> bool {
        self.biomes.iter().any(|b| offered.contains(b))
    }
}

/// Case-insensitive map from species name to traits.
///
/// # Examples
///
/// ```
/// use menagerie_core::{SpeciesCatalog, SpeciesTraits};
///
/// let catalog = SpeciesCatalog::new()
///     .with_species("Lion", SpeciesTraits::new(3, ["savanna"]).carnivore());
///
/// assert!(catalog.get("LION").is_some());
/// assert!(catalog.get("unicorn").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesCatalog {
    species: HashMap<String, SpeciesTraits>,
}

impl SpeciesCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical (lowercase) form of a species name.
    pub fn canonical_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Inserts a species, replacing any previous entry with the same
    /// canonical name.
    pub fn insert(&mut self, name: impl Into<String>, traits: SpeciesTraits) {
        self.species
            .insert(Self::canonical_name(&name.into()), traits);
    }

    /// Inserts a species, builder style.
    pub fn with_species(mut self, name: impl Into<String>, traits: SpeciesTraits) -> Self {
        self.insert(name, traits);
        self
    }

    /// Looks up a species by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&SpeciesTraits> {
        self.species.get(&Self::canonical_name(name))
    }

    /// Returns true if the catalog knows the given species.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of species in the catalog.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Iterates over (canonical name, traits) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpeciesTraits)> {
        self.species.iter().map(|(name, traits)| (name.as_str(), traits))
    }
}

impl<N: Into<String>> FromIterator<(N, SpeciesTraits)> for SpeciesCatalog {
    fn from_iter<T: IntoIterator<Item = (N, SpeciesTraits)>>(iter: T) -> Self {
        let mut catalog = SpeciesCatalog::new();
        for (name, traits) in iter {
            catalog.insert(name, traits);
        }
        catalog
    }
}
