//! Enclosures and their resident populations.

use std::collections::BTreeSet;

use crate::catalog::SpeciesCatalog;

/// One already-present population: a species and how many individuals.
///
/// Counts are at least 1; empty groups are simply not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidentGroup {
    /// Canonical (lowercase) species name.
    pub species: String,
    /// Number of individuals, >= 1.
    pub count: u32,
}

impl ResidentGroup {
    /// Creates a resident group; the species name is canonicalized.
    pub fn new(species: impl Into<String>, count: u32) -> Self {
        ResidentGroup {
            species: SpeciesCatalog::canonical_name(&species.into()),
            count,
        }
    }
}

/// A fixed enclosure with a biome offering, a capacity, and residents.
///
/// The biome offering is a set of atomic tags: a compound habitat such as
/// "savanna and river" is represented as `{"savanna", "river"}` and
/// satisfies either constituent requirement.
///
/// # Examples
///
/// ```
/// use menagerie_core::{Enclosure, ResidentGroup};
///
/// let enclosure = Enclosure::new(3, ["savanna", "river"], 7)
///     .with_residents(vec![ResidentGroup::new("gazelle", 1)]);
///
/// assert_eq!(enclosure.id, 3);
/// assert_eq!(enclosure.capacity, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enclosure {
    /// Unique positive id.
    pub id: u32,
    /// Atomic biome tags offered by this enclosure. Lowercase.
    pub biomes: BTreeSet<String>,
    /// Total capacity in space units.
    pub capacity: i64,
    /// Populations already present. Their total occupancy never exceeds
    /// `capacity`; that invariant is maintained by whoever supplies the
    /// inventory.
    pub residents: Vec<ResidentGroup>,
}

impl Enclosure {
    /// Creates an empty enclosure. Biome tags are lowercased.
    pub fn new<I, S>(id: u32, biomes: I, capacity: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Enclosure {
            id,
            biomes: biomes
                .into_iter()
                .map(|b| b.into().to_lowercase())
                .collect(),
            capacity,
            residents: Vec::new(),
        }
    }

    /// Sets the resident populations, builder style.
    pub fn with_residents(mut self, residents: Vec<ResidentGroup>) -> Self {
        self.residents = residents;
        self
    }

    /// Space units currently occupied by residents.
    ///
    /// A resident species missing from the catalog occupies zero space;
    /// such inventories violate the caller contract but must not panic.
    pub fn occupied_space(&self, catalog: &SpeciesCatalog) -> i64 {
        self.residents
            .iter()
            .filter_map(|group| {
                catalog
                    .get(&group.species)
                    .map(|traits| i64::from(group.count).saturating_mul(traits.unit_size))
            })
            .fold(0i64, i64::saturating_add)
    }

    /// Space units still free before any hypothetical placement.
    pub fn free_space(&self, catalog: &SpeciesCatalog) -> i64 {
        self.capacity - self.occupied_space(catalog)
    }

    /// Returns true if the enclosure holds no animals at all.
    pub fn is_unoccupied(&self) -> bool {
        self.residents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpeciesTraits;

    fn small_catalog() -> SpeciesCatalog {
        SpeciesCatalog::new()
            .with_species("monkey", SpeciesTraits::new(1, ["savanna", "forest"]).gregarious())
            .with_species("gazelle", SpeciesTraits::new(2, ["savanna"]))
    }

    #[test]
    fn test_occupied_space_sums_residents() {
        let catalog = small_catalog();
        let enclosure = Enclosure::new(1, ["savanna"], 10).with_residents(vec![
            ResidentGroup::new("monkey", 3),
            ResidentGroup::new("gazelle", 2),
        ]);

        assert_eq!(enclosure.occupied_space(&catalog), 3 + 4);
        assert_eq!(enclosure.free_space(&catalog), 3);
    }

    #[test]
    fn test_unknown_resident_occupies_nothing() {
        let catalog = small_catalog();
        let enclosure = Enclosure::new(1, ["savanna"], 10)
            .with_residents(vec![ResidentGroup::new("chupacabra", 4)]);

        assert_eq!(enclosure.occupied_space(&catalog), 0);
    }

    #[test]
    fn test_resident_species_is_canonicalized() {
        let group = ResidentGroup::new("Gazelle", 1);
        assert_eq!(group.species, "gazelle");
    }

    #[test]
    fn test_empty_enclosure() {
        let catalog = small_catalog();
        let enclosure = Enclosure::new(2, ["forest"], 5);

        assert!(enclosure.is_unoccupied());
        assert_eq!(enclosure.free_space(&catalog), 5);
    }
}
