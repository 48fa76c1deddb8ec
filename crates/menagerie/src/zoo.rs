//! A catalog and an inventory, bundled for convenience.

use std::path::Path;

use menagerie_allocator::{analyze, evaluate, PlacementAnalysis};
use menagerie_config::{CatalogError, ZooFile};
use menagerie_core::{AllocationError, Enclosure, PlacementReport, SpeciesCatalog};

/// A zoo: the species catalog plus the fixed enclosure inventory.
///
/// The zoo owns read-only reference data; evaluating a batch never mutates
/// it.
///
/// # Examples
///
/// ```
/// use menagerie::Zoo;
///
/// let zoo = Zoo::reference();
/// let reports = zoo.placements_for("Lion", 1).unwrap();
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].enclosure_id, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Zoo {
    catalog: SpeciesCatalog,
    enclosures: Vec<Enclosure>,
}

impl Zoo {
    /// Creates a zoo from already-built parts.
    pub fn new(catalog: SpeciesCatalog, enclosures: Vec<Enclosure>) -> Self {
        Zoo {
            catalog,
            enclosures,
        }
    }

    /// The built-in reference zoo.
    pub fn reference() -> Self {
        Self::from_file(ZooFile::reference())
    }

    /// Loads and validates a zoo from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = ZooFile::load(path)?;
        file.validate()?;
        Ok(Self::from_file(file))
    }

    /// Converts a parsed zoo file without re-validating it.
    pub fn from_file(file: ZooFile) -> Self {
        let (catalog, enclosures) = file.into_parts();
        Self::new(catalog, enclosures)
    }

    /// The species catalog.
    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    /// The enclosure inventory.
    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    /// Viable placements for one batch, ascending by enclosure id.
    pub fn placements_for(
        &self,
        species: &str,
        quantity: i64,
    ) -> Result<Vec<PlacementReport>, AllocationError> {
        evaluate(&self.catalog, &self.enclosures, species, quantity)
    }

    /// Full per-enclosure analysis for one batch.
    pub fn analysis_for(
        &self,
        species: &str,
        quantity: i64,
    ) -> Result<PlacementAnalysis, AllocationError> {
        analyze(&self.catalog, &self.enclosures, species, quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::{ResidentGroup, SpeciesTraits};

    #[test]
    fn test_reference_zoo_round_trip() {
        let zoo = Zoo::reference();

        let reports = zoo.placements_for("monkey", 2).unwrap();
        let ids: Vec<u32> = reports.iter().map(|r| r.enclosure_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(
            zoo.placements_for("gazelle", 200),
            Err(AllocationError::NoViableEnclosure)
        );
    }

    #[test]
    fn test_analysis_reaches_every_enclosure() {
        let zoo = Zoo::reference();
        let analysis = zoo.analysis_for("crocodile", 1).unwrap();
        assert_eq!(analysis.verdicts().len(), zoo.enclosures().len());
    }

    #[test]
    fn test_hand_built_zoo() {
        let catalog = SpeciesCatalog::new()
            .with_species("tortoise", SpeciesTraits::new(1, ["river"]));
        let enclosures = vec![Enclosure::new(1, ["river"], 4)
            .with_residents(vec![ResidentGroup::new("tortoise", 2)])];

        let zoo = Zoo::new(catalog, enclosures);
        let reports = zoo.placements_for("tortoise", 2).unwrap();
        assert_eq!(reports[0].free_space, 0);
    }
}
