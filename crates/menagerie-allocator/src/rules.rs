//! Biological compatibility and capacity rules.
//!
//! Rules fire in a fixed order per enclosure; the first failure decides the
//! verdict. All checks simulate the placement without mutating anything.

use std::fmt;

use menagerie_core::{Enclosure, PlacementReport, SpeciesCatalog, SpeciesTraits};

/// Extra space units reserved when an enclosure would house more than one
/// species simultaneously.
pub const MULTI_SPECIES_OVERHEAD: i64 = 1;

/// The first rule that rejected an enclosure for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// A carnivore resident would share with a foreign species, or a
    /// carnivorous batch would join one.
    CarnivoreConflict,
    /// A gregarious resident group of exactly one would be joined by more
    /// of its own species.
    LoneGregariousResident,
    /// The enclosure offers none of the species' biomes.
    BiomeMismatch,
    /// Not enough free space for the batch plus any overhead.
    InsufficientSpace,
}

impl RejectionReason {
    /// Stable rule name, for logs and explanations.
    pub fn rule_name(&self) -> &'static str {
        match self {
            RejectionReason::CarnivoreConflict => "CarnivoreExclusivity",
            RejectionReason::LoneGregariousResident => "LoneGregariousResident",
            RejectionReason::BiomeMismatch => "BiomeCompatibility",
            RejectionReason::InsufficientSpace => "CapacityLimit",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name())
    }
}

/// Assesses one enclosure for a batch of `need` space units of the given
/// species (canonical name, traits already resolved).
///
/// Residents are surveyed in a single pass; a resident species missing from
/// the catalog occupies no space and triggers no rule (caller contract
/// violation, tolerated without panicking).
pub(crate) fn assess(
    catalog: &SpeciesCatalog,
    traits: &SpeciesTraits,
    species: &str,
    need: i64,
    enclosure: &Enclosure,
) -> Result<PlacementReport, RejectionReason> {
    let mut occupied = 0i64;
    let mut foreign_present = false;
    let mut carnivore_conflict = false;
    let mut lone_gregarious = false;

    for group in &enclosure.residents {
        let Some(resident) = catalog.get(&group.species) else {
            continue;
        };
        occupied =
            occupied.saturating_add(i64::from(group.count).saturating_mul(resident.unit_size));

        let foreign = group.species != species;
        foreign_present |= foreign;
        carnivore_conflict |= resident.carnivore && foreign;
        lone_gregarious |= resident.gregarious && group.count == 1 && !foreign;
    }

    if carnivore_conflict || (traits.carnivore && foreign_present) {
        return Err(RejectionReason::CarnivoreConflict);
    }
    if lone_gregarious {
        return Err(RejectionReason::LoneGregariousResident);
    }
    if !traits.lives_in(&enclosure.biomes) {
        return Err(RejectionReason::BiomeMismatch);
    }

    let available = enclosure.capacity.saturating_sub(occupied);
    let extra = if foreign_present {
        MULTI_SPECIES_OVERHEAD
    } else {
        0
    };
    let usable = available.saturating_sub(extra);
    if usable < need {
        return Err(RejectionReason::InsufficientSpace);
    }

    Ok(PlacementReport {
        enclosure_id: enclosure.id,
        free_space: usable - need,
        capacity: enclosure.capacity,
    })
}
