//! Menagerie Allocator - decides where an incoming batch of animals can live.
//!
//! The allocator is a pure evaluation over read-only reference data: given a
//! species catalog, an enclosure inventory, and one batch of animals, it
//! returns the enclosures that could house the batch, ordered ascending by
//! enclosure id and annotated with the free space that would remain. The
//! inputs are never mutated; placements are only simulated.
//!
//! Logging levels:
//! - **INFO**: evaluation start/end with request summary and viable count
//! - **DEBUG**: per-enclosure admissions and rejections with the rule name
//!
//! # Example
//!
//! ```
//! use menagerie_allocator::evaluate;
//! use menagerie_core::{Enclosure, ResidentGroup, SpeciesCatalog, SpeciesTraits};
//!
//! let catalog = SpeciesCatalog::new()
//!     .with_species("lion", SpeciesTraits::new(3, ["savanna"]).carnivore())
//!     .with_species("gazelle", SpeciesTraits::new(2, ["savanna"]));
//!
//! let enclosures = vec![
//!     Enclosure::new(1, ["savanna"], 9)
//!         .with_residents(vec![ResidentGroup::new("lion", 1)]),
//!     Enclosure::new(2, ["savanna"], 10),
//! ];
//!
//! // The lion enclosure is closed to gazelles; the empty one is not.
//! let reports = evaluate(&catalog, &enclosures, "Gazelle", 3).unwrap();
//! assert_eq!(reports.len(), 1);
//! assert_eq!(reports[0].enclosure_id, 2);
//! assert_eq!(reports[0].free_space, 4);
//! ```

mod analysis;
mod rules;


pub use analysis::{EnclosureVerdict, PlacementAnalysis, Verdict};
pub use rules::{RejectionReason, MULTI_SPECIES_OVERHEAD};

use menagerie_core::{
    AllocationError, Enclosure, PlacementReport, PlacementRequest, SpeciesCatalog,
};
use tracing::{debug, info};

/// Evaluates one batch against every enclosure.
///
/// Validation, first failure wins:
/// 1. `species` must resolve (case-insensitively) in the catalog, else
///    [`AllocationError::UnknownSpecies`];
/// 2. `quantity` must be positive, else [`AllocationError::InvalidQuantity`].
///
/// Returns the viable enclosures sorted ascending by id, or
/// [`AllocationError::NoViableEnclosure`] when every enclosure was
/// rejected. Each call is one-shot and idempotent.
pub fn evaluate(
    catalog: &SpeciesCatalog,
    enclosures: &[Enclosure],
    species: &str,
    quantity: i64,
) -> Result<Vec<PlacementReport>, AllocationError> {
    let analysis = analyze(catalog, enclosures, species, quantity)?;
    let reports: Vec<PlacementReport> = analysis.admitted().copied().collect();
    if reports.is_empty() {
        return Err(AllocationError::NoViableEnclosure);
    }
    Ok(reports)
}

/// Evaluates a [`PlacementRequest`], delegating to [`evaluate`].
pub fn evaluate_request(
    catalog: &SpeciesCatalog,
    enclosures: &[Enclosure],
    request: &PlacementRequest,
) -> Result<Vec<PlacementReport>, AllocationError> {
    evaluate(catalog, enclosures, &request.species, request.quantity)
}

/// Assesses one batch against every enclosure, keeping every verdict.
///
/// Shares validation with [`evaluate`], but an analysis where nothing was
/// admitted is still an analysis: only `UnknownSpecies` and
/// `InvalidQuantity` are errors here.
pub fn analyze(
    catalog: &SpeciesCatalog,
    enclosures: &[Enclosure],
    species: &str,
    quantity: i64,
) -> Result<PlacementAnalysis, AllocationError> {
    let species = SpeciesCatalog::canonical_name(species);
    let traits = catalog
        .get(&species)
        .ok_or(AllocationError::UnknownSpecies)?;
    if quantity <= 0 {
        return Err(AllocationError::InvalidQuantity);
    }

    // Saturate rather than overflow on absurd quantities.
    let need = quantity.saturating_mul(traits.unit_size);

    info!(
        event = "evaluate_start",
        species = %species,
        quantity,
        need,
        enclosure_count = enclosures.len(),
    );

    let verdicts = enclosures
        .iter()
        .map(|enclosure| {
            let verdict = match rules::assess(catalog, traits, &species, need, enclosure) {
                Ok(report) => {
                    debug!(
                        enclosure = enclosure.id,
                        free_space = report.free_space,
                        "admitted"
                    );
                    Verdict::Admitted(report)
                }
                Err(reason) => {
                    debug!(
                        enclosure = enclosure.id,
                        rule = reason.rule_name(),
                        "rejected"
                    );
                    Verdict::Rejected(reason)
                }
            };
            EnclosureVerdict {
                enclosure_id: enclosure.id,
                verdict,
            }
        })
        .collect();

    let analysis = PlacementAnalysis::new(verdicts);
    info!(event = "evaluate_end", viable = analysis.admitted().count());
    Ok(analysis)
}
