//! Menagerie - zoo enclosure allocation in Rust
//!
//! Given a species and a quantity of incoming animals, decide which
//! enclosures could house them without violating compatibility and capacity
//! rules.
//!
//! # Example
//!
//! ```
//! use menagerie::prelude::*;
//!
//! let zoo = Zoo::reference();
//!
//! let reports = zoo.placements_for("monkey", 2).unwrap();
//! assert_eq!(reports[0].to_string(), "Enclosure 1 (free space: 5, total: 10)");
//!
//! assert_eq!(zoo.placements_for("unicorn", 1), Err(AllocationError::UnknownSpecies));
//! ```

// Domain types
pub use menagerie_core::{
    AllocationError, Enclosure, PlacementReport, PlacementRequest, ResidentGroup, SpeciesCatalog,
    SpeciesTraits,
};

// Evaluation API
pub use menagerie_allocator::{
    analyze, evaluate, evaluate_request, EnclosureVerdict, PlacementAnalysis, RejectionReason,
    Verdict,
};

// Configuration
pub use menagerie_config::{CatalogError, ZooFile};

mod zoo;
pub use zoo::Zoo;

pub mod prelude {
    pub use super::{
        analyze, evaluate, AllocationError, Enclosure, PlacementReport, PlacementRequest,
        RejectionReason, ResidentGroup, SpeciesCatalog, SpeciesTraits, Verdict, Zoo, ZooFile,
    };
}
