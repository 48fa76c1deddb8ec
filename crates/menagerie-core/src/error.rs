//! Error types for enclosure allocation

use thiserror::Error;

/// Terminal outcomes of an evaluation that produced no placements.
///
/// All variants are kind-only: the caller already knows the request that
/// failed, and the allocator has nothing further to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AllocationError {
    /// The requested species is absent from the catalog.
    #[error("unknown species")]
    UnknownSpecies,

    /// The requested quantity is zero or negative.
    #[error("invalid quantity")]
    InvalidQuantity,

    /// Every enclosure was rejected by the rule set.
    #[error("no viable enclosure")]
    NoViableEnclosure,
}

/// Result type alias for allocation operations
pub type Result<T> = std::result::Result<T, AllocationError>;
