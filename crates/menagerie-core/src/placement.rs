//! Placement requests and reports.

use std::fmt;

/// One indivisible batch of incoming animals.
///
/// The batch is atomic: it is never split across enclosures, and residents
/// are never relocated to make room for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementRequest {
    /// Requested species name; matched case-insensitively.
    pub species: String,
    /// Number of individuals arriving together. Must be positive.
    pub quantity: i64,
}

impl PlacementRequest {
    /// Creates a placement request.
    pub fn new(species: impl Into<String>, quantity: i64) -> Self {
        PlacementRequest {
            species: species.into(),
            quantity,
        }
    }
}

/// A viable enclosure for a batch, with the space left after placement.
///
/// `free_space` is always in `0..=capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementReport {
    /// Id of the viable enclosure.
    pub enclosure_id: u32,
    /// Space units remaining after the hypothetical placement, including
    /// the multi-species overhead when it applies.
    pub free_space: i64,
    /// Total capacity of the enclosure, for context.
    pub capacity: i64,
}

impl fmt::Display for PlacementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enclosure {} (free space: {}, total: {})",
            self.enclosure_id, self.free_space, self.capacity
        )
    }
}
