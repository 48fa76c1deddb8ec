//! Per-enclosure placement analysis.
//!
//! Where `evaluate` only returns the viable placements, an analysis keeps a
//! verdict for every enclosure, including which rule rejected it. Useful
//! for explaining an outcome to a keeper without re-running the rules by
//! hand.

use menagerie_core::PlacementReport;

use crate::rules::RejectionReason;

/// Outcome of assessing one enclosure for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The enclosure can take the batch; the report carries the free space
    /// that would remain.
    Admitted(PlacementReport),
    /// The enclosure was rejected; the reason is the first rule that fired.
    Rejected(RejectionReason),
}

impl Verdict {
    /// Returns the admission report, if admitted.
    pub fn report(&self) -> Option<&PlacementReport> {
        match self {
            Verdict::Admitted(report) => Some(report),
            Verdict::Rejected(_) => None,
        }
    }

    /// Returns the rejection reason, if rejected.
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Verdict::Admitted(_) => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

/// Verdict for one enclosure, tagged with its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnclosureVerdict {
    /// Id of the assessed enclosure.
    pub enclosure_id: u32,
    /// The verdict for this enclosure.
    pub verdict: Verdict,
}

/// Complete assessment of a batch against every enclosure.
///
/// Verdicts are ordered ascending by enclosure id, matching the ordering
/// contract of the viable-placement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementAnalysis {
    verdicts: Vec<EnclosureVerdict>,
}

impl PlacementAnalysis {
    pub(crate) fn new(mut verdicts: Vec<EnclosureVerdict>) -> Self {
        verdicts.sort_by_key(|v| v.enclosure_id);
        PlacementAnalysis { verdicts }
    }

    /// All verdicts, ascending by enclosure id.
    pub fn verdicts(&self) -> &[EnclosureVerdict] {
        &self.verdicts
    }

    /// The admitted subset, in id order. Equal to what `evaluate` returns
    /// for the same inputs whenever it is non-empty.
    pub fn admitted(&self) -> impl Iterator<Item = &PlacementReport> {
        self.verdicts.iter().filter_map(|v| v.verdict.report())
    }

    /// Returns true if at least one enclosure was admitted.
    pub fn is_viable(&self) -> bool {
        self.admitted().next().is_some()
    }

    /// Looks up the verdict for a specific enclosure.
    pub fn verdict_for(&self, enclosure_id: u32) -> Option<&Verdict> {
        self.verdicts
            .iter()
            .find(|v| v.enclosure_id == enclosure_id)
            .map(|v| &v.verdict)
    }
}
