//! Comparison results between two requirements collections.

use serde::Serialize;

use super::set::PackageEntry;

/// A package pinned to different versions on each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMismatch {
    /// Package name.
    pub name: String,
    /// Version on the side that computed the diff.
    pub ours: String,
    /// Version on the side it was compared against.
    pub theirs: String,
}

/// Three-way classification produced by [`Requirements::diff`].
///
/// [`Requirements::diff`]: super::Requirements::diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequirementsDiff {
    /// Packages present only on our side.
    pub only_in_self: Vec<PackageEntry>,
    /// Packages present only on the other side.
    pub only_in_other: Vec<PackageEntry>,
    /// Packages present on both sides with differing versions.
    pub mismatched: Vec<VersionMismatch>,
}

impl RequirementsDiff {
    /// Whether both sides agree completely.
    pub fn is_empty(&self) -> bool {
        self.only_in_self.is_empty() && self.only_in_other.is_empty() && self.mismatched.is_empty()
    }

    /// Total number of reported differences.
    pub fn len(&self) -> usize {
        self.only_in_self.len() + self.only_in_other.len() + self.mismatched.len()
    }
}
