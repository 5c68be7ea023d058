use crate::ArtifactRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Named bucket in a [`ResultSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactSet {
    Resolved,
    Unresolved,
    Skipped,
}

impl ArtifactSet {
    pub const ALL: [ArtifactSet; 3] = [
        ArtifactSet::Resolved,
        ArtifactSet::Unresolved,
        ArtifactSet::Skipped,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactSet::Resolved => "resolved",
            ArtifactSet::Unresolved => "unresolved",
            ArtifactSet::Skipped => "skipped",
        }
    }
}

impl fmt::Display for ArtifactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown artifact set: {0} (expected resolved|unresolved|skipped)")]
pub struct UnknownArtifactSet(pub String);

impl FromStr for ArtifactSet {
    type Err = UnknownArtifactSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "resolved" => Ok(ArtifactSet::Resolved),
            "unresolved" => Ok(ArtifactSet::Unresolved),
            "skipped" => Ok(ArtifactSet::Skipped),
            other => Err(UnknownArtifactSet(other.to_string())),
        }
    }
}

/// Per-set sizes, used for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetCounts {
    pub resolved: usize,
    pub unresolved: usize,
    pub skipped: usize,
}

/// Immutable result of one resolution run.
///
/// Sets may be empty and may overlap. Iteration order inside each set is the order the
/// resolver produced and is treated as meaningful.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    #[serde(default)]
    resolved: Vec<ArtifactRecord>,
    #[serde(default)]
    unresolved: Vec<ArtifactRecord>,
    #[serde(default)]
    skipped: Vec<ArtifactRecord>,
}

impl ResultSnapshot {
    pub fn new(
        resolved: Vec<ArtifactRecord>,
        unresolved: Vec<ArtifactRecord>,
        skipped: Vec<ArtifactRecord>,
    ) -> Self {
        Self {
            resolved,
            unresolved,
            skipped,
        }
    }

    pub fn set(&self, set: ArtifactSet) -> &[ArtifactRecord] {
        match set {
            ArtifactSet::Resolved => &self.resolved,
            ArtifactSet::Unresolved => &self.unresolved,
            ArtifactSet::Skipped => &self.skipped,
        }
    }

    pub fn counts(&self) -> SetCounts {
        SetCounts {
            resolved: self.resolved.len(),
            unresolved: self.unresolved.len(),
            skipped: self.skipped.len(),
        }
    }

    /// All records paired with the set they came from, in set order.
    pub fn records(&self) -> impl Iterator<Item = (ArtifactSet, &ArtifactRecord)> {
        ArtifactSet::ALL
            .into_iter()
            .flat_map(move |set| self.set(set).iter().map(move |r| (set, r)))
    }

    /// Union of the requested sets.
    ///
    /// Sets are visited in the order given, records in insertion order. A record whose
    /// [`ArtifactRecord::identity`] was already emitted is dropped.
    pub fn select(&self, sets: &[ArtifactSet]) -> Vec<&ArtifactRecord> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for set in sets {
            for record in self.set(*set) {
                if seen.insert(record.identity()) {
                    out.push(record);
                }
            }
        }
        out
    }
}
