//! The workspace log: one entry per completed oracle computation.
//!
//! Entries are appended only after a successful response, so a failed or
//! aborted call leaves no trace. Each entry can carry the input graph it
//! was computed from, which the snapshot viewer can display later.

use crate::model::GraphSnapshot;
use crate::oracle::{HopData, LeapGroupResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EntryKind {
    LeapGroup { n: u32 },
    Hops,
    Hop,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryResult {
    LeapGroup(LeapGroupResult),
    Hops { count: usize, hops: Vec<HopData> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    /// Session-monotonic id; stable across persistence of one document.
    pub id: u64,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub result: EntryResult,
    /// Seconds the oracle took, when the caller measured it.
    pub elapsed: Option<f64>,
    pub snapshot: Option<GraphSnapshot>,
    /// ISO-8601, supplied by the host (the core has no clock).
    pub timestamp: String,
}

impl WorkspaceEntry {
    /// Hops carried by this entry, if it is a hop-finding entry.
    pub fn hops(&self) -> &[HopData] {
        match &self.result {
            EntryResult::Hops { hops, .. } => hops,
            EntryResult::LeapGroup(_) => &[],
        }
    }
}
