//! Wire types for the external compute oracle (consumed only).
//!
//! The oracle derives leap groups and enumerates hops; this crate only
//! builds its queries and decodes its answers. `one_line` arrays on the
//! wire are always 1-indexed.

use crate::composer::{Hop, HopSource};
use crate::error::Error;
use crate::graph::Graph;
use crate::perm::Perm;
use serde::{Deserialize, Serialize};

/// Request body shared by every oracle endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQuery {
    pub vertices: Vec<u32>,
    pub edges: Vec<[u32; 2]>,
    pub directed: bool,
}

impl GraphQuery {
    pub fn from_graph(graph: &Graph) -> GraphQuery {
        GraphQuery {
            vertices: (0..graph.vertex_count() as u32).collect(),
            edges: graph.edges().iter().map(|e| [e.source, e.target]).collect(),
            directed: graph.is_directed(),
        }
    }
}

/// `leap-group` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeapGroupResult {
    pub structure: String,
    pub order: u64,
}

/// One hop as the oracle ships it: 1-indexed one-line plus its cycle string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HopData {
    pub one_line: Vec<u32>,
    pub cycle: String,
}

impl HopData {
    /// Decode into a core hop, validating the bijection invariant.
    pub fn to_hop(&self, source: HopSource) -> Result<Hop, Error> {
        let perm = Perm::from_one_line_based(&self.one_line, 1)?;
        Ok(Hop {
            perm,
            cycle: self.cycle.clone(),
            source,
        })
    }

    /// Encode a core hop back into wire form.
    pub fn from_hop(hop: &Hop) -> HopData {
        HopData {
            one_line: hop.perm.one_line_based(1),
            cycle: hop.cycle.clone(),
        }
    }
}

/// `all-hops` / `one-hop` response (`count` is 0 or 1 for the latter).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HopsResult {
    pub count: usize,
    pub hops: Vec<HopData>,
}

/// `verify-hop` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub valid: bool,
}
