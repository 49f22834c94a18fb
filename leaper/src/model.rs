use serde::{Deserialize, Serialize};

pub type VertexId = u32;

/// A vertex's position on the canvas. Display-only: the vertex id is its
/// index into the graph's dense store and never lives here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

/// An edge between two vertex ids. `source`/`target` order is significant
/// only when the graph is directed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId) -> Edge {
        Edge { source, target }
    }

    /// Equivalence under the graph's directedness mode.
    pub fn same_as(&self, other: &Edge, directed: bool) -> bool {
        if self.source == other.source && self.target == other.target {
            return true;
        }
        !directed && self.source == other.target && self.target == other.source
    }
}

/// Immutable copy of the full vertex/edge collection, with positions.
/// Owned by whoever holds it; later graph mutation cannot reach into one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub directed: bool,
    pub next_id: VertexId,
}

impl GraphSnapshot {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Presentation settings persisted with a session document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub show_labels: bool,
    /// 0 or 1; shifts displayed vertex numbers only, never the internal model.
    pub index_base: u32,
    pub directed: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            show_labels: true,
            index_base: 1,
            directed: false,
        }
    }
}
