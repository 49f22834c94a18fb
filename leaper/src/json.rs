//! Session document codec.
//!
//! Documents are validated and fully rebuilt before anything is committed,
//! so a malformed file can never leave the live session half-loaded. Vertex
//! ids in a document may be sparse; loading compacts them back to the dense
//! [0, n) invariant, rewriting edges through the same map.

use crate::composer::{Hop, HopSource, SavedLeap};
use crate::model::{Edge, GraphSnapshot, Settings, Vertex, VertexId};
use crate::perm::Perm;
use crate::session::{PinnedHop, Session};
use crate::workspace::WorkspaceEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DOCUMENT_VERSION: u32 = 1;

pub mod limits {
    pub const MAX_VERTICES: usize = 512;
    pub const MAX_EDGES: usize = 4096;
    pub const MAX_COORD: f32 = 1.0e6;

    pub fn in_coord_bounds(v: f32) -> bool {
        v.is_finite() && v.abs() <= MAX_COORD
    }
}

#[derive(Serialize, Deserialize)]
struct VertexDoc {
    id: u32,
    x: f32,
    y: f32,
}

#[derive(Serialize, Deserialize)]
struct EdgeDoc {
    source: u32,
    target: u32,
}

#[derive(Serialize, Deserialize)]
struct PaletteDoc {
    #[serde(default)]
    name: String,
    /// 1-indexed, matching the oracle wire convention.
    one_line: Vec<u32>,
    cycle: String,
    source: HopSource,
}

#[derive(Serialize, Deserialize)]
struct MetadataDoc {
    created: String,
    version: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Doc {
    name: String,
    vertices: Vec<VertexDoc>,
    edges: Vec<EdgeDoc>,
    settings: Settings,
    #[serde(default)]
    workspace: Vec<WorkspaceEntry>,
    #[serde(default)]
    saved_leaps: Vec<SavedLeap>,
    #[serde(default)]
    hop_palette: Vec<PaletteDoc>,
    metadata: MetadataDoc,
}

pub fn to_document(session: &Session, created: &str) -> Value {
    let graph = session.graph();
    let doc = Doc {
        name: session.name().to_string(),
        vertices: graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(id, v)| VertexDoc {
                id: id as u32,
                x: v.x,
                y: v.y,
            })
            .collect(),
        edges: graph
            .edges()
            .iter()
            .map(|e| EdgeDoc {
                source: e.source,
                target: e.target,
            })
            .collect(),
        settings: *session.settings(),
        workspace: session.workspace().to_vec(),
        saved_leaps: session.saved_leaps().to_vec(),
        hop_palette: session
            .palette()
            .iter()
            .map(|p| PaletteDoc {
                name: p.name.clone(),
                one_line: p.hop.perm.one_line_based(1),
                cycle: p.hop.cycle.clone(),
                source: p.hop.source,
            })
            .collect(),
        metadata: MetadataDoc {
            created: created.to_string(),
            version: DOCUMENT_VERSION,
        },
    };
    // Doc contains only maps, vectors, strings, and numbers.
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

/// Structural validation over the raw JSON, before any typed parse. Checks
/// only what a hand-edited or truncated file is likely to break: the object
/// shape, per-vertex numeric fields, and edge references.
pub fn validate(v: &Value) -> Result<(), (&'static str, String)> {
    let obj = v
        .as_object()
        .ok_or_else(|| ("invalid_document", "root is not an object".to_string()))?;

    let vertices = obj
        .get("vertices")
        .and_then(Value::as_array)
        .ok_or_else(|| ("invalid_document", "missing vertices array".to_string()))?;
    let edges = obj
        .get("edges")
        .and_then(Value::as_array)
        .ok_or_else(|| ("invalid_document", "missing edges array".to_string()))?;

    if vertices.len() > limits::MAX_VERTICES {
        return Err(("caps_exceeded", format!("vertices>{}", limits::MAX_VERTICES)));
    }
    if edges.len() > limits::MAX_EDGES {
        return Err(("caps_exceeded", format!("edges>{}", limits::MAX_EDGES)));
    }

    let mut ids = Vec::with_capacity(vertices.len());
    for (i, vert) in vertices.iter().enumerate() {
        let obj = vert
            .as_object()
            .ok_or_else(|| ("invalid_vertex", format!("vertex {} is not an object", i)))?;
        let id = obj
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| ("invalid_vertex", format!("vertex {} has no numeric id", i)))?;
        for key in ["x", "y"] {
            let coord = obj
                .get(key)
                .and_then(Value::as_f64)
                .ok_or_else(|| ("invalid_vertex", format!("vertex {} has no numeric {}", i, key)))?;
            if !limits::in_coord_bounds(coord as f32) {
                return Err(("out_of_bounds", format!("vertex {} {}", i, key)));
            }
        }
        if ids.contains(&id) {
            return Err(("invalid_vertex", format!("duplicate vertex id {}", id)));
        }
        ids.push(id);
    }

    for (i, edge) in edges.iter().enumerate() {
        let obj = edge
            .as_object()
            .ok_or_else(|| ("invalid_edge", format!("edge {} is not an object", i)))?;
        for key in ["source", "target"] {
            let endpoint = obj
                .get(key)
                .and_then(Value::as_u64)
                .ok_or_else(|| ("invalid_edge", format!("edge {} has no numeric {}", i, key)))?;
            if !ids.contains(&endpoint) {
                return Err((
                    "dangling_edge",
                    format!("edge {} references missing vertex {}", i, endpoint),
                ));
            }
        }
    }

    Ok(())
}

/// Validate, rebuild, and atomically commit a document into `session`.
/// On any `Err` the live session is untouched.
pub fn load_document(session: &mut Session, v: Value) -> Result<(), (&'static str, String)> {
    validate(&v)?;
    let doc: Doc = serde_json::from_value(v).map_err(|e| ("json_parse", format!("{}", e)))?;

    let mut settings = doc.settings;
    if settings.index_base > 1 {
        settings.index_base = 1;
    }

    // Compact possibly-sparse ids: ascending id order becomes 0..n-1.
    let mut order: Vec<usize> = (0..doc.vertices.len()).collect();
    order.sort_by_key(|&i| doc.vertices[i].id);
    let mut id_map = std::collections::HashMap::with_capacity(order.len());
    let mut vertices = Vec::with_capacity(order.len());
    for &i in &order {
        let v = &doc.vertices[i];
        id_map.insert(v.id, vertices.len() as VertexId);
        vertices.push(Vertex { x: v.x, y: v.y });
    }

    let mut edges: Vec<Edge> = Vec::with_capacity(doc.edges.len());
    for (i, e) in doc.edges.iter().enumerate() {
        if e.source == e.target {
            return Err(("invalid_edge", format!("edge {} is a self-loop", i)));
        }
        // validate() checked both references.
        let edge = Edge::new(id_map[&e.source], id_map[&e.target]);
        if !edges.iter().any(|k| k.same_as(&edge, settings.directed)) {
            edges.push(edge);
        }
    }

    let mut saved = Vec::with_capacity(doc.saved_leaps.len());
    for leap in doc.saved_leaps {
        Perm::from_one_line(leap.permutation.clone())
            .map_err(|e| ("invalid_leap", format!("{}: {}", leap.name, e)))?;
        saved.push(leap);
    }

    let mut palette = Vec::with_capacity(doc.hop_palette.len());
    for p in doc.hop_palette {
        let perm = Perm::from_one_line_based(&p.one_line, 1)
            .map_err(|e| ("invalid_hop", format!("{}", e)))?;
        palette.push(PinnedHop {
            name: p.name,
            hop: Hop {
                perm,
                cycle: p.cycle,
                source: p.source,
            },
        });
    }

    let next_id = vertices.len() as VertexId;
    session.apply_document(
        doc.name,
        GraphSnapshot {
            vertices,
            edges,
            directed: settings.directed,
            next_id,
        },
        settings,
        doc.workspace,
        saved,
        palette,
    );
    Ok(())
}
