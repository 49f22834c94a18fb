//! The live vertex/edge store.
//!
//! Vertex ids are dense over `[0, n)` at all times: the id is the index
//! into the vertex vector. Deleting vertices relabels the survivors to
//! restore density, because externally discovered hops are expressed over
//! a dense 0..n-1 index space and a sparse space would invalidate them.

use crate::error::Error;
use crate::model::{Edge, GraphSnapshot, Vertex, VertexId};
use std::collections::{HashMap, HashSet};

pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    directed: bool,
    selected_vertices: HashSet<VertexId>,
    selected_edges: HashSet<usize>,
    // Monotonic between relabelings; reset to the surviving count on relabel.
    next_id: VertexId,
}

/// What `remove_selected` actually deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemovalOutcome {
    pub vertices_removed: usize,
    pub edges_removed: usize,
}

impl RemovalOutcome {
    pub fn changed(&self) -> bool {
        self.vertices_removed > 0 || self.edges_removed > 0
    }
}

impl Graph {
    pub fn new(directed: bool) -> Graph {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            directed,
            selected_vertices: HashSet::new(),
            selected_edges: HashSet::new(),
            next_id: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn next_id(&self) -> VertexId {
        self.next_id
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        (id as usize) < self.vertices.len()
    }

    pub fn position(&self, id: VertexId) -> Option<(f32, f32)> {
        self.vertices.get(id as usize).map(|v| (v.x, v.y))
    }

    // Vertices

    pub fn add_vertex(&mut self, x: f32, y: f32) -> VertexId {
        let id = self.next_id;
        self.vertices.push(Vertex { x, y });
        self.next_id += 1;
        debug_assert_eq!(self.next_id as usize, self.vertices.len());
        id
    }

    pub fn move_vertex(&mut self, id: VertexId, x: f32, y: f32) -> Result<(), Error> {
        match self.vertices.get_mut(id as usize) {
            Some(v) => {
                v.x = x;
                v.y = y;
                Ok(())
            }
            None => Err(Error::UnknownVertex(id)),
        }
    }

    // Edges

    /// Precondition check for `add_edge`, exposed so callers can validate
    /// before committing to a history snapshot.
    pub fn validate_new_edge(&self, a: VertexId, b: VertexId) -> Result<(), Error> {
        if !self.contains_vertex(a) {
            return Err(Error::UnknownVertex(a));
        }
        if !self.contains_vertex(b) {
            return Err(Error::UnknownVertex(b));
        }
        if a == b {
            return Err(Error::SelfLoop(a));
        }
        if self.has_edge(a, b) {
            return Err(Error::DuplicateEdge(a, b));
        }
        Ok(())
    }

    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), Error> {
        self.validate_new_edge(a, b)?;
        self.edges.push(Edge::new(a, b));
        Ok(())
    }

    /// Direction-aware iff the graph is directed.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        let probe = Edge::new(a, b);
        self.edges.iter().any(|e| e.same_as(&probe, self.directed))
    }

    fn edge_index(&self, a: VertexId, b: VertexId) -> Option<usize> {
        let probe = Edge::new(a, b);
        self.edges.iter().position(|e| e.same_as(&probe, self.directed))
    }

    /// Switch directedness mode. Dropping direction can make previously
    /// distinct edges equivalent; the later duplicate is collapsed so the
    /// no-duplicates invariant survives the flip.
    pub fn set_directed(&mut self, directed: bool) {
        if self.directed == directed {
            return;
        }
        self.directed = directed;
        if !directed {
            let mut kept: Vec<Edge> = Vec::with_capacity(self.edges.len());
            for e in &self.edges {
                if !kept.iter().any(|k| k.same_as(e, false)) {
                    kept.push(*e);
                }
            }
            self.edges = kept;
            self.selected_edges.clear();
        }
    }

    // Selection

    pub fn set_vertex_selected(&mut self, id: VertexId, selected: bool) -> Result<(), Error> {
        if !self.contains_vertex(id) {
            return Err(Error::UnknownVertex(id));
        }
        if selected {
            self.selected_vertices.insert(id);
        } else {
            self.selected_vertices.remove(&id);
        }
        Ok(())
    }

    pub fn set_edge_selected(&mut self, a: VertexId, b: VertexId, selected: bool) -> Result<(), Error> {
        let idx = self.edge_index(a, b).ok_or(Error::UnknownEdge(a, b))?;
        if selected {
            self.selected_edges.insert(idx);
        } else {
            self.selected_edges.remove(&idx);
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_vertices.clear();
        self.selected_edges.clear();
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_vertices.is_empty() || !self.selected_edges.is_empty()
    }

    pub fn selected_vertices(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.selected_vertices.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Delete every marked element, then relabel survivors to 0..k-1 in
    /// iteration order and reset the id counter to k.
    pub fn remove_selected(&mut self) -> RemovalOutcome {
        if !self.has_selection() {
            return RemovalOutcome::default();
        }

        let doomed_vertices = std::mem::take(&mut self.selected_vertices);
        let doomed_edges = std::mem::take(&mut self.selected_edges);

        let edges_before = self.edges.len();
        let mut surviving_edges: Vec<Edge> = Vec::with_capacity(edges_before);
        for (i, e) in self.edges.iter().enumerate() {
            if doomed_edges.contains(&i) {
                continue;
            }
            if doomed_vertices.contains(&e.source) || doomed_vertices.contains(&e.target) {
                continue;
            }
            surviving_edges.push(*e);
        }

        // old id -> new dense id, in surviving iteration order
        let mut id_map: HashMap<VertexId, VertexId> = HashMap::new();
        let mut survivors: Vec<Vertex> = Vec::with_capacity(self.vertices.len());
        for (old_id, v) in self.vertices.iter().enumerate() {
            let old_id = old_id as VertexId;
            if doomed_vertices.contains(&old_id) {
                continue;
            }
            id_map.insert(old_id, survivors.len() as VertexId);
            survivors.push(*v);
        }

        for e in &mut surviving_edges {
            e.source = id_map[&e.source];
            e.target = id_map[&e.target];
        }

        let vertices_removed = self.vertices.len() - survivors.len();
        let edges_removed = edges_before - surviving_edges.len();
        self.vertices = survivors;
        self.edges = surviving_edges;
        self.next_id = self.vertices.len() as VertexId;

        RemovalOutcome {
            vertices_removed,
            edges_removed,
        }
    }

    // Snapshots

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            directed: self.directed,
            next_id: self.next_id,
        }
    }

    pub fn restore(&mut self, snapshot: &GraphSnapshot) {
        self.vertices = snapshot.vertices.clone();
        self.edges = snapshot.edges.clone();
        self.directed = snapshot.directed;
        self.next_id = snapshot.next_id;
        self.clear_selection();
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.clear_selection();
        self.next_id = 0;
    }
}
