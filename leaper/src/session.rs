//! The editor session: one struct owning the graph, history, drawing state,
//! leap composer, snapshot viewer, workspace log, and hop palette.
//!
//! Ordering rules enforced here:
//! - every structural mutation is rejected while a snapshot is being viewed,
//!   records history first, and mutates second;
//! - any change to vertex cardinality or the id mapping invalidates the
//!   drawing in progress and the working leap;
//! - oracle results are recorded only by explicit `record_*` calls, which the
//!   binding layer invokes after a successful response.

use crate::composer::{Hop, LeapComposer, SavedLeap, WorkingLeap};
use crate::drawing::{DrawEvent, DrawingState};
use crate::error::Error;
use crate::generators::GeneratedGraph;
use crate::graph::{Graph, RemovalOutcome};
use crate::history::HistoryStack;
use crate::model::{GraphSnapshot, Settings, VertexId};
use crate::oracle::{HopsResult, LeapGroupResult};
use crate::perm::Perm;
use crate::viewer::SnapshotViewer;
use crate::workspace::{EntryKind, EntryResult, WorkspaceEntry};

pub const DEFAULT_NAME: &str = "untitled";

/// A hop kept on the palette for reuse across compositions.
#[derive(Clone, Debug, PartialEq)]
pub struct PinnedHop {
    pub name: String,
    pub hop: Hop,
}

pub struct Session {
    graph: Graph,
    history: HistoryStack,
    drawing: Option<DrawingState>,
    composer: LeapComposer,
    viewer: SnapshotViewer,
    settings: Settings,
    workspace: Vec<WorkspaceEntry>,
    palette: Vec<PinnedHop>,
    name: String,
    next_entry_id: u64,
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Session {
        let settings = Settings::default();
        Session {
            graph: Graph::new(settings.directed),
            history: HistoryStack::new(),
            drawing: None,
            composer: LeapComposer::new(),
            viewer: SnapshotViewer::new(),
            settings,
            workspace: Vec::new(),
            palette: Vec::new(),
            name: DEFAULT_NAME.to_string(),
            next_entry_id: 1,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.settings.show_labels = show;
    }

    /// Display base for vertex numbers; 0 and 1 are the only meaningful
    /// values and anything else is clamped to 1.
    pub fn set_index_base(&mut self, base: u32) {
        self.settings.index_base = if base == 0 { 0 } else { 1 };
    }

    fn ensure_editable(&self) -> Result<(), Error> {
        if self.viewer.is_viewing() {
            return Err(Error::ViewingSnapshot);
        }
        Ok(())
    }

    /// Drop anything expressed over the old id space.
    fn invalidate_perm_state(&mut self) {
        self.drawing = None;
        self.composer.reset();
    }

    // Graph editing

    pub fn add_vertex(&mut self, x: f32, y: f32) -> Result<VertexId, Error> {
        self.ensure_editable()?;
        self.history.record(self.graph.snapshot());
        let id = self.graph.add_vertex(x, y);
        self.invalidate_perm_state();
        Ok(id)
    }

    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<(), Error> {
        self.ensure_editable()?;
        // Validate before recording so a rejected edge leaves no history entry.
        self.graph.validate_new_edge(a, b)?;
        self.history.record(self.graph.snapshot());
        self.graph.add_edge(a, b)
    }

    /// Position-only; never recorded in history.
    pub fn move_vertex(&mut self, id: VertexId, x: f32, y: f32) -> Result<(), Error> {
        self.ensure_editable()?;
        self.graph.move_vertex(id, x, y)
    }

    pub fn set_directed(&mut self, directed: bool) -> Result<(), Error> {
        self.ensure_editable()?;
        if self.graph.is_directed() == directed {
            return Ok(());
        }
        self.history.record(self.graph.snapshot());
        self.graph.set_directed(directed);
        self.settings.directed = directed;
        Ok(())
    }

    // Selection

    pub fn set_vertex_selected(&mut self, id: VertexId, selected: bool) -> Result<(), Error> {
        self.ensure_editable()?;
        self.graph.set_vertex_selected(id, selected)
    }

    pub fn set_edge_selected(&mut self, a: VertexId, b: VertexId, selected: bool) -> Result<(), Error> {
        self.ensure_editable()?;
        self.graph.set_edge_selected(a, b, selected)
    }

    pub fn clear_selection(&mut self) {
        self.graph.clear_selection();
    }

    pub fn remove_selected(&mut self) -> Result<RemovalOutcome, Error> {
        self.ensure_editable()?;
        if !self.graph.has_selection() {
            return Ok(RemovalOutcome::default());
        }
        self.history.record(self.graph.snapshot());
        let outcome = self.graph.remove_selected();
        if outcome.vertices_removed > 0 {
            // Survivor relabeling changed the id mapping.
            self.invalidate_perm_state();
        }
        Ok(outcome)
    }

    // History

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// `Ok(false)` when the stack is empty (defined no-op).
    pub fn undo(&mut self) -> Result<bool, Error> {
        self.ensure_editable()?;
        match self.history.undo(self.graph.snapshot()) {
            Some(prev) => {
                self.graph.restore(&prev);
                self.invalidate_perm_state();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn redo(&mut self) -> Result<bool, Error> {
        self.ensure_editable()?;
        match self.history.redo(self.graph.snapshot()) {
            Some(next) => {
                self.graph.restore(&next);
                self.invalidate_perm_state();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // Hop drawing

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    pub fn drawing(&self) -> Option<&DrawingState> {
        self.drawing.as_ref()
    }

    pub fn begin_draw(&mut self) -> Result<(), Error> {
        self.ensure_editable()?;
        self.drawing = Some(DrawingState::new());
        Ok(())
    }

    pub fn draw_tap(&mut self, v: VertexId) -> Result<&DrawingState, Error> {
        if !self.graph.contains_vertex(v) {
            return Err(Error::UnknownVertex(v));
        }
        let state = self.drawing.as_ref().ok_or(Error::NotDrawing)?;
        let next = state.step(DrawEvent::Tap(v));
        Ok(self.drawing.insert(next))
    }

    pub fn draw_undo_last(&mut self) -> Result<&DrawingState, Error> {
        let state = self.drawing.as_ref().ok_or(Error::NotDrawing)?;
        let next = state.step(DrawEvent::UndoLast);
        Ok(self.drawing.insert(next))
    }

    pub fn cancel_draw(&mut self) {
        self.drawing = None;
    }

    pub fn drawing_complete(&self) -> bool {
        self.drawing
            .as_ref()
            .map(|d| d.is_complete(self.graph.vertex_count()))
            .unwrap_or(false)
    }

    /// The hop described by the current (complete) drawing.
    pub fn drawn_hop(&self) -> Result<Hop, Error> {
        let state = self.drawing.as_ref().ok_or(Error::NotDrawing)?;
        let perm = state.to_perm(self.graph.vertex_count())?;
        Ok(Hop::from_perm(perm, crate::composer::HopSource::Drawn))
    }

    /// Fold the completed drawing into the working leap and leave draw mode.
    pub fn finish_draw(&mut self) -> Result<Hop, Error> {
        let hop = self.drawn_hop()?;
        self.composer.perform_hop(&hop, self.graph.vertex_count())?;
        self.drawing = None;
        Ok(hop)
    }

    // Leap composition

    pub fn working_leap(&self) -> Option<&WorkingLeap> {
        self.composer.working()
    }

    pub fn saved_leaps(&self) -> &[SavedLeap] {
        self.composer.saved()
    }

    /// Leap operations act on the live graph, so they are rejected while a
    /// snapshot is displayed, same as structural edits.
    pub fn perform_hop(&mut self, hop: &Hop) -> Result<&Perm, Error> {
        self.ensure_editable()?;
        self.composer.perform_hop(hop, self.graph.vertex_count())
    }

    pub fn reset_leap(&mut self) {
        self.composer.reset();
    }

    pub fn save_leap(&mut self, name: &str) -> Result<(), Error> {
        self.ensure_editable()?;
        self.composer.save_working(name)
    }

    pub fn recall_leap(&mut self, index: usize) -> Result<(), Error> {
        self.ensure_editable()?;
        let n = self.graph.vertex_count();
        let saved = self
            .composer
            .saved()
            .get(index)
            .ok_or(Error::NoSuchIndex(index))?;
        if saved.permutation.len() != n {
            return Err(Error::IncompatibleHop {
                expected: n,
                got: saved.permutation.len(),
            });
        }
        self.composer.recall(index)
    }

    pub fn delete_leap(&mut self, index: usize) -> Result<(), Error> {
        self.composer.delete_saved(index)
    }

    /// Per-vertex label strings under the composed leap and the display
    /// index base. Falls back to identity labels when no leap is active or
    /// the composed labels no longer match the vertex count.
    pub fn display_labels(&self) -> Vec<String> {
        let n = self.graph.vertex_count();
        let base = self.settings.index_base;
        let labels = self.composer.labels().filter(|p| p.len() == n);
        (0..n)
            .map(|i| {
                let v = match labels {
                    Some(p) => p.image(i),
                    None => i as u32,
                };
                (v + base).to_string()
            })
            .collect()
    }

    // Hop palette

    pub fn palette(&self) -> &[PinnedHop] {
        &self.palette
    }

    /// Pin a hop for later reuse. Returns false if an equal permutation is
    /// already pinned (cycle strings and names are not consulted).
    pub fn pin_hop(&mut self, name: &str, hop: &Hop) -> bool {
        if self.palette.iter().any(|p| p.hop.perm == hop.perm) {
            return false;
        }
        self.palette.push(PinnedHop {
            name: name.to_string(),
            hop: hop.clone(),
        });
        true
    }

    pub fn unpin_hop(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.palette.len() {
            return Err(Error::NoSuchIndex(index));
        }
        self.palette.remove(index);
        Ok(())
    }

    /// Whether the pinned hop at `index` fits the live graph.
    pub fn pinned_compatible(&self, index: usize) -> Result<bool, Error> {
        let pinned = self.palette.get(index).ok_or(Error::NoSuchIndex(index))?;
        Ok(pinned.hop.perm.len() == self.graph.vertex_count())
    }

    pub fn apply_pinned(&mut self, index: usize) -> Result<(), Error> {
        self.ensure_editable()?;
        let hop = self
            .palette
            .get(index)
            .ok_or(Error::NoSuchIndex(index))?
            .hop
            .clone();
        self.composer.perform_hop(&hop, self.graph.vertex_count())?;
        Ok(())
    }

    // Workspace log

    pub fn workspace(&self) -> &[WorkspaceEntry] {
        &self.workspace
    }

    pub fn entry(&self, id: u64) -> Option<&WorkspaceEntry> {
        self.workspace.iter().find(|e| e.id == id)
    }

    fn push_entry(
        &mut self,
        kind: EntryKind,
        result: EntryResult,
        elapsed: Option<f64>,
        timestamp: &str,
    ) -> u64 {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        self.workspace.push(WorkspaceEntry {
            id,
            kind,
            result,
            elapsed,
            snapshot: Some(self.graph.snapshot()),
            timestamp: timestamp.to_string(),
        });
        id
    }

    pub fn record_leap_group(
        &mut self,
        result: LeapGroupResult,
        elapsed: Option<f64>,
        timestamp: &str,
    ) -> u64 {
        let n = self.graph.vertex_count() as u32;
        self.push_entry(
            EntryKind::LeapGroup { n },
            EntryResult::LeapGroup(result),
            elapsed,
            timestamp,
        )
    }

    pub fn record_hops(
        &mut self,
        result: HopsResult,
        elapsed: Option<f64>,
        timestamp: &str,
    ) -> u64 {
        self.push_entry(
            EntryKind::Hops,
            EntryResult::Hops {
                count: result.count,
                hops: result.hops,
            },
            elapsed,
            timestamp,
        )
    }

    pub fn record_one_hop(
        &mut self,
        result: HopsResult,
        elapsed: Option<f64>,
        timestamp: &str,
    ) -> u64 {
        self.push_entry(
            EntryKind::Hop,
            EntryResult::Hops {
                count: result.count,
                hops: result.hops,
            },
            elapsed,
            timestamp,
        )
    }

    pub fn remove_entry(&mut self, id: u64) -> Result<(), Error> {
        let pos = self
            .workspace
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NoSuchIndex(id as usize))?;
        self.workspace.remove(pos);
        Ok(())
    }

    // Snapshot viewing

    pub fn is_viewing(&self) -> bool {
        self.viewer.is_viewing()
    }

    /// Swap the live graph for the input graph of a recorded computation.
    pub fn view_entry_snapshot(&mut self, id: u64) -> Result<(), Error> {
        let snapshot = self
            .entry(id)
            .and_then(|e| e.snapshot.clone())
            .ok_or(Error::NoSuchIndex(id as usize))?;
        self.view_snapshot(snapshot)
    }

    pub fn view_snapshot(&mut self, snapshot: GraphSnapshot) -> Result<(), Error> {
        self.viewer.enter(self.graph.snapshot())?;
        self.drawing = None;
        self.graph.restore(&snapshot);
        Ok(())
    }

    pub fn exit_snapshot(&mut self) -> Result<(), Error> {
        let live = self.viewer.exit()?;
        self.graph.restore(&live);
        Ok(())
    }

    // Whole-session operations

    /// File -> New: everything goes, settings stay.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.graph.set_directed(self.settings.directed);
        self.history.clear();
        self.drawing = None;
        self.composer = LeapComposer::new();
        self.viewer = SnapshotViewer::new();
        self.workspace.clear();
        self.palette.clear();
        self.name = DEFAULT_NAME.to_string();
        self.next_entry_id = 1;
    }

    /// Replace the graph with a generated one. Recorded as a single
    /// undoable action.
    pub fn load_generated(&mut self, generated: &GeneratedGraph) -> Result<(), Error> {
        self.ensure_editable()?;
        self.history.record(self.graph.snapshot());
        let snapshot = GraphSnapshot {
            vertices: generated.vertices.clone(),
            edges: generated.edges.clone(),
            directed: generated.directed,
            next_id: generated.vertices.len() as VertexId,
        };
        self.graph.restore(&snapshot);
        self.settings.directed = generated.directed;
        self.invalidate_perm_state();
        Ok(())
    }

    /// Atomic commit of a validated document. The codec builds every part
    /// first; nothing here can fail.
    pub(crate) fn apply_document(
        &mut self,
        name: String,
        snapshot: GraphSnapshot,
        settings: Settings,
        workspace: Vec<WorkspaceEntry>,
        saved: Vec<SavedLeap>,
        palette: Vec<PinnedHop>,
    ) {
        self.next_entry_id = workspace.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.graph.restore(&snapshot);
        self.settings = settings;
        self.history.clear();
        self.drawing = None;
        self.composer = LeapComposer::new();
        self.composer.set_saved(saved);
        self.viewer = SnapshotViewer::new();
        self.workspace = workspace;
        self.palette = palette;
        self.name = name;
    }
}
