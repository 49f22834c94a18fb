use crate::error;
use crate::interop::{arr_f32, arr_str, arr_u32, new_obj, set_kv};
use crate::Editor;
use js_sys::{Array, Float32Array, Uint32Array};
use leaper::{shift_cycles, DrawingState, GraphQuery, HopData, HopSource, HopsResult, LeapGroupResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_source(s: &str) -> HopSource {
    match s {
        "manual" => HopSource::Drawn,
        "recalled" => HopSource::Recalled,
        _ => HopSource::Oracle,
    }
}

fn drawing_obj(state: &DrawingState, n: usize) -> JsValue {
    let flat: Vec<u32> = state
        .assignments()
        .iter()
        .flat_map(|&(s, t)| [s, t])
        .collect();
    let o = new_obj();
    set_kv(&o, "assignments", &arr_u32(&flat).into());
    let pending = match state.pending_source() {
        Some(v) => JsValue::from_f64(v as f64),
        None => JsValue::NULL,
    };
    set_kv(&o, "pendingSource", &pending);
    set_kv(&o, "complete", &JsValue::from_bool(state.is_complete(n)));
    o.into()
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        crate::Editor::rs_new()
    }

    // Plain queries

    pub fn vertex_count(&self) -> u32 {
        self.inner.graph().vertex_count() as u32
    }

    pub fn edge_count(&self) -> u32 {
        self.inner.graph().edge_count() as u32
    }

    pub fn is_directed(&self) -> bool {
        self.inner.graph().is_directed()
    }

    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    pub fn is_drawing(&self) -> bool {
        self.inner.is_drawing()
    }

    pub fn is_viewing(&self) -> bool {
        self.inner.is_viewing()
    }

    pub fn has_selection(&self) -> bool {
        self.inner.graph().has_selection()
    }

    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    pub fn set_name(&mut self, name: &str) {
        self.inner.set_name(name);
    }

    pub fn show_labels(&self) -> bool {
        self.inner.settings().show_labels
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.inner.set_show_labels(show);
    }

    pub fn index_base(&self) -> u32 {
        self.inner.settings().index_base
    }

    pub fn set_index_base(&mut self, base: u32) {
        self.inner.set_index_base(base);
    }

    /// Interleaved x,y per vertex; the index is the vertex id.
    pub fn positions(&self) -> Float32Array {
        let flat: Vec<f32> = self
            .inner
            .graph()
            .vertices()
            .iter()
            .flat_map(|v| [v.x, v.y])
            .collect();
        arr_f32(&flat)
    }

    /// Interleaved source,target per edge.
    pub fn edges(&self) -> Uint32Array {
        let flat: Vec<u32> = self
            .inner
            .graph()
            .edges()
            .iter()
            .flat_map(|e| [e.source, e.target])
            .collect();
        arr_u32(&flat)
    }

    pub fn graph_data(&self) -> JsValue {
        let o = new_obj();
        set_kv(&o, "positions", &self.positions().into());
        set_kv(&o, "edges", &self.edges().into());
        set_kv(&o, "directed", &JsValue::from_bool(self.is_directed()));
        o.into()
    }

    /// Label string per vertex under the composed leap and the index base.
    pub fn display_labels(&self) -> Array {
        arr_str(&self.inner.display_labels())
    }

    pub fn selected_vertices(&self) -> Uint32Array {
        arr_u32(&self.inner.graph().selected_vertices())
    }

    /// The request body every oracle endpoint takes.
    pub fn graph_query(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&GraphQuery::from_graph(self.inner.graph()))
            .unwrap_or(JsValue::NULL)
    }

    // Graph editing

    pub fn add_vertex_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.inner.add_vertex(x, y) {
            Ok(id) => error::ok(JsValue::from_f64(id as f64)),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn move_vertex_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.inner.move_vertex(id, x, y) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn add_edge_res(&mut self, a: u32, b: u32) -> JsValue {
        match self.inner.add_edge(a, b) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn set_directed_res(&mut self, directed: bool) -> JsValue {
        match self.inner.set_directed(directed) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn select_vertex_res(&mut self, id: u32, selected: bool) -> JsValue {
        match self.inner.set_vertex_selected(id, selected) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn select_edge_res(&mut self, a: u32, b: u32, selected: bool) -> JsValue {
        match self.inner.set_edge_selected(a, b, selected) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    pub fn remove_selected_res(&mut self) -> JsValue {
        match self.inner.remove_selected() {
            Ok(outcome) => {
                let o = new_obj();
                set_kv(
                    &o,
                    "verticesRemoved",
                    &JsValue::from_f64(outcome.vertices_removed as f64),
                );
                set_kv(
                    &o,
                    "edgesRemoved",
                    &JsValue::from_f64(outcome.edges_removed as f64),
                );
                error::ok(o.into())
            }
            Err(e) => error::from_core(&e),
        }
    }

    pub fn undo_res(&mut self) -> JsValue {
        match self.inner.undo() {
            Ok(did) => error::ok(JsValue::from_bool(did)),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn redo_res(&mut self) -> JsValue {
        match self.inner.redo() {
            Ok(did) => error::ok(JsValue::from_bool(did)),
            Err(e) => error::from_core(&e),
        }
    }

    // Hop drawing

    pub fn begin_draw_res(&mut self) -> JsValue {
        match self.inner.begin_draw() {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn draw_tap_res(&mut self, v: u32) -> JsValue {
        let n = self.inner.graph().vertex_count();
        match self.inner.draw_tap(v) {
            Ok(state) => error::ok(drawing_obj(state, n)),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn draw_undo_res(&mut self) -> JsValue {
        let n = self.inner.graph().vertex_count();
        match self.inner.draw_undo_last() {
            Ok(state) => error::ok(drawing_obj(state, n)),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn cancel_draw(&mut self) {
        self.inner.cancel_draw();
    }

    pub fn drawing_state(&self) -> JsValue {
        match self.inner.drawing() {
            Some(state) => drawing_obj(state, self.inner.graph().vertex_count()),
            None => JsValue::NULL,
        }
    }

    /// The hop described by the completed drawing, in wire form
    /// (1-indexed one_line, 1-indexed cycle string).
    pub fn drawn_hop_res(&self) -> JsValue {
        match self.inner.drawn_hop() {
            Ok(hop) => match serde_wasm_bindgen::to_value(&HopData::from_hop(&hop)) {
                Ok(v) => error::ok(v),
                Err(e) => error::bad_payload(e.to_string()),
            },
            Err(e) => error::from_core(&e),
        }
    }

    /// Fold the completed drawing into the working leap and leave draw mode.
    pub fn finish_draw_res(&mut self) -> JsValue {
        match self.inner.finish_draw() {
            Ok(hop) => {
                let o = new_obj();
                set_kv(&o, "cycle", &JsValue::from_str(&hop.cycle));
                error::ok(o.into())
            }
            Err(e) => error::from_core(&e),
        }
    }

    // Leap composition

    /// Apply a wire-form hop (`{one_line, cycle}`, 1-indexed) to the
    /// working leap. `source` is "oracle", "manual", or "recalled".
    pub fn apply_hop_res(&mut self, hop: JsValue, source: &str) -> JsValue {
        let data: HopData = match serde_wasm_bindgen::from_value(hop) {
            Ok(d) => d,
            Err(e) => return error::bad_payload(e.to_string()),
        };
        let hop = match data.to_hop(parse_source(source)) {
            Ok(h) => h,
            Err(e) => return error::from_core(&e),
        };
        match self.inner.perform_hop(&hop) {
            Ok(labels) => error::ok(arr_u32(labels.as_slice()).into()),
            Err(e) => error::from_core(&e),
        }
    }

    /// Working-leap view, or null when nothing is composed. Cycle strings
    /// are shifted to the display index base.
    pub fn leap_state(&self) -> JsValue {
        let base = self.inner.settings().index_base as i64;
        match self.inner.working_leap() {
            Some(working) => {
                let o = new_obj();
                set_kv(&o, "labels", &arr_u32(working.labels.as_slice()).into());
                set_kv(
                    &o,
                    "cycles",
                    &JsValue::from_str(&working.labels.to_cycles(base as u32)),
                );
                let history: Array = working
                    .history
                    .iter()
                    .map(|h| JsValue::from_str(&shift_cycles(&h.cycle, base - 1)))
                    .collect();
                set_kv(&o, "history", &history.into());
                o.into()
            }
            None => JsValue::NULL,
        }
    }

    pub fn reset_leap(&mut self) {
        self.inner.reset_leap();
    }

    pub fn save_leap_res(&mut self, name: &str) -> JsValue {
        match self.inner.save_leap(name) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn recall_leap_res(&mut self, index: u32) -> JsValue {
        match self.inner.recall_leap(index as usize) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn delete_leap_res(&mut self, index: u32) -> JsValue {
        match self.inner.delete_leap(index as usize) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn saved_leaps(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.saved_leaps()).unwrap_or(JsValue::NULL)
    }

    // Hop palette

    pub fn pin_hop_res(&mut self, hop: JsValue, name: &str, source: &str) -> JsValue {
        let data: HopData = match serde_wasm_bindgen::from_value(hop) {
            Ok(d) => d,
            Err(e) => return error::bad_payload(e.to_string()),
        };
        match data.to_hop(parse_source(source)) {
            Ok(h) => error::ok(JsValue::from_bool(self.inner.pin_hop(name, &h))),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn unpin_hop_res(&mut self, index: u32) -> JsValue {
        match self.inner.unpin_hop(index as usize) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn apply_pinned_res(&mut self, index: u32) -> JsValue {
        match self.inner.apply_pinned(index as usize) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    /// Pinned hops in wire form, each with a `compatible` flag against the
    /// live vertex count.
    pub fn palette(&self) -> Array {
        let n = self.inner.graph().vertex_count();
        self.inner
            .palette()
            .iter()
            .map(|p| {
                let o = new_obj();
                set_kv(&o, "name", &JsValue::from_str(&p.name));
                set_kv(
                    &o,
                    "one_line",
                    &arr_u32(&p.hop.perm.one_line_based(1)).into(),
                );
                set_kv(&o, "cycle", &JsValue::from_str(&p.hop.cycle));
                let source = match p.hop.source {
                    HopSource::Oracle => "oracle",
                    HopSource::Drawn => "manual",
                    HopSource::Recalled => "recalled",
                };
                set_kv(&o, "source", &JsValue::from_str(source));
                set_kv(&o, "compatible", &JsValue::from_bool(p.hop.perm.len() == n));
                JsValue::from(o)
            })
            .collect()
    }

    // Workspace log. `record_*` are called by the host after an oracle
    // response resolves with ok: true; failures are never recorded.

    pub fn record_leap_group_res(
        &mut self,
        result: JsValue,
        elapsed: Option<f64>,
        timestamp: &str,
    ) -> JsValue {
        let result: LeapGroupResult = match serde_wasm_bindgen::from_value(result) {
            Ok(r) => r,
            Err(e) => return error::bad_payload(e.to_string()),
        };
        let id = self.inner.record_leap_group(result, elapsed, timestamp);
        error::ok(JsValue::from_f64(id as f64))
    }

    pub fn record_hops_res(
        &mut self,
        result: JsValue,
        elapsed: Option<f64>,
        timestamp: &str,
    ) -> JsValue {
        let result: HopsResult = match serde_wasm_bindgen::from_value(result) {
            Ok(r) => r,
            Err(e) => return error::bad_payload(e.to_string()),
        };
        let id = self.inner.record_hops(result, elapsed, timestamp);
        error::ok(JsValue::from_f64(id as f64))
    }

    pub fn record_one_hop_res(
        &mut self,
        result: JsValue,
        elapsed: Option<f64>,
        timestamp: &str,
    ) -> JsValue {
        let result: HopsResult = match serde_wasm_bindgen::from_value(result) {
            Ok(r) => r,
            Err(e) => return error::bad_payload(e.to_string()),
        };
        let id = self.inner.record_one_hop(result, elapsed, timestamp);
        error::ok(JsValue::from_f64(id as f64))
    }

    pub fn workspace(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.workspace()).unwrap_or(JsValue::NULL)
    }

    pub fn remove_entry_res(&mut self, id: u32) -> JsValue {
        match self.inner.remove_entry(id as u64) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    // Snapshot viewing

    pub fn view_entry_res(&mut self, id: u32) -> JsValue {
        match self.inner.view_entry_snapshot(id as u64) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    pub fn exit_snapshot_res(&mut self) -> JsValue {
        match self.inner.exit_snapshot() {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }

    // Documents

    pub fn to_document(&self, created: &str) -> JsValue {
        let doc = leaper::json::to_document(&self.inner, created);
        serde_wasm_bindgen::to_value(&doc).unwrap_or(JsValue::NULL)
    }

    pub fn validate_document(&self, doc: JsValue) -> JsValue {
        let value: serde_json::Value = match serde_wasm_bindgen::from_value(doc) {
            Ok(v) => v,
            Err(e) => return error::bad_payload(e.to_string()),
        };
        match leaper::json::validate(&value) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_codec(e),
        }
    }

    pub fn load_document_res(&mut self, doc: JsValue) -> JsValue {
        let value: serde_json::Value = match serde_wasm_bindgen::from_value(doc) {
            Ok(v) => v,
            Err(e) => return error::bad_payload(e.to_string()),
        };
        match leaper::json::load_document(&mut self.inner, value) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_codec(e),
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    // Generator library

    pub fn generator_names(&self) -> Array {
        let names: Vec<String> = leaper::generators::library()
            .into_iter()
            .map(|g| g.name)
            .collect();
        arr_str(&names)
    }

    pub fn load_generator_res(&mut self, index: u32) -> JsValue {
        let library = leaper::generators::library();
        let generated = match library.get(index as usize) {
            Some(g) => g,
            None => return error::from_core(&leaper::Error::NoSuchIndex(index as usize)),
        };
        match self.inner.load_generated(generated) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_core(&e),
        }
    }
}
