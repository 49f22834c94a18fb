//! Tap-driven bijection builder.
//!
//! The state machine is a pure `(state, event) -> state` transition so it
//! can be tested without any rendering callback. Invariants: all keys and
//! values are current vertex ids, no target repeats, and the pending source
//! is never already assigned. Injectivity plus completeness over a dense id
//! space guarantees the finished map is a true bijection.

use crate::error::Error;
use crate::model::VertexId;
use crate::perm::Perm;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawingState {
    // Insertion order matters: undo removes the most recent assignment.
    assignments: Vec<(VertexId, VertexId)>,
    pending_source: Option<VertexId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawEvent {
    Tap(VertexId),
    UndoLast,
    Reset,
}

impl DrawingState {
    pub fn new() -> DrawingState {
        DrawingState::default()
    }

    pub fn assignments(&self) -> &[(VertexId, VertexId)] {
        &self.assignments
    }

    pub fn pending_source(&self) -> Option<VertexId> {
        self.pending_source
    }

    pub fn has_source(&self, v: VertexId) -> bool {
        self.assignments.iter().any(|&(s, _)| s == v)
    }

    pub fn has_target(&self, v: VertexId) -> bool {
        self.assignments.iter().any(|&(_, t)| t == v)
    }

    pub fn step(&self, event: DrawEvent) -> DrawingState {
        match event {
            DrawEvent::Tap(v) => self.tap(v),
            DrawEvent::UndoLast => self.undo_last(),
            DrawEvent::Reset => DrawingState::default(),
        }
    }

    fn tap(&self, v: VertexId) -> DrawingState {
        match self.pending_source {
            None => {
                // First tap picks a source; a vertex already mapped is ignored.
                if self.has_source(v) {
                    return self.clone();
                }
                DrawingState {
                    assignments: self.assignments.clone(),
                    pending_source: Some(v),
                }
            }
            Some(source) => {
                // Second tap picks the target; a used target is ignored.
                // source == v is a legal fixed point.
                if self.has_target(v) {
                    return self.clone();
                }
                let mut assignments = self.assignments.clone();
                assignments.push((source, v));
                DrawingState {
                    assignments,
                    pending_source: None,
                }
            }
        }
    }

    fn undo_last(&self) -> DrawingState {
        let mut assignments = self.assignments.clone();
        assignments.pop();
        DrawingState {
            assignments,
            pending_source: None,
        }
    }

    pub fn is_complete(&self, n: usize) -> bool {
        self.assignments.len() == n
    }

    /// Convert a complete drawing into a permutation over `[0, n)`.
    pub fn to_perm(&self, n: usize) -> Result<Perm, Error> {
        if !self.is_complete(n) {
            return Err(Error::IncompleteDrawing {
                assigned: self.assignments.len(),
                needed: n,
            });
        }
        let mut one_line: Vec<Option<u32>> = vec![None; n];
        for &(s, t) in &self.assignments {
            let slot = one_line
                .get_mut(s as usize)
                .ok_or(Error::UnknownVertex(s))?;
            if slot.is_some() {
                return Err(Error::InvalidPermutation(format!("vertex {} mapped twice", s)));
            }
            if t as usize >= n {
                return Err(Error::UnknownVertex(t));
            }
            *slot = Some(t);
        }
        let filled: Vec<u32> = one_line
            .into_iter()
            .map(|v| v.ok_or(Error::InvalidPermutation("unassigned vertex".into())))
            .collect::<Result<_, _>>()?;
        Perm::from_one_line(filled)
    }
}
