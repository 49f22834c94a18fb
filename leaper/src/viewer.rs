//! Reversible swap of the live graph for a historical snapshot.

use crate::error::Error;
use crate::model::GraphSnapshot;

/// Holds the stashed live graph while a past computation's input graph is
/// displayed. Only one snapshot may be viewed at a time; re-entrant `enter`
/// fails rather than silently overwriting the stash.
#[derive(Default)]
pub struct SnapshotViewer {
    stashed: Option<GraphSnapshot>,
}

impl SnapshotViewer {
    pub fn new() -> SnapshotViewer {
        SnapshotViewer::default()
    }

    pub fn is_viewing(&self) -> bool {
        self.stashed.is_some()
    }

    /// Stash the live graph; the caller then loads the snapshot for display.
    pub fn enter(&mut self, live: GraphSnapshot) -> Result<(), Error> {
        if self.stashed.is_some() {
            return Err(Error::AlreadyViewing);
        }
        self.stashed = Some(live);
        Ok(())
    }

    /// Give back the stashed live graph.
    pub fn exit(&mut self) -> Result<GraphSnapshot, Error> {
        self.stashed.take().ok_or(Error::NotViewing)
    }
}
