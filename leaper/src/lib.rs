//! Core of the leaper graph-permutation editor.
//!
//! The crate is pure state and codecs: the wasm binding layer and the JS
//! host own rendering, pointer input, files, and the network. Vertex ids
//! are dense over [0, n) everywhere; permutations are 0-indexed one-line
//! arrays internally and 1-indexed only on the oracle wire and in stored
//! cycle strings.

pub mod composer;
pub mod drawing;
pub mod error;
pub mod generators;
pub mod graph;
pub mod history;
pub mod json;
pub mod model;
pub mod oracle;
pub mod perm;
pub mod session;
pub mod viewer;
pub mod workspace;

pub use composer::{Hop, HopRecord, HopSource, LeapComposer, SavedLeap, WorkingLeap};
pub use drawing::{DrawEvent, DrawingState};
pub use error::Error;
pub use generators::GeneratedGraph;
pub use graph::{Graph, RemovalOutcome};
pub use history::HistoryStack;
pub use model::{Edge, GraphSnapshot, Settings, Vertex, VertexId};
pub use oracle::{GraphQuery, HopData, HopsResult, LeapGroupResult, VerifyResult};
pub use perm::{shift_cycles, Perm};
pub use session::{PinnedHop, Session};
pub use viewer::SnapshotViewer;
pub use workspace::{EntryKind, EntryResult, WorkspaceEntry};
