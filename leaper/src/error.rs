use crate::model::VertexId;
use std::fmt;

/// Everything here is local and recoverable: a rejected operation leaves
/// the session exactly as it was.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    UnknownVertex(VertexId),
    UnknownEdge(VertexId, VertexId),
    DuplicateEdge(VertexId, VertexId),
    SelfLoop(VertexId),
    IncompatibleHop { expected: usize, got: usize },
    NoActiveLeap,
    NotDrawing,
    IncompleteDrawing { assigned: usize, needed: usize },
    InvalidPermutation(String),
    Validation(&'static str, String),
    ViewingSnapshot,
    AlreadyViewing,
    NotViewing,
    NoSuchIndex(usize),
}

impl Error {
    /// Stable snake_case code, used by binding layers as the machine-readable
    /// half of an error object.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownVertex(_) => "unknown_vertex",
            Error::UnknownEdge(..) => "unknown_edge",
            Error::DuplicateEdge(..) => "duplicate_edge",
            Error::SelfLoop(_) => "self_loop",
            Error::IncompatibleHop { .. } => "incompatible_hop",
            Error::NoActiveLeap => "no_active_leap",
            Error::NotDrawing => "not_drawing",
            Error::IncompleteDrawing { .. } => "incomplete_drawing",
            Error::InvalidPermutation(_) => "invalid_permutation",
            Error::Validation(code, _) => code,
            Error::ViewingSnapshot => "viewing_snapshot",
            Error::AlreadyViewing => "already_viewing",
            Error::NotViewing => "not_viewing",
            Error::NoSuchIndex(_) => "no_such_index",
        }
    }
}

/// The document codec reports `(code, message)` tuples; lift them into the
/// common taxonomy for callers that want one error type.
impl From<(&'static str, String)> for Error {
    fn from((code, message): (&'static str, String)) -> Error {
        Error::Validation(code, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownVertex(id) => write!(f, "no vertex with id {}", id),
            Error::UnknownEdge(a, b) => write!(f, "no edge between {} and {}", a, b),
            Error::DuplicateEdge(a, b) => write!(f, "edge between {} and {} already exists", a, b),
            Error::SelfLoop(id) => write!(f, "cannot connect vertex {} to itself", id),
            Error::IncompatibleHop { expected, got } => {
                write!(f, "hop is over {} vertices but the graph has {}", got, expected)
            }
            Error::NoActiveLeap => write!(f, "no working leap to save"),
            Error::NotDrawing => write!(f, "no hop drawing in progress"),
            Error::IncompleteDrawing { assigned, needed } => {
                write!(f, "drawing assigns {} of {} vertices", assigned, needed)
            }
            Error::InvalidPermutation(msg) => write!(f, "invalid permutation: {}", msg),
            Error::Validation(code, msg) => write!(f, "{}: {}", code, msg),
            Error::ViewingSnapshot => write!(f, "graph is read-only while viewing a snapshot"),
            Error::AlreadyViewing => write!(f, "already viewing a snapshot"),
            Error::NotViewing => write!(f, "not viewing a snapshot"),
            Error::NoSuchIndex(i) => write!(f, "no item at index {}", i),
        }
    }
}

impl std::error::Error for Error {}
