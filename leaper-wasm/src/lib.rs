use wasm_bindgen::prelude::*;

mod api;
mod error;
mod interop;
mod oracle;

pub use oracle::{verify_body, OracleCall, OracleClient};

/// The session state machine behind a JS-facing handle. All editing goes
/// through methods in `api`; the oracle client never touches this directly.
#[wasm_bindgen]
pub struct Editor {
    pub(crate) inner: leaper::Session,
}

impl Editor {
    pub fn rs_new() -> Editor {
        Editor {
            inner: leaper::Session::new(),
        }
    }
}
