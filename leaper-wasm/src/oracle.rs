//! Fetch client for the compute oracle.
//!
//! Every endpoint POSTs a graph query and resolves with the same
//! `{ok, value|error}` objects the editor methods return, so the host
//! handles both layers with one code path. The promise never rejects.
//! Results are not applied here: the host passes a successful value to the
//! editor's `record_*` / `apply_hop_res` methods, which keeps editor state
//! untouched when a call fails or is aborted mid-flight.

use crate::error;
use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{AbortController, AbortSignal, Request, RequestInit, Response};

#[wasm_bindgen]
pub struct OracleClient {
    base_url: String,
}

#[wasm_bindgen]
impl OracleClient {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: &str) -> OracleClient {
        OracleClient {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// One cancellable request handle. Each in-flight computation gets its
    /// own call so aborting one leaves the others running.
    pub fn start(&self) -> Result<OracleCall, JsValue> {
        Ok(OracleCall {
            base_url: self.base_url.clone(),
            controller: AbortController::new()?,
        })
    }
}

#[wasm_bindgen]
pub struct OracleCall {
    base_url: String,
    controller: AbortController,
}

#[wasm_bindgen]
impl OracleCall {
    pub fn abort(&self) {
        self.controller.abort();
    }

    /// `query` is the object from `Editor::graph_query`.
    pub fn leap_group(&self, query: JsValue) -> Promise {
        self.post("leap-group", query)
    }

    pub fn all_hops(&self, query: JsValue) -> Promise {
        self.post("all-hops", query)
    }

    pub fn one_hop(&self, query: JsValue) -> Promise {
        self.post("one-hop", query)
    }

    /// `one_line` is the 1-indexed permutation to check.
    pub fn verify_hop(&self, query: JsValue, one_line: Vec<u32>) -> Promise {
        self.post("verify-hop", verify_body(&query, &one_line))
    }

    fn post(&self, path: &str, body: JsValue) -> Promise {
        let url = format!("{}/{}", self.base_url, path);
        let signal = self.controller.signal();
        future_to_promise(async move {
            Ok(post_json(&url, &body, &signal).await.unwrap_or_else(|e| e))
        })
    }
}

/// Body for a verify request: a copy of the graph query with the candidate
/// permutation attached under `one_line`. The caller's query is not mutated.
pub fn verify_body(query: &JsValue, one_line: &[u32]) -> JsValue {
    let Some(obj) = query.dyn_ref::<js_sys::Object>() else {
        return query.clone();
    };
    let body = js_sys::Object::assign(&js_sys::Object::new(), obj);
    let arr: js_sys::Array = one_line.iter().map(|&v| JsValue::from_f64(v as f64)).collect();
    let _ = Reflect::set(&body, &JsValue::from_str("one_line"), &arr.into());
    body.into()
}

async fn post_json(url: &str, body: &JsValue, signal: &AbortSignal) -> Result<JsValue, JsValue> {
    let payload = js_sys::JSON::stringify(body)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or_else(|| error::bad_payload("request body is not serializable"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&payload));
    opts.set_signal(Some(signal));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| error::oracle_unavailable("invalid request"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| error::oracle_unavailable("invalid request headers"))?;

    let window =
        web_sys::window().ok_or_else(|| error::oracle_unavailable("no window object"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(classify_fetch_failure)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| error::oracle_unavailable("fetch returned a non-Response"))?;

    if !response.ok() {
        let message = format!("oracle returned status {}", response.status());
        web_sys::console::warn_1(&JsValue::from_str(&message));
        return Err(error::oracle_error(message));
    }

    let json = response
        .json()
        .map_err(|_| error::oracle_error("response body is not JSON"))?;
    let value = JsFuture::from(json)
        .await
        .map_err(|_| error::oracle_error("response body is not JSON"))?;
    Ok(error::ok(value))
}

/// An aborted fetch surfaces as a DOMException named AbortError; everything
/// else is the oracle being unreachable.
fn classify_fetch_failure(e: JsValue) -> JsValue {
    let name = Reflect::get(&e, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string());
    if name.as_deref() == Some("AbortError") {
        return error::aborted();
    }
    let message = Reflect::get(&e, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "fetch failed".to_string());
    error::oracle_unavailable(message)
}
