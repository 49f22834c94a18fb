//! Structured result objects: `{ok: true, value}` or
//! `{ok: false, error: {code, message, data?}}`. Codes for core errors come
//! from `leaper::Error::code`; the oracle client adds `oracle_unavailable`,
//! `oracle_error`, and `aborted`.

use crate::interop::{new_obj, set_kv};
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Map a core error, attaching the variant's payload as `data`.
pub fn from_core(e: &leaper::Error) -> JsValue {
    use leaper::Error as E;
    let data = match e {
        E::UnknownVertex(id) | E::SelfLoop(id) => {
            let d = new_obj();
            set_kv(&d, "id", &JsValue::from_f64(*id as f64));
            Some(d.into())
        }
        E::UnknownEdge(a, b) | E::DuplicateEdge(a, b) => {
            let d = new_obj();
            set_kv(&d, "source", &JsValue::from_f64(*a as f64));
            set_kv(&d, "target", &JsValue::from_f64(*b as f64));
            Some(d.into())
        }
        E::IncompatibleHop { expected, got } => {
            let d = new_obj();
            set_kv(&d, "expected", &JsValue::from_f64(*expected as f64));
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            Some(d.into())
        }
        E::IncompleteDrawing { assigned, needed } => {
            let d = new_obj();
            set_kv(&d, "assigned", &JsValue::from_f64(*assigned as f64));
            set_kv(&d, "needed", &JsValue::from_f64(*needed as f64));
            Some(d.into())
        }
        E::NoSuchIndex(i) => {
            let d = new_obj();
            set_kv(&d, "index", &JsValue::from_f64(*i as f64));
            Some(d.into())
        }
        _ => None,
    };
    err(e.code(), e.to_string(), data)
}

/// Map a document codec error tuple.
pub fn from_codec((code, message): (&'static str, String)) -> JsValue {
    err(code, message, None)
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn bad_payload(message: impl Into<String>) -> JsValue {
    err("bad_payload", message, None)
}

#[inline]
pub fn aborted() -> JsValue {
    err("aborted", "request aborted", None)
}

#[inline]
pub fn oracle_unavailable(message: impl Into<String>) -> JsValue {
    err("oracle_unavailable", message, None)
}

#[inline]
pub fn oracle_error(message: impl Into<String>) -> JsValue {
    err("oracle_error", message, None)
}
