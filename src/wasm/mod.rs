//! JavaScript bindings, enabled by the `wasm` feature.

use crate::errors::VecMathError;
use wasm_bindgen::prelude::*;

pub mod plane_js;
pub mod spline_js;
pub mod transform_js;
pub mod vector_js;

pub(crate) fn to_js_error(e: VecMathError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
