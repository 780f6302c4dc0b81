//! Browser bindings: resolve a wall-clock reading to a face the page can paint.
//!
//! The page owns the timer (e.g. `setInterval(..., 1000)`) and calls in with
//! `Date#getHours()`, `getMinutes()` and `getSeconds()` on every tick.

use wasm_bindgen::prelude::*;
use word_clock::{normalize, resolve, ClockFace, ClockOptions};

fn face(hour: u32, minute: u32, second: u32) -> ClockFace {
    let options = ClockOptions::default();
    resolve(normalize(hour, minute, second, &options), &options)
}

/// The resolved face as JSON: `{"lines":[{"segments":[{"text","highlighted"}]}]}`.
#[wasm_bindgen(js_name = "resolveFace")]
pub fn resolve_face(hour: u32, minute: u32, second: u32) -> Result<String, JsValue> {
    serde_json::to_string(&face(hour, minute, second))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The lit words only, e.g. `"IT IS HALF PAST THREE"`.
#[wasm_bindgen(js_name = "resolvePhrase")]
pub fn resolve_phrase(hour: u32, minute: u32, second: u32) -> String {
    face(hour, minute, second).phrase()
}
