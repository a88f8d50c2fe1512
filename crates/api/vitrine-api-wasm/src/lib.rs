//! vitrine-api-wasm: WASM JSON helpers and TS-friendly serialization for vitrine-api-core.
//! Minimal glue: expose helpers to validate/parse Effect and EffectBatch JSON and return JS objects.

use serde_wasm_bindgen::to_value;
use vitrine_api_core::{Effect, EffectBatch};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn validate_effectbatch_json(batch_json: &str) -> Result<(), JsValue> {
    let parsed: Result<EffectBatch, _> = serde_json::from_str(batch_json);
    parsed
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn effectbatch_to_js(batch_json: &str) -> Result<JsValue, JsValue> {
    let parsed: Result<EffectBatch, _> = serde_json::from_str(batch_json);
    match parsed {
        Ok(b) => to_value(&b).map_err(|e| JsValue::from_str(&e.to_string())),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

#[wasm_bindgen]
pub fn validate_effect_json(effect_json: &str) -> Result<(), JsValue> {
    let parsed: Result<Effect, _> = serde_json::from_str(effect_json);
    parsed
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn effect_to_js(effect_json: &str) -> Result<JsValue, JsValue> {
    let parsed: Result<Effect, _> = serde_json::from_str(effect_json);
    match parsed {
        Ok(v) => to_value(&v).map_err(|e| JsValue::from_str(&e.to_string())),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}
