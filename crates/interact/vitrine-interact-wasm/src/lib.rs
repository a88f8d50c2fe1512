use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vitrine_interact_core::{parse_page_json, Config, Engine, EnvProbe, Inputs};

/// Wire/ABI version for the JS package; bump when Outputs/Inputs change shape.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

#[wasm_bindgen]
pub struct VitrineInteract {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn stringify(v: &JsValue, what: &str) -> Result<String, JsError> {
    JSON::stringify(v)
        .map_err(|e| JsError::new(&format!("{what} stringify error: {e:?}")))?
        .as_string()
        .ok_or_else(|| JsError::new(&format!("{what}: stringify produced non-string")))
}

#[wasm_bindgen]
impl VitrineInteract {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults. Example:
    ///   new VitrineInteract({ counter_duration_ms: 1000 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VitrineInteract, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate()
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        Ok(VitrineInteract {
            core: Engine::new(cfg),
        })
    }

    /// Classify the environment and register mechanisms against the page.
    /// `env` is an EnvProbe object; `page` is a PageSnapshot object (the
    /// host's scan of the markup). Returns the startup Outputs as a JS object.
    #[wasm_bindgen]
    pub fn start(&mut self, env: JsValue, page: JsValue, now_ms: f64) -> Result<JsValue, JsError> {
        let probe: EnvProbe =
            swb::from_value(env).map_err(|e| JsError::new(&format!("env probe error: {e}")))?;
        // Route the page through the core parser so validation applies.
        let page_json = stringify(&page, "start page")?;
        let snapshot =
            parse_page_json(&page_json).map_err(|e| JsError::new(&format!("page error: {e}")))?;
        let out = self.core.start(&probe, snapshot, now_ms);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs serialization error: {e}")))
    }

    /// One display frame: apply the batched host events and return the frame's
    /// Outputs as a JS object.
    #[wasm_bindgen]
    pub fn update(&mut self, now_ms: f64, inputs: JsValue) -> Result<JsValue, JsError> {
        let inputs_rs: Inputs = if jsvalue_is_undefined_or_null(&inputs) {
            Inputs::default()
        } else {
            swb::from_value(inputs).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out = self.core.update(now_ms, inputs_rs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs serialization error: {e}")))
    }

    /// Frame-pass counters (scroll coalescing, debounce flushes, reveals).
    #[wasm_bindgen]
    pub fn metrics(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.metrics())
            .map_err(|e| JsError::new(&format!("metrics serialization error: {e}")))
    }

    /// The fixed capability snapshot, or undefined before start().
    #[wasm_bindgen]
    pub fn capabilities(&self) -> Result<JsValue, JsError> {
        match self.core.capabilities() {
            Some(caps) => swb::to_value(caps)
                .map_err(|e| JsError::new(&format!("capabilities serialization error: {e}"))),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// The activation plan, or undefined before start().
    #[wasm_bindgen]
    pub fn plan(&self) -> Result<JsValue, JsError> {
        match self.core.plan() {
            Some(plan) => swb::to_value(plan)
                .map_err(|e| JsError::new(&format!("plan serialization error: {e}"))),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}
