// rs_barnes_hut_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the Barnes-Hut library.

use wasm_bindgen::prelude::*;
use rs_barnes_hut::apis::easy_repulsion::EasyRepulsion;
use rs_barnes_hut::utils::ApproximatorConfig;

#[wasm_bindgen]
pub struct WasmRepulsion {
    repulsion: EasyRepulsion,
}

#[wasm_bindgen]
impl WasmRepulsion {
    #[wasm_bindgen(constructor)]
    pub fn new(theta: f64) -> Result<WasmRepulsion, JsValue> {
        let config = ApproximatorConfig::default().with_theta(theta);
        EasyRepulsion::with_config(config)
            .map(|repulsion| Self { repulsion })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn theta(&self) -> f64 {
        self.repulsion.config().theta
    }

    /// Takes `x, y, z` per particle and one mass per particle, returns `x, y, z` of the
    /// force on each particle.
    #[wasm_bindgen]
    pub fn compute_forces(&self, positions: &[f64], masses: &[f64]) -> Result<Vec<f64>, JsValue> {
        self.repulsion
            .compute_forces_flat(positions, masses)
            .map_err(|e| {
                web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
                JsValue::from_str(&e.to_string())
            })
    }

    /// Number of particles a flat position array describes.
    #[wasm_bindgen]
    pub fn particle_count(positions: &js_sys::Float64Array) -> u32 {
        positions.length() / 3
    }
}
