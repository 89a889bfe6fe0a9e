//! `DeviceProbe` backed by the browser environment.

use holocard_core::{DeviceProbe, ProbeError};
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct BrowserProbe {
    window: web::Window,
}

impl BrowserProbe {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

fn failed(probe: &'static str, err: JsValue) -> ProbeError {
    ProbeError::Failed {
        probe,
        message: format!("{:?}", err),
    }
}

impl DeviceProbe for BrowserProbe {
    fn max_touch_points(&self) -> Result<u32, ProbeError> {
        Ok(self.window.navigator().max_touch_points().max(0) as u32)
    }

    fn media_matches(&self, query: &str) -> Result<bool, ProbeError> {
        self.window
            .match_media(query)
            .map_err(|e| failed("matchMedia", e))?
            .map(|mql| mql.matches())
            .ok_or(ProbeError::Unavailable("matchMedia"))
    }

    fn supports_css(&self, property: &str, value: &str) -> Result<bool, ProbeError> {
        web::css::supports_with_value(property, value).map_err(|e| failed("CSS.supports", e))
    }

    // Chromium-only; absent elsewhere, which is not an error
    fn device_memory_gb(&self) -> Result<Option<f32>, ProbeError> {
        let nav = self.window.navigator();
        let value = js_sys::Reflect::get(&nav, &JsValue::from_str("deviceMemory"))
            .map_err(|e| failed("navigator.deviceMemory", e))?;
        Ok(value.as_f64().filter(|gb| *gb > 0.0).map(|gb| gb as f32))
    }

    fn hardware_concurrency(&self) -> Result<Option<u32>, ProbeError> {
        let cores = self.window.navigator().hardware_concurrency();
        Ok((cores.is_finite() && cores >= 1.0).then_some(cores as u32))
    }
}
