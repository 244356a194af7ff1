//! Chart.js Binding
//!
//! The charting library is loaded by the page as the global `Chart`.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::{ChartSpec, Disposable};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &JsChart);
}

impl Disposable for JsChart {
    fn dispose(&self) {
        self.destroy();
    }
}

/// Draw `spec` on `canvas`
pub fn mount(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<JsChart, String> {
    let config = spec
        .config
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Chart config error: {}", e))?;
    if spec.percent_tooltip {
        attach_percent_label(&config).map_err(|e| format!("Chart tooltip error: {:?}", e))?;
    }
    JsChart::new(canvas, &config).map_err(|e| format!("Chart.js error: {:?}", e))
}

/// options.plugins.tooltip.callbacks.label = ctx => `${label}: ${parsed}%`
fn attach_percent_label(config: &JsValue) -> Result<(), JsValue> {
    let tooltip = ensure_object(config, &["options", "plugins", "tooltip", "callbacks"])?;
    let label = js_sys::Function::new_with_args(
        "context",
        "return context.label + ': ' + context.parsed + '%';",
    );
    js_sys::Reflect::set(&tooltip, &JsValue::from_str("label"), &label)?;
    Ok(())
}

fn ensure_object(root: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    let mut current = root.clone();
    for key in path {
        let key = JsValue::from_str(key);
        let mut next = js_sys::Reflect::get(&current, &key)?;
        if next.is_undefined() || next.is_null() {
            next = js_sys::Object::new().into();
            js_sys::Reflect::set(&current, &key, &next)?;
        }
        current = next;
    }
    Ok(current)
}
