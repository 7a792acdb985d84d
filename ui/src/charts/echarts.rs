//! Thin interop with the ECharts runtime loaded on the host page.
//!
//! Instances are created lazily per element id and reused across renders;
//! `setOption` is called with `notMerge` so each payload replaces the
//! previous configuration wholesale. Off wasm these are no-ops, which keeps
//! the crate (and its tests) building natively.

use serde_json::Value;

#[cfg(target_arch = "wasm32")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = echarts, js_name = init)]
        pub fn init(dom: &web_sys::Element) -> JsValue;

        #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
        pub fn get_instance(dom: &web_sys::Element) -> JsValue;
    }
}

/// Applies `option` to the chart mounted on `element_id`, creating the
/// instance on first use.
#[cfg(target_arch = "wasm32")]
pub fn render(element_id: &str, option: &Value) {
    use wasm_bindgen::JsValue;

    let Some(chart) = instance_for(element_id, true) else {
        return;
    };
    let Ok(payload) = js_sys::JSON::parse(&option.to_string()) else {
        return;
    };

    if let Some(set_option) = method(&chart, "setOption") {
        let _ = set_option.call2(&chart, &payload, &JsValue::TRUE);
    }
    if let Some(resize) = method(&chart, "resize") {
        let _ = resize.call0(&chart);
    }
}

/// Resizes an existing chart; does nothing if none was created yet.
#[cfg(target_arch = "wasm32")]
pub fn resize(element_id: &str) {
    let Some(chart) = instance_for(element_id, false) else {
        return;
    };
    if let Some(resize) = method(&chart, "resize") {
        let _ = resize.call0(&chart);
    }
}

#[cfg(target_arch = "wasm32")]
fn instance_for(element_id: &str, create: bool) -> Option<wasm_bindgen::JsValue> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(element_id)?;

    let existing = ffi::get_instance(&element);
    if !existing.is_null() && !existing.is_undefined() {
        return Some(existing);
    }
    create.then(|| ffi::init(&element))
}

#[cfg(target_arch = "wasm32")]
fn method(target: &wasm_bindgen::JsValue, name: &str) -> Option<js_sys::Function> {
    use wasm_bindgen::{JsCast, JsValue};

    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into()
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn render(_element_id: &str, _option: &Value) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn resize(_element_id: &str) {}
