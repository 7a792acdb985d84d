//! Chart surfaces. Option payloads are built in `options`; `echarts`
//! drives the chart runtime on the page.

pub mod echarts;
pub mod options;

use dioxus::prelude::*;
use serde_json::Value;

/// A chart surface: a sized div plus an effect that reapplies the option
/// payload whenever it changes. The effect runs after the div is in the
/// DOM, so the runtime always has an element to mount on.
#[component]
pub fn EChart(id: &'static str, option: ReadOnlySignal<Value>) -> Element {
    use_effect(move || {
        let payload = option();
        echarts::render(id, &payload);
    });

    rsx! {
        div { id: "{id}", class: "chart-surface" }
    }
}
