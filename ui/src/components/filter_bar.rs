//! The filter control surface: year/month/day selects, a date range, and
//! the clear action. Every change writes straight into the shared
//! `FilterSpec` signal; the dashboard's memo chain re-renders from there.

use dioxus::prelude::*;

use crate::core::filter::FilterSpec;
use crate::core::format::MONTH_NAMES;

#[component]
pub fn FilterBar(years: Vec<String>, spec: Signal<FilterSpec>) -> Element {
    let current = spec();
    let year_value = current.year.clone().unwrap_or_else(|| "all".to_string());
    let month_value = current
        .month
        .map(|m| m.to_string())
        .unwrap_or_else(|| "all".to_string());
    let day_value = current
        .day
        .map(|d| d.to_string())
        .unwrap_or_else(|| "all".to_string());

    rsx! {
        div { class: "filter-bar",
            label { class: "filter-bar__field",
                span { "Year" }
                select {
                    value: "{year_value}",
                    onchange: move |evt| {
                        let value = evt.value();
                        spec.write().year = (value != "all").then_some(value);
                    },
                    option { value: "all", "All" }
                    for year in years.iter() {
                        option { value: "{year}", "{year}" }
                    }
                }
            }

            label { class: "filter-bar__field",
                span { "Month" }
                select {
                    value: "{month_value}",
                    // "all" fails the parse, which is exactly the reset.
                    onchange: move |evt| spec.write().month = evt.value().parse().ok(),
                    option { value: "all", "All" }
                    for month in 1..=12u8 {
                        option { value: "{month}", {MONTH_NAMES[month as usize]} }
                    }
                }
            }

            label { class: "filter-bar__field",
                span { "Day" }
                select {
                    value: "{day_value}",
                    onchange: move |evt| spec.write().day = evt.value().parse().ok(),
                    option { value: "all", "All" }
                    for day in 1..=31u8 {
                        option { value: "{day}", "{day}" }
                    }
                }
            }

            label { class: "filter-bar__field",
                span { "From" }
                input {
                    r#type: "date",
                    value: "{current.start_date}",
                    onchange: move |evt| spec.write().start_date = evt.value(),
                }
            }

            label { class: "filter-bar__field",
                span { "To" }
                input {
                    r#type: "date",
                    value: "{current.end_date}",
                    onchange: move |evt| spec.write().end_date = evt.value(),
                }
            }

            button {
                r#type: "button",
                class: "filter-bar__clear",
                onclick: move |_| spec.write().clear_narrowing(),
                "Clear"
            }
        }
    }
}
