//! Summary stat cards: earliest/latest swipe and the year/month totals.

use dioxus::prelude::*;

use crate::core::aggregate::Summary;
use crate::core::filter::FilterSpec;
use crate::core::format::MONTH_NAMES;

#[component]
pub fn SummaryCards(summary: Summary, spec: FilterSpec, filtered_count: usize) -> Element {
    // With nothing matching, every card shows the placeholder and the
    // labels fall back to their generic forms.
    let empty = filtered_count == 0;

    let year_label = match (&spec.year, empty) {
        (Some(year), false) => format!("{year} Total"),
        _ => "Year Total".to_string(),
    };
    let month_label = match (spec.month, empty) {
        (Some(month), false) => {
            let name = MONTH_NAMES.get(month as usize).copied().unwrap_or("Month");
            format!("{name} Total")
        }
        _ => "Month Total".to_string(),
    };

    let earliest = summary.earliest.clone().unwrap_or_else(placeholder);
    let latest = summary.latest.clone().unwrap_or_else(placeholder);
    let year_total = if empty {
        placeholder()
    } else {
        summary.year_total.to_string()
    };
    let month_total = if empty {
        placeholder()
    } else {
        summary.month_total.to_string()
    };

    rsx! {
        div { class: "summary-cards",
            StatCard { label: "Earliest Swipe".to_string(), value: earliest }
            StatCard { label: "Latest Swipe".to_string(), value: latest }
            StatCard { label: year_label, value: year_total }
            StatCard { label: month_label, value: month_total }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "summary-card",
            span { class: "summary-card__label", "{label}" }
            strong { class: "summary-card__value", "{value}" }
        }
    }
}

fn placeholder() -> String {
    "—".to_string()
}
