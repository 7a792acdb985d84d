//! The dashboard view: load once, then filter → aggregate → render on
//! every filter change, synchronously on the UI thread.

use dioxus::prelude::*;
use serde_json::Value;

use crate::charts::{options, EChart};
use crate::components::{FilterBar, SummaryCards, SwipeTable};
use crate::core::aggregate;
use crate::core::filter::{self, FilterSpec};
use crate::core::format;
use crate::core::lifecycle::LoadPhase;
use crate::core::loader;
use crate::core::record::SwipeRecord;

const HOUR_CHART: &str = "chart-by-hour";
const DATE_CHART: &str = "chart-by-date";
const WEEKDAY_CHART: &str = "chart-by-weekday";

#[cfg(debug_assertions)]
fn log_phase(phase: LoadPhase) {
    // Lightweight trace for diagnosing slow or failing data loads.
    println!("[dashboard] render (phase={phase:?})");
}

/// Entry component. Owns the one-shot CSV load and hands the record set to
/// the ready dashboard exactly once; before that it renders the loading
/// (or load-failure) screen.
#[component]
pub fn Dashboard(data_url: String) -> Element {
    let records = use_resource(move || {
        let url = data_url.clone();
        async move { loader::fetch_records(&url).await }
    });

    let state = records.read_unchecked();
    let phase = LoadPhase::of(&*state);

    #[cfg(debug_assertions)]
    log_phase(phase);

    if phase.is_ready() {
        if let Some(Ok(data)) = &*state {
            return rsx! {
                ReadyDashboard { records: data.clone() }
            };
        }
    }

    let error = match &*state {
        Some(Err(err)) => Some(err.to_string()),
        _ => None,
    };

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Access Dashboard" }
            if let Some(message) = error {
                p { class: "dashboard__error", "Couldn't load swipe data: {message}" }
            } else {
                p { class: "dashboard__loading", "Loading swipe data…" }
            }
        }
    }
}

/// Everything past the Loading→Ready transition. The record set is fixed
/// from here on; the filter spec signal drives the memo chain.
#[component]
fn ReadyDashboard(records: ReadOnlySignal<Vec<SwipeRecord>>) -> Element {
    let years = use_memo(move || discovered_years(&records.read()));

    // Default the year to the most recent one in the data.
    let spec = use_signal(|| FilterSpec {
        year: years.peek().first().cloned(),
        ..FilterSpec::default()
    });

    let filtered = use_memo(move || filter::apply(&records.read(), &spec.read()));
    let summary = use_memo(move || aggregate::summarize(&records.read(), &filtered.read(), &spec.read()));

    let hour_option = use_memo(move || hour_chart_option(&filtered.read()));
    let date_option = use_memo(move || date_chart_option(&filtered.read()));
    let weekday_option = use_memo(move || weekday_chart_option(&filtered.read()));

    install_resize_listener();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Access Dashboard" }

            FilterBar { years: years(), spec }
            SummaryCards {
                summary: summary(),
                spec: spec(),
                filtered_count: filtered.read().len(),
            }

            div { class: "dashboard__charts",
                article { class: "chart-card",
                    h2 { "Swipes by Hour" }
                    EChart { id: HOUR_CHART, option: hour_option }
                }
                article { class: "chart-card",
                    h2 { "Swipes by Day of Month" }
                    EChart { id: DATE_CHART, option: date_option }
                }
                article { class: "chart-card",
                    h2 { "Traffic Trend by Day of Week" }
                    EChart { id: WEEKDAY_CHART, option: weekday_option }
                }
            }

            SwipeTable { rows: filtered() }
        }
    }
}

/// Distinct years present in the data, newest first.
fn discovered_years(records: &[SwipeRecord]) -> Vec<String> {
    let mut years: Vec<String> = records.iter().map(|r| r.year_str().to_string()).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

fn hour_chart_option(filtered: &[SwipeRecord]) -> Value {
    let buckets = aggregate::hour_buckets(filtered);
    // Labels go through the same formatter as the summary cards, via a
    // synthesized H:00:00 string.
    let labels: Vec<String> = buckets
        .iter()
        .map(|(hour, _)| format::clock_12h(&format!("{hour}:00:00")))
        .collect();
    let values: Vec<u32> = buckets.iter().map(|(_, count)| *count).collect();
    options::bar_option(&labels, &values, options::PURPLE, None, true)
}

fn date_chart_option(filtered: &[SwipeRecord]) -> Value {
    let counts = aggregate::day_of_month_buckets(filtered);
    let labels: Vec<String> = (1..=31).map(|day| day.to_string()).collect();
    options::bar_option(
        &labels,
        &counts,
        options::GOLD,
        Some("Day of the Month"),
        false,
    )
}

fn weekday_chart_option(filtered: &[SwipeRecord]) -> Value {
    let counts = aggregate::weekday_buckets(filtered);
    options::smooth_area_option(
        &format::WEEKDAY_NAMES,
        &counts,
        options::PURPLE,
        options::PURPLE_FILL,
    )
}

/// One window-level resize listener keeps the three chart surfaces sized
/// to their containers. Charts only exist on wasm, so elsewhere this is
/// nothing.
fn install_resize_listener() {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        use_effect(|| {
            let closure = Closure::wrap(Box::new(move || {
                for id in [HOUR_CHART, DATE_CHART, WEEKDAY_CHART] {
                    crate::charts::echarts::resize(id);
                }
            }) as Box<dyn Fn()>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        });
    }
}
