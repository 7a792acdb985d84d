//! Detail table: one row per filtered record.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::record::SwipeRecord;

#[component]
pub fn SwipeTable(rows: Vec<SwipeRecord>) -> Element {
    rsx! {
        section { class: "swipe-table",
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Time" }
                        th { "Date" }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr {
                            td { "{row.id}" }
                            td { "{row.name}" }
                            td { {format::clock_12h(&row.time)} }
                            td { "{row.date}" }
                        }
                    }
                }
            }
        }
    }
}
