//! Declarative ECharts option payloads.
//!
//! Pure builders over `serde_json::Value` so the chart shapes can be
//! asserted in tests without a browser. The interop layer hands the
//! finished payload to the runtime untouched.

use serde_json::{json, Value};

pub const PURPLE: &str = "#4b2e83";
pub const GOLD: &str = "#b7a57a";
pub const PURPLE_FILL: &str = "rgba(75, 46, 131, 0.15)";

const COUNT_AXIS_NAME: &str = "Number of Swipes";

/// Category-axis bar chart. `rotate_labels` angles the x labels 45° for
/// dense axes like the 12-hour clock labels; `x_name` titles the axis when
/// present.
pub fn bar_option(
    labels: &[String],
    values: &[u32],
    color: &str,
    x_name: Option<&str>,
    rotate_labels: bool,
) -> Value {
    let mut x_axis = json!({ "type": "category", "data": labels });
    if rotate_labels {
        x_axis["axisLabel"] = json!({ "rotate": 45 });
    }
    if let Some(name) = x_name {
        x_axis["name"] = json!(name);
        x_axis["nameLocation"] = json!("middle");
        x_axis["nameGap"] = json!(25);
    }

    json!({
        "tooltip": {},
        "xAxis": x_axis,
        "yAxis": count_axis(),
        "series": [{ "type": "bar", "data": values, "color": color }]
    })
}

/// Smoothed line with a translucent area fill, for the weekday trend.
pub fn smooth_area_option(labels: &[&str], values: &[u32], color: &str, fill: &str) -> Value {
    json!({
        "tooltip": {},
        "xAxis": { "type": "category", "data": labels },
        "yAxis": count_axis(),
        "series": [{
            "type": "line",
            "smooth": true,
            "data": values,
            "color": color,
            "areaStyle": { "color": fill }
        }]
    })
}

// Counts are integers, so the value axis never shows fractional ticks.
fn count_axis() -> Value {
    json!({
        "type": "value",
        "minInterval": 1,
        "name": COUNT_AXIS_NAME,
        "nameLocation": "middle",
        "nameGap": 35
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_payload_shape() {
        let labels = vec!["8:00 AM".to_string(), "11:00 PM".to_string()];
        let option = bar_option(&labels, &[1, 2], PURPLE, None, true);

        assert_eq!(option["series"][0]["type"], "bar");
        assert_eq!(option["series"][0]["color"], PURPLE);
        assert_eq!(option["series"][0]["data"], json!([1, 2]));
        assert_eq!(option["xAxis"]["axisLabel"]["rotate"], 45);
        assert_eq!(option["yAxis"]["minInterval"], 1);
        assert_eq!(option["yAxis"]["name"], COUNT_AXIS_NAME);
        assert!(option["xAxis"].get("name").is_none());
    }

    #[test]
    fn bar_axis_name_is_optional() {
        let labels: Vec<String> = (1..=31).map(|d| d.to_string()).collect();
        let values = [0u32; 31];
        let option = bar_option(&labels, &values, GOLD, Some("Day of the Month"), false);

        assert_eq!(option["xAxis"]["name"], "Day of the Month");
        assert_eq!(option["xAxis"]["nameGap"], 25);
        assert!(option["xAxis"].get("axisLabel").is_none());
        assert_eq!(option["xAxis"]["data"].as_array().unwrap().len(), 31);
    }

    #[test]
    fn weekday_payload_is_smoothed_area_line() {
        let option = smooth_area_option(
            &["Sunday", "Monday"],
            &[3, 4],
            PURPLE,
            PURPLE_FILL,
        );

        assert_eq!(option["series"][0]["type"], "line");
        assert_eq!(option["series"][0]["smooth"], true);
        assert_eq!(option["series"][0]["areaStyle"]["color"], PURPLE_FILL);
    }
}
