use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const SWIPE_DATA: Asset = asset!("/assets/swipes.csv");

// The chart runtime; loaded once alongside the app bundle.
const ECHARTS_JS: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: ECHARTS_JS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Dashboard { data_url: SWIPE_DATA.to_string() }
    }
}
