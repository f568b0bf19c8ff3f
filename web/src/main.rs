use dioxus::prelude::*;
use rollcall_ui::{AppConfig, DashboardPage, LoginPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Read once per page load; both pages navigate with full reloads
    use_context_provider(AppConfig::load);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Attendance Anomaly Checker" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginPage {}
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        DashboardPage {}
    }
}
