use dioxus::prelude::*;

use crate::components::display::AnomalyTable;
use crate::components::forms::UploadForm;
use crate::components::layout::LogoutButton;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }

        div {
            class: "dashboard-container",

            header {
                class: "dashboard-header",
                h1 {
                    class: "page-title",
                    "Attendance Dashboard"
                }
                LogoutButton {}
            }

            section {
                class: "dashboard-section",
                h2 {
                    class: "section-title",
                    "Upload Attendance Sheet"
                }
                UploadForm {}
            }

            section {
                class: "dashboard-section",
                h2 {
                    class: "section-title",
                    "Flagged Anomalies"
                }
                AnomalyTable {}
            }
        }
    }
}
