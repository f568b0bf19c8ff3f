use dioxus::prelude::*;

use crate::features::anomalies::example_anomalies;
use crate::utils::dom::ANOMALY_TABLE_BODY_ID;

/// Fixed example anomalies, one row per record in list order
#[component]
pub fn AnomalyTable() -> Element {
    let rows = use_hook(example_anomalies);

    rsx! {
        table {
            class: "anomaly-table",
            thead {
                tr {
                    th { "ID" }
                    th { "Subject Code" }
                    th { "Date" }
                    th { "Anomaly Type" }
                }
            }
            tbody {
                id: ANOMALY_TABLE_BODY_ID,
                for row in rows {
                    tr {
                        key: "{row.id}",
                        td { "{row.id}" }
                        td { "{row.subject_code}" }
                        td { "{row.date}" }
                        td { {row.anomaly_type.label()} }
                    }
                }
            }
        }
    }
}
