//! Example anomaly rows shown on the dashboard.
//!
//! The table is display-only: the rows are fixed and rendered once per page load.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyType {
    /// A suspicious mark (single letter, dot) where a signature should be
    ProxySignature,
    /// The same signature found more than once on one sheet
    DuplicateEntry,
}

impl AnomalyType {
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyType::ProxySignature => "Suspected proxy signature",
            AnomalyType::DuplicateEntry => "Duplicate entry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalyRow {
    pub id: u32,
    pub subject_code: String,
    /// ISO date, YYYY-MM-DD
    pub date: String,
    pub anomaly_type: AnomalyType,
}

impl AnomalyRow {
    fn example(id: u32, subject_code: &str, date: &str, anomaly_type: AnomalyType) -> Self {
        Self {
            id,
            subject_code: subject_code.to_string(),
            date: date.to_string(),
            anomaly_type,
        }
    }
}

/// Rows for the dashboard table, in display order.
///
/// Builds a fresh list on every call so each page load starts from the same data.
pub fn example_anomalies() -> Vec<AnomalyRow> {
    vec![
        AnomalyRow::example(1, "CS405", "2025-09-18", AnomalyType::ProxySignature),
        AnomalyRow::example(2, "CS405", "2025-09-19", AnomalyType::DuplicateEntry),
    ]
}
