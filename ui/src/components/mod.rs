//! User Interface Components
//!
//! Reusable Dioxus components for the two pages:
//!
//! - **forms**: the login form and the attendance sheet upload form
//! - **display**: the anomaly table and the selected-file line
//! - **inputs**: text inputs bound to reducer state
//! - **layout**: page chrome such as the logout control

pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
