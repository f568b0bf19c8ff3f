//! Shared UI for the attendance anomaly checker: the login page and the dashboard.

pub mod app;
pub use app::{DashboardPage, LoginPage};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use services::AppConfig;
