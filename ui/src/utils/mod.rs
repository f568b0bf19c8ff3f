//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging
//! - **css**: class names for stateful elements
//! - **dom**: element ids and direct DOM access
//! - **navigation**: full-page redirects between login and dashboard

pub mod console_macros;
pub mod css;
pub mod dom;
pub mod navigation;

pub use css::*;
pub use navigation::{redirect, Destination};
