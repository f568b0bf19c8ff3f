//! Application configuration.
//!
//! Defaults cover everything; a host page may override them with an inline JSON
//! block (see [`AppConfig::load`]).

pub mod app_config;

pub use app_config::*;
