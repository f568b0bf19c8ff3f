//! Page-independent feature logic: state, reducers and rules.
//!
//! Nothing in here touches the DOM, so all of it runs under native `cargo test`.

pub mod anomalies;
pub mod login;
pub mod upload;
