pub mod selection;
pub mod types;

pub use selection::*;
pub use types::*;
