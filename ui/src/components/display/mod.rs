pub mod anomaly_table;
pub mod selected_file_display;

pub use anomaly_table::*;
pub use selected_file_display::*;
