pub mod report;

pub use report::{truth_table, write_report, INPUTS};
