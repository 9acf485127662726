// src/process/mod.rs

pub mod project;
pub mod raw_table;

pub use project::{project_rows, Projection};
pub use raw_table::RawTable;
