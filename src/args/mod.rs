//! Command-line interface: argument definition and the headless list mode.

pub mod definition;
pub mod list;

pub use definition::Args;
pub use list::{apply_query, render_table, run_list};
