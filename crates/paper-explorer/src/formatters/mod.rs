//! Output formatting for console tables and JSON files.

mod json;
mod table;

pub use json::to_pretty_json;
pub use table::{MISSING, Presenter};
