//! Rendering of analysis results to consumer formats.
//!
//! The word-cloud image, chart, and HTML table of the original application
//! are external collaborators; this module covers only the data they
//! consume: a JSON serialization of the analysis and a plain-text
//! word-count table.

mod json;
mod table;

pub use json::{to_json, JsonFormat};
pub use table::to_table;
