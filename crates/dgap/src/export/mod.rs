//! Rendering of search results.
//!
//! - `table`: fixed-width console table with decimal and base-`b` columns
//! - `tsv`: tab-separated values
//! - `json`: one JSON object per line (NDJSON)

mod format;
mod json;
mod table;
mod tsv;

pub use format::*;
pub use json::*;
pub use table::*;
pub use tsv::*;
