//! # dgap
//!
//! Exhaustive search for integer triples `(x, y, d)` with `y = x + d` and
//!
//! ```text
//!   x = d(d-1) / (2(N-d)),   N = b^m
//! ```
//!
//! where `x` has exactly `n` digits in base `b` and `y < N`.
//!
//! This crate provides:
//! - Checked 128-bit arithmetic and fast exponentiation ([`arith`])
//! - The exact-division test for a single offset ([`formula`])
//! - Binary-search pruning of the offset range ([`bounds`])
//! - Lazy candidate enumeration and collected reports ([`search`])
//! - Base conversion and table / TSV / JSON rendering ([`codec`], [`export`])

pub mod arith;
pub mod bounds;
pub mod codec;
pub mod error;
pub mod export;
pub mod formula;
pub mod params;
pub mod prelude;
pub mod search;

pub use arith::{ArithmeticError, Wide, power};
pub use bounds::{OffsetRange, find_lower_bound_d, find_upper_bound_d, offset_range};
pub use codec::{digit_count, parse_in_base, to_base_string};
pub use error::{Error, Result};
pub use export::{
    ExportFormat, Format, JsonExporter, NO_CANDIDATES, TableExporter, TsvExporter, summary,
    write_candidates, write_report,
};
pub use formula::{Evaluation, FormulaError, calculate_x, evaluate};
pub use params::{DerivedBounds, MAX_BASE, MIN_BASE, SearchParams, SearchParamsBuilder};
pub use search::{
    BRUTE_FORCE_LIMIT, Candidates, ResultTriple, SearchPlan, SearchReport, brute_force, search,
};
