//! Prelude module for convenient imports
//!
//! ```
//! use dgap::prelude::*;
//!
//! let report = search(&SearchParams::default()).unwrap();
//! assert_eq!(report.count(), 1);
//! ```

// Parameters and results
pub use crate::params::{SearchParams, SearchParamsBuilder};
pub use crate::search::{ResultTriple, SearchPlan, SearchReport, search};

// Arithmetic
pub use crate::arith::Wide;

// Error handling
pub use crate::error::{Error, Result};

// Output
pub use crate::export::{ExportFormat, Format};
