//! Offset bound solver.
//!
//! For a fixed modulus `N` and target `t ≥ 0`:
//!
//! ```text
//!   f(d) = d(d-1)          non-decreasing on [1, N-1]
//!   g(d) = 2·t·(N-d)       non-increasing on [1, N-1]
//! ```
//!
//! so `f(d) ≥ g(d)` is false up to some offset and true afterwards. Both
//! searches compare the two sides with multiplications only. The quotient
//! `f/g` is not an integer for most offsets, so inverting the division
//! would lose the exact boundary.

use serde::Serialize;
use tracing::{debug, trace};

use crate::arith::{ArithmeticError, Wide};
use crate::error::Result;

/// Inclusive range of offsets `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffsetRange {
    pub start: Wide,
    pub end: Wide,
}

impl OffsetRange {
    pub fn contains(&self, d: Wide) -> bool {
        self.start <= d && d <= self.end
    }

    /// Number of offsets in the range
    pub fn len(&self) -> Wide {
        // start <= end holds for every constructed range
        self.end
            .checked_sub(self.start)
            .and_then(|w| w.checked_add(Wide::ONE))
            .unwrap_or(Wide::ZERO)
    }
}

/// `d(d-1)`
fn lhs(d: Wide) -> std::result::Result<Wide, ArithmeticError> {
    d.checked_mul(d.checked_sub(Wide::ONE)?)
}

/// `2·t·(N-d)`
fn rhs(modulus: Wide, target_x: Wide, d: Wide) -> std::result::Result<Wide, ArithmeticError> {
    Wide::TWO
        .checked_mul(target_x)?
        .checked_mul(modulus.checked_sub(d)?)
}

fn midpoint(low: Wide, high: Wide) -> std::result::Result<Wide, ArithmeticError> {
    low.checked_add(high.checked_sub(low)?.checked_div(Wide::TWO)?)
}

/// Smallest `d` in `[1, N-1]` with `d(d-1) ≥ 2·t·(N-d)`, i.e. the first
/// offset whose formula value reaches `target_x`.
pub fn find_lower_bound_d(modulus: Wide, target_x: Wide) -> Result<Option<Wide>> {
    if modulus <= Wide::ONE {
        return Ok(None);
    }

    let mut low = Wide::ONE;
    let mut high = modulus.checked_sub(Wide::ONE)?;
    let mut answer = None;

    while low <= high {
        let mid = midpoint(low, high)?;
        if lhs(mid)? >= rhs(modulus, target_x, mid)? {
            answer = Some(mid);
            // mid >= 1, so this never wraps; mid == 1 ends the loop
            high = mid.checked_sub(Wide::ONE)?;
        } else {
            low = mid.checked_add(Wide::ONE)?;
        }
        trace!(%low, %high, "lower bound step");
    }

    Ok(answer)
}

/// Largest `d` in `[1, N-1]` with `d(d-1) ≤ 2·t·(N-d)`, i.e. the last
/// offset whose formula value does not exceed `target_x`.
pub fn find_upper_bound_d(modulus: Wide, target_x: Wide) -> Result<Option<Wide>> {
    if modulus <= Wide::ONE {
        return Ok(None);
    }

    let mut low = Wide::ONE;
    let mut high = modulus.checked_sub(Wide::ONE)?;
    let mut answer = None;

    while low <= high {
        let mid = midpoint(low, high)?;
        if lhs(mid)? <= rhs(modulus, target_x, mid)? {
            answer = Some(mid);
            low = mid.checked_add(Wide::ONE)?;
        } else {
            high = mid.checked_sub(Wide::ONE)?;
        }
        trace!(%low, %high, "upper bound step");
    }

    Ok(answer)
}

/// Prune the offsets worth enumerating for `x ∈ [min_x, max_x]`.
///
/// `min_x` and `max_x` must already be intersected with the digit-length
/// bounds. Returns `None` when no offset can qualify.
pub fn offset_range(modulus: Wide, min_x: Wide, max_x: Wide) -> Result<Option<OffsetRange>> {
    let Some(start) = find_lower_bound_d(modulus, min_x)? else {
        debug!(%modulus, %min_x, "no offset reaches the minimum x");
        return Ok(None);
    };
    let Some(end) = find_upper_bound_d(modulus, max_x)? else {
        debug!(%modulus, %max_x, "every offset exceeds the maximum x");
        return Ok(None);
    };

    let start = start.max(Wide::ONE);
    let end = end.min(modulus.checked_sub(Wide::ONE)?);

    if start > end {
        debug!(%start, %end, "offset range is empty");
        return Ok(None);
    }

    debug!(%start, %end, "offset range");
    Ok(Some(OffsetRange { start, end }))
}
