//! Candidate enumeration over the pruned offset range.

use std::iter::FusedIterator;

use serde::Serialize;
use tracing::{debug, info};

use crate::arith::Wide;
use crate::bounds::{OffsetRange, offset_range};
use crate::error::{Error, Result};
use crate::formula::{FormulaError, calculate_x};
use crate::params::{DerivedBounds, SearchParams};

/// Largest modulus [`brute_force`] agrees to scan
pub const BRUTE_FORCE_LIMIT: u128 = 10_000_000;

/// An accepted solution: `y = x + d`, `x = d(d-1) / (2(N-d))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultTriple {
    pub x: Wide,
    pub y: Wide,
    pub d: Wide,
}

impl ResultTriple {
    /// Re-check the identity with multiplications only:
    /// `y - x == d` and `x·2·(N-d) == d(d-1)`.
    pub fn satisfies(&self, modulus: Wide) -> bool {
        let check = || -> std::result::Result<bool, crate::arith::ArithmeticError> {
            let gap = self.y.checked_sub(self.x)?;
            let lhs = self
                .x
                .checked_mul(Wide::TWO)?
                .checked_mul(modulus.checked_sub(self.d)?)?;
            let rhs = self.d.checked_mul(self.d.checked_sub(Wide::ONE)?)?;
            Ok(gap == self.d && lhs == rhs)
        };
        check().unwrap_or(false)
    }
}

/// Lazy walk over `[start, end]` in increasing `d`.
///
/// Yields accepted triples, stops after `max_results` of them, and stops
/// for good after the first arithmetic error.
#[derive(Debug, Clone)]
pub struct Candidates {
    modulus: Wide,
    min_x: Wide,
    max_x: Wide,
    next: Option<Wide>,
    end: Wide,
    remaining: Option<usize>,
    evaluated: u128,
    emitted: usize,
    limit_reached: bool,
}

impl Candidates {
    /// Enumerate `range` (or nothing, for `None`) under `bounds`.
    pub fn new(
        bounds: &DerivedBounds,
        range: Option<OffsetRange>,
        max_results: Option<usize>,
    ) -> Self {
        let mut candidates = Self {
            modulus: bounds.modulus,
            min_x: bounds.search_min_x,
            max_x: bounds.search_max_x,
            next: range.map(|r| r.start),
            end: range.map_or(Wide::ZERO, |r| r.end),
            remaining: max_results,
            evaluated: 0,
            emitted: 0,
            limit_reached: false,
        };
        if max_results == Some(0) {
            candidates.next = None;
            candidates.limit_reached = true;
        }
        candidates
    }

    /// Offsets passed to the exact-division test so far
    pub fn evaluated(&self) -> u128 {
        self.evaluated
    }

    /// Triples yielded so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether the result cap ended the walk
    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    fn accepts(&self, x: Wide, y: Wide) -> bool {
        x >= self.min_x && x <= self.max_x && y < self.modulus
    }
}

impl Iterator for Candidates {
    type Item = Result<ResultTriple>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let d = self.next?;
            self.next = if d < self.end {
                d.checked_add(Wide::ONE).ok()
            } else {
                None
            };

            self.evaluated += 1;
            let x = match calculate_x(d, self.modulus) {
                Ok(x) => x,
                Err(FormulaError::NoSolution) => continue,
                Err(FormulaError::Arithmetic(e)) => {
                    self.next = None;
                    return Some(Err(Error::Arithmetic(e)));
                }
            };
            let y = match x.checked_add(d) {
                Ok(y) => y,
                Err(e) => {
                    self.next = None;
                    return Some(Err(Error::Arithmetic(e)));
                }
            };

            if !self.accepts(x, y) {
                continue;
            }

            self.emitted += 1;
            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
                if *remaining == 0 {
                    self.limit_reached = true;
                    self.next = None;
                }
            }
            return Some(Ok(ResultTriple { x, y, d }));
        }
    }
}

impl FusedIterator for Candidates {}

/// Validated parameters with their bounds and pruned offset range
#[derive(Debug, Clone)]
pub struct SearchPlan {
    params: SearchParams,
    bounds: DerivedBounds,
    range: Option<OffsetRange>,
}

impl SearchPlan {
    /// Validate `params`, derive bounds, and solve the offset range.
    ///
    /// An empty `x` interval skips the bound solver entirely. Otherwise the
    /// largest products are checked up front so an oversized modulus fails
    /// here rather than partway through the walk, and `x` values no offset
    /// can produce are dropped from the solver's upper target.
    pub fn new(params: &SearchParams) -> Result<Self> {
        let bounds = params.derive_bounds()?;

        let range = if bounds.is_empty() {
            debug!(
                "Search range is empty: min x {} > max x {}",
                bounds.search_min_x, bounds.search_max_x
            );
            None
        } else {
            let max_x = bounds.check_headroom().map_err(|source| Error::Overflow {
                base: params.base,
                n: params.n,
                m: params.m,
                source,
            })?;
            if bounds.search_min_x > max_x {
                debug!(
                    "No offset reaches min x {}: largest reachable x is {}",
                    bounds.search_min_x, max_x
                );
                None
            } else {
                offset_range(bounds.modulus, bounds.search_min_x, max_x)?
            }
        };

        Ok(Self {
            params: params.clone(),
            bounds,
            range,
        })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn bounds(&self) -> &DerivedBounds {
        &self.bounds
    }

    /// Pruned offsets, `None` when nothing can qualify
    pub fn range(&self) -> Option<OffsetRange> {
        self.range
    }

    pub fn candidates(&self) -> Candidates {
        Candidates::new(&self.bounds, self.range, self.params.max_results)
    }
}

/// Collected outcome of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub params: SearchParams,
    pub bounds: DerivedBounds,
    pub range: Option<OffsetRange>,
    pub triples: Vec<ResultTriple>,
    pub limit_reached: bool,
    pub evaluated: u128,
}

impl SearchReport {
    pub fn count(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn collect(
        params: &SearchParams,
        bounds: DerivedBounds,
        range: Option<OffsetRange>,
    ) -> Result<Self> {
        let mut candidates = Candidates::new(&bounds, range, params.max_results);
        let triples = candidates.by_ref().collect::<Result<Vec<_>>>()?;
        Ok(Self {
            params: params.clone(),
            bounds,
            range,
            triples,
            limit_reached: candidates.limit_reached(),
            evaluated: candidates.evaluated(),
        })
    }
}

/// Run the bounded search to completion.
pub fn search(params: &SearchParams) -> Result<SearchReport> {
    let plan = SearchPlan::new(params)?;
    let report = SearchReport::collect(params, plan.bounds, plan.range)?;
    info!(
        "Found {} solution(s) after testing {} offset(s)",
        report.count(),
        report.evaluated
    );
    Ok(report)
}

/// Scan every offset in `[1, N-1]` with the same acceptance rule.
///
/// Used to cross-check the bound solver; refuses moduli above
/// [`BRUTE_FORCE_LIMIT`].
pub fn brute_force(params: &SearchParams) -> Result<SearchReport> {
    let bounds = params.derive_bounds()?;
    if bounds.modulus.get() > BRUTE_FORCE_LIMIT {
        return Err(Error::RangeTooLarge {
            modulus: bounds.modulus.get(),
            limit: BRUTE_FORCE_LIMIT,
        });
    }

    let range = if bounds.is_empty() || bounds.modulus <= Wide::ONE {
        None
    } else {
        Some(OffsetRange {
            start: Wide::ONE,
            end: bounds.modulus.checked_sub(Wide::ONE)?,
        })
    };

    let report = SearchReport::collect(params, bounds, range)?;
    debug!(
        "Brute force found {} solution(s) over {} offset(s)",
        report.count(),
        report.evaluated
    );
    Ok(report)
}
