//! Search parameters and the bounds derived from them.
//!
//! ## Example
//!
//! ```
//! use dgap::{SearchParams, Wide};
//!
//! let params = SearchParams::builder()
//!     .base(10)
//!     .digits(2)
//!     .modulus_digits(2)
//!     .max_results(3)
//!     .build();
//! let bounds = params.derive_bounds().unwrap();
//! assert_eq!(bounds.modulus, Wide::new(100));
//! assert_eq!(bounds.search_min_x, Wide::new(10));
//! ```

use serde::Serialize;
use tracing::debug;

use crate::arith::{ArithmeticError, Wide, power};
use crate::error::{Error, Result};

/// Smallest supported base
pub const MIN_BASE: u32 = 2;
/// Largest supported base (digits `0-9A-Z`)
pub const MAX_BASE: u32 = 36;

/// Parameters of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// Numeral base, 2..=36
    pub base: u32,
    /// Digit length of `x`
    pub n: u32,
    /// Exponent of the modulus `N = base^m`
    pub m: u32,
    /// Inclusive lower filter on `x`
    pub min_x: Wide,
    /// Inclusive upper filter on `x` (`None` = unbounded)
    pub max_x: Option<Wide>,
    /// Result cap (`None` = all)
    pub max_results: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            base: 10,
            n: 1,
            m: 2,
            min_x: Wide::ZERO,
            max_x: None,
            max_results: None,
        }
    }
}

impl SearchParams {
    /// Create a new parameter builder
    pub fn builder() -> SearchParamsBuilder {
        SearchParamsBuilder::default()
    }

    /// Check the base and digit-count invariants.
    pub fn validate(&self) -> Result<()> {
        validate_base(self.base)?;
        if self.n == 0 {
            return Err(Error::InvalidDigitCount {
                name: "n",
                value: self.n,
            });
        }
        if self.m == 0 {
            return Err(Error::InvalidDigitCount {
                name: "m",
                value: self.m,
            });
        }
        Ok(())
    }

    /// Validate and compute the modulus, digit bounds and the effective
    /// `x` interval.
    pub fn derive_bounds(&self) -> Result<DerivedBounds> {
        self.validate()?;

        let overflow = |source: ArithmeticError| Error::Overflow {
            base: self.base,
            n: self.n,
            m: self.m,
            source,
        };

        let base = Wide::from(self.base);
        let modulus = power(base, self.m).map_err(overflow)?;
        let min_digit_x = power(base, self.n - 1).map_err(overflow)?;
        let max_digit_x = power(base, self.n)
            .and_then(|p| p.checked_sub(Wide::ONE))
            .map_err(overflow)?;

        let search_min_x = self.min_x.max(min_digit_x);
        let search_max_x = match self.max_x {
            Some(max_x) => max_x.min(max_digit_x),
            None => max_digit_x,
        };

        let bounds = DerivedBounds {
            modulus,
            min_digit_x,
            max_digit_x,
            search_min_x,
            search_max_x,
        };
        debug!(
            "Derived bounds: N={}, digits x in [{}, {}], search x in [{}, {}]",
            bounds.modulus,
            bounds.min_digit_x,
            bounds.max_digit_x,
            bounds.search_min_x,
            bounds.search_max_x
        );
        Ok(bounds)
    }
}

/// Check that `base` lies in 2..=36
pub fn validate_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(Error::InvalidBase(base))
    }
}

/// Builder for SearchParams
#[derive(Debug, Clone, Default)]
pub struct SearchParamsBuilder {
    base: Option<u32>,
    n: Option<u32>,
    m: Option<u32>,
    min_x: Option<Wide>,
    max_x: Option<Wide>,
    max_results: Option<usize>,
}

impl SearchParamsBuilder {
    pub fn base(mut self, base: u32) -> Self {
        self.base = Some(base);
        self
    }

    /// Digit length of `x`
    pub fn digits(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    /// Exponent `m` of the modulus
    pub fn modulus_digits(mut self, m: u32) -> Self {
        self.m = Some(m);
        self
    }

    pub fn min_x<W: Into<Wide>>(mut self, min_x: W) -> Self {
        self.min_x = Some(min_x.into());
        self
    }

    pub fn max_x<W: Into<Wide>>(mut self, max_x: W) -> Self {
        self.max_x = Some(max_x.into());
        self
    }

    pub fn max_results(mut self, limit: usize) -> Self {
        self.max_results = Some(limit);
        self
    }

    /// Build the parameters. Validation happens when bounds are derived.
    pub fn build(self) -> SearchParams {
        let default = SearchParams::default();
        SearchParams {
            base: self.base.unwrap_or(default.base),
            n: self.n.unwrap_or(default.n),
            m: self.m.unwrap_or(default.m),
            min_x: self.min_x.unwrap_or(default.min_x),
            max_x: self.max_x.or(default.max_x),
            max_results: self.max_results.or(default.max_results),
        }
    }
}

/// Bounds computed once per search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedBounds {
    /// `N = base^m`
    pub modulus: Wide,
    /// `base^(n-1)`
    pub min_digit_x: Wide,
    /// `base^n - 1`
    pub max_digit_x: Wide,
    /// `max(min_x, min_digit_x)`
    pub search_min_x: Wide,
    /// `min(max_x, max_digit_x)`
    pub search_max_x: Wide,
}

impl DerivedBounds {
    /// No `x` satisfies both the digit length and the user filter
    pub fn is_empty(&self) -> bool {
        self.search_min_x > self.search_max_x
    }

    /// Check that the largest products the search forms still fit and
    /// return the largest `x` worth solving for.
    ///
    /// No offset yields more than `(N-1)(N-2)/2` (at `d = N-1`), so
    /// `search_max_x` is capped there before forming `2·max_x·(N-1)`.
    pub fn check_headroom(&self) -> std::result::Result<Wide, ArithmeticError> {
        let top = self.modulus.checked_sub(Wide::ONE)?;
        let below = top.checked_sub(Wide::ONE).unwrap_or(Wide::ZERO);
        let reachable = top.checked_mul(below)?.checked_div(Wide::TWO)?;
        let max_x = self.search_max_x.min(reachable);
        Wide::TWO.checked_mul(max_x)?.checked_mul(top)?;
        Ok(max_x)
    }
}
