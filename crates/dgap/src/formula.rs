//! Exact evaluation of `x(d) = d(d-1) / (2(N-d))`.

use thiserror::Error;

use crate::arith::{ArithmeticError, Wide};

/// Reason an offset does not produce a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// `d` is outside `[1, N-1]` or the division leaves a remainder
    #[error("no integer solution for this offset")]
    NoSolution,

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Evaluate the formula for offset `d` against modulus `N`.
///
/// Returns the exact quotient, or [`FormulaError::NoSolution`] when the
/// denominator is not positive or does not divide the numerator.
pub fn calculate_x(d: Wide, modulus: Wide) -> Result<Wide, FormulaError> {
    if d.is_zero() || d >= modulus {
        return Err(FormulaError::NoSolution);
    }

    let numerator = d.checked_mul(d.checked_sub(Wide::ONE)?)?;
    let denominator = Wide::TWO.checked_mul(modulus.checked_sub(d)?)?;

    if !numerator.checked_rem(denominator)?.is_zero() {
        return Err(FormulaError::NoSolution);
    }

    Ok(numerator.checked_div(denominator)?)
}

/// Every intermediate of a single formula evaluation, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub d: Wide,
    pub modulus: Wide,
    pub numerator: Wide,
    /// `None` when `d >= N`
    pub denominator: Option<Wide>,
    pub remainder: Option<Wide>,
    /// Exact quotient, present only when the division leaves no remainder
    pub x: Option<Wide>,
}

impl Evaluation {
    /// `y = x + d` for an exact evaluation
    pub fn y(&self) -> Option<Wide> {
        self.x.and_then(|x| x.checked_add(self.d).ok())
    }
}

/// Evaluate the formula and keep the intermediate values.
pub fn evaluate(d: Wide, modulus: Wide) -> Result<Evaluation, ArithmeticError> {
    let numerator = if d.is_zero() {
        Wide::ZERO
    } else {
        d.checked_mul(d.checked_sub(Wide::ONE)?)?
    };

    let denominator = if d < modulus {
        Some(Wide::TWO.checked_mul(modulus.checked_sub(d)?)?)
    } else {
        None
    };

    let remainder = denominator
        .map(|den| numerator.checked_rem(den))
        .transpose()?;

    let x = match calculate_x(d, modulus) {
        Ok(x) => Some(x),
        Err(FormulaError::NoSolution) => None,
        Err(FormulaError::Arithmetic(e)) => return Err(e),
    };

    Ok(Evaluation {
        d,
        modulus,
        numerator,
        denominator,
        remainder,
        x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: Wide = Wide::new(100);

    #[test]
    fn test_calculate_x_exact() {
        // 25 * 24 = 600, 2 * 75 = 150
        assert_eq!(calculate_x(Wide::new(25), N), Ok(Wide::new(4)));
        assert_eq!(calculate_x(Wide::new(40), N), Ok(Wide::new(13)));
        assert_eq!(calculate_x(Wide::ONE, N), Ok(Wide::ZERO));
    }

    #[test]
    fn test_calculate_x_remainder() {
        // 10 * 9 = 90, 2 * 90 = 180
        assert_eq!(
            calculate_x(Wide::new(10), N),
            Err(FormulaError::NoSolution)
        );
        assert_eq!(
            calculate_x(Wide::new(20), N),
            Err(FormulaError::NoSolution)
        );
    }

    #[test]
    fn test_calculate_x_outside_domain() {
        assert_eq!(calculate_x(Wide::ZERO, N), Err(FormulaError::NoSolution));
        assert_eq!(calculate_x(N, N), Err(FormulaError::NoSolution));
        assert_eq!(
            calculate_x(Wide::new(150), N),
            Err(FormulaError::NoSolution)
        );
    }

    #[test]
    fn test_calculate_x_overflow() {
        let modulus = Wide::MAX;
        let d = Wide::new(1u128 << 100);
        assert!(matches!(
            calculate_x(d, modulus),
            Err(FormulaError::Arithmetic(ArithmeticError::Overflow { .. }))
        ));
    }

    #[test]
    fn test_evaluate_keeps_intermediates() {
        let eval = evaluate(Wide::new(10), N).unwrap();
        assert_eq!(eval.numerator, Wide::new(90));
        assert_eq!(eval.denominator, Some(Wide::new(180)));
        assert_eq!(eval.remainder, Some(Wide::new(90)));
        assert_eq!(eval.x, None);
        assert_eq!(eval.y(), None);

        let eval = evaluate(Wide::new(25), N).unwrap();
        assert_eq!(eval.remainder, Some(Wide::ZERO));
        assert_eq!(eval.x, Some(Wide::new(4)));
        assert_eq!(eval.y(), Some(Wide::new(29)));
    }

    #[test]
    fn test_evaluate_without_denominator() {
        let eval = evaluate(Wide::new(120), N).unwrap();
        assert_eq!(eval.numerator, Wide::new(120 * 119));
        assert_eq!(eval.denominator, None);
        assert_eq!(eval.remainder, None);
        assert_eq!(eval.x, None);
    }
}
