use thiserror::Error;

use crate::arith::ArithmeticError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid base: {0} (expected 2..=36)")]
    InvalidBase(u32),

    #[error("Invalid digit count {name}={value}: must be at least 1")]
    InvalidDigitCount { name: &'static str, value: u32 },

    #[error("Values for base {base}, n={n}, m={m} exceed the supported integer range: {source}")]
    Overflow {
        base: u32,
        n: u32,
        m: u32,
        source: ArithmeticError,
    },

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    #[error("Modulus {modulus} is too large for a brute-force scan (limit {limit})")]
    RangeTooLarge { modulus: u128, limit: u128 },

    #[error("Invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error comes from the search parameters rather than
    /// from the search itself or from writing output
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidBase(_) | Error::InvalidDigitCount { .. } | Error::Overflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_configuration() {
        assert!(Error::InvalidBase(37).is_configuration());
        assert!(
            Error::InvalidDigitCount {
                name: "n",
                value: 0
            }
            .is_configuration()
        );
        assert!(
            Error::Overflow {
                base: 10,
                n: 1,
                m: 40,
                source: ArithmeticError::Overflow {
                    op: "multiplication"
                },
            }
            .is_configuration()
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!Error::Io(io_err).is_configuration());
        assert!(!Error::Arithmetic(ArithmeticError::DivisionByZero).is_configuration());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidBase(1).to_string(),
            "Invalid base: 1 (expected 2..=36)"
        );
        assert_eq!(
            Error::InvalidDigit {
                digit: 'Z',
                base: 16
            }
            .to_string(),
            "Invalid digit 'Z' for base 16"
        );
    }
}
