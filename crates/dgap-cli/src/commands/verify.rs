//! Verify command implementation.

use anyhow::{Result, bail};
use dgap::{SearchParams, brute_force, digit_count, search};
use tracing::{info, warn};

/// Outcome of a cross-check between the bounded search and a full scan
#[derive(Debug, PartialEq, Eq)]
pub struct Verification {
    pub solutions: usize,
    pub bounded_evaluated: u128,
    pub full_evaluated: u128,
}

/// Compare the bounded search with a brute-force scan and re-check each
/// triple against the identity and the digit-length constraint.
pub fn verify(params: &SearchParams) -> Result<Verification> {
    let bounded = search(params)?;
    let full = brute_force(params)?;

    if bounded.triples != full.triples {
        let missing = full
            .triples
            .iter()
            .filter(|t| !bounded.triples.contains(t))
            .count();
        let extra = bounded
            .triples
            .iter()
            .filter(|t| !full.triples.contains(t))
            .count();
        warn!("{} missing, {} unexpected triple(s)", missing, extra);
        bail!(
            "Bounded search found {} solution(s), brute force found {}",
            bounded.count(),
            full.count()
        );
    }

    let modulus = bounded.bounds.modulus;
    for triple in &bounded.triples {
        if !triple.satisfies(modulus) {
            bail!("Triple {:?} does not satisfy x·2(N-d) = d(d-1)", triple);
        }
        if triple.y >= modulus {
            bail!("Triple {:?} has y >= N = {}", triple, modulus);
        }
        let digits = digit_count(triple.x, params.base)?;
        if digits != params.n {
            bail!(
                "Triple {:?} has {} base-{} digit(s), expected {}",
                triple,
                digits,
                params.base,
                params.n
            );
        }
    }

    Ok(Verification {
        solutions: bounded.count(),
        bounded_evaluated: bounded.evaluated,
        full_evaluated: full.evaluated,
    })
}

/// Run the verify command
pub fn run(params: &SearchParams) -> Result<()> {
    let verification = verify(params)?;
    info!(
        "Bounded search tested {} of {} offset(s)",
        verification.bounded_evaluated, verification.full_evaluated
    );
    println!(
        "OK: bounded search matches brute force ({} solution(s))",
        verification.solutions
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_matches() {
        let params = SearchParams::builder().digits(2).modulus_digits(3).build();
        let verification = verify(&params).unwrap();
        // (78, 403, 325)
        assert_eq!(verification.solutions, 1);
        assert!(verification.bounded_evaluated < verification.full_evaluated);
        assert_eq!(verification.full_evaluated, 999);
    }

    #[test]
    fn test_verify_base_three() {
        let params = SearchParams::builder()
            .base(3)
            .digits(2)
            .modulus_digits(5)
            .build();
        assert!(verify(&params).is_ok());
    }

    #[test]
    fn test_verify_refuses_huge_modulus() {
        let params = SearchParams::builder().digits(1).modulus_digits(12).build();
        assert!(verify(&params).is_err());
    }
}
