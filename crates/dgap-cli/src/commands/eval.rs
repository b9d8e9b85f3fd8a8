//! Eval command implementation.

use anyhow::Result;
use dgap::{Evaluation, SearchParams, Wide, evaluate, to_base_string};

/// Run the eval command
pub fn run(base: u32, modulus_digits: u32, offset: Wide) -> Result<()> {
    let evaluation = evaluate(offset, modulus(base, modulus_digits)?)?;
    print!("{}", render(&evaluation, base)?);
    Ok(())
}

/// `N = base^m`, validated the same way a search validates it
fn modulus(base: u32, modulus_digits: u32) -> dgap::Result<Wide> {
    let params = SearchParams::builder()
        .base(base)
        .modulus_digits(modulus_digits)
        .build();
    Ok(params.derive_bounds()?.modulus)
}

/// Format every intermediate of the evaluation
pub fn render(eval: &Evaluation, base: u32) -> Result<String> {
    let show = |value: Wide| -> Result<String> {
        if base == 10 {
            Ok(value.to_string())
        } else {
            Ok(format!("{} ({})", value, to_base_string(value, base)?))
        }
    };
    let or_dash = |value: Option<Wide>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

    let mut out = String::new();
    out.push_str(&format!("N:           {}\n", show(eval.modulus)?));
    out.push_str(&format!("d:           {}\n", show(eval.d)?));
    out.push_str(&format!("d(d-1):      {}\n", eval.numerator));
    out.push_str(&format!("2(N-d):      {}\n", or_dash(eval.denominator)));
    out.push_str(&format!("Remainder:   {}\n", or_dash(eval.remainder)));
    match (eval.x, eval.y()) {
        (Some(x), Some(y)) => {
            out.push_str(&format!("x:           {}\n", show(x)?));
            let fits = if y < eval.modulus { "< N" } else { ">= N" };
            out.push_str(&format!("y:           {} [{}]\n", show(y)?, fits));
        }
        _ => out.push_str("x:           no integer solution\n"),
    }
    Ok(out)
}
