//! Bounds command implementation.

use anyhow::Result;
use dgap::{SearchParams, SearchPlan};

/// Run the bounds command
pub fn run(params: &SearchParams) -> Result<()> {
    let plan = SearchPlan::new(params)?;
    print!("{}", render(&plan));
    Ok(())
}

/// Describe the derived bounds and the pruned offset range
pub fn render(plan: &SearchPlan) -> String {
    let params = plan.params();
    let bounds = plan.bounds();

    let mut out = String::new();
    out.push_str(&format!(
        "Modulus:        N = {}^{} = {}\n",
        params.base, params.m, bounds.modulus
    ));
    out.push_str(&format!(
        "Digit range:    x in [{}, {}] ({} digit(s))\n",
        bounds.min_digit_x, bounds.max_digit_x, params.n
    ));
    if bounds.is_empty() {
        out.push_str(&format!(
            "Search range:   empty (min {} > max {})\n",
            bounds.search_min_x, bounds.search_max_x
        ));
    } else {
        out.push_str(&format!(
            "Search range:   x in [{}, {}]\n",
            bounds.search_min_x, bounds.search_max_x
        ));
    }
    match plan.range() {
        Some(range) => out.push_str(&format!(
            "Offset range:   d in [{}, {}] ({} offset(s))\n",
            range.start,
            range.end,
            range.len()
        )),
        None => out.push_str("Offset range:   none\n"),
    }
    out
}
