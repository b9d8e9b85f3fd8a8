//! Interactive command implementation.

use std::io::{self, Write};

use anyhow::Result;
use dgap::Format;

use crate::prompter::Prompter;

/// Prompt for the parameters on stdin, then run the search
pub fn run(format: Format) -> Result<()> {
    let stdin = io::stdin();
    let params = Prompter::new(stdin.lock(), io::stdout()).collect_params()?;

    println!();
    println!(
        "Base: {}, x digits: {}, y digits: {}",
        params.base, params.n, params.m
    );
    io::stdout().flush()?;

    super::search::run(&params, format, None)
}
