//! Search command implementation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use dgap::{Format, NO_CANDIDATES, SearchParams, SearchPlan, summary, write_candidates};
use tracing::info;

/// Run the search command, streaming rows as they are found
pub fn run(params: &SearchParams, format: Format, output: Option<&Path>) -> Result<()> {
    run_with_stdout(params, format, output, io::stdout().lock())
}

fn run_with_stdout<W: Write>(
    params: &SearchParams,
    format: Format,
    output: Option<&Path>,
    mut stdout: W,
) -> Result<()> {
    let plan = SearchPlan::new(params)?;
    let bounds = plan.bounds();
    info!(
        "Searching base {}: {}-digit x, N = {}^{} = {}",
        params.base, params.n, params.base, params.m, bounds.modulus
    );

    // Table output on stdout is for people; everything else stays machine-readable
    let console_table = format == Format::Table && output.is_none();

    if bounds.is_empty() {
        info!(
            "Search range is empty: min x {} > max x {}",
            bounds.search_min_x, bounds.search_max_x
        );
        if console_table {
            writeln!(stdout, "{}", NO_CANDIDATES)?;
            stdout.flush()?;
        } else {
            info!("{}", NO_CANDIDATES);
        }
        return Ok(());
    }

    match plan.range() {
        Some(range) => info!(
            "Offsets d in [{}, {}] ({} candidates)",
            range.start,
            range.end,
            range.len()
        ),
        None => info!(
            "No offset can produce x in [{}, {}]",
            bounds.search_min_x, bounds.search_max_x
        ),
    }

    let exporter = format.exporter(params.base)?;
    let mut candidates = plan.candidates();

    let count = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let count = write_candidates(exporter.as_ref(), &mut candidates, BufWriter::new(file))?;
            info!("Exported {} result(s) to {}", count, path.display());
            count
        }
        None => write_candidates(exporter.as_ref(), &mut candidates, &mut stdout)?,
    };

    if !console_table {
        for line in summary(count, candidates.limit_reached()).lines() {
            info!("{}", line);
        }
    }
    info!("Tested {} offset(s)", candidates.evaluated());

    Ok(())
}
