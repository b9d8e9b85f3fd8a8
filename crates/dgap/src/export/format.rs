//! ExportFormat trait definition

use std::io::Write;

use serde::Deserialize;
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Result;
use crate::params::validate_base;
use crate::search::{Candidates, ResultTriple, SearchReport};

use super::{JsonExporter, TableExporter, TsvExporter};

/// Trait for export format implementations
pub trait ExportFormat {
    /// Lines printed before the first row, if any
    fn header(&self) -> Option<String>;

    /// Format a single result triple
    fn format_row(&self, triple: &ResultTriple) -> String;

    /// Lines printed after the last row, if any
    fn footer(&self, _count: usize, _limit_reached: bool) -> Option<String> {
        None
    }

    /// Format a whole report
    fn format_rows(&self, report: &SearchReport) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for triple in &report.triples {
            output.push_str(&self.format_row(triple));
            output.push('\n');
        }
        if let Some(footer) = self.footer(report.count(), report.limit_reached) {
            output.push_str(&footer);
            output.push('\n');
        }
        output
    }
}

/// Output format selector
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    #[default]
    Table,
    Tsv,
    Json,
}

impl Format {
    /// Build the exporter for results in `base`
    pub fn exporter(self, base: u32) -> Result<Box<dyn ExportFormat>> {
        validate_base(base)?;
        Ok(match self {
            Format::Table => Box::new(TableExporter { base }),
            Format::Tsv => Box::new(TsvExporter { base }),
            Format::Json => Box::new(JsonExporter { base }),
        })
    }
}

/// Write `report` through `exporter` into `writer`.
pub fn write_report<W: Write>(
    exporter: &dyn ExportFormat,
    report: &SearchReport,
    mut writer: W,
) -> Result<()> {
    writer.write_all(exporter.format_rows(report).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write rows as `candidates` yields them, returning the number written.
///
/// The walk stops at the first arithmetic error; rows already written
/// stay written.
pub fn write_candidates<W: Write>(
    exporter: &dyn ExportFormat,
    candidates: &mut Candidates,
    mut writer: W,
) -> Result<usize> {
    if let Some(header) = exporter.header() {
        writeln!(writer, "{}", header)?;
    }
    for triple in candidates.by_ref() {
        writeln!(writer, "{}", exporter.format_row(&triple?))?;
    }
    if let Some(footer) = exporter.footer(candidates.emitted(), candidates.limit_reached()) {
        writeln!(writer, "{}", footer)?;
    }
    writer.flush()?;
    Ok(candidates.emitted())
}
