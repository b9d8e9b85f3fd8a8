//! Fixed-width console table

use crate::codec::encode;
use crate::search::ResultTriple;

use super::format::ExportFormat;

const DECIMAL_WIDTH: usize = 14;
const BASE_WIDTH: usize = 11;
const OFFSET_WIDTH: usize = 6;
const RULE_WIDTH: usize = 80;

/// Console table exporter.
///
/// Shows decimal `x`, `y` and `d`; base-`b` renderings of `x` and `y` are
/// added as extra columns when `base != 10`.
#[derive(Debug, Clone, Copy)]
pub struct TableExporter {
    pub base: u32,
}

impl TableExporter {
    fn shows_base_columns(&self) -> bool {
        self.base != 10
    }
}

/// Horizontal separator line
pub fn table_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

impl ExportFormat for TableExporter {
    fn header(&self) -> Option<String> {
        let columns = if self.shows_base_columns() {
            format!(
                "{:>dw$} | {:>bw$} | {:>dw$} | {:>bw$} | {:>ow$}",
                "x (dec)",
                format!("x (base {})", self.base),
                "y (dec)",
                format!("y (base {})", self.base),
                "d",
                dw = DECIMAL_WIDTH,
                bw = BASE_WIDTH,
                ow = OFFSET_WIDTH,
            )
        } else {
            format!(
                "{:>dw$} | {:>dw$} | {:>ow$}",
                "x (dec)",
                "y (dec)",
                "d",
                dw = DECIMAL_WIDTH,
                ow = OFFSET_WIDTH,
            )
        };
        Some(format!("{}\n{}\n{}", table_rule(), columns, table_rule()))
    }

    fn format_row(&self, triple: &ResultTriple) -> String {
        if self.shows_base_columns() {
            format!(
                "{:>dw$} | {:>bw$} | {:>dw$} | {:>bw$} | {:>ow$}",
                triple.x,
                encode(triple.x, self.base),
                triple.y,
                encode(triple.y, self.base),
                triple.d,
                dw = DECIMAL_WIDTH,
                bw = BASE_WIDTH,
                ow = OFFSET_WIDTH,
            )
        } else {
            format!(
                "{:>dw$} | {:>dw$} | {:>ow$}",
                triple.x,
                triple.y,
                triple.d,
                dw = DECIMAL_WIDTH,
                ow = OFFSET_WIDTH,
            )
        }
    }

    fn footer(&self, count: usize, limit_reached: bool) -> Option<String> {
        Some(summary(count, limit_reached))
    }
}

/// Outcome line when the user filter and the digit length leave no `x`;
/// the search is skipped and no table is printed.
pub const NO_CANDIDATES: &str = "No candidates in the specified range.";

/// Human-readable outcome line(s) for a search
pub fn summary(count: usize, limit_reached: bool) -> String {
    if count == 0 {
        return "No solutions found.".to_string();
    }
    let total = format!("{} solution(s) found.", count);
    if limit_reached {
        format!("...result limit reached.\n{}", total)
    } else {
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchParams;
    use crate::arith::Wide;
    use crate::search::search;

    fn triple() -> ResultTriple {
        ResultTriple {
            x: Wide::new(13),
            y: Wide::new(53),
            d: Wide::new(40),
        }
    }

    #[test]
    fn test_table_row_decimal() {
        let row = TableExporter { base: 10 }.format_row(&triple());
        assert_eq!(row, format!("{:>14} | {:>14} | {:>6}", 13, 53, 40));
    }

    #[test]
    fn test_table_row_other_base() {
        let row = TableExporter { base: 16 }.format_row(&triple());
        let cells: Vec<&str> = row.split(" | ").map(str::trim).collect();
        assert_eq!(cells, vec!["13", "D", "53", "35", "40"]);
    }

    #[test]
    fn test_table_header_columns() {
        let header = TableExporter { base: 8 }.header().unwrap();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], table_rule());
        assert!(lines[1].contains("x (base 8)"));
        assert!(lines[1].contains("y (base 8)"));

        assert!(lines[1].contains("x (dec)"));

        let header = TableExporter { base: 10 }.header().unwrap();
        let columns = header.lines().nth(1).unwrap();
        assert!(!columns.contains("base"));
        assert_eq!(
            columns,
            format!("{:>14} | {:>14} | {:>6}", "x (dec)", "y (dec)", "d")
        );
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(4, false), "4 solution(s) found.");
        assert_eq!(
            summary(1, true),
            "...result limit reached.\n1 solution(s) found."
        );
        assert_eq!(summary(0, false), "No solutions found.");
        assert_eq!(summary(0, true), "No solutions found.");
    }

    #[test]
    fn test_format_rows_layout() {
        let report = search(&SearchParams::default()).unwrap();
        let output = TableExporter { base: 10 }.format_rows(&report);
        let lines: Vec<&str> = output.lines().collect();
        // rule, header, rule, one row, summary
        assert_eq!(lines.len(), 5);
        assert!(lines[3].trim_start().starts_with('4'));
        assert_eq!(lines[4], "1 solution(s) found.");
    }
}
