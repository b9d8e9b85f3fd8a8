//! TSV export format implementation

use crate::codec::encode;
use crate::search::ResultTriple;

use super::format::ExportFormat;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy)]
pub struct TsvExporter {
    pub base: u32,
}

impl ExportFormat for TsvExporter {
    fn header(&self) -> Option<String> {
        Some(format_tsv_header(self.base))
    }

    fn format_row(&self, triple: &ResultTriple) -> String {
        format_tsv_row(triple, self.base)
    }
}

/// Generate TSV header; base-`b` columns are added when `base != 10`
pub fn format_tsv_header(base: u32) -> String {
    let mut columns = vec!["x", "y", "d"];
    if base != 10 {
        columns.extend(["x_base", "y_base"]);
    }
    columns.join("\t")
}

/// Generate a TSV row matching [`format_tsv_header`]
pub fn format_tsv_row(triple: &ResultTriple, base: u32) -> String {
    let mut values = vec![
        triple.x.to_string(),
        triple.y.to_string(),
        triple.d.to_string(),
    ];
    if base != 10 {
        values.push(encode(triple.x, base));
        values.push(encode(triple.y, base));
    }
    values.join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Wide;

    fn triple() -> ResultTriple {
        ResultTriple {
            x: Wide::new(13),
            y: Wide::new(53),
            d: Wide::new(40),
        }
    }

    #[test]
    fn test_format_tsv_header() {
        assert_eq!(format_tsv_header(10), "x\ty\td");
        assert_eq!(format_tsv_header(16), "x\ty\td\tx_base\ty_base");
    }

    #[test]
    fn test_format_tsv_row() {
        assert_eq!(format_tsv_row(&triple(), 10), "13\t53\t40");
        assert_eq!(format_tsv_row(&triple(), 16), "13\t53\t40\tD\t35");
    }

    #[test]
    fn test_tsv_row_matches_header_width() {
        for base in [2, 10, 36] {
            let header = format_tsv_header(base);
            let row = format_tsv_row(&triple(), base);
            assert_eq!(header.split('\t').count(), row.split('\t').count());
        }
    }
}
