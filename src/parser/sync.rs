// syncnorm: Normalize allele counts in sync files by sex-specific denominators.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use crate::SyncRecord;
use crate::parser::ParseError;

/// Names of the columns read from a data line, in order.
pub const COLUMNS: [&str; 5] = ["chrom", "pos", "ref", "male_counts", "female_counts"];

/// Parse a data line from a sync file
///
/// Splits `line` on runs of whitespace and reads the first five columns by
/// position. Columns after the fifth are ignored.
///
/// Terminates with [ParseError::MissingField] if the line has fewer than
/// five columns. The count columns are not parsed here.
///
pub fn read_sync_line(
    line: &str,
) -> Result<SyncRecord, ParseError> {
    let mut records = line.split_whitespace();
    let mut next_column = |idx: usize| {
        records.next().map(|x| x.to_string()).ok_or(ParseError::MissingField { name: COLUMNS[idx] })
    };

    let chrom = next_column(0)?;
    let pos = next_column(1)?;
    let reference = next_column(2)?;
    let male_counts = next_column(3)?;
    let female_counts = next_column(4)?;

    Ok(SyncRecord { chrom, pos, reference, male_counts, female_counts })
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_sync_line_tab_separated() {
        use crate::SyncRecord;
        use super::read_sync_line;

        let expected = SyncRecord{ chrom: "chr1".to_string(), pos: "100".to_string(), reference: "A".to_string(), male_counts: "10:0:5".to_string(), female_counts: "20:4".to_string() };

        let got = read_sync_line("chr1\t100\tA\t10:0:5\t20:4\n").unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_sync_line_mixed_whitespace() {
        use crate::SyncRecord;
        use super::read_sync_line;

        let expected = SyncRecord{ chrom: "2R".to_string(), pos: "0012".to_string(), reference: "N".to_string(), male_counts: "1".to_string(), female_counts: "0".to_string() };

        let got = read_sync_line("  2R   0012 \t N\t\t1 0\r\n").unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn read_sync_line_ignores_extra_columns() {
        use super::read_sync_line;

        let got = read_sync_line("chr1 100 A 1:2 3:4 5:6 extra").unwrap();

        assert_eq!(got.female_counts, "3:4");
    }

    #[test]
    fn read_sync_line_error_if_missing_columns() {
        use super::read_sync_line;
        use crate::parser::ParseError;

        let got = read_sync_line("chr1 100 A 1:2\n").unwrap_err();
        assert_eq!(got, ParseError::MissingField { name: "female_counts" });

        let got = read_sync_line("chr1").unwrap_err();
        assert_eq!(got, ParseError::MissingField { name: "pos" });
    }
}
