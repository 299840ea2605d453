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

//! Normalizer for single lines of a sync file.
//!
//! [Normalizer] holds the [Denominators] for a run and maps one input line
//! to the line written to the output. Lines are independent of each other,
//! so the same Normalizer can be used for any number of lines.
//!
//! ## Usage
//!
//! ```rust
//! use syncnorm::normalizer::Normalizer;
//! use syncnorm::params::Denominators;
//!
//! let normalizer = Normalizer::new(Denominators::new(5.0, 2.0).unwrap());
//!
//! let mut output: Vec<u8> = Vec::new();
//! normalizer.normalize_line("chr1 100 A 10:0:5 20:4\n", &mut output).unwrap();
//! normalizer.normalize_line("# comment\n", &mut output).unwrap();
//!
//! assert_eq!(output, b"chr1\t100\tA\t2:0:1\t10:2\n# comment\n".to_vec());
//! ```
//!

use std::io::Write;

use crate::SyncRecord;
use crate::params::Denominators;
use crate::params::Sex;
use crate::parser::LineKind;
use crate::parser::classify_line;
use crate::parser::sync::read_sync_line;
use crate::printer::format_sync_line;
use crate::scale::scale_field;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    denominators: Denominators,
    skip_blank: bool,
}

impl Normalizer {
    pub fn new(
        denominators: Denominators,
    ) -> Self {
        Self { denominators, skip_blank: false }
    }

    /// Drop blank lines from the output instead of copying them.
    pub fn skip_blank(
        mut self,
        skip_blank: bool,
    ) -> Self {
        self.skip_blank = skip_blank;
        self
    }

    pub fn is_skipping_blank(&self) -> bool {
        self.skip_blank
    }

    pub fn denominators(&self) -> &Denominators {
        &self.denominators
    }

    /// Scale the count columns of `record`.
    ///
    /// Returns a new record with the male counts divided by the male
    /// denominator and the female counts by the female denominator, see
    /// [scale_count](crate::scale::scale_count) for the rounding.
    pub fn normalize_record(
        &self,
        record: &SyncRecord,
    ) -> Result<SyncRecord, E> {
        let male_counts = scale_field(&record.male_counts, self.denominators.get(Sex::Male))?;
        let female_counts = scale_field(&record.female_counts, self.denominators.get(Sex::Female))?;

        Ok(SyncRecord {
            chrom: record.chrom.clone(),
            pos: record.pos.clone(),
            reference: record.reference.clone(),
            male_counts,
            female_counts,
        })
    }

    /// Normalize one line and write the result to `conn`.
    ///
    /// Comment lines and blank lines are written unchanged, including their
    /// line terminator. With [skip_blank](Normalizer::skip_blank) set, blank
    /// lines are not written at all. Data lines are written in sync format
    /// with scaled counts and a `\n` terminator.
    ///
    /// Returns the [LineKind] of `line`.
    ///
    /// Terminates with a [ParseError](crate::parser::ParseError) if a data
    /// line has fewer than five columns or a count is not a number. Nothing
    /// is written to `conn` in that case.
    pub fn normalize_line<W: Write>(
        &self,
        line: &str,
        conn: &mut W,
    ) -> Result<LineKind, E> {
        let kind = classify_line(line);
        match kind {
            LineKind::Blank => {
                if !self.skip_blank {
                    conn.write_all(line.as_bytes())?;
                }
            },
            LineKind::Comment => {
                conn.write_all(line.as_bytes())?;
            },
            LineKind::Data => {
                let record = read_sync_line(line)?;
                let scaled = self.normalize_record(&record)?;
                format_sync_line(&scaled, conn)?;
            },
        }
        Ok(kind)
    }
}
