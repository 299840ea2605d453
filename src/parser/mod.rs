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

//! Parsing of plain text sync lines.
//!
//! A line is first classified with [classify_line]. Blank and comment lines
//! are never parsed; data lines are split into a [SyncRecord](crate::SyncRecord)
//! with [read_sync_line](sync::read_sync_line).
//!
//! ## Usage
//!
//! ```rust
//! use syncnorm::parser::{classify_line, LineKind};
//! use syncnorm::parser::sync::read_sync_line;
//!
//! assert_eq!(classify_line("# header\n"), LineKind::Comment);
//! assert_eq!(classify_line("  \n"), LineKind::Blank);
//!
//! let line = "2L\t5002\tT\t0:7:0:0\t0:9:1:0\n";
//! assert_eq!(classify_line(line), LineKind::Data);
//!
//! let record = read_sync_line(line).unwrap();
//! assert_eq!(record.chrom, "2L");
//! assert_eq!(record.female_counts, "0:9:1:0");
//! ```
//!

pub mod sync;

/// Marks a line that is copied to the output as is.
pub const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Data line ended before the named column.
    MissingField { name: &'static str },
    /// Count that is not a finite number.
    InvalidCount { token: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseError::MissingField { name } => write!(f, "missing column `{}`", name),
            ParseError::InvalidCount { token } => write!(f, "count '{}' is not a number", token),
        }
    }
}

impl std::error::Error for ParseError {}

/// Kinds of lines in a sync file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// First non-whitespace character is [COMMENT_MARKER].
    Comment,
    /// Anything else.
    Data,
}

pub fn classify_line(
    line: &str,
) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(COMMENT_MARKER) {
        LineKind::Comment
    } else {
        LineKind::Data
    }
}
