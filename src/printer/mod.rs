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
use std::io::Write;

use crate::SyncRecord;

type E = Box<dyn std::error::Error>;

/// Format a single record in sync format
///
/// Writes `record` to `conn` as five tab-separated columns followed by a
/// newline. The columns are written verbatim.
///
pub fn format_sync_line<W: Write>(
    record: &SyncRecord,
    conn: &mut W,
) -> Result<(), E> {
    let separator: char = '\t';
    let mut formatted: String = String::new();

    formatted += &record.chrom;
    formatted.push(separator);
    formatted += &record.pos;
    formatted.push(separator);
    formatted += &record.reference;
    formatted.push(separator);
    formatted += &record.male_counts;
    formatted.push(separator);
    formatted += &record.female_counts;
    formatted += "\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}
