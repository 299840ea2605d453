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

//! syncnorm is a library and a command-line client for normalizing allele
//! counts stored in sync files.
//!
//! A sync file has one site per line, with five whitespace-separated columns:
//!
//! ```text
//! <chrom> <pos> <ref> <male_counts> <female_counts>
//! ```
//!
//! where the count columns are `:`-separated lists of per-allele counts, eg.
//! `12:0:4:7`. syncnorm divides every male count by a male denominator and
//! every female count by a female denominator, and writes the result as a
//! new sync file. The scaled counts are rounded half to even, with two
//! exceptions:
//!
//!   - A count of zero is always written as `0`.
//!   - A non-zero count is never written as `0`; it becomes at least `1`.
//!
//! Blank lines and lines starting with `#` are copied to the output as is.
//!
//! ## Usage
//!
//! ### Command line
//!
//! ```text
//! syncnorm -i input.sync -m 20 -f 24 -o normalized.sync
//! ```
//!
//! Input may be gzip compressed. Output is compressed if the output path ends
//! in `.gz`. Use `-` for stdin or stdout.
//!
//! ### Rust API
//!
//! The denominators are validated once by creating
//! [Denominators](params::Denominators). A [Normalizer](normalizer::Normalizer)
//! built from them maps single lines, and [normalize_from_read_to_write]
//! processes a whole stream.
//!
//! Lower level building blocks are available in:
//!   - [parser]: classifies lines and splits data lines into [SyncRecord].
//!   - [scale]: scales single counts and count columns.
//!   - [printer]: formats a [SyncRecord] as a sync line.
//!   - [io]: opens plain or gzip compressed input and output files.
//!

use std::io::BufRead;
use std::io::Write;
use std::path::Path;

pub mod io;
pub mod normalizer;
pub mod params;
pub mod parser;
pub mod printer;
pub mod scale;

use normalizer::Normalizer;
use parser::LineKind;

type E = Box<dyn std::error::Error>;

/// A data line from a sync file.
///
/// All columns are stored as the text read from the input. The count
/// columns hold the `:`-separated counts and are only parsed when scaled.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SyncRecord {
    /// Chromosome or contig name.
    pub chrom: String,
    /// Position on `chrom`.
    pub pos: String,
    /// Reference base.
    pub reference: String,
    /// Per-allele counts for males.
    pub male_counts: String,
    /// Per-allele counts for females.
    pub female_counts: String,
}

/// Number of lines of each kind seen in a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NormalizeStats {
    /// Lines with scaled counts.
    pub data_lines: usize,
    /// Lines starting with `#`, copied as is.
    pub comment_lines: usize,
    /// Empty or whitespace-only lines, copied or dropped.
    pub blank_lines: usize,
}

impl NormalizeStats {
    /// Count one line of kind `kind`.
    pub fn add(
        &mut self,
        kind: LineKind,
    ) {
        match kind {
            LineKind::Data => self.data_lines += 1,
            LineKind::Comment => self.comment_lines += 1,
            LineKind::Blank => self.blank_lines += 1,
        }
    }

    /// Number of lines seen.
    pub fn total(&self) -> usize {
        self.data_lines + self.comment_lines + self.blank_lines
    }
}

/// Error on a specific input line.
#[derive(Debug)]
pub struct LineError {
    /// 1-based line number.
    pub line_number: usize,
    /// Contents of the line without the line terminator.
    pub line: String,
    pub source: E,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}: {}: '{}'", self.line_number, self.source, self.line)
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Normalize all lines from [BufRead] and write them to [Write].
///
/// Lines are processed in input order. Processing stops at the first line
/// that can't be normalized; this is returned as a [LineError]. Anything
/// written to `conn_out` before the error is left there.
///
/// ## Usage
///
/// ```rust
/// use syncnorm::normalize_from_read_to_write;
/// use syncnorm::normalizer::Normalizer;
/// use syncnorm::params::Denominators;
/// use std::io::Cursor;
///
/// let mut input_bytes: Vec<u8> = Vec::new();
/// input_bytes.append(&mut b"# header line\n".to_vec());
/// input_bytes.append(&mut b"chr1 100 A 10:0:5 20:4\n".to_vec());
/// input_bytes.append(&mut b"chr1 101 A 1 1\n".to_vec());
/// let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);
///
/// let normalizer = Normalizer::new(Denominators::new(5.0, 2.0).unwrap());
///
/// let mut output: Vec<u8> = Vec::new();
/// let stats = normalize_from_read_to_write(&normalizer, &mut input, &mut output).unwrap();
///
/// let mut expected: Vec<u8> = Vec::new();
/// expected.append(&mut b"# header line\n".to_vec());
/// expected.append(&mut b"chr1\t100\tA\t2:0:1\t10:2\n".to_vec());
/// expected.append(&mut b"chr1\t101\tA\t1\t1\n".to_vec());
///
/// assert_eq!(output, expected);
/// assert_eq!(stats.data_lines, 2);
/// assert_eq!(stats.comment_lines, 1);
/// ```
///
pub fn normalize_from_read_to_write<R: BufRead, W: Write>(
    normalizer: &Normalizer,
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<NormalizeStats, E> {
    let mut stats = NormalizeStats::default();
    let mut line = String::new();
    let mut line_number: usize = 0;

    loop {
        line.clear();
        if conn_in.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        let kind = normalizer.normalize_line(&line, conn_out).map_err(|source| {
            LineError { line_number, line: line.trim_end_matches(['\r', '\n']).to_string(), source }
        })?;
        stats.add(kind);
    }
    conn_out.flush()?;

    Ok(stats)
}

/// Normalize the sync file at `input` and write the result to `output`.
///
/// See [io::open_input] and [io::OutputFile] for how the paths are opened.
/// `output` is only created or replaced if every line was normalized.
///
pub fn normalize_file(
    normalizer: &Normalizer,
    input: &Path,
    output: &Path,
) -> Result<NormalizeStats, E> {
    log::info!("Normalizing {} with male denominator {} and female denominator {}",
               input.display(), normalizer.denominators().male(), normalizer.denominators().female());

    let mut conn_in = io::open_input(input)?;
    let mut conn_out = io::OutputFile::create(output)?;

    let stats = normalize_from_read_to_write(normalizer, &mut conn_in, &mut conn_out)?;
    log::info!("Wrote {} data lines and {} comment lines to {}", stats.data_lines, stats.comment_lines, conn_out.path().display());
    conn_out.finish()?;

    if stats.blank_lines > 0 {
        log::info!("{} blank lines were {}", stats.blank_lines, if normalizer.is_skipping_blank() { "dropped" } else { "copied" });
    }

    Ok(stats)
}
