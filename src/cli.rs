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
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version)]
#[command(about = "Normalize allele frequencies")]
pub struct Cli {
    // Input sync file
    #[arg(short = 'i', long = "input", required = true, help = "Input sync file, - for stdin")]
    pub input_file: PathBuf,

    // Male denominator
    #[arg(short = 'm', long = "males", required = true, allow_negative_numbers = true, help = "Denominator of male allele frequency in the 4th column")]
    pub males: f64,

    // Female denominator
    #[arg(short = 'f', long = "females", required = true, allow_negative_numbers = true, help = "Denominator of female allele frequency in the 5th column")]
    pub females: f64,

    // Output file path
    #[arg(short = 'o', long = "output", required = true, help = "Output sync file, - for stdout")]
    pub out_file: PathBuf,

    // Blank lines
    #[arg(long = "skip-blank", default_value_t = false, help = "Drop blank lines instead of copying them")]
    pub skip_blank: bool,

    // Verbosity
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}
