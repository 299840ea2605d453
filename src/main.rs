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
use clap::Parser;

use syncnorm::normalizer::Normalizer;
use syncnorm::params::Denominators;

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    let res = stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init();
    if let Err(e) = res {
        eprintln!("Could not initialize logging: {}", e);
    }
}

fn run(cli: &cli::Cli) -> Result<(), E> {
    // Checked before any files are opened
    let denominators = Denominators::new(cli.males, cli.females)?;
    let normalizer = Normalizer::new(denominators).skip_blank(cli.skip_blank);

    syncnorm::normalize_file(&normalizer, &cli.input_file, &cli.out_file)?;
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();
    init_log(if cli.verbose { 3 } else { 1 });

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
