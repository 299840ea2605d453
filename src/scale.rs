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

//! Scaling of allele counts by a denominator.
//!
//! A count of exactly zero stays zero. Any other count is divided by the
//! denominator, rounded half to even, and raised to at least 1 so that rare
//! alleles are never rounded away.

use crate::parser::ParseError;

type E = Box<dyn std::error::Error>;

/// Separator between the per-allele counts inside a count column.
pub const COUNT_SEPARATOR: char = ':';

/// Scale a single count by `denominator`.
///
/// The result is always a whole number. It is kept as an [f64] so that
/// counts beyond the range of the integer types are not truncated; format
/// it with `{:.0}` to get the integer text.
///
/// `denominator` is expected to come from a validated
/// [Denominators](crate::params::Denominators).
///
/// ## Usage
///
/// ```rust
/// use syncnorm::scale::scale_count;
///
/// assert_eq!(scale_count(0.0, 3.0), 0.0);
/// assert_eq!(scale_count(1.0, 10.0), 1.0); // 0.1 would round to 0
/// assert_eq!(scale_count(5.0, 2.0), 2.0);  // 2.5 rounds to even
/// assert_eq!(scale_count(7.0, 2.0), 4.0);  // 3.5 rounds to even
/// ```
///
pub fn scale_count(
    count: f64,
    denominator: f64,
) -> f64 {
    if count == 0.0 {
        return 0.0
    }
    (count / denominator).round_ties_even().max(1.0)
}

/// Parse one count token.
///
/// Accepts anything [f64::from_str](std::str::FromStr) accepts except
/// non-finite values.
pub fn parse_count(
    token: &str,
) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(count) if count.is_finite() => Ok(count),
        _ => Err(ParseError::InvalidCount { token: token.to_string() }),
    }
}

/// Scale every count in a `:`-separated count column.
///
/// The number and order of the counts is preserved.
///
/// Terminates with a [ParseError] if any of the counts is not a finite
/// number.
///
/// ## Usage
///
/// ```rust
/// use syncnorm::scale::scale_field;
///
/// let got = scale_field("10:0:5", 5.0).unwrap();
/// assert_eq!(got, "2:0:1");
///
/// assert!(scale_field("10:x:5", 5.0).is_err());
/// ```
///
pub fn scale_field(
    field: &str,
    denominator: f64,
) -> Result<String, E> {
    let scaled = field
        .split(COUNT_SEPARATOR)
        .map(|token| parse_count(token).map(|count| format!("{:.0}", scale_count(count, denominator))))
        .collect::<Result<Vec<String>, ParseError>>()?;

    let separator = COUNT_SEPARATOR.to_string();
    Ok(scaled.join(separator.as_str()))
}
