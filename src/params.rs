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
type E = Box<dyn std::error::Error>;

/// Which count column a denominator applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    /// 4th column
    Male,
    /// 5th column
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationError {
    pub sex: Sex,
    pub value: f64,
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "invalid {} denominator {}: must be a positive finite number", self.sex, self.value)
    }
}

impl std::error::Error for ConfigurationError {}

/// Denominators for the male and female count columns.
///
/// Both values are checked to be positive and finite on construction, so
/// every division made with them later is well-defined.
///
/// ## Usage
///
/// ```rust
/// use syncnorm::params::Denominators;
///
/// let denominators = Denominators::new(5.0, 2.0).unwrap();
/// assert_eq!(denominators.male(), 5.0);
/// assert_eq!(denominators.female(), 2.0);
///
/// assert!(Denominators::new(0.0, 2.0).is_err());
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Denominators {
    male: f64,
    female: f64,
}

impl Denominators {
    pub fn new(
        male: f64,
        female: f64,
    ) -> Result<Self, E> {
        check_denominator(Sex::Male, male)?;
        check_denominator(Sex::Female, female)?;
        Ok(Self { male, female })
    }

    pub fn male(&self) -> f64 {
        self.male
    }

    pub fn female(&self) -> f64 {
        self.female
    }

    /// Denominator for the column belonging to `sex`.
    pub fn get(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

fn check_denominator(
    sex: Sex,
    value: f64,
) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError { sex, value })
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn new_accepts_positive_values() {
        use super::Denominators;
        use super::Sex;

        let got = Denominators::new(5.0, 0.25).unwrap();

        assert_eq!(got.get(Sex::Male), 5.0);
        assert_eq!(got.get(Sex::Female), 0.25);
    }

    #[test]
    fn new_rejects_zero_male() {
        use super::ConfigurationError;
        use super::Denominators;
        use super::Sex;

        let got = Denominators::new(0.0, 2.0).unwrap_err();
        let got = got.downcast_ref::<ConfigurationError>().unwrap();

        assert_eq!(got.sex, Sex::Male);
    }

    #[test]
    fn new_rejects_zero_female() {
        use super::ConfigurationError;
        use super::Denominators;
        use super::Sex;

        let got = Denominators::new(1.0, 0.0).unwrap_err();
        let got = got.downcast_ref::<ConfigurationError>().unwrap();

        assert_eq!(got.sex, Sex::Female);
    }

    #[test]
    fn new_rejects_negative_and_non_finite() {
        use super::Denominators;

        assert!(Denominators::new(-1.0, 1.0).is_err());
        assert!(Denominators::new(1.0, f64::NAN).is_err());
        assert!(Denominators::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn error_message_names_the_column() {
        use super::Denominators;

        let got = Denominators::new(1.0, 0.0).unwrap_err().to_string();

        assert_eq!(got, "invalid female denominator 0: must be a positive finite number");
    }
}
