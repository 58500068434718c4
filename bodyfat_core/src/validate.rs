//! Parsing and validation of single answers.
//!
//! Every function here is pure: it takes the raw line the user typed (without
//! the trailing newline) and either returns the typed value or the reason it
//! was rejected.

use crate::{Choice, Gender, Skinfolds, ValidationError, DATE_FORMAT};
use chrono::NaiveDate;
use std::num::{IntErrorKind, ParseIntError};

/// Earliest date accepted for a measurement
pub const MIN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("1900-01-01 is a valid date"),
};

/// Ages must be strictly above this
pub const MIN_AGE_EXCLUSIVE: i64 = 18;
pub const MAX_AGE: i64 = 130;

/// Weights must be strictly above this, in kg
pub const MIN_WEIGHT_EXCLUSIVE: f64 = 10.0;

/// Largest skinfold a caliper can read, in mm
pub const MAX_SKINFOLD_MM: f64 = 80.0;

pub fn validate_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidFormat)?;

    if date > today {
        Err(ValidationError::FutureDate)
    } else if date < MIN_DATE {
        Err(ValidationError::UnrealisticDate)
    } else {
        Ok(date)
    }
}

/// A letter, followed by at least one letter, hyphen, apostrophe or space
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let mut chars = input.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest: Vec<char> = chars.collect();
    let rest_ok = !rest.is_empty()
        && rest
            .iter()
            .all(|&c| c.is_ascii_alphabetic() || matches!(c, '-' | '\'' | ' '));

    if first_ok && rest_ok {
        Ok(input.to_string())
    } else {
        Err(ValidationError::InvalidName)
    }
}

pub fn parse_gender(input: &str) -> Result<Gender, ValidationError> {
    match input {
        "M" => Ok(Gender::Male),
        "F" => Ok(Gender::Female),
        _ => Err(ValidationError::InvalidGender),
    }
}

pub fn validate_age(input: &str) -> Result<u32, ValidationError> {
    let age: i64 = input.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        // Still a whole number, just far outside any plausible age
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::AgeOutOfRange,
        _ => ValidationError::InvalidAge,
    })?;

    if age > MIN_AGE_EXCLUSIVE && age <= MAX_AGE {
        // Range check above keeps this lossless
        Ok(age as u32)
    } else {
        Err(ValidationError::AgeOutOfRange)
    }
}

pub fn validate_weight(input: &str) -> Result<f64, ValidationError> {
    let weight = parse_finite(input).ok_or(ValidationError::InvalidWeight)?;

    if weight > MIN_WEIGHT_EXCLUSIVE {
        Ok(weight)
    } else {
        Err(ValidationError::WeightOutOfRange)
    }
}

/// Seven comma-separated readings, none above [`MAX_SKINFOLD_MM`].
///
/// There is no lower bound; zero and negative readings pass through.
pub fn parse_skinfolds(input: &str) -> Result<Skinfolds, ValidationError> {
    let tokens: Vec<&str> = input.split(',').collect();
    if tokens.len() != 7 {
        return Err(ValidationError::WrongCount {
            found: tokens.len(),
        });
    }

    let mut readings = [0.0; 7];
    for (slot, token) in readings.iter_mut().zip(&tokens) {
        *slot = parse_finite(token).ok_or(ValidationError::NotNumeric)?;
    }

    if readings.iter().any(|&mm| mm > MAX_SKINFOLD_MM) {
        return Err(ValidationError::TooLarge);
    }

    Ok(Skinfolds::new(readings))
}

pub fn parse_choice(input: &str) -> Result<Choice, ValidationError> {
    match input {
        "Y" => Ok(Choice::Yes),
        "N" => Ok(Choice::No),
        _ => Err(ValidationError::InvalidChoice),
    }
}

fn parse_finite(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
