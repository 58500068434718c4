//! Core domain types for the Body Fat Percent Calculator.
//!
//! This module defines the values that flow through one session:
//! - Gender and the yes/no answers used by menus
//! - The seven skinfold sites and their readings
//! - The validated measurement record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for both input and storage
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// ============================================================================
// Answers
// ============================================================================

/// Gender as used by the Jackson/Pollock equations
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Single-letter code entered by the user and written to the store
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Answer to a Y/N question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

// ============================================================================
// Skinfolds
// ============================================================================

/// Anatomical sites, in the order readings are entered and stored
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldSite {
    Tricep,
    Chest,
    Subscapular,
    Midaxillary,
    Abdominal,
    Suprailiac,
    Thigh,
}

impl SkinfoldSite {
    pub const ALL: [SkinfoldSite; 7] = [
        SkinfoldSite::Tricep,
        SkinfoldSite::Chest,
        SkinfoldSite::Subscapular,
        SkinfoldSite::Midaxillary,
        SkinfoldSite::Abdominal,
        SkinfoldSite::Suprailiac,
        SkinfoldSite::Thigh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SkinfoldSite::Tricep => "tricep",
            SkinfoldSite::Chest => "chest",
            SkinfoldSite::Subscapular => "subscapular",
            SkinfoldSite::Midaxillary => "midaxillary",
            SkinfoldSite::Abdominal => "abdominal",
            SkinfoldSite::Suprailiac => "suprailiac",
            SkinfoldSite::Thigh => "thigh",
        }
    }
}

/// Seven skinfold readings in millimetres, ordered as [`SkinfoldSite::ALL`]
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Skinfolds([f64; 7]);

impl Skinfolds {
    pub fn new(readings: [f64; 7]) -> Self {
        Self(readings)
    }

    pub fn readings(&self) -> &[f64; 7] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

// ============================================================================
// Measurement Record
// ============================================================================

/// One fully validated set of user inputs
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    pub date: NaiveDate,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub skinfolds: Skinfolds,
}

impl Measurement {
    /// Flat row: date, name, gender, age, weight, then the seven skinfolds
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.date.format(DATE_FORMAT).to_string(),
            self.name.clone(),
            self.gender.code().to_string(),
            self.age.to_string(),
            self.weight_kg.to_string(),
        ];
        row.extend(self.skinfolds.readings().iter().map(|mm| mm.to_string()));
        row
    }

    /// Header matching [`Measurement::to_row`]
    pub fn header() -> Vec<String> {
        let mut header: Vec<String> = ["date", "name", "gender", "age", "weight"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        header.extend(SkinfoldSite::ALL.iter().map(|site| site.name().to_string()));
        header
    }
}
