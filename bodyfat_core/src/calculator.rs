//! Jackson/Pollock 7-site body composition calculations.
//!
//! All values are rounded to two decimal places, half away from zero.
//! Results are never clamped: very low skinfold sums give a negative percent,
//! and a density that reaches zero yields an infinite one.

use crate::{Gender, Measurement, Skinfolds};
use serde::{Deserialize, Serialize};

/// Coefficients of the body density equation for one gender
struct DensityEquation {
    intercept: f64,
    sum: f64,
    sum_squared: f64,
    age: f64,
}

const MALE: DensityEquation = DensityEquation {
    intercept: 1.112,
    sum: 0.00043499,
    sum_squared: 0.00000055,
    age: 0.00028826,
};

const FEMALE: DensityEquation = DensityEquation {
    intercept: 1.097,
    sum: 0.00046971,
    sum_squared: 0.00000056,
    age: 0.00012828,
};

impl DensityEquation {
    fn for_gender(gender: Gender) -> &'static DensityEquation {
        match gender {
            Gender::Male => &MALE,
            Gender::Female => &FEMALE,
        }
    }

    fn density(&self, skinfold_sum: f64, age: f64) -> f64 {
        self.intercept - self.sum * skinfold_sum + self.sum_squared * skinfold_sum.powi(2)
            - self.age * age
    }
}

/// Computed body composition for one measurement
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BodyComposition {
    pub body_fat_percent: f64,
    pub body_fat_weight: f64,
    pub lean_body_weight: f64,
}

impl BodyComposition {
    /// Run all three calculations in order, each on the previous rounded value
    pub fn from_measurement(measurement: &Measurement) -> Self {
        let body_fat_percent = body_fat_percent(
            measurement.age,
            measurement.gender,
            &measurement.skinfolds,
        );
        let body_fat_weight = body_fat_weight(measurement.weight_kg, body_fat_percent);
        let lean_body_weight = lean_body_weight(measurement.weight_kg, body_fat_weight);

        Self {
            body_fat_percent,
            body_fat_weight,
            lean_body_weight,
        }
    }

    /// Flat row: percent, fat weight, lean weight
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.body_fat_percent.to_string(),
            self.body_fat_weight.to_string(),
            self.lean_body_weight.to_string(),
        ]
    }

    pub fn header() -> Vec<String> {
        vec![
            "body_fat_percent".into(),
            "body_fat_weight".into(),
            "lean_body_weight".into(),
        ]
    }
}

/// Siri conversion of Jackson/Pollock body density to percent fat
pub fn body_fat_percent(age: u32, gender: Gender, skinfolds: &Skinfolds) -> f64 {
    let density = DensityEquation::for_gender(gender).density(skinfolds.sum(), f64::from(age));
    round2(495.0 / density - 450.0)
}

pub fn body_fat_weight(weight_kg: f64, body_fat_percent: f64) -> f64 {
    round2(weight_kg * body_fat_percent / 100.0)
}

pub fn lean_body_weight(weight_kg: f64, body_fat_weight: f64) -> f64 {
    round2(weight_kg - body_fat_weight)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
