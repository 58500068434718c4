//! Body fat categories and the advice shown for each.

use crate::Gender;
use serde::{Deserialize, Serialize};

/// Body fat category, ordered from leanest to heaviest
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BelowEssential,
    EssentialFat,
    Athletic,
    Fitness,
    AcceptableAbove,
    Obese,
}

/// Upper bounds (inclusive) of the banded categories for one gender
struct Bands {
    below_essential: f64,
    essential: f64,
    athletic: f64,
    fitness: f64,
    acceptable: f64,
}

const MALE_BANDS: Bands = Bands {
    below_essential: 2.0,
    essential: 5.0,
    athletic: 13.0,
    fitness: 17.0,
    acceptable: 25.0,
};

const FEMALE_BANDS: Bands = Bands {
    below_essential: 10.0,
    essential: 13.0,
    athletic: 20.0,
    fitness: 24.0,
    acceptable: 31.0,
};

/// Map a body fat percent to its category.
///
/// Every band is closed at the top, so a value sitting exactly on a boundary
/// belongs to the leaner category; the essential band is also closed at the
/// bottom. NaN compares false everywhere and ends up in `Obese`.
pub fn classify(gender: Gender, percent: f64) -> Category {
    let bands = match gender {
        Gender::Male => &MALE_BANDS,
        Gender::Female => &FEMALE_BANDS,
    };

    if percent < bands.below_essential {
        Category::BelowEssential
    } else if percent <= bands.essential {
        Category::EssentialFat
    } else if percent <= bands.athletic {
        Category::Athletic
    } else if percent <= bands.fitness {
        Category::Fitness
    } else if percent <= bands.acceptable {
        Category::AcceptableAbove
    } else {
        Category::Obese
    }
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::BelowEssential => "Below Essential Fat",
            Category::EssentialFat => "Essential Fat",
            Category::Athletic => "Athletic Build",
            Category::Fitness => "Fitness",
            Category::AcceptableAbove => "Above but Acceptable",
            Category::Obese => "Obese",
        }
    }

    /// True for categories that warrant a health warning
    pub fn is_warning(self) -> bool {
        matches!(self, Category::BelowEssential)
    }

    pub fn advice(self, percent: f64) -> String {
        match self {
            Category::EssentialFat => format!(
                "Your body fat percentage of {}% indicates that you are in the Essential Fat \
                 category. Maintain your current level of physical activity and healthy eating \
                 habits. Consult with a healthcare provider if you're significantly below this \
                 range, as too little body fat can affect your health.",
                percent
            ),
            Category::Athletic => format!(
                "Your body fat percentage of {}% indicates that you are in the Athletic Build \
                 category, with a lean body composition and a higher proportion of muscle mass. \
                 Continue your balanced diet and regular exercise regimen to maintain your \
                 athletic build, focusing on strength, flexibility, and endurance training for \
                 optimal performance.",
                percent
            ),
            Category::Fitness => format!(
                "Your body fat percentage of {}% indicates that you are in the Fitness category. \
                 You're within a healthy and fit body fat percentage range, common for people \
                 who lead an active lifestyle. Keep up the good work with regular physical \
                 activity and a balanced diet, focusing on specific fitness goals based on \
                 personal preferences.",
                percent
            ),
            Category::AcceptableAbove => format!(
                "Your body fat percentage of {}% indicates that you are in the Above but \
                 Acceptable category. Your body fat percentage is above the optimal range for \
                 fitness but still within an acceptable level. Consider increasing your physical \
                 activity level and monitoring your diet to improve your body composition, \
                 aiming for a mix of cardio, strength training, and flexibility exercises.",
                percent
            ),
            Category::Obese => format!(
                "Your body fat percentage of {}% indicates that you are in the Obese category. \
                 This means your body fat percentage falls within the obese range, which may \
                 increase your risk for health issues. It's advisable to seek guidance from a \
                 healthcare professional to develop a personalized plan for reducing body fat, \
                 including nutritional counseling, a structured exercise program, and lifestyle \
                 adjustments.",
                percent
            ),
            Category::BelowEssential => format!(
                "Your body fat percentage of {}% is below the essential fat levels. This can \
                 pose serious health risks. Please consult with a healthcare provider.",
                percent
            ),
        }
    }
}
