//! Error types for the bodyfat_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bodyfat_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backing store rejected or could not complete a write
    #[error("Persistence error on '{target}': {reason}")]
    Persistence { target: String, reason: String },

    /// Standard input reached end-of-file while a prompt was waiting
    #[error("Input closed before a valid answer was given")]
    InputClosed,
}

impl Error {
    pub fn persistence(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Persistence {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

/// Reasons a single answer was rejected by the collector.
///
/// The `Display` text is what the user sees before being asked again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Incorrect date format. Try again.")]
    InvalidFormat,

    #[error("The date cannot be in the future. Please try again.")]
    FutureDate,

    #[error("The date is unrealistically old. Please enter a more recent date.")]
    UnrealisticDate,

    #[error(
        "Invalid name. Ensure it contains only letters, hyphens, apostrophes, and spaces \
         and consists of at least 2 characters."
    )]
    InvalidName,

    #[error("Invalid input. Please enter M or F.")]
    InvalidGender,

    #[error("Invalid input. Please enter your age as a whole number.")]
    InvalidAge,

    #[error("Please enter a valid age (between 18 and 130).")]
    AgeOutOfRange,

    #[error("Invalid input. Please enter a numeric value for weight.")]
    InvalidWeight,

    #[error("Weight is unrealistically low. Please enter a valid weight.")]
    WeightOutOfRange,

    #[error(
        "Exactly 7 values of skinfold measurements required, you provided {found}. \
         Please try again."
    )]
    WrongCount { found: usize },

    #[error(
        "Invalid data: one or more skinfold measurements entered values are not a number. \
         Please try again."
    )]
    NotNumeric,

    #[error(
        "Invalid data: one or more skinfold measurements entered values exceeds 80 mm. \
         Skinfold measurement cannot exceed 80 mm. Please retake your measurements and \
         enter correct values."
    )]
    TooLarge,

    #[error("Invalid input. Please enter Y or N.")]
    InvalidChoice,
}
