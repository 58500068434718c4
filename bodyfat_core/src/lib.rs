#![forbid(unsafe_code)]

//! Core domain model and business logic for the Body Fat Percent Calculator.
//!
//! This crate provides:
//! - Domain types (measurements, skinfolds, results)
//! - Input validation and the interactive collector
//! - Jackson/Pollock 7-site calculations
//! - Recommendation classification
//! - Persistence (CSV workbook, in-memory workbook)
//! - The session loop tying it all together

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod validate;
pub mod calculator;
pub mod classify;
pub mod store;
pub mod style;
pub mod collector;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use config::Config;
pub use calculator::{body_fat_percent, body_fat_weight, lean_body_weight, BodyComposition};
pub use classify::{classify, Category};
pub use store::{CsvWorkbook, MemoryWorkbook, PersistenceClient, TableStore};
pub use collector::Collector;
pub use session::{run_session, SessionState};
