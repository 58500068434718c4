//! The interactive session loop.
//!
//! One iteration collects a measurement, stores it, computes and shows the
//! body composition, stores that, and prints the recommendation. The user is
//! then asked whether to go again.

use crate::{classify, BodyComposition, Choice, Collector, PersistenceClient, Result, TableStore};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Ended,
}

/// Run iterations until the user answers `N`; returns how many completed.
///
/// `today` is consulted at the start of every iteration so a session left
/// open past midnight still rejects dates after the current day.
pub fn run_session<R, W, S>(
    collector: &mut Collector<R, W>,
    client: &mut PersistenceClient<S>,
    today: impl Fn() -> NaiveDate,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    S: TableStore,
{
    let palette = collector.palette();
    let mut state = SessionState::Active;
    let mut completed = 0;

    while state == SessionState::Active {
        collector.say(&palette.heading("Welcome to Body Fat Percent Calculator\n"))?;
        collector.say("In order to use the Calculator, please use a skinfold caliper\n")?;

        let measurement = collector.measurement(today())?;

        let table = client.measurements_table().to_string();
        collector.say(&palette.heading(&format!("Updating {} worksheet...\n", table)))?;
        client.append_measurement(&measurement)?;
        collector.say(&palette.success(&format!(
            "The data in the {} worksheet updated successfully\n",
            table
        )))?;

        collector.say(&palette.prompt("Calculating your body composition...\n"))?;
        let result = BodyComposition::from_measurement(&measurement);
        let percent = result.body_fat_percent;
        collector.say(&palette.info(&format!("Your body fat percent is {} %\n", percent)))?;
        collector.say(&palette.info(&format!(
            "Your body fat weight is {} kg\n",
            result.body_fat_weight
        )))?;
        collector.say(&palette.info(&format!(
            "Your lean body mass is {} kg\n",
            result.lean_body_weight
        )))?;

        let table = client.results_table().to_string();
        collector.say(&palette.heading(&format!("Updating {} worksheet...\n", table)))?;
        client.append_result(&result)?;
        collector.say(&palette.success(&format!(
            "The data in the {} worksheet updated successfully\n",
            table
        )))?;

        let category = classify(measurement.gender, percent);
        tracing::info!(
            "Classified {}% ({}) as {}",
            percent,
            measurement.gender,
            category.label()
        );

        collector.say(&palette.heading("Summary and Recommendations:\n"))?;
        let advice = category.advice(percent);
        if category.is_warning() {
            collector.say(&palette.error(&advice))?;
        } else {
            collector.say(&palette.info(&advice))?;
        }

        completed += 1;

        state = match collector.choice("Would you like to run the program again? Enter Y or N:")? {
            Choice::Yes => SessionState::Active,
            Choice::No => SessionState::Ended,
        };
    }

    collector.say(&palette.heading(
        "The program has ended. Thank you for using the Body Fat Percent Calculator.",
    ))?;

    Ok(completed)
}
