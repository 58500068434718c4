//! Interactive collection of one measurement.
//!
//! Each field is asked for in a loop until the answer validates. Rejections
//! are printed and the question is asked again; only I/O failures and a
//! closed input stream end the loop early.

use crate::style::Palette;
use crate::validate;
use crate::{Choice, Error, Gender, Measurement, Result, Skinfolds, ValidationError};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const PROCEDURE_TEXT: &[&str] = &[
    "Equipment: Skinfold caliper.\n",
    "Procedure:\n",
    "Measurements are taken on the right side of body. Caliper needs to be perpendicular to \
     the site analysed.",
    "The participant must relax the muscle group that is being assessed.",
    "When skin fold is pinched, the practitioner should be taking reading at the middle of \
     the pinched skin, not apex or base.",
    "Wait 1 to 2 seconds after releasing caliper, record closest 0.5mm. Retake each site in \
     order to obtain accurate readings.\n",
];

const SITE_TEXT: &[&str] = &[
    "Instructions:\n",
    "Tricep: vertical fold at the midpoint of the posterior side of tricep between shoulder \
     and elbow with arm relaxed at the side.\n",
    "Chest: diagonal fold half the distance between anterior axillary line and the nipple.\n",
    "Subscapular: diagonal fold 2cm from inferior angle of the scapula.\n",
    "Midaxillary: at midaxillary line horizontal to xiphoid process of the sternum.\n",
    "Suprailiac: diagonal fold parallel and superior to the iliac crest.\n",
    "Abdominal: vertical fold 2cm to the right of the navel.\n",
    "Thigh: midpoint of the anterior side of the upper leg between the patella and top of \
     thigh.\n",
];

const SKIP_TEXT: &str = "No problem, we will skip to the next part.\n";

/// Line-oriented prompt/answer front end over any reader and writer
pub struct Collector<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Write one already-styled line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Collect every field of a measurement in order, including the two
    /// optional instruction screens before the skinfolds.
    pub fn measurement(&mut self, today: NaiveDate) -> Result<Measurement> {
        let date = self.date(today)?;
        let name = self.name()?;
        let gender = self.gender()?;
        let age = self.age()?;
        let weight_kg = self.weight()?;
        self.offer_procedure_instructions()?;
        self.offer_site_instructions()?;
        let skinfolds = self.skinfolds()?;

        Ok(Measurement {
            date,
            name,
            gender,
            age,
            weight_kg,
            skinfolds,
        })
    }

    pub fn date(&mut self, today: NaiveDate) -> Result<NaiveDate> {
        self.ask(
            "Enter the date measurements were taken in the following format: DD/MM/YYYY:",
            Some("Date is valid!\n"),
            |line| validate::validate_date(line, today),
        )
    }

    pub fn name(&mut self) -> Result<String> {
        self.ask(
            "Enter your name here:",
            Some("Name is valid!\n"),
            validate::validate_name,
        )
    }

    pub fn gender(&mut self) -> Result<Gender> {
        self.ask(
            "Enter your gender in the following format: M or F:",
            Some("Gender is valid!\n"),
            validate::parse_gender,
        )
    }

    pub fn age(&mut self) -> Result<u32> {
        self.ask(
            "Enter your age in numerical format (e.g. 30):",
            Some("Age is valid!\n"),
            validate::validate_age,
        )
    }

    pub fn weight(&mut self) -> Result<f64> {
        self.ask(
            "Enter your weight in kgs (e.g. 80.5):",
            Some("Weight is valid!\n"),
            validate::validate_weight,
        )
    }

    pub fn skinfolds(&mut self) -> Result<Skinfolds> {
        loop {
            let heading = self.palette.heading(
                "Enter skinfold measurements in the following order: tricep, chest, \
                 subscapular, midaxillary, abdominal, suprailiac, thigh.\n",
            );
            self.say(&heading)?;
            let heading = self.palette.heading(
                "Data should be 7 numbers, separated by commas, numbers can have fractional \
                 parts. Example: 10.5,5,12,11.7,25,20,33\n",
            );
            self.say(&heading)?;

            if let Some(skinfolds) = self.attempt(
                "Enter your skinfold measurements here in mm:",
                Some("Data is valid!\n"),
                validate::parse_skinfolds,
            )? {
                return Ok(skinfolds);
            }
        }
    }

    /// Ask a Y/N question until the answer is exactly `Y` or `N`
    pub fn choice(&mut self, question: &str) -> Result<Choice> {
        self.ask(question, None, validate::parse_choice)
    }

    pub fn offer_procedure_instructions(&mut self) -> Result<()> {
        self.offer(
            "Would you like to view the information regarding the necessary equipment and \
             procedures for conducting the measurements?\n",
            PROCEDURE_TEXT,
        )
    }

    pub fn offer_site_instructions(&mut self) -> Result<()> {
        self.offer(
            "Would you like to review the instructions for taking the required skinfold \
             measurements?\n",
            SITE_TEXT,
        )
    }

    fn offer(&mut self, question: &str, text: &[&str]) -> Result<()> {
        let heading = self.palette.heading(question);
        self.say(&heading)?;

        match self.choice("Enter your response here: Y or N.")? {
            Choice::Yes => {
                for line in text {
                    let line = self.palette.info(line);
                    self.say(&line)?;
                }
            }
            Choice::No => {
                let line = self.palette.prompt(SKIP_TEXT);
                self.say(&line)?;
            }
        }
        Ok(())
    }

    /// Prompt until `parse` accepts the answer
    fn ask<T>(
        &mut self,
        prompt: &str,
        confirmation: Option<&str>,
        parse: impl Fn(&str) -> std::result::Result<T, ValidationError>,
    ) -> Result<T> {
        loop {
            if let Some(value) = self.attempt(prompt, confirmation, &parse)? {
                return Ok(value);
            }
        }
    }

    /// Prompt once. `Ok(None)` means the answer was rejected and explained.
    fn attempt<T>(
        &mut self,
        prompt: &str,
        confirmation: Option<&str>,
        parse: impl Fn(&str) -> std::result::Result<T, ValidationError>,
    ) -> Result<Option<T>> {
        let prompt = self.palette.prompt(prompt);
        self.say(&prompt)?;
        self.output.flush()?;

        let line = self.read_line()?;
        match parse(&line) {
            Ok(value) => {
                if let Some(confirmation) = confirmation {
                    let confirmation = self.palette.success(confirmation);
                    self.say(&confirmation)?;
                }
                Ok(Some(value))
            }
            Err(reason) => {
                tracing::debug!("Rejected answer {:?}: {:?}", line, reason);
                let message = self.palette.error(&format!("{}\n", reason));
                self.say(&message)?;
                Ok(None)
            }
        }
    }

    /// Read one line without its terminator
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
