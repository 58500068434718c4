//! Terminal colours. Purely cosmetic; disabled output is plain text.

use crossterm::style::Stylize;

/// Colour roles used by the prompts and reports
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().to_string())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |t| t.magenta().to_string())
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    fn paint(&self, text: &str, colour: impl Fn(&str) -> String) -> String {
        if self.color {
            colour(text)
        } else {
            text.to_string()
        }
    }
}
