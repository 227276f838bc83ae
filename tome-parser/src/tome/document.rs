//! Intermediate and final document shapes
//!
//! The pipeline hands a [`Sectioned`] entry from preamble parsing to paragraph
//! assembly, then threads a [`Draft`] through pruning and annotation before it
//! becomes a [`Document`].

use serde::Serialize;
use std::fmt;

/// Tagged preamble plus the raw body lines that follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sectioned {
    pub preamble: Vec<String>,
    pub body: Vec<String>,
}

/// Tagged preamble plus assembled body paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub preamble: Vec<String>,
    pub paragraphs: Vec<String>,
}

/// Final output: preamble fields followed by body paragraphs, one string per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    preamble: Vec<String>,
    paragraphs: Vec<String>,
}

impl Document {
    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// All output lines in order, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.preamble
            .iter()
            .chain(self.paragraphs.iter())
            .map(String::as_str)
    }

    pub fn into_lines(self) -> Vec<String> {
        let mut lines = self.preamble;
        lines.extend(self.paragraphs);
        lines
    }
}

impl From<Draft> for Document {
    fn from(draft: Draft) -> Self {
        Document {
            preamble: draft.preamble,
            paragraphs: draft.paragraphs,
        }
    }
}

/// Newline-terminated output, ready to be written as is.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from(Draft {
            preamble: vec!["__Alarm__".into(), "_1st-level abjuration_".into()],
            paragraphs: vec!["You set an alarm.".into()],
        })
    }

    #[test]
    fn test_lines_keep_preamble_first() {
        let doc = sample();
        assert_eq!(
            doc.lines().collect::<Vec<_>>(),
            vec!["__Alarm__", "_1st-level abjuration_", "You set an alarm."]
        );
        assert_eq!(doc.into_lines().len(), 3);
    }

    #[test]
    fn test_display_terminates_every_line() {
        assert_eq!(
            sample().to_string(),
            "__Alarm__\n_1st-level abjuration_\nYou set an alarm.\n"
        );
        assert_eq!(Document::default().to_string(), "");
    }
}
