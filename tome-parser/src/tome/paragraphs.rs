//! Body reflow
//!
//! Transcribed body text arrives hard-wrapped: one sentence may span several
//! physical lines and one physical line may close a sentence and start nothing new.
//! The assembler folds the lines back into paragraphs with a single accumulator:
//!
//! - a line opening with an extra marker (when extras are enabled) or with the
//!   bullet glyph always starts a paragraph of its own;
//! - any other line continues the accumulator, joined with one space;
//! - a paragraph is complete once a line ends in terminal punctuation.
//!
//! Between lines the accumulator is either empty or holds text that does not yet
//! end in terminal punctuation.

use crate::tome::markup::{self, ends_with_terminal};
use crate::tome::preamble::matching_label;
use crate::tome::rules::{ConvertOptions, RuleSet, TrailingFragment};
use tracing::{trace, warn};

/// The in-progress paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Accumulator {
    #[default]
    Empty,
    Accumulating(String),
}

/// Fold state threaded through the body lines.
#[derive(Debug, Default)]
struct Assembly {
    paragraphs: Vec<String>,
    pending: Accumulator,
}

impl Assembly {
    fn flush(&mut self) {
        if let Accumulator::Accumulating(text) = std::mem::take(&mut self.pending) {
            self.paragraphs.push(text);
        }
    }

    /// Start a fresh paragraph from `line`, closing it at once if the line is
    /// already complete. `text` is the line with its opener rewritten.
    fn seed(&mut self, line: &str, text: String) {
        self.flush();
        if ends_with_terminal(line) {
            self.paragraphs.push(text);
        } else {
            self.pending = Accumulator::Accumulating(text);
        }
    }

    fn continue_with(&mut self, line: &str) {
        match &mut self.pending {
            Accumulator::Accumulating(text) => {
                text.push(' ');
                text.push_str(line);
            }
            pending @ Accumulator::Empty => {
                *pending = Accumulator::Accumulating(line.to_string());
            }
        }

        // The line decides completion, not the merged text.
        if ends_with_terminal(line) {
            self.flush();
        }
    }

    fn finish(mut self, trailing: TrailingFragment) -> Vec<String> {
        match trailing {
            TrailingFragment::Flush => self.flush(),
            TrailingFragment::Drop => {
                if let Accumulator::Accumulating(text) = &self.pending {
                    warn!(fragment = %text, "dropping unterminated trailing fragment");
                }
            }
        }
        self.paragraphs
    }
}

/// Reassembles body lines into paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    extra_markers: &'a [String],
    bullet_glyph: char,
    extras_enabled: bool,
    trailing: TrailingFragment,
}

impl<'a> Assembler<'a> {
    pub fn new(rules: &'a RuleSet, options: &ConvertOptions) -> Self {
        Assembler {
            extra_markers: rules.extra_markers(),
            bullet_glyph: rules.bullet_glyph(),
            extras_enabled: options.extras_enabled,
            trailing: options.trailing_fragment,
        }
    }

    pub fn assemble<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .fold(Assembly::default(), |mut state, line| {
                self.feed(&mut state, line.as_ref());
                state
            })
            .finish(self.trailing)
    }

    fn feed(&self, state: &mut Assembly, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if self.extras_enabled {
            if let Some(marker) = matching_label(line, self.extra_markers) {
                trace!(marker, "extra marker opens paragraph");
                let text = format!("{}{}", markup::strong(marker), &line[marker.len()..]);
                state.seed(line, text);
                return;
            }
        }

        if let Some(rest) = line.strip_prefix(self.bullet_glyph) {
            trace!("bullet opens paragraph");
            state.seed(line, format!("{}{}", markup::BULLET, rest));
            return;
        }

        state.continue_with(line);
    }
}

/// Convenience wrapper around [`Assembler`].
pub fn assemble_paragraphs<S: AsRef<str>>(
    lines: &[S],
    rules: &RuleSet,
    options: &ConvertOptions,
) -> Vec<String> {
    Assembler::new(rules, options).assemble(lines)
}
