//! Preamble parsing stage
//!
//! Splits the raw lines of an entry into its tagged preamble and the body lines
//! left for paragraph assembly.

use crate::tome::document::Sectioned;
use crate::tome::preamble::parse_preamble;
use crate::tome::rules::{ConvertOptions, RuleSet};
use crate::tome::transforms::Runnable;
use std::sync::Arc;
use tracing::debug;

/// # Input
/// - `Vec<String>` - raw entry lines, terminators removed
///
/// # Output
/// - `Sectioned` - tagged preamble and untouched body lines
pub struct PreambleParsing {
    rules: Arc<RuleSet>,
    preamble_length: usize,
}

impl PreambleParsing {
    pub fn new(rules: Arc<RuleSet>, options: ConvertOptions) -> Self {
        PreambleParsing {
            rules,
            preamble_length: options.preamble_length,
        }
    }
}

impl Runnable<Vec<String>, Sectioned> for PreambleParsing {
    fn run(&self, mut lines: Vec<String>) -> Sectioned {
        let preamble = parse_preamble(&lines, self.preamble_length, self.rules.preamble_labels());
        if preamble.fields.len() < self.preamble_length {
            debug!(
                requested = self.preamble_length,
                found = preamble.fields.len(),
                "input exhausted before preamble was complete"
            );
        }

        let body = lines.split_off(preamble.consumed);
        debug!(
            fields = preamble.fields.len(),
            body_lines = body.len(),
            "parsed preamble"
        );

        Sectioned {
            preamble: preamble.fields,
            body,
        }
    }
}
