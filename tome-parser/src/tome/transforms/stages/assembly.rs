//! Paragraph assembly stage

use crate::tome::document::{Draft, Sectioned};
use crate::tome::paragraphs::assemble_paragraphs;
use crate::tome::rules::{ConvertOptions, RuleSet};
use crate::tome::transforms::Runnable;
use std::sync::Arc;
use tracing::debug;

/// # Input
/// - `Sectioned` - tagged preamble and raw body lines
///
/// # Output
/// - `Draft` - the same preamble and the reflowed body paragraphs
pub struct ParagraphAssembly {
    rules: Arc<RuleSet>,
    options: ConvertOptions,
}

impl ParagraphAssembly {
    pub fn new(rules: Arc<RuleSet>, options: ConvertOptions) -> Self {
        ParagraphAssembly { rules, options }
    }
}

impl Runnable<Sectioned, Draft> for ParagraphAssembly {
    fn run(&self, input: Sectioned) -> Draft {
        let paragraphs = assemble_paragraphs(&input.body, &self.rules, &self.options);
        debug!(
            lines = input.body.len(),
            paragraphs = paragraphs.len(),
            "assembled paragraphs"
        );

        Draft {
            preamble: input.preamble,
            paragraphs,
        }
    }
}
