//! Emphasis annotation stage

use crate::tome::document::Draft;
use crate::tome::emphasis::annotate;
use crate::tome::rules::RuleSet;
use crate::tome::transforms::Runnable;
use std::sync::Arc;

/// Applies phrase emphasis to body paragraphs, leaving the preamble as parsed.
pub struct EmphasisAnnotation {
    rules: Arc<RuleSet>,
}

impl EmphasisAnnotation {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        EmphasisAnnotation { rules }
    }
}

impl Runnable<Draft, Draft> for EmphasisAnnotation {
    fn run(&self, input: Draft) -> Draft {
        Draft {
            preamble: input.preamble,
            paragraphs: annotate(input.paragraphs, &self.rules),
        }
    }
}
