//! Duplicate pruning stage

use crate::tome::document::Draft;
use crate::tome::pruning::prune_duplicates;
use crate::tome::transforms::Runnable;
use tracing::debug;

/// Drops body paragraphs repeated verbatim in their successor.
pub struct DuplicatePruning;

impl Runnable<Draft, Draft> for DuplicatePruning {
    fn run(&self, input: Draft) -> Draft {
        let before = input.paragraphs.len();
        let paragraphs = prune_duplicates(input.paragraphs);
        debug!(removed = before - paragraphs.len(), "pruned duplicates");

        Draft {
            preamble: input.preamble,
            paragraphs,
        }
    }
}
