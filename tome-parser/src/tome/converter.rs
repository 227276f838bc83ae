//! Entry conversion
//!
//! `Converter` wires the four stages into one transform for a given rule set and
//! options, and offers shortcuts for running it on line vectors or raw text.
//!
//! # Example
//!
//! ```rust,ignore
//! use tome_parser::tome::{ConvertOptions, Converter};
//!
//! let converter = Converter::new(rules, ConvertOptions::default());
//! let doc = converter.convert_str(&source);
//! print!("{}", doc);
//! ```

use crate::tome::document::{Document, Draft};
use crate::tome::rules::{ConvertOptions, RuleSet};
use crate::tome::transforms::stages::{
    DuplicatePruning, EmphasisAnnotation, ParagraphAssembly, PreambleParsing,
};
use crate::tome::transforms::Transform;
use std::sync::Arc;

/// Type alias for the full conversion transform
pub type EntryTransform = Transform<Vec<String>, Document>;

/// Build the standard conversion pipeline:
/// 1. Preamble parsing
/// 2. Paragraph assembly
/// 3. Duplicate pruning
/// 4. Emphasis annotation
pub fn entry_transform(rules: Arc<RuleSet>, options: ConvertOptions) -> EntryTransform {
    Transform::from_fn(|lines: Vec<String>| lines)
        .then(PreambleParsing::new(Arc::clone(&rules), options))
        .then(ParagraphAssembly::new(Arc::clone(&rules), options))
        .then(DuplicatePruning)
        .then(EmphasisAnnotation::new(rules))
        .then(Transform::from_fn(|draft: Draft| Document::from(draft)))
}

/// Converts entries with one fixed rule set and option bundle.
pub struct Converter {
    rules: Arc<RuleSet>,
    options: ConvertOptions,
    transform: EntryTransform,
}

impl Converter {
    pub fn new(rules: RuleSet, options: ConvertOptions) -> Self {
        let rules = Arc::new(rules);
        let transform = entry_transform(Arc::clone(&rules), options);
        Converter {
            rules,
            options,
            transform,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an entry given as lines with terminators already removed.
    pub fn convert(&self, lines: Vec<String>) -> Document {
        self.transform.run(lines)
    }

    /// Convert an entry given as raw text. LF and CRLF terminators are accepted.
    pub fn convert_str(&self, source: &str) -> Document {
        self.convert(source.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tome::rules::TrailingFragment;

    fn converter(preamble_length: usize) -> Converter {
        let rules = RuleSet::new(
            vec!["Classes:".into(), "Casting Time:".into()],
            vec![],
            '•',
            vec![],
            vec!["resistance".into()],
        )
        .unwrap();
        Converter::new(
            rules,
            ConvertOptions {
                preamble_length,
                extras_enabled: false,
                trailing_fragment: TrailingFragment::Drop,
            },
        )
    }

    #[test]
    fn test_convert_full_entry() {
        let source = "Alarm\r\n1st-level divination\r\nClasses: Ranger, Wizard\r\nCasting Time: 1 action\r\nYou gain\r\n resistance.\r\n";
        let doc = converter(4).convert_str(source);

        assert_eq!(
            doc.preamble(),
            [
                "__Alarm__",
                "_1st-level divination_",
                "__Classes:__ Ranger, Wizard",
                "__Casting Time:__ 1 action",
            ]
        );
        assert_eq!(doc.paragraphs(), ["You gain __resistance__."]);
    }

    #[test]
    fn test_convert_empty_source() {
        let doc = converter(4).convert_str("");
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn test_converter_is_reusable() {
        let converter = converter(1);
        let first = converter.convert(vec!["Alarm".into()]);
        let second = converter.convert(vec!["Shield".into()]);

        assert_eq!(first.preamble(), ["__Alarm__"]);
        assert_eq!(second.preamble(), ["__Shield__"]);
    }
}
