//! Phrase level emphasis
//!
//! A phrase qualifies in a paragraph when the paragraph contains it right after a
//! space, which keeps "istance" from matching inside "resistance". Once it
//! qualifies, every literal occurrence in that paragraph is wrapped.
//!
//! Light rules run first, in list order, then strong rules, in list order. There
//! is no nesting guard: a later phrase overlapping an already wrapped one is
//! wrapped again.

use crate::tome::markup::Strength;
use crate::tome::rules::RuleSet;

/// Wrap every qualifying phrase of a single paragraph.
pub fn annotate_paragraph(paragraph: &str, rules: &RuleSet) -> String {
    let light = rules.light_emphasis().iter().map(|p| (p, Strength::Light));
    let strong = rules.strong_emphasis().iter().map(|p| (p, Strength::Strong));

    light
        .chain(strong)
        .fold(paragraph.to_string(), |text, (phrase, strength)| {
            if text.contains(&format!(" {phrase}")) {
                text.replace(phrase.as_str(), &strength.wrap(phrase))
            } else {
                text
            }
        })
}

/// Annotate body paragraphs. Preamble fields never pass through here.
pub fn annotate(paragraphs: Vec<String>, rules: &RuleSet) -> Vec<String> {
    paragraphs
        .into_iter()
        .map(|paragraph| annotate_paragraph(&paragraph, rules))
        .collect()
}
