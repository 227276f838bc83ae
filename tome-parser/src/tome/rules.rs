//! Rule bundle and conversion options
//!
//! A [`RuleSet`] carries the lookup tables every stage consults: preamble labels,
//! extra markers, the bullet glyph and the two emphasis phrase lists. It can only
//! be obtained through [`RuleSet::new`] or deserialization, both of which validate
//! the bundle, so a stage never sees a half-filled rule set.
//!
//! Ordering matters everywhere: labels and markers are matched first-wins in list
//! order, and emphasis phrases are applied in list order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised while building a [`RuleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("bullet glyph must be exactly one character, got {0:?}")]
    BulletGlyph(String),
    #[error("{category} entry #{index} is blank")]
    BlankEntry {
        category: &'static str,
        index: usize,
    },
}

/// Validated lookup tables for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRuleSet")]
pub struct RuleSet {
    preamble_labels: Vec<String>,
    extra_markers: Vec<String>,
    bullet_glyph: char,
    light_emphasis: Vec<String>,
    strong_emphasis: Vec<String>,
}

/// Wire shape of a rule bundle. Every field is required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleSet {
    preamble_labels: Vec<String>,
    extra_markers: Vec<String>,
    bullet_glyph: String,
    light_emphasis: Vec<String>,
    strong_emphasis: Vec<String>,
}

impl TryFrom<RawRuleSet> for RuleSet {
    type Error = RuleError;

    fn try_from(raw: RawRuleSet) -> Result<Self, Self::Error> {
        let mut chars = raw.bullet_glyph.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(RuleError::BulletGlyph(raw.bullet_glyph)),
        };
        RuleSet::new(
            raw.preamble_labels,
            raw.extra_markers,
            glyph,
            raw.light_emphasis,
            raw.strong_emphasis,
        )
    }
}

impl RuleSet {
    pub fn new(
        preamble_labels: Vec<String>,
        extra_markers: Vec<String>,
        bullet_glyph: char,
        light_emphasis: Vec<String>,
        strong_emphasis: Vec<String>,
    ) -> Result<Self, RuleError> {
        reject_blank("preamble_labels", &preamble_labels)?;
        reject_blank("extra_markers", &extra_markers)?;
        reject_blank("light_emphasis", &light_emphasis)?;
        reject_blank("strong_emphasis", &strong_emphasis)?;
        if bullet_glyph.is_whitespace() {
            return Err(RuleError::BulletGlyph(bullet_glyph.to_string()));
        }

        Ok(RuleSet {
            preamble_labels,
            extra_markers,
            bullet_glyph,
            light_emphasis,
            strong_emphasis,
        })
    }

    pub fn preamble_labels(&self) -> &[String] {
        &self.preamble_labels
    }

    pub fn extra_markers(&self) -> &[String] {
        &self.extra_markers
    }

    pub fn bullet_glyph(&self) -> char {
        self.bullet_glyph
    }

    pub fn light_emphasis(&self) -> &[String] {
        &self.light_emphasis
    }

    pub fn strong_emphasis(&self) -> &[String] {
        &self.strong_emphasis
    }
}

fn reject_blank(category: &'static str, entries: &[String]) -> Result<(), RuleError> {
    match entries.iter().position(|e| e.trim().is_empty()) {
        Some(index) => Err(RuleError::BlankEntry { category, index }),
        None => Ok(()),
    }
}

/// What happens to a body fragment still accumulating when input runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingFragment {
    /// Discard it. Matches the historical converter output.
    #[default]
    Drop,
    /// Emit it as a final paragraph.
    Flush,
}

/// Per-run knobs that are not part of the rule bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Number of logical preamble fields, title included.
    pub preamble_length: usize,
    /// Whether extra markers are recognised in the body.
    pub extras_enabled: bool,
    #[serde(default)]
    pub trailing_fragment: TrailingFragment,
}

impl ConvertOptions {
    /// Name, level/school, Classes, Casting Time, Range, Components, Duration.
    pub const DEFAULT_PREAMBLE_LENGTH: usize = 7;
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            preamble_length: Self::DEFAULT_PREAMBLE_LENGTH,
            extras_enabled: false,
            trailing_fragment: TrailingFragment::Drop,
        }
    }
}
