//! Markup delimiters and punctuation rules
//!
//! The output format only knows two kinds of emphasis: light (`_text_`) and strong
//! (`__text__`). Everything else in the source is passed through unchanged.

/// Delimiter placed on each side of lightly emphasized text.
pub const LIGHT: &str = "_";

/// Delimiter placed on each side of strongly emphasized text.
pub const STRONG: &str = "__";

/// Plain-text replacement for the configured bullet glyph.
pub const BULLET: char = '*';

/// Characters that mark a paragraph as complete.
pub const TERMINAL_PUNCTUATION: [char; 4] = ['.', '!', '?', ':'];

/// Emphasis strength of a phrase rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Light,
    Strong,
}

impl Strength {
    pub fn delimiter(self) -> &'static str {
        match self {
            Strength::Light => LIGHT,
            Strength::Strong => STRONG,
        }
    }

    pub fn wrap(self, text: &str) -> String {
        let d = self.delimiter();
        format!("{d}{text}{d}")
    }
}

pub fn strong(text: &str) -> String {
    Strength::Strong.wrap(text)
}

pub fn light(text: &str) -> String {
    Strength::Light.wrap(text)
}

/// True when `text`, ignoring trailing whitespace, ends in terminal punctuation.
pub fn ends_with_terminal(text: &str) -> bool {
    text.trim_end()
        .chars()
        .next_back()
        .is_some_and(|c| TERMINAL_PUNCTUATION.contains(&c))
}

/// Remove every emphasis delimiter from `text`.
///
/// Underscores are only ever introduced as delimiters, so this is exact for
/// source text that contains no underscores of its own.
pub fn strip_markup(text: &str) -> String {
    text.replace(LIGHT, "")
}
