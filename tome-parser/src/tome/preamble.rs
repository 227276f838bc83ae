//! Preamble parsing
//!
//! The preamble is the fixed-position header of an entry:
//!
//!     Alarm                              <- field 0, title (strong)
//!     1st-level abjuration (ritual)      <- field 1, type line (light)
//!     Classes: Ranger,                   <- field 2, labeled attribute...
//!         Wizard                         <-   ...wrapped onto a second line
//!     Casting Time: 1 minute             <- field 3
//!
//! `preamble_length` counts logical fields, not physical lines. Wrapped lines are
//! merged back into their field before tagging: a field keeps absorbing lines until
//! the next line opens with a configured label. The title and the final field never
//! absorb anything, the title because it is always one line, the final field
//! because no label follows it and it would otherwise swallow the body.
//!
//! Running out of input before `preamble_length` fields are built is not an error;
//! the shorter preamble is returned as is.

use crate::tome::markup;
use tracing::trace;

/// Tagged preamble fields plus the number of raw lines they were built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    pub fields: Vec<String>,
    /// Index of the first body line.
    pub consumed: usize,
}

/// First label, in list order, that `text` starts with.
pub fn matching_label<'a>(text: &str, labels: &'a [String]) -> Option<&'a str> {
    labels
        .iter()
        .map(String::as_str)
        .find(|label| text.starts_with(label))
}

/// Merge and tag the leading `preamble_length` fields of `lines`.
pub fn parse_preamble<S: AsRef<str>>(
    lines: &[S],
    preamble_length: usize,
    labels: &[String],
) -> Preamble {
    let mut fields = Vec::with_capacity(preamble_length);
    let mut cursor = 0;

    while fields.len() < preamble_length && cursor < lines.len() {
        let index = fields.len();
        let single_line = index == 0 || index + 1 == preamble_length;

        let (text, next) = if single_line {
            (lines[cursor].as_ref().trim().to_string(), cursor + 1)
        } else {
            merge_field(lines, cursor, labels)
        };
        trace!(field = index, lines = next - cursor, "merged preamble field");

        fields.push(tag_field(index, &text, labels));
        cursor = next;
    }

    Preamble {
        fields,
        consumed: cursor,
    }
}

/// Join `lines[start]` with every following line up to, not including, the next
/// one that opens with a label. Returns the joined text and the index after it.
fn merge_field<S: AsRef<str>>(lines: &[S], start: usize, labels: &[String]) -> (String, usize) {
    let mut parts = vec![lines[start].as_ref().trim()];
    let mut next = start + 1;

    while let Some(line) = lines.get(next) {
        let line = line.as_ref().trim();
        if matching_label(line, labels).is_some() {
            break;
        }
        if !line.is_empty() {
            parts.push(line);
        }
        next += 1;
    }

    (parts.join(" "), next)
}

/// Apply the single markup operation a field receives.
fn tag_field(index: usize, text: &str, labels: &[String]) -> String {
    match index {
        0 => markup::strong(text),
        1 => markup::light(text),
        _ => match matching_label(text, labels) {
            // Only the first match is wrapped, so labels sharing a prefix never
            // produce a second copy of the field.
            Some(label) => format!("{}{}", markup::strong(label), &text[label.len()..]),
            None => text.to_string(),
        },
    }
}
