//! Shared helpers for tome-parser integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tome_parser::tome::{ConvertOptions, Converter, RuleSet, TrailingFragment};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", name, e))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Rules matching the fixture entries.
pub fn spell_rules() -> RuleSet {
    RuleSet::new(
        owned(&["Classes:", "Casting Time:", "Range:", "Components:", "Duration:"]),
        owned(&["Mental Alarm.", "Audible Alarm.", "At Higher Levels."]),
        '•',
        owned(&["saving throw", "warded area"]),
        owned(&["Tiny", "frightened"]),
    )
    .expect("fixture rules are valid")
}

pub fn converter(extras_enabled: bool, trailing_fragment: TrailingFragment) -> Converter {
    Converter::new(
        spell_rules(),
        ConvertOptions {
            preamble_length: 7,
            extras_enabled,
            trailing_fragment,
        },
    )
}
