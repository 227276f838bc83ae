//! Main module for tome library functionality

pub mod converter;
pub mod document;
pub mod emphasis;
pub mod markup;
pub mod paragraphs;
pub mod preamble;
pub mod pruning;
pub mod rules;
pub mod transforms;

pub use converter::Converter;
pub use document::Document;
pub use rules::{ConvertOptions, RuleError, RuleSet, TrailingFragment};
