//! Individual transformation stages
//!
//! One stage per core component. Each implements [`Runnable`](super::Runnable)
//! and logs what it produced at debug level.

pub mod annotation;
pub mod assembly;
pub mod preamble;
pub mod pruning;

pub use annotation::EmphasisAnnotation;
pub use assembly::ParagraphAssembly;
pub use preamble::PreambleParsing;
pub use pruning::DuplicatePruning;
