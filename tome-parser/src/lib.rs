//! # tome
//!
//! Converts flat, line-oriented transcriptions of tabletop reference entries (spells,
//! items, feats) into lightly marked-up text.
//!
//! File Layout
//!
//! src/tome
//!   ├── rules          Rule bundle and conversion options
//!   ├── markup         Delimiters and punctuation shared by every stage
//!   ├── preamble       Title, type line and labeled attribute fields
//!   ├── paragraphs     Body reflow, bullets and extra markers
//!   ├── pruning        Duplicate fragment removal
//!   ├── emphasis       Phrase level emphasis
//!   ├── transforms     Runnable/Transform composition and the pipeline stages
//!   └── converter      Entry point wiring the stages together
//!
//! The crate is a pure lib: it never touches the file system. Reading sources and
//! writing results is left to the caller (see tome-cli).

pub mod tome;
