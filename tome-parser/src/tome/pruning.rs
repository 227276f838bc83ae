//! Duplicate fragment removal
//!
//! Line-merge boundaries occasionally capture a short fragment as its own paragraph
//! and then repeat it in full inside the next one. A paragraph is dropped when it
//! occurs verbatim in its immediate successor. The last paragraph always survives,
//! and comparisons are made against the unpruned sequence.

pub fn prune_duplicates(paragraphs: Vec<String>) -> Vec<String> {
    let keep: Vec<bool> = paragraphs
        .windows(2)
        .map(|pair| !pair[1].contains(pair[0].as_str()))
        .chain(std::iter::once(true))
        .collect();

    paragraphs
        .into_iter()
        .zip(keep)
        .filter_map(|(paragraph, keep)| keep.then_some(paragraph))
        .collect()
}
