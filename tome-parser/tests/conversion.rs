//! End-to-end conversion of verified entry fixtures

mod common;

use common::{converter, fixture};
use rstest::rstest;
use tome_parser::tome::TrailingFragment;

#[test]
fn test_alarm_preamble_merges_wrapped_components() {
    let doc = converter(true, TrailingFragment::Drop)
        .convert_str(&fixture("alarm.txt"));

    assert_eq!(
        doc.preamble(),
        [
            "__Alarm__",
            "_1st-level abjuration (ritual)_",
            "__Classes:__ Ranger, Wizard",
            "__Casting Time:__ 1 minute",
            "__Range:__ 30 feet",
            "__Components:__ V, S, M (a tiny bell and a piece of fine silver wire)",
            "__Duration:__ 8 hours",
        ]
    );
}

#[test]
fn test_alarm_body_with_extras() {
    let doc = converter(true, TrailingFragment::Drop)
        .convert_str(&fixture("alarm.txt"));

    assert_eq!(
        doc.paragraphs(),
        [
            "You set an alarm against unwanted intrusion. Choose a door, a window, or an area within range that is no larger than a 20-foot cube. Until the spell ends, an alarm alerts you whenever a __Tiny__ or larger creature touches or enters the _warded area_.",
            "When you cast the spell, you can designate creatures that won't set off the alarm. You also choose whether the alarm is mental or audible.",
            "__Mental Alarm.__ The alarm alerts you with a ping in your mind if you are within 1 mile of the _warded area_.",
            "__Audible Alarm.__ The alarm produces the sound of a hand bell for 10 seconds within 60 feet.",
        ]
    );
}

#[test]
fn test_lantern_bullets_pruning_and_trailing_flush() {
    let doc = converter(true, TrailingFragment::Flush)
        .convert_str(&fixture("lantern_of_dread.txt"));

    assert_eq!(
        doc.paragraphs(),
        [
            "A pale lantern appears in your hand. Each creature of your choice within range must make a Wisdom _saving throw_.",
            "On a failed save, a creature suffers one of the following effects of your choice:",
            "* it is __frightened__ of you until the end of its next turn;",
            "* it drops whatever it is holding.",
            "* its speed is halved.",
            "Note: the lantern cannot be extinguished by wind or water.",
            "__At Higher Levels.__ When you cast this spell using a spell slot of 4th level or higher, the radius increases by 10 feet for each slot level above 3rd.",
            "Any creature immune to being __frightened__ is unaffected",
        ]
    );
}

#[rstest]
#[case::dropped(TrailingFragment::Drop, 7)]
#[case::flushed(TrailingFragment::Flush, 8)]
fn test_trailing_fragment_policy(#[case] trailing: TrailingFragment, #[case] expected: usize) {
    let doc = converter(true, trailing)
        .convert_str(&fixture("lantern_of_dread.txt"));

    assert_eq!(doc.paragraphs().len(), expected);
}

#[test]
fn test_extra_markers_pass_through_when_disabled() {
    let doc = converter(false, TrailingFragment::Drop)
        .convert_str(&fixture("lantern_of_dread.txt"));

    let last = doc.paragraphs().last().unwrap();
    assert_eq!(
        last,
        "At Higher Levels. When you cast this spell using a spell slot of 4th level or higher, the radius increases by 10 feet for each slot level above 3rd."
    );
}

#[rstest]
#[case("alarm.txt")]
#[case("lantern_of_dread.txt")]
fn test_output_lines_are_preamble_then_paragraphs(#[case] name: &str) {
    let doc = converter(true, TrailingFragment::Drop)
        .convert_str(&fixture(name));

    let rendered = doc.to_string();
    let expected: String = doc
        .preamble()
        .iter()
        .chain(doc.paragraphs())
        .map(|line| format!("{}\n", line))
        .collect();
    assert_eq!(rendered, expected);
    assert_eq!(doc.preamble().len(), 7);
}
