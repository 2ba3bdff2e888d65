//! Property-based tests for the word-wrap engine.
//! Lines respect the width budget unless they hold a single unbreakable
//! token, and the emitted text is always a prefix of the input.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]

use calendar_core::{wrap, ELLIPSIS};
use proptest::prelude::*;

fn mono(text: &str) -> u32 {
    text.chars().count() as u32 * 6
}

/// Lowercase words joined by spaces, occasionally by hyphens.
fn sentence() -> impl Strategy<Value = String> {
    let word = "[a-z]{1,12}";
    let sep = prop_oneof![4 => Just(" "), 1 => Just("-")];
    (word, prop::collection::vec((sep, word), 0..10)).prop_map(|(first, rest)| {
        let mut text = first;
        for (sep, word) in rest {
            text.push_str(sep);
            text.push_str(&word);
        }
        text
    })
}

/// Undo wrapping: drop the ellipsis, rejoin space breaks with a space and
/// hyphen breaks directly.
fn rejoin(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        if !text.is_empty() && !text.ends_with('-') {
            text.push(' ');
        }
        text.push_str(line.strip_suffix(ELLIPSIS).unwrap_or(line));
    }
    text
}

proptest! {
    #[test]
    fn never_exceeds_max_lines(text in sentence(), width in 6u32..240, max_lines in 0usize..4) {
        let lines = wrap(&text, width, max_lines, &mono);
        prop_assert!(lines.len() <= max_lines);
    }

    #[test]
    fn lines_fit_unless_single_token(text in sentence(), width in 6u32..240, max_lines in 1usize..4) {
        for line in wrap(&text, width, max_lines, &mono) {
            prop_assert!(
                mono(&line) <= width || !line.contains(' '),
                "{:?} is {}px wide, budget {}",
                line,
                mono(&line),
                width
            );
        }
    }

    #[test]
    fn output_is_prefix_of_input(text in sentence(), width in 6u32..240, max_lines in 1usize..4) {
        let lines = wrap(&text, width, max_lines, &mono);
        let joined = rejoin(&lines);
        prop_assert!(text.starts_with(&joined), "{:?} is not a prefix of {:?}", joined, text);
        prop_assert!(!lines.is_empty());
    }

    #[test]
    fn ellipsis_only_on_last_line(text in sentence(), width in 6u32..240, max_lines in 1usize..4) {
        let lines = wrap(&text, width, max_lines, &mono);
        if let Some((_, head)) = lines.split_last() {
            prop_assert!(head.iter().all(|line| !line.ends_with(ELLIPSIS)));
        }
    }

    #[test]
    fn fitting_text_is_untouched(text in sentence(), max_lines in 1usize..4) {
        let lines = wrap(&text, mono(&text), max_lines, &mono);
        prop_assert_eq!(lines, vec![text]);
    }
}

#[test]
fn festival_announcement_in_two_lines() {
    let lines = wrap("Harvest Festival Competition Announcement", 20 * 6, 2, &mono);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Harvest Festival");
    assert!(lines[1].ends_with(ELLIPSIS));
    assert!(mono(&lines[1]) <= 120);
}
