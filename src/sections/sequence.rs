//! Sequence section - rejects input containing a denylisted run of characters.

use super::{Rejection, SectionResult};
use crate::classify::fold_eq;
use crate::rules::{normalize_entry, RuleSet};

/// Checks each denylist entry (trimmed, lowercased) against the input.
/// Blank entries are skipped.
pub fn sequence_section(rules: &RuleSet, chars: &[char]) -> SectionResult {
    for entry in &rules.disallowed {
        let entry = normalize_entry(entry);
        if entry.is_empty() {
            continue;
        }

        let entry_chars: Vec<char> = entry.chars().collect();
        if contains_sequence(chars, &entry_chars) {
            return Err(Rejection::DisallowedSequence(entry));
        }
    }
    Ok(())
}

/// Single left-to-right scan for `entry` as a consecutive run in `input`,
/// comparing case-insensitively. `entry` must already be lowercased.
///
/// A mismatch restarts matching from the first entry character at the
/// *next* input character, without re-testing the one that broke the run.
/// Self-overlapping entries can therefore be missed: `"ab"` is not found in
/// `"aab"`.
pub fn contains_sequence(input: &[char], entry: &[char]) -> bool {
    if entry.is_empty() {
        return false;
    }

    let mut index = 0;
    let mut matched = 0;

    for &c in input {
        if fold_eq(c, entry[index]) {
            matched += 1;
            if index + 1 == entry.len() {
                break;
            }
            index += 1;
        } else {
            matched = 0;
            index = 0;
        }
    }

    matched == entry.len()
}
