//! Character section - counts groups and enforces the allow flags.

use super::{Rejection, SectionResult};
use crate::classify::{is_digit, is_lower, is_upper, whitespace_name};
use crate::rules::{Group, RuleSet};

/// Observed occurrences of each group in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounts {
    pub upper: i64,
    pub lower: i64,
    pub number: i64,
    pub symbol: i64,
    pub whitespace: i64,
}

impl GroupCounts {
    pub fn get(&self, group: Group) -> i64 {
        match group {
            Group::Upper => self.upper,
            Group::Lower => self.lower,
            Group::Number => self.number,
            Group::Symbol => self.symbol,
            Group::Whitespace => self.whitespace,
        }
    }
}

/// Scans every codepoint, counting groups and failing on the first
/// number, whitespace or symbol the rule set does not allow.
///
/// The lower/upper/number/whitespace tests are independent, so one
/// codepoint may bump several counters. A codepoint matched by none of them
/// is a symbol.
pub fn character_section(rules: &RuleSet, chars: &[char]) -> SectionResult<GroupCounts> {
    let mut counts = GroupCounts::default();

    for &c in chars {
        let mut is_symbol = true;

        if is_lower(c) {
            counts.lower += 1;
            is_symbol = false;
        }

        if !rules.ignore_case && is_upper(c) {
            counts.upper += 1;
            is_symbol = false;
        }

        if is_digit(c) {
            if !rules.allow_numbers {
                return Err(Rejection::NumberNotAllowed(c));
            }
            counts.number += 1;
            is_symbol = false;
        }

        if let Some(name) = whitespace_name(c) {
            if !rules.allow_whitespace {
                return Err(Rejection::WhitespaceNotAllowed(name));
            }
            counts.whitespace += 1;
            is_symbol = false;
        }

        if is_symbol {
            if !rules.allow_symbols {
                return Err(Rejection::SymbolNotAllowed(c));
            }
            counts.symbol += 1;
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_character_section_counts() {
        let counts = character_section(&RuleSet::default(), &chars("Str0ng! Pass")).unwrap();
        assert_eq!(
            counts,
            GroupCounts {
                upper: 2,
                lower: 7,
                number: 1,
                symbol: 1,
                whitespace: 1,
            }
        );
    }

    #[test]
    fn test_character_section_numbers_disallowed() {
        let rules = RuleSet {
            allow_numbers: false,
            ..RuleSet::default()
        };
        assert_eq!(
            character_section(&rules, &chars("abc4def5")),
            Err(Rejection::NumberNotAllowed('4'))
        );
    }

    #[test]
    fn test_character_section_whitespace_disallowed() {
        let rules = RuleSet {
            allow_whitespace: false,
            ..RuleSet::default()
        };
        assert_eq!(
            character_section(&rules, &chars("ab\u{00A0}cd")),
            Err(Rejection::WhitespaceNotAllowed("NO-BREAK SPACE"))
        );
    }

    #[test]
    fn test_character_section_symbols_disallowed() {
        let rules = RuleSet {
            allow_symbols: false,
            ..RuleSet::default()
        };
        assert_eq!(
            character_section(&rules, &chars("abc#")),
            Err(Rejection::SymbolNotAllowed('#'))
        );
    }

    #[test]
    fn test_character_section_ignore_case_treats_uppercase_as_symbol() {
        let rules = RuleSet {
            ignore_case: true,
            ..RuleSet::default()
        };
        let counts = character_section(&rules, &chars("AB")).unwrap();
        assert_eq!(counts.upper, 0);
        assert_eq!(counts.symbol, 2);
    }

    #[test]
    fn test_character_section_uncased_letters_count_as_symbols() {
        let counts = character_section(&RuleSet::default(), &chars("日本")).unwrap();
        assert_eq!(counts.symbol, 2);
        assert_eq!(counts.lower + counts.upper, 0);
    }
}
