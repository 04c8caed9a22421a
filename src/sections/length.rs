//! Length section - checks the configured length bounds.

use super::{Rejection, SectionResult};
use crate::rules::RuleSet;

/// Checks the input length, in codepoints, against the rule set.
///
/// `min_length` applies when >= 1. `max_length` applies when >= 1 and not
/// below `min_length`, and is exclusive: an input of exactly `max_length`
/// codepoints is rejected.
pub fn length_section(rules: &RuleSet, length: usize) -> SectionResult {
    let len = i64::try_from(length).unwrap_or(i64::MAX);

    if rules.min_length >= 1 && len < rules.min_length {
        return Err(Rejection::TooShort {
            length,
            min: rules.min_length,
        });
    }
    if rules.max_length >= 1 && rules.max_length >= rules.min_length && len >= rules.max_length {
        return Err(Rejection::TooLong {
            length,
            max: rules.max_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(min_length: i64, max_length: i64) -> RuleSet {
        RuleSet {
            min_length,
            max_length,
            ..RuleSet::default()
        }
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            length_section(&rules(8, -1), 7),
            Err(Rejection::TooShort { length: 7, min: 8 })
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&rules(8, -1), 8), Ok(()));
    }

    #[test]
    fn test_length_section_unconstrained_min() {
        assert_eq!(length_section(&rules(0, -1), 0), Ok(()));
        assert_eq!(length_section(&rules(-5, -1), 1), Ok(()));
    }

    #[test]
    fn test_length_section_max_is_exclusive() {
        assert_eq!(
            length_section(&rules(8, 8), 8),
            Err(Rejection::TooLong { length: 8, max: 8 })
        );
        assert_eq!(length_section(&rules(4, 8), 7), Ok(()));
    }

    #[test]
    fn test_length_section_max_below_min_is_ignored() {
        assert_eq!(length_section(&rules(10, 5), 50), Ok(()));
    }
}
