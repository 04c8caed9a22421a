//! Complexity section - evaluates the group quorum.

use super::{GroupCounts, Rejection, SectionResult};
use crate::diagnostics::Diagnostics;
use crate::rules::{Group, RuleSet};

fn label(group: Group) -> &'static str {
    match group {
        Group::Lower => "Lowercase",
        Group::Upper => "Uppercase",
        Group::Number => "Number",
        Group::Symbol => "Symbol",
        Group::Whitespace => "Whitespace",
    }
}

/// Counts the groups whose requirement (>= 1) is met and passes when that
/// count reaches `complexity_required`. Each group leaves one diagnostic.
pub fn complexity_section(
    rules: &RuleSet,
    counts: &GroupCounts,
    diagnostics: &mut Diagnostics,
) -> SectionResult {
    let order = [
        Group::Lower,
        Group::Upper,
        Group::Number,
        Group::Symbol,
        Group::Whitespace,
    ];

    let mut met = 0;
    for group in order {
        let required = rules.required_groups.get(group);
        let observed = counts.get(group);
        if required >= 1 && observed >= required {
            diagnostics.push(format!("{} requirement met", label(group)));
            met += 1;
        } else {
            diagnostics.push(format!(
                "Required {} count {} : received {}",
                label(group).to_lowercase(),
                required,
                observed
            ));
        }
    }

    if met >= rules.complexity_required {
        Ok(())
    } else {
        Err(Rejection::ComplexityNotMet {
            required: rules.complexity_required,
            met,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(upper: i64, lower: i64, number: i64, symbol: i64, whitespace: i64) -> GroupCounts {
        GroupCounts {
            upper,
            lower,
            number,
            symbol,
            whitespace,
        }
    }

    #[test]
    fn test_complexity_quorum_met() {
        let mut log = Diagnostics::default();
        let result = complexity_section(&RuleSet::default(), &counts(2, 2, 2, 0, 0), &mut log);
        assert_eq!(result, Ok(()));
        assert_eq!(log.len(), 5);
        assert_eq!(log.entries().next(), Some("Lowercase requirement met"));
    }

    #[test]
    fn test_complexity_quorum_short() {
        let mut log = Diagnostics::default();
        let result = complexity_section(&RuleSet::default(), &counts(2, 2, 1, 1, 1), &mut log);
        assert_eq!(result, Err(Rejection::ComplexityNotMet { required: 3, met: 2 }));
        assert!(log.entries().any(|m| m == "Required number count 2 : received 1"));
    }

    #[test]
    fn test_complexity_ignores_disabled_groups() {
        let mut rules = RuleSet::default();
        rules.required_groups.upper = 0;
        rules.required_groups.lower = -1;
        let mut log = Diagnostics::default();
        let result = complexity_section(&rules, &counts(9, 9, 2, 2, 0), &mut log);
        assert_eq!(result, Err(Rejection::ComplexityNotMet { required: 3, met: 2 }));
    }

    #[test]
    fn test_complexity_zero_required_always_passes() {
        let rules = RuleSet {
            complexity_required: 0,
            ..RuleSet::default()
        };
        let mut log = Diagnostics::default();
        assert_eq!(
            complexity_section(&rules, &GroupCounts::default(), &mut log),
            Ok(())
        );
    }
}
