//! Rule registry - the current default rule set plus named snapshots.

use std::collections::BTreeMap;

use crate::diagnostics::Diagnostics;
use crate::rules::{RuleSet, RuleUpdate};

/// Holds the default rule set and the named rule sets saved by
/// [`Registry::configure`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    current_default: RuleSet,
    saved: BTreeMap<String, RuleSet>,
}

impl Registry {
    pub fn new(default_rules: RuleSet) -> Self {
        Self {
            current_default: default_rules,
            saved: BTreeMap::new(),
        }
    }

    /// Applies `update`.
    ///
    /// Without a name the default rule set is changed in place. With a name,
    /// the update is applied to a copy of the saved rule (or of the default
    /// when the name is new) and stored under that name; the default is
    /// left as it was.
    pub fn configure(&mut self, update: &RuleUpdate, rule_name: Option<&str>) {
        match rule_name {
            None => update.apply(&mut self.current_default),
            Some(name) => {
                let mut scratch = self
                    .saved
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| self.current_default.clone());
                update.apply(&mut scratch);
                self.saved.insert(name.to_string(), scratch);
            }
        }
    }

    /// Looks up the rule set for a check. A name that was never configured
    /// falls back to the default and leaves a note in `diagnostics`.
    pub fn resolve(&self, rule_name: Option<&str>, diagnostics: &mut Diagnostics) -> &RuleSet {
        let Some(name) = rule_name else {
            return &self.current_default;
        };

        match self.saved.get(name) {
            Some(rules) => rules,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rule {} doesn't exist, falling back to default", name);
                diagnostics.push(format!(
                    "Rule {name} doesn't exist. Falling back to default."
                ));
                &self.current_default
            }
        }
    }

    pub fn default_rules(&self) -> &RuleSet {
        &self.current_default
    }

    pub fn get(&self, rule_name: &str) -> Option<&RuleSet> {
        self.saved.get(rule_name)
    }

    /// Saved rule sets ordered by name.
    pub fn saved_rules(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.saved.iter().map(|(name, rules)| (name.as_str(), rules))
    }
}
