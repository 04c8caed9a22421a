//! Rule sets and partial rule updates.

use std::fmt;
use std::str::FromStr;

/// Character groups that can count toward the complexity quorum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Upper,
    Lower,
    Number,
    Symbol,
    Whitespace,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::Upper,
        Group::Lower,
        Group::Number,
        Group::Symbol,
        Group::Whitespace,
    ];
}

/// Minimum occurrence count per group. A count <= 0 keeps the group out
/// of the quorum. The five groups are fixed fields, so none can be added
/// or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredGroups {
    pub upper: i64,
    pub lower: i64,
    pub number: i64,
    pub symbol: i64,
    pub whitespace: i64,
}

impl RequiredGroups {
    pub fn get(&self, group: Group) -> i64 {
        match group {
            Group::Upper => self.upper,
            Group::Lower => self.lower,
            Group::Number => self.number,
            Group::Symbol => self.symbol,
            Group::Whitespace => self.whitespace,
        }
    }

    pub fn set(&mut self, group: Group, count: i64) {
        match group {
            Group::Upper => self.upper = count,
            Group::Lower => self.lower = count,
            Group::Number => self.number = count,
            Group::Symbol => self.symbol = count,
            Group::Whitespace => self.whitespace = count,
        }
    }
}

impl Default for RequiredGroups {
    fn default() -> Self {
        Self {
            upper: 2,
            lower: 2,
            number: 2,
            symbol: 2,
            whitespace: 2,
        }
    }
}

/// Complete configuration for one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Ignored if < 1.
    pub min_length: i64,
    /// Ignored if < 1 or < `min_length`. Exclusive upper bound.
    pub max_length: i64,
    pub complexity_required: i64,
    pub allow_whitespace: bool,
    pub allow_symbols: bool,
    pub allow_numbers: bool,
    /// Input is lowercased before checking and uppercase is never counted.
    pub ignore_case: bool,
    pub required_groups: RequiredGroups,
    /// Case-insensitive consecutive sequences rejected anywhere in the input.
    pub disallowed: Vec<String>,
    pub debug: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: -1,
            complexity_required: 3,
            allow_whitespace: true,
            allow_symbols: true,
            allow_numbers: true,
            ignore_case: false,
            required_groups: RequiredGroups::default(),
            disallowed: Vec::new(),
            debug: false,
        }
    }
}

/// Recognized configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    MinLength,
    MaxLength,
    ComplexityRequired,
    AllowWhitespaces,
    AllowSymbols,
    AllowNumbers,
    IgnoreCase,
    Upper,
    Lower,
    Number,
    Symbol,
    Whitespaces,
    Disallowed,
    Debug,
}

impl RuleKey {
    pub const ALL: [RuleKey; 14] = [
        RuleKey::MinLength,
        RuleKey::MaxLength,
        RuleKey::ComplexityRequired,
        RuleKey::AllowWhitespaces,
        RuleKey::AllowSymbols,
        RuleKey::AllowNumbers,
        RuleKey::IgnoreCase,
        RuleKey::Upper,
        RuleKey::Lower,
        RuleKey::Number,
        RuleKey::Symbol,
        RuleKey::Whitespaces,
        RuleKey::Disallowed,
        RuleKey::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKey::MinLength => "MIN_LENGTH",
            RuleKey::MaxLength => "MAX_LENGTH",
            RuleKey::ComplexityRequired => "COMPLEXITY_REQUIRED",
            RuleKey::AllowWhitespaces => "ALLOW_WHITESPACES",
            RuleKey::AllowSymbols => "ALLOW_SYMBOLS",
            RuleKey::AllowNumbers => "ALLOW_NUMBERS",
            RuleKey::IgnoreCase => "IGNORE_CASE",
            RuleKey::Upper => "UPPER",
            RuleKey::Lower => "LOWER",
            RuleKey::Number => "NUMBER",
            RuleKey::Symbol => "SYMBOL",
            RuleKey::Whitespaces => "WHITESPACES",
            RuleKey::Disallowed => "DISALLOWED",
            RuleKey::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

/// Partial update to a [`RuleSet`]. Absent fields leave the target untouched;
/// denylist entries are merged into the existing list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleUpdate {
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub complexity_required: Option<i64>,
    pub allow_whitespace: Option<bool>,
    pub allow_symbols: Option<bool>,
    pub allow_numbers: Option<bool>,
    pub ignore_case: Option<bool>,
    pub upper: Option<i64>,
    pub lower: Option<i64>,
    pub number: Option<i64>,
    pub symbol: Option<i64>,
    pub whitespace: Option<i64>,
    pub disallowed: Vec<String>,
    pub debug: Option<bool>,
}

impl RuleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, value: i64) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: i64) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn complexity_required(mut self, value: i64) -> Self {
        self.complexity_required = Some(value);
        self
    }

    pub fn allow_whitespace(mut self, value: bool) -> Self {
        self.allow_whitespace = Some(value);
        self
    }

    pub fn allow_symbols(mut self, value: bool) -> Self {
        self.allow_symbols = Some(value);
        self
    }

    pub fn allow_numbers(mut self, value: bool) -> Self {
        self.allow_numbers = Some(value);
        self
    }

    pub fn ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = Some(value);
        self
    }

    pub fn group(mut self, group: Group, count: i64) -> Self {
        let slot = match group {
            Group::Upper => &mut self.upper,
            Group::Lower => &mut self.lower,
            Group::Number => &mut self.number,
            Group::Symbol => &mut self.symbol,
            Group::Whitespace => &mut self.whitespace,
        };
        *slot = Some(count);
        self
    }

    pub fn disallow<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disallowed.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.debug = Some(value);
        self
    }

    /// Builds an update from string key/value pairs such as a parsed query
    /// string. Unknown keys and values that do not parse are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut update = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key.parse::<RuleKey>() {
                Ok(key) => update.set_from_str(key, value),
                Err(()) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Ignoring unknown rule key {}", key);
                }
            }
        }
        update
    }

    /// Reads `SANITY_<KEY>` environment variables, e.g. `SANITY_MIN_LENGTH=12`.
    pub fn from_env() -> Self {
        Self::from_pairs(RuleKey::ALL.into_iter().filter_map(|key| {
            std::env::var(format!("SANITY_{}", key.as_str()))
                .ok()
                .map(|value| (key.as_str(), value))
        }))
    }

    fn set_from_str(&mut self, key: RuleKey, value: &str) {
        let value = value.trim();
        let applied = match key {
            RuleKey::MinLength => parse_int(value).map(|v| self.min_length = Some(v)),
            RuleKey::MaxLength => parse_int(value).map(|v| self.max_length = Some(v)),
            RuleKey::ComplexityRequired => {
                parse_int(value).map(|v| self.complexity_required = Some(v))
            }
            RuleKey::AllowWhitespaces => parse_bool(value).map(|v| self.allow_whitespace = Some(v)),
            RuleKey::AllowSymbols => parse_bool(value).map(|v| self.allow_symbols = Some(v)),
            RuleKey::AllowNumbers => parse_bool(value).map(|v| self.allow_numbers = Some(v)),
            RuleKey::IgnoreCase => parse_bool(value).map(|v| self.ignore_case = Some(v)),
            RuleKey::Upper => parse_int(value).map(|v| self.upper = Some(v)),
            RuleKey::Lower => parse_int(value).map(|v| self.lower = Some(v)),
            RuleKey::Number => parse_int(value).map(|v| self.number = Some(v)),
            RuleKey::Symbol => parse_int(value).map(|v| self.symbol = Some(v)),
            RuleKey::Whitespaces => parse_int(value).map(|v| self.whitespace = Some(v)),
            RuleKey::Disallowed => {
                self.disallowed.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|entry| !entry.is_empty())
                        .map(str::to_string),
                );
                Some(())
            }
            RuleKey::Debug => parse_bool(value).map(|v| self.debug = Some(v)),
        };

        if applied.is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring unparsable value {:?} for {}", value, key);
        }
    }

    /// Applies the present fields to `rules`.
    pub fn apply(&self, rules: &mut RuleSet) {
        if let Some(v) = self.min_length {
            rules.min_length = v;
        }
        if let Some(v) = self.max_length {
            rules.max_length = v;
        }
        if let Some(v) = self.complexity_required {
            rules.complexity_required = v;
        }
        if let Some(v) = self.allow_whitespace {
            rules.allow_whitespace = v;
        }
        if let Some(v) = self.allow_numbers {
            rules.allow_numbers = v;
        }
        if let Some(v) = self.allow_symbols {
            rules.allow_symbols = v;
        }
        if let Some(v) = self.ignore_case {
            rules.ignore_case = v;
        }

        let groups = [
            (Group::Upper, self.upper),
            (Group::Lower, self.lower),
            (Group::Number, self.number),
            (Group::Symbol, self.symbol),
            (Group::Whitespace, self.whitespace),
        ];
        for (group, count) in groups {
            if let Some(count) = count {
                rules.required_groups.set(group, count);
            }
        }

        for entry in &self.disallowed {
            let normalized = normalize_entry(entry);
            if !rules
                .disallowed
                .iter()
                .any(|existing| normalize_entry(existing) == normalized)
            {
                rules.disallowed.push(entry.clone());
            }
        }

        if let Some(v) = self.debug {
            rules.debug = v;
        }
    }
}

/// Form used for matching: trimmed and lowercased one codepoint at a time,
/// the same fold applied to input characters.
pub(crate) fn normalize_entry(entry: &str) -> String {
    entry.trim().chars().flat_map(char::to_lowercase).collect()
}

fn parse_int(value: &str) -> Option<i64> {
    value.parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
