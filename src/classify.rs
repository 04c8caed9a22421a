//! Codepoint classification.
//!
//! Letters are classified through their case mappings, digits are ASCII
//! only, whitespace comes from a named table so rejections can say which
//! kind of space was found. Anything else is a symbol.

/// Named whitespace codepoints recognized by the checker.
pub const WHITESPACE_TABLE: &[(&str, char)] = &[
    ("CHARACTER TABULATION", '\u{0009}'),
    ("LINE FEED", '\u{000A}'),
    ("LINE TABULATION", '\u{000B}'),
    ("FORM FEED", '\u{000C}'),
    ("CARRIAGE RETURN", '\u{000D}'),
    ("SPACE", '\u{0020}'),
    ("NEXT LINE", '\u{0085}'),
    ("NO-BREAK SPACE", '\u{00A0}'),
    ("OGHAM SPACE MARK", '\u{1680}'),
    ("EN QUAD", '\u{2000}'),
    ("EM QUAD", '\u{2001}'),
    ("EN SPACE", '\u{2002}'),
    ("EM SPACE", '\u{2003}'),
    ("THREE-PER-EM SPACE", '\u{2004}'),
    ("FOUR-PER-EM SPACE", '\u{2005}'),
    ("SIX-PER-EM SPACE", '\u{2006}'),
    ("FIGURE SPACE", '\u{2007}'),
    ("PUNCTUATION SPACE", '\u{2008}'),
    ("THIN SPACE", '\u{2009}'),
    ("HAIR SPACE", '\u{200A}'),
    ("ZERO WIDTH SPACE", '\u{200B}'),
    ("LINE SEPARATOR", '\u{2028}'),
    ("PARAGRAPH SEPARATOR", '\u{2029}'),
    ("NARROW NO-BREAK SPACE", '\u{202F}'),
    ("MEDIUM MATHEMATICAL SPACE", '\u{205F}'),
    ("IDEOGRAPHIC SPACE", '\u{3000}'),
];

/// Class of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Whitespace,
    Symbol,
}

/// Lowercase side of the case table: a lowercase letter with an uppercase mapping.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase() && has_case_pair(c)
}

/// Uppercase side of the case table.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase() && has_case_pair(c)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Name of the whitespace codepoint, if it is one.
pub fn whitespace_name(c: char) -> Option<&'static str> {
    WHITESPACE_TABLE
        .iter()
        .find(|(_, ws)| *ws == c)
        .map(|(name, _)| *name)
}

pub fn is_whitespace(c: char) -> bool {
    whitespace_name(c).is_some()
}

/// Classifies a codepoint. Order matters: lower, upper, digit,
/// whitespace, then symbol as the fallback. With `ignore_case` the upper
/// table is never consulted.
pub fn classify(c: char, ignore_case: bool) -> CharClass {
    if is_lower(c) {
        CharClass::Lower
    } else if !ignore_case && is_upper(c) {
        CharClass::Upper
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_whitespace(c) {
        CharClass::Whitespace
    } else {
        CharClass::Symbol
    }
}

/// Case-insensitive comparison of one input codepoint against an
/// already folded target codepoint.
pub fn fold_eq(c: char, folded: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(folded) && lower.next().is_none()
}

fn has_case_pair(c: char) -> bool {
    let mut upper = c.to_uppercase();
    let mut lower = c.to_lowercase();
    let single_upper = upper.next().filter(|_| upper.next().is_none());
    let single_lower = lower.next().filter(|_| lower.next().is_none());
    match (single_lower, single_upper) {
        (Some(l), Some(u)) => l != u,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ascii() {
        assert_eq!(classify('a', false), CharClass::Lower);
        assert_eq!(classify('Z', false), CharClass::Upper);
        assert_eq!(classify('7', false), CharClass::Digit);
        assert_eq!(classify(' ', false), CharClass::Whitespace);
        assert_eq!(classify('!', false), CharClass::Symbol);
    }

    #[test]
    fn test_classify_unicode_letters() {
        assert_eq!(classify('é', false), CharClass::Lower);
        assert_eq!(classify('Ж', false), CharClass::Upper);
        assert_eq!(classify('ω', false), CharClass::Lower);
    }

    #[test]
    fn test_classify_ignore_case_skips_upper() {
        assert_eq!(classify('Q', true), CharClass::Symbol);
        assert_eq!(classify('q', true), CharClass::Lower);
    }

    #[test]
    fn test_uncased_letters_are_symbols() {
        // No case pair in the table
        assert_eq!(classify('中', false), CharClass::Symbol);
        assert_eq!(classify('ß', false), CharClass::Symbol);
    }

    #[test]
    fn test_non_ascii_digits_are_not_digits() {
        assert_eq!(classify('٣', false), CharClass::Symbol);
    }

    #[test]
    fn test_whitespace_names() {
        assert_eq!(whitespace_name(' '), Some("SPACE"));
        assert_eq!(whitespace_name('\u{3000}'), Some("IDEOGRAPHIC SPACE"));
        assert_eq!(whitespace_name('\t'), Some("CHARACTER TABULATION"));
        assert_eq!(whitespace_name('x'), None);
    }

    #[test]
    fn test_fold_eq() {
        assert!(fold_eq('A', 'a'));
        assert!(fold_eq('a', 'a'));
        assert!(!fold_eq('b', 'a'));
        assert!(fold_eq('É', 'é'));
    }
}
