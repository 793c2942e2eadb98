use super::MatchType;
use compact_str::CompactString;

/// Keyword text and match type after the legacy broad match fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKeyword {
    pub keyword_text: Option<CompactString>,
    pub match_type: MatchType,
}

/// Reclassifies legacy "broad match modifier" keywords.
///
/// A `BROAD` keyword whose text starts with `+` becomes [`MatchType::BroadLegacy`], and
/// every `+` that directly precedes a word character is removed from its text in a
/// single pass. Any other input passes through unchanged.
#[must_use]
pub fn normalize_keyword(raw_match_type: Option<&str>, raw_keyword_text: Option<&str>) -> NormalizedKeyword {
    match (raw_match_type, raw_keyword_text) {
        (Some("BROAD"), Some(text)) if text.starts_with('+') => NormalizedKeyword {
            keyword_text: Some(strip_modifiers(text)),
            match_type: MatchType::BroadLegacy,
        },
        _ => NormalizedKeyword {
            keyword_text: raw_keyword_text.map(CompactString::from),
            match_type: MatchType::from_label(raw_match_type),
        },
    }
}

fn strip_modifiers(text: &str) -> CompactString {
    let mut result = CompactString::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '+' && chars.peek().is_some_and(|&next| is_word_char(next)) {
            continue;
        }
        result.push(c);
    }
    result
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
