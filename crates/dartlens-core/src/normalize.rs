//! Company-name normalization heuristics.
//!
//! Raw company lists carry entity-designator boilerplate in inconsistent
//! positions: `(주)한국전자`, `한국전자 주식회사`, and `㈜한국전자` all refer
//! to the same registry entry. [`normalize`] strips the designator tokens and
//! all whitespace, producing the canonical comparison key used throughout the
//! pipeline. Two raw names denote the same company iff their normalized forms
//! are equal.

/// Entity-designator tokens removed during normalization.
///
/// Union of the markers stripped on both lookup paths: the parenthesized
/// markers, the single-glyph `㈜`, and the spelled-out corporation /
/// limited-company words.
pub const DESIGNATORS: [&str; 5] = ["(주)", "㈜", "주식회사", "유한회사", "(유)"];

/// Strips entity-designator tokens and whitespace from a raw company name.
///
/// Never fails: empty and already-clean input pass through unchanged.
/// Token removal runs to a fixpoint so the result is idempotent even when
/// stripping one token exposes another (`주식(주)회사` collapses fully).
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut name: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    loop {
        let mut next = name.clone();
        for token in DESIGNATORS {
            next = next.replace(token, "");
        }
        if next == name {
            return name;
        }
        name = next;
    }
}

/// Returns the distinct designator tokens present in a raw name.
///
/// Diagnostic only: the batch layer reports which tokens it stripped so a
/// caller can sanity-check the cleanup, it has no bearing on matching.
#[must_use]
pub fn stripped_designators(raw: &str) -> Vec<&'static str> {
    DESIGNATORS
        .iter()
        .copied()
        .filter(|token| raw.contains(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_parenthesized_marker() {
        assert_eq!(normalize("(주)한국전자"), "한국전자");
    }

    #[test]
    fn test_strips_spelled_out_designators() {
        assert_eq!(normalize("한국전자 주식회사"), "한국전자");
        assert_eq!(normalize("㈜한국전자"), "한국전자");
        assert_eq!(normalize("유한회사 서울상사"), "서울상사");
        assert_eq!(normalize("(유)서울상사"), "서울상사");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("한국 전자"), "한국전자");
        assert_eq!(normalize(" ( 주 ) 한국전자 "), "한국전자");
    }

    #[test]
    fn test_clean_and_empty_input_unchanged() {
        assert_eq!(normalize("한국전자"), "한국전자");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["(주)한국전자", "한국전자 주식회사", "주식(주)회사", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_stripped_designators_reports_distinct_tokens() {
        let tokens = stripped_designators("(주)한국전자 주식회사");
        assert!(tokens.contains(&"(주)"));
        assert!(tokens.contains(&"주식회사"));
        assert!(!tokens.contains(&"㈜"));

        assert!(stripped_designators("한국전자").is_empty());
    }
}
