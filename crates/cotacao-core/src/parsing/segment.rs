use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Coarse table-header token: a plan label optionally followed by a code.
static HEADER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:plano|produto|código|registro)\s*(?:\d+(?:[-/]\d+)*)?")
        .expect("header token pattern is valid")
});

/// Any `R$ <amount>`; a section without one does not describe a plan.
pub(crate) static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\$\s*[\d.,]+").expect("currency pattern is valid"));

/// Sections this short (after trimming) are noise between adjacent headers.
const MIN_SECTION_CHARS: usize = 10;

/// Split document text into candidate plan sections.
///
/// The text is cut in front of every occurrence of a detected header token,
/// so each section starts with the header that introduced it. Sections of
/// 10 characters or fewer and sections without a currency amount are dropped.
pub fn split_into_sections(text: &str) -> Vec<&str> {
    let tokens = header_tokens(text);
    tracing::debug!(tokens = tokens.len(), "detected table-header tokens");

    let candidates = match build_split_pattern(&tokens) {
        Some(pattern) => split_before(text, &pattern),
        None => vec![text],
    };

    candidates
        .into_iter()
        .filter(|s| s.trim().chars().count() > MIN_SECTION_CHARS)
        .filter(|s| CURRENCY.is_match(s))
        .collect()
}

/// Distinct header token literals, compared case-insensitively, in order of
/// first appearance.
fn header_tokens(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    HEADER_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().trim_end())
        .filter(|t| seen.insert(t.to_lowercase()))
        .collect()
}

/// Case-insensitive alternation of the token literals.
///
/// Longer literals come first so "Plano 123" is not shadowed by "Plano".
/// Returns None for an empty token list: an empty alternation would match
/// at every position.
fn build_split_pattern(tokens: &[&str]) -> Option<Regex> {
    if tokens.is_empty() {
        return None;
    }
    let mut literals: Vec<&str> = tokens.to_vec();
    literals.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    let alternation = literals
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&alternation).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            // Escaped literals always compile; only the size limit can trip.
            tracing::warn!(error = %e, "header split pattern rejected, using whole text");
            None
        }
    }
}

fn split_before<'a>(text: &'a str, pattern: &Regex) -> Vec<&'a str> {
    let mut sections = Vec::new();
    let mut start = 0;
    for m in pattern.find_iter(text) {
        if m.start() > start {
            sections.push(&text[start..m.start()]);
        }
        start = m.start();
    }
    sections.push(&text[start..]);
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_tokens_deduplicated() {
        let tokens = header_tokens("Plano: A R$ 1,00 PLANO: B Código 123/4 plano");
        assert_eq!(tokens, vec!["Plano", "Código 123/4"]);
    }

    #[test]
    fn test_split_keeps_header_at_section_start() {
        let text = "Cotação Plano: Bronze 0 a 18 anos R$ 100,00 Plano: Prata 0 a 18 anos R$ 200,00";
        let sections = split_into_sections(text);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("Plano: Bronze"));
        assert!(sections[1].starts_with("Plano: Prata"));
    }

    #[test]
    fn test_sections_without_currency_dropped() {
        let text = "Produto: Informativo sem valores. Produto: Ouro 0 a 18 anos R$ 300,00";
        let sections = split_into_sections(text);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].contains("Ouro"));
    }

    #[test]
    fn test_short_sections_dropped() {
        let text = "Plano R$ 1 Plano: Ouro completo 0 a 18 anos R$ 300,00";
        let sections = split_into_sections(text);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].contains("Ouro"));
    }

    #[test]
    fn test_longer_token_matched_whole() {
        let pattern = build_split_pattern(&["Registro 1", "Registro 12"]).unwrap();
        let found: Vec<&str> = pattern
            .find_iter("Registro 12 tabela R$ 200,00")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["Registro 12"]);
    }

    #[test]
    fn test_prefix_tokens_split_into_own_sections() {
        let text = "Registro 1 tabela geral R$ 100,00 Registro 12 tabela geral R$ 200,00";
        let sections = split_into_sections(text);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("Registro 1 tabela"));
        assert!(sections[1].starts_with("Registro 12 tabela"));
    }

    #[test]
    fn test_no_header_tokens_yields_whole_text() {
        let text = "Tabela de valores: 0 a 18 anos R$ 150,00";
        assert_eq!(split_into_sections(text), vec![text]);
    }

    #[test]
    fn test_no_currency_anywhere_yields_nothing() {
        assert!(split_into_sections("Plano: Ouro. Produto: Prata. Registro ANS 123").is_empty());
    }

    #[test]
    fn test_sections_never_short_or_without_currency() {
        let text = "plano R$ 1 produto 12 registro 34 R$ 5,00 código 9 plano: X R$ 10,00 abc";
        for s in split_into_sections(text) {
            assert!(s.trim().chars().count() > 10);
            assert!(CURRENCY.is_match(s));
        }
    }
}
