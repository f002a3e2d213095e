use regex::Regex;
use std::collections::HashMap;

/// Sum of non-overlapping match counts of every pattern in `text`.
pub fn score(text: &str, patterns: &[Regex]) -> usize {
    patterns.iter().map(|p| p.find_iter(text).count()).sum()
}

/// Pick the category with the most pattern evidence in `text`.
///
/// `patterns` is keyed by lower-cased category name. A category without an
/// entry is scored against its own literal lower-cased name. Only a strictly
/// higher score replaces the current best, so the earliest category wins ties
/// and the first category is returned when nothing matches.
pub fn classify<'a>(
    text: &str,
    categories: &'a [String],
    patterns: &HashMap<String, Vec<Regex>>,
) -> Option<&'a str> {
    let text = text.to_lowercase();
    let mut best = categories.first()?.as_str();
    let mut max_score = 0;

    for category in categories {
        let key = category.to_lowercase();
        let category_score = match patterns.get(&key) {
            Some(category_patterns) => score(&text, category_patterns),
            None => text.matches(key.as_str()).count(),
        };

        if category_score > max_score {
            max_score = category_score;
            best = category;
        }
    }

    Some(best)
}
