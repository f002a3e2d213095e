use crate::model::AgeRange;
use crate::parsing::values::{parse_age, parse_brl_amount};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `0 a 18 anos R$ 150,00`, `19 até 23 anos R$ 200,00`
static TABLE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:a|até)\s*(\d+)\s*anos\s*R?\$\s*([\d.,]+)")
        .expect("table range pattern is valid")
});

/// `59 anos+ R$ 450,00`, `59 anos > R$ 450,00`, `59 + anos R$ 450,00`
static SENIOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:anos\s*>|anos\s*\+|\+\s*anos)\s*R?\$\s*([\d.,]+)")
        .expect("senior pattern is valid")
});

/// Patterns tried only when neither TABLE_RANGE nor SENIOR found anything.
/// Matches accumulate across all three.
static FALLBACKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 30 anos: R$ 210,00
        r"(?i)(\d+)\s*anos?:?\s*R?\$\s*([\d.,]+)",
        // 30-39 anos: R$ 210,00
        r"(?i)(\d+)-(\d+)\s*anos?:?\s*R?\$\s*([\d.,]+)",
        r"(?i)(\d+)\s*(?:a|até)\s*(\d+)\s*anos\s*R\$\s*([\d.,]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("fallback age pattern is valid"))
    .collect()
});

/// Extract the age-banded price table from a text segment.
///
/// The result is sorted by `min_age`; ranges sharing a `min_age` keep the
/// order they were found in.
pub fn extract_age_ranges(text: &str) -> Vec<AgeRange> {
    let mut ranges: Vec<AgeRange> = TABLE_RANGE
        .captures_iter(text)
        .filter_map(|caps| bounded_range(&caps))
        .collect();

    ranges.extend(SENIOR.captures_iter(text).filter_map(|caps| {
        let min_age = parse_age(&caps[1])?;
        let price = price_or_skip(&caps[2])?;
        Some(AgeRange::open_ended(min_age, price))
    }));

    if ranges.is_empty() {
        for pattern in FALLBACKS.iter() {
            // group 0 + age + price
            let single_age = pattern.captures_len() == 3;
            for caps in pattern.captures_iter(text) {
                let range = if single_age {
                    single_age_range(&caps)
                } else {
                    bounded_range(&caps)
                };
                ranges.extend(range);
            }
        }
        if !ranges.is_empty() {
            tracing::debug!(count = ranges.len(), "age ranges found by fallback patterns");
        }
    }

    // Vec::sort_by_key is stable
    ranges.sort_by_key(|r| r.min_age);
    ranges
}

fn bounded_range(caps: &Captures) -> Option<AgeRange> {
    let min_age = parse_age(&caps[1])?;
    let max_age = parse_age(&caps[2])?;
    let price = price_or_skip(&caps[3])?;
    Some(AgeRange::bounded(min_age, max_age, price))
}

fn single_age_range(caps: &Captures) -> Option<AgeRange> {
    let age = parse_age(&caps[1])?;
    let price = price_or_skip(&caps[2])?;
    Some(AgeRange::bounded(age, age, price))
}

fn price_or_skip(raw: &str) -> Option<rust_decimal::Decimal> {
    let price = parse_brl_amount(raw);
    if price.is_none() {
        tracing::warn!(raw, "skipping age band with unparsable price");
    }
    price
}
