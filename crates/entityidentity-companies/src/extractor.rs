//! Heuristic company-name extraction from free text
//! (`companies/companyextractor.py::extract_companies_from_text`).

use entityidentity_countries::{country_identifier, CodeSystem};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::resolver::{resolve_company, CompanyMatch};
use crate::types::CompanyRecord;

static SKIP_WORDS: &[&str] = &["The", "This", "That", "These", "Those", "There", "When", "Where", "What", "Which"];

static SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][A-Za-z0-9&\-]+(?:\s+[A-Z][A-Za-z0-9&\-]+)*)\s+(Inc\.?|Ltd\.?|Corp\.?|Corporation|Limited|Company|plc|LLC|L\.L\.C\.)\b").unwrap()
});

static CAPITALIZED_PHRASE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-zA-Z0-9&\-]*(?:\s+[A-Z][a-zA-Z0-9&\-]*){1,3})\b").unwrap());

static CAPITALIZED_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-zA-Z]+\b").unwrap());

/// One extracted span: the candidate text and its position in the source.
struct Candidate {
    text: String,
    start: usize,
    end: usize,
}

fn extract_candidates(text: &str) -> Vec<Candidate> {
    let mut spans: Vec<Candidate> = Vec::new();

    for m in SUFFIX_PATTERN.find_iter(text) {
        spans.push(Candidate { text: m.as_str().to_string(), start: m.start(), end: m.end() });
    }
    for m in CAPITALIZED_PHRASE_PATTERN.find_iter(text) {
        let word = m.as_str().split_whitespace().next().unwrap_or("");
        if SKIP_WORDS.contains(&word) {
            continue;
        }
        spans.push(Candidate { text: m.as_str().to_string(), start: m.start(), end: m.end() });
    }

    // Prefer earlier, longer matches; drop anything overlapping a kept span.
    spans.sort_by(|a, b| a.start.cmp(&b.start).then((b.end - b.start).cmp(&(a.end - a.start))));
    let mut kept: Vec<Candidate> = Vec::new();
    for cand in spans {
        if kept.iter().any(|k| cand.start < k.end && cand.end > k.start) {
            continue;
        }
        kept.push(cand);
    }
    kept.sort_by_key(|c| c.start);
    kept
}

fn infer_country_from_text(text: &str) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for m in CAPITALIZED_PHRASE_PATTERN.find_iter(text) {
        if let Some(code) = country_identifier(m.as_str(), CodeSystem::Iso2, false) {
            *counts.entry(code).or_insert(0) += 1;
        }
    }
    for m in CAPITALIZED_WORD_PATTERN.find_iter(text) {
        let lower = m.as_str().to_lowercase();
        if let Some(code) = country_identifier(&lower, CodeSystem::Iso2, false) {
            *counts.entry(code).or_insert(0) += 1;
        }
    }

    counts.into_iter().max_by_key(|(_, n)| *n).map(|(code, _)| code)
}

/// Extract, resolve, and deduplicate company mentions from `text`. Country is
/// inferred from the surrounding text when `country_hint` is `None`.
pub fn extract_companies<'a>(
    text: &str,
    records: &'a [CompanyRecord],
    country_hint: Option<&str>,
    min_confidence: f64,
) -> Vec<CompanyMatch<'a>> {
    let country = country_hint.map(str::to_string).or_else(|| infer_country_from_text(text));

    let mut seen_names: Vec<String> = Vec::new();
    let mut hits: Vec<(usize, CompanyMatch<'a>)> = Vec::new();

    for candidate in extract_candidates(text) {
        let result = resolve_company(&candidate.text, records, country.as_deref(), 88.0, 6.0, 76.0);
        let Some(best) = result.matches.into_iter().next() else { continue };
        if best.explain.score < min_confidence * 100.0 {
            continue;
        }
        if seen_names.contains(&best.record.name) {
            continue;
        }
        seen_names.push(best.record.name.clone());
        hits.push((candidate.start, best));
    }

    hits.sort_by_key(|(pos, _)| *pos);
    hits.into_iter().map(|(_, m)| m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_company_name;

    fn record(name: &str, country: &str) -> CompanyRecord {
        CompanyRecord {
            name: name.to_string(),
            name_norm: normalize_company_name(name),
            country: country.to_string(),
            lei: None,
            aliases: vec![],
            aliases_norm: vec![],
        }
    }

    #[test]
    fn extracts_suffix_tagged_company() {
        let records = vec![record("Acme Mining Inc", "US")];
        let matches = extract_companies("Acme Mining Inc announced record profits.", &records, Some("US"), 0.75);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.name, "Acme Mining Inc");
    }

    #[test]
    fn dedupes_repeated_mentions() {
        let records = vec![record("Acme Mining Inc", "US")];
        let text = "Acme Mining Inc reported earnings. Later, Acme Mining Inc issued a statement.";
        let matches = extract_companies(text, &records, Some("US"), 0.75);
        assert_eq!(matches.len(), 1);
    }
}
