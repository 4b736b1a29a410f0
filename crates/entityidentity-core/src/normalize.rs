//! Text normalization shared across every domain resolver.
//!
//! Mirrors `entityidentity.utils.normalize` in the Python original: two
//! complementary transforms (match-normalize, for comparison; canonicalize,
//! for display) plus a slugifier and a quote-folder. Every function is total
//! and idempotent; empty input yields empty output.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Legal-suffix regex, anchored at the end of a match-normalized (lowercase,
/// already-ASCII) string, with an optional trailing period already stripped
/// upstream by the allow-set filter. Matches spec.md §4.1 step 4's fixed set.
static LEGAL_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(inc|corp|co|ltd|limited|plc|sa|ag|gmbh|spa|oyj|kgaa|sarl|srl|pte|llc|lp|bv|nv|ab|as|oy|sas|jsc)\.?\s*$",
    )
    .unwrap()
});

/// Comma immediately preceding a legal suffix, e.g. `"Acme, Inc."` — removed
/// by the display canonicalizer (spec.md §4.1, display-canonicalize step 1).
static LEGAL_SUFFIX_COMMA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i),\s*(Inc|Corp|Co|Ltd|Limited|PLC|SA|AG|GmbH|SpA|Oyj|KGaA|Sarl|Srl|Pte|LLC|LP|BV|NV|AB|AS|Oy|SAS|JSC)\b",
    )
    .unwrap()
});

/// Trailing period on a legal suffix, e.g. `"Acme Inc."` — removed by the
/// display canonicalizer (spec.md §4.1, display-canonicalize step 1).
static LEGAL_SUFFIX_PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(Inc|Corp|Co|Ltd|Limited|PLC|SA|AG|GmbH|SpA|Oyj|KGaA|Sarl|Srl|Pte|LLC|LP|BV|NV|AB|AS|Oy|SAS|JSC)\.",
    )
    .unwrap()
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// NFKD-decompose and drop everything outside ASCII, folding accents away
/// ("Société" -> "Societe"). Step 1-2 of match-normalize and canonicalize.
fn to_ascii_fold(s: &str) -> String {
    s.nfkd().filter(char::is_ascii).collect()
}

/// Replace every byte outside `allowed` with a space.
fn mask_disallowed(s: &str, allowed: impl Fn(char) -> bool) -> String {
    s.chars()
        .map(|c| if allowed(c) { c } else { ' ' })
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s.trim(), " ").into_owned()
}

/// Match-normalize for equality, prefix, and fuzzy comparison (spec.md
/// §4.1). `strip_legal_suffix` should be `true` only for companies.
/// `allowed_chars` is a predicate over the post-ASCII-fold, lowercased
/// stream (the domain's allow-set, e.g. companies `a-z0-9&-`).
pub fn normalize_name(s: &str, strip_legal_suffix: bool, allowed_chars: impl Fn(char) -> bool) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut out = to_ascii_fold(s).to_lowercase();
    if strip_legal_suffix {
        out = LEGAL_SUFFIX_RE.replace(&out, "").into_owned();
    }
    out = mask_disallowed(&out, allowed_chars);
    collapse_whitespace(&out)
}

/// Display-canonicalize for identifiers and user-facing output (spec.md
/// §4.1). `strip_legal_suffix_punctuation` should be `true` only for
/// companies. `title_case` should be `true` only for metals and places.
pub fn canonicalize_name(
    s: &str,
    strip_legal_suffix_punctuation: bool,
    title_case: bool,
    allowed_chars: impl Fn(char) -> bool,
) -> String {
    if s.is_empty() {
        return s.to_string();
    }
    let mut out = s.to_string();
    if strip_legal_suffix_punctuation {
        out = LEGAL_SUFFIX_COMMA_RE.replace_all(&out, " $1").into_owned();
        out = LEGAL_SUFFIX_PERIOD_RE.replace_all(&out, "$1").into_owned();
    }
    out = to_ascii_fold(&out);
    out = mask_disallowed(&out, allowed_chars);
    out = collapse_whitespace(&out);
    if title_case {
        out = title_case_str(&out);
    }
    out
}

fn title_case_str(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a URL/key-safe slug: lowercase match-normalize, hyphenate
/// whitespace/underscore runs, strip everything outside `a-z0-9-`, collapse
/// hyphen runs, trim leading/trailing hyphens (spec.md §4.1).
pub fn slugify_name(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let lowered = to_ascii_fold(s.trim()).to_lowercase();
    let hyphenated: String = lowered
        .chars()
        .map(|c| if c.is_whitespace() || c == '_' { '-' } else { c })
        .collect();
    let filtered: String = hyphenated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    let mut collapsed = String::with_capacity(filtered.len());
    let mut last_was_hyphen = false;
    for c in filtered.chars() {
        if c == '-' {
            if !last_was_hyphen {
                collapsed.push('-');
            }
            last_was_hyphen = true;
        } else {
            collapsed.push(c);
            last_was_hyphen = false;
        }
    }
    collapsed.trim_matches('-').to_string()
}

/// Fold curly/smart quotes to ASCII `'`/`"` (spec.md §4.1 ambient helper,
/// `utils/normalize.py::normalize_quotes`).
pub fn normalize_quotes(s: &str) -> String {
    s.replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Allow-set predicates per spec.md §4.1 step 5 / canonicalize step 3.
pub mod allow_sets {
    pub fn companies_match(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '&' || c == '-' || c == ' '
    }
    pub fn companies_display(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '&' || c == '-' || c == ' '
    }
    pub fn metals(c: char) -> bool {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || matches!(c, ' ' | '-' | '/' | '(' | ')' | '%')
    }
    /// Case-preserving counterpart of [`metals`] for the display
    /// canonicalizer, which title-cases rather than lower-cases its input.
    pub fn metals_display(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '/' | '(' | ')' | '%')
    }
    pub fn places(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '\'')
    }
    /// Case-preserving counterpart of [`places`] for the display
    /// canonicalizer, which title-cases rather than lower-cases its input.
    pub fn places_display(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '(' | ')' | '\'')
    }
    pub fn baskets(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '-' | '/' | '(' | ')')
    }
    /// Case-preserving counterpart of [`baskets`] for the display
    /// canonicalizer, which must not title-case names like `"NdPr"`.
    pub fn baskets_display(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '/' | '(' | ')')
    }
    pub fn instrument_ticker(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_')
    }
    pub fn instrument_name(c: char) -> bool {
        metals(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_normalize_folds_accents_and_case() {
        assert_eq!(
            normalize_name("Société Générale", false, allow_sets::companies_match),
            "societe generale"
        );
    }

    #[test]
    fn match_normalize_strips_legal_suffix() {
        assert_eq!(
            normalize_name("Apple Inc.", true, allow_sets::companies_match),
            "apple"
        );
        assert_eq!(
            normalize_name("Acme Corp", true, allow_sets::companies_match),
            "acme"
        );
    }

    #[test]
    fn canonicalize_removes_comma_and_period_around_suffix() {
        assert_eq!(
            canonicalize_name("Acme, Inc.", true, false, allow_sets::companies_display),
            "Acme Inc"
        );
    }

    #[test]
    fn canonicalize_title_cases_metals() {
        assert_eq!(
            canonicalize_name("lithium carbonate", false, true, allow_sets::metals),
            "Lithium Carbonate"
        );
    }

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify_name("Lithium Carbonate"), "lithium-carbonate");
        assert_eq!(slugify_name("PGM 4E"), "pgm-4e");
        assert_eq!(
            slugify_name("Ammonium paratungstate (APT)"),
            "ammonium-paratungstate-apt"
        );
    }

    #[test]
    fn empty_input_is_total() {
        assert_eq!(normalize_name("", false, allow_sets::companies_match), "");
        assert_eq!(canonicalize_name("", false, false, allow_sets::companies_display), "");
        assert_eq!(slugify_name(""), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize_name("Société Générale S.A.", true, allow_sets::companies_match);
        let twice = normalize_name(&once, true, allow_sets::companies_match);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_quotes_folds_smart_quotes() {
        assert_eq!(normalize_quotes("\u{2018}curly\u{2019}"), "'curly'");
        assert_eq!(normalize_quotes("\u{201C}smart\u{201D}"), "\"smart\"");
    }
}
