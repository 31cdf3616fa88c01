//! Pure field-formatting transforms.
//!
//! Date normalization, sentence casing, and slug generation. Each function
//! is total over its string input: missing data is handled with documented
//! defaults, never a panic.

use regex::Regex;

/// Fixed month table: three-letter abbreviation to two-digit month.
const MONTHS: [(&str, &str); 12] = [
    ("jan", "01"),
    ("feb", "02"),
    ("mar", "03"),
    ("apr", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("jul", "07"),
    ("aug", "08"),
    ("sep", "09"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// Sentinel year for entries with no `year` field; sorts after any real
/// date in a date-ordered consumer.
const MISSING_YEAR: &str = "9999";

/// Normalizes an entry's `year` and `month` fields to `YYYY-MM-01`.
///
/// The day is always `01` — BibTeX carries no day-of-month. Missing year
/// becomes `9999`; the month is matched case-insensitively on its first
/// three letters, so both `mar` and `March` resolve to `03`. Anything
/// unrecognized (or absent) becomes `01`.
pub fn normalize_date(year: Option<&str>, month: Option<&str>) -> String {
    let year = match year {
        Some(y) if !y.trim().is_empty() => y.trim(),
        _ => MISSING_YEAR,
    };
    let month = month.map(month_number).unwrap_or("01");
    format!("{}-{}-01", year, month)
}

/// Maps a raw month string to its two-digit number, defaulting to `01`.
fn month_number(raw: &str) -> &'static str {
    let prefix: String = raw.trim().to_lowercase().chars().take(3).collect();
    MONTHS
        .iter()
        .find(|(abbr, _)| *abbr == prefix)
        .map(|(_, num)| *num)
        .unwrap_or("01")
}

/// Sentence-cases a raw title.
///
/// Braces (used in BibTeX to protect capitalization) are stripped, the
/// whole string is lowercased, and the first character is uppercased.
/// This flattens interior capitalization — acronyms and proper nouns come
/// out lowercase. A known limitation of the rule, kept deliberately.
pub fn sentence_case(title: &str) -> String {
    let stripped: String = title.chars().filter(|c| *c != '{' && *c != '}').collect();
    let lower = stripped.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Derives a URL slug from a (sentence-cased) title.
///
/// Lowercase, every run of non-word characters collapsed to one hyphen,
/// leading and trailing hyphens trimmed. Collisions between entries are
/// possible and not resolved.
pub fn make_slug(title: &str) -> String {
    let re = Regex::new(r"\W+").unwrap();
    re.replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
