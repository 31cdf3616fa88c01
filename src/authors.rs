//! APA-style author formatting.
//!
//! Turns a raw BibTeX `author` field (names joined by `" and "`) into the
//! APA list form `Last, F. M., Last, F., & Last, F.`, with an optional
//! highlight that wraps one configured person in bold-italic markup.

use thiserror::Error;

/// One person to emphasize in every citation, matched case-insensitively
/// against an author's last name and computed initials.
///
/// The out-of-the-box configuration highlights `Halls` / `D.`, the site
/// owner the converter was written for.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// Last name to match (e.g., "Halls")
    pub family: String,
    /// Computed initials to match, periods included (e.g., "D." or "D. M.")
    pub initials: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Highlight {
            family: "Halls".to_string(),
            initials: "D.".to_string(),
        }
    }
}

/// Error returned when a highlight spec cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid highlight '{0}': expected \"Last, F.\" form")]
pub struct HighlightParseError(String);

impl Highlight {
    /// Parses a highlight spec in `"Last, F."` form.
    pub fn parse(spec: &str) -> Result<Highlight, HighlightParseError> {
        let (family, initials) = spec
            .split_once(',')
            .ok_or_else(|| HighlightParseError(spec.to_string()))?;
        let family = family.trim();
        let initials = initials.trim();
        if family.is_empty() || initials.is_empty() {
            return Err(HighlightParseError(spec.to_string()));
        }
        Ok(Highlight {
            family: family.to_string(),
            initials: initials.to_string(),
        })
    }

    fn matches(&self, family: &str, initials: &str) -> bool {
        family.to_lowercase() == self.family.to_lowercase()
            && initials.to_lowercase() == self.initials.to_lowercase()
    }
}

/// Formats a raw BibTeX author field as an APA author list.
///
/// Names are split on the literal separator `" and "`. A name with a comma
/// is taken as `Last, First`; otherwise the final whitespace token is the
/// last name and everything before it is given names. Each given name is
/// reduced to its initial plus a period.
///
/// Two or more authors join with `", "` and the final `", & "`; a sole
/// author stands alone. An empty field yields the empty string.
///
/// Every author matching `highlight` is wrapped as `***Last, F.***`,
/// regardless of position in the list.
pub fn format_authors_apa(author_field: &str, highlight: Option<&Highlight>) -> String {
    // BibTeX sources often wrap the field across lines
    let cleaned = author_field.replace('\n', " ");

    let mut formatted: Vec<String> = cleaned
        .split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format_one(name, highlight))
        .collect();

    match formatted.len() {
        0 => String::new(),
        1 => formatted.remove(0),
        n => format!("{}, & {}", formatted[..n - 1].join(", "), formatted[n - 1]),
    }
}

/// Formats a single author name as `Last, F. M.`, applying the highlight.
fn format_one(name: &str, highlight: Option<&Highlight>) -> String {
    let (last, given) = match name.split_once(',') {
        Some((last, given)) => (last.trim().to_string(), given.trim().to_string()),
        None => {
            let mut parts: Vec<&str> = name.split_whitespace().collect();
            match parts.pop() {
                Some(last) => (last.to_string(), parts.join(" ")),
                None => return String::new(),
            }
        }
    };

    let initials = given
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .map(|c| format!("{}.", c))
        .collect::<Vec<_>>()
        .join(" ");

    let apa = format!("{}, {}", last, initials);
    match highlight {
        Some(h) if h.matches(&last, &initials) => format!("***{}***", apa),
        _ => apa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_highlight() -> Highlight {
        Highlight::default()
    }

    // --- Tests for format_authors_apa ---

    #[test]
    fn test_single_author_last_first() {
        let result = format_authors_apa("Smith, John", None);
        assert_eq!(result, "Smith, J.");
    }

    #[test]
    fn test_single_author_first_last() {
        // No comma: last whitespace token is the family name
        let result = format_authors_apa("John Smith", None);
        assert_eq!(result, "Smith, J.");
    }

    #[test]
    fn test_middle_names_become_initials() {
        let result = format_authors_apa("Smith, John Maynard", None);
        assert_eq!(result, "Smith, J. M.");

        let result = format_authors_apa("John Maynard Smith", None);
        assert_eq!(result, "Smith, J. M.");
    }

    #[test]
    fn test_two_authors_joined_with_ampersand() {
        let result = format_authors_apa("Smith, John and Jones, Alice", None);
        assert_eq!(result, "Smith, J., & Jones, A.");
    }

    #[test]
    fn test_three_authors_comma_then_ampersand() {
        let result = format_authors_apa("Smith, John and Jones, Alice and Brown, Bob", None);
        assert_eq!(result, "Smith, J., Jones, A., & Brown, B.");
    }

    #[test]
    fn test_newlines_in_field_are_tolerated() {
        let result = format_authors_apa("Smith, John and\n Jones, Alice", None);
        assert_eq!(result, "Smith, J., & Jones, A.");
    }

    #[test]
    fn test_empty_author_field() {
        // Pinned behavior: empty in, empty out, no panic
        assert_eq!(format_authors_apa("", None), "");
        assert_eq!(format_authors_apa("   ", None), "");
    }

    // --- Tests for the highlight rule ---

    #[test]
    fn test_highlight_sole_author() {
        let h = default_highlight();
        let result = format_authors_apa("Halls, D.", Some(&h));
        assert_eq!(result, "***Halls, D.***");
    }

    #[test]
    fn test_highlight_in_author_list() {
        let h = default_highlight();
        let result = format_authors_apa("Smith, John and Halls, D.", Some(&h));
        assert_eq!(result, "Smith, J., & ***Halls, D.***");
    }

    #[test]
    fn test_highlight_is_case_insensitive() {
        let h = default_highlight();
        let result = format_authors_apa("HALLS, d.", Some(&h));
        assert_eq!(result, "***HALLS, d.***");
    }

    #[test]
    fn test_highlight_requires_matching_initials() {
        // Same family name, different person: no markup
        let h = default_highlight();
        let result = format_authors_apa("Halls, Martin", Some(&h));
        assert_eq!(result, "Halls, M.");
    }

    #[test]
    fn test_highlight_applies_to_every_occurrence() {
        let h = default_highlight();
        let result = format_authors_apa("Halls, D. and Smith, Jo and Halls, D.", Some(&h));
        assert_eq!(result, "***Halls, D.***, Smith, J., & ***Halls, D.***");
    }

    #[test]
    fn test_no_highlight_when_disabled() {
        let result = format_authors_apa("Halls, D.", None);
        assert_eq!(result, "Halls, D.");
    }

    #[test]
    fn test_custom_highlight_target() {
        let h = Highlight {
            family: "Curie".to_string(),
            initials: "M.".to_string(),
        };
        let result = format_authors_apa("Curie, Marie and Halls, D.", Some(&h));
        assert_eq!(result, "***Curie, M.***, & Halls, D.");
    }

    // --- Tests for Highlight::parse ---

    #[test]
    fn test_parse_highlight_basic() {
        let h = Highlight::parse("Halls, D.").unwrap();
        assert_eq!(h.family, "Halls");
        assert_eq!(h.initials, "D.");
    }

    #[test]
    fn test_parse_highlight_multiple_initials() {
        let h = Highlight::parse("Smith, J. M.").unwrap();
        assert_eq!(h.family, "Smith");
        assert_eq!(h.initials, "J. M.");
    }

    #[test]
    fn test_parse_highlight_rejects_missing_comma() {
        assert!(Highlight::parse("Halls").is_err());
    }

    #[test]
    fn test_parse_highlight_rejects_empty_parts() {
        assert!(Highlight::parse(", D.").is_err());
        assert!(Highlight::parse("Halls, ").is_err());
    }
}
