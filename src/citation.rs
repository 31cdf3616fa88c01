//! APA citation assembly.
//!
//! Concatenates the formatted author list, year, title, and the optional
//! venue/volume/number/pages/URL segments into one citation string.

use crate::bib::BibEntry;

/// Builds the full citation string for an entry.
///
/// # Arguments
///
/// * `entry` - The source entry (year, venue, volume, number, pages, url)
/// * `authors` - The already-formatted APA author list
/// * `title` - The already-sentence-cased title
///
/// # Returns
///
/// `Authors (year). Title. *Venue*, volume(number), pages. url` — every
/// segment after the title appears only when its source field is non-empty.
/// A missing year leaves empty parentheses, matching the raw field.
pub fn assemble_citation(entry: &BibEntry, authors: &str, title: &str) -> String {
    let year = entry.year.as_deref().unwrap_or("");
    let mut citation = format!("{} ({}). {}.", authors, year, title);

    let venue = entry.venue();
    if !venue.is_empty() {
        citation.push_str(&format!(" *{}*", venue));
    }
    if let Some(volume) = non_empty(entry.volume.as_deref()) {
        citation.push_str(&format!(", {}", volume));
    }
    if let Some(number) = non_empty(entry.number.as_deref()) {
        citation.push_str(&format!("({})", number));
    }
    if let Some(pages) = non_empty(entry.pages.as_deref()) {
        citation.push_str(&format!(", {}", pages));
    }
    citation.push('.');
    if let Some(url) = non_empty(entry.url.as_deref()) {
        citation.push_str(&format!(" {}", url));
    }

    citation
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}
