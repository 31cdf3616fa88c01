//! Output row assembly and TSV writing.
//!
//! Each bibliography entry becomes one eight-field row. Rows are written
//! through the `csv` crate with a tab delimiter, so any field containing a
//! tab, quote, or newline gets standard quoting applied.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::authors::{format_authors_apa, Highlight};
use crate::bib::BibEntry;
use crate::citation::assemble_citation;
use crate::format::{make_slug, normalize_date, sentence_case};

/// Errors that can occur when writing the output table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write row: {0}")]
    CsvError(#[from] csv::Error),
}

/// One output row. Field order here is the column order in the file, and
/// the field names are the header row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub pub_date: String,
    pub title: String,
    pub venue: String,
    pub excerpt: String,
    pub citation: String,
    pub url_slug: String,
    pub paper_url: String,
    /// Always empty: a placeholder column for manual post-editing.
    pub slides_url: String,
}

/// Derives the output row for one entry.
pub fn build_row(entry: &BibEntry, highlight: Option<&Highlight>) -> Row {
    let title = sentence_case(entry.title.as_deref().unwrap_or(""));
    let pub_date = normalize_date(entry.year.as_deref(), entry.month.as_deref());
    let authors = format_authors_apa(entry.author.as_deref().unwrap_or(""), highlight);
    let citation = assemble_citation(entry, &authors, &title);
    let url_slug = make_slug(&title);

    Row {
        pub_date,
        venue: entry.venue().to_string(),
        excerpt: entry.abstract_text.clone().unwrap_or_default(),
        citation,
        url_slug,
        paper_url: entry.url.clone().unwrap_or_default(),
        slides_url: String::new(),
        title,
    }
}

/// Column names, in output order. Kept in sync with the `Row` fields.
const HEADER: [&str; 8] = [
    "pub_date",
    "title",
    "venue",
    "excerpt",
    "citation",
    "url_slug",
    "paper_url",
    "slides_url",
];

/// Writes the header row and all data rows to `path`, overwriting any
/// previous file. The header is written even when there are no rows.
pub fn write_table(path: &Path, rows: &[Row]) -> Result<(), TableError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
