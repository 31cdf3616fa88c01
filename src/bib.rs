//! BibTeX bibliography loading.
//!
//! Handles loading entries from a `.bib` file, delegating the BibTeX
//! grammar to the `biblatex` crate. Entries come back in source order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use biblatex::{Bibliography, Chunk, Entry, Spanned};
use thiserror::Error;

/// Errors that can occur when loading a bibliography.
#[derive(Error, Debug)]
pub enum BibError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid BibTeX: {0}")]
    ParseError(String),
}

/// One bibliographic record as parsed from the source file.
///
/// The fields the converter cares about are explicit and optional; anything
/// else the entry carried is preserved in [`extra`](BibEntry::extra) so no
/// source data is silently dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BibEntry {
    /// The BibTeX citation key (e.g., "halls2021deep")
    pub key: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub journal: Option<String>,
    pub booktitle: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub pages: Option<String>,
    pub url: Option<String>,
    pub abstract_text: Option<String>,
    /// Fields with no dedicated slot above, keyed by lowercase field name
    pub extra: BTreeMap<String, String>,
}

impl BibEntry {
    /// The publication venue: `journal` if present, otherwise `booktitle`,
    /// otherwise the empty string.
    pub fn venue(&self) -> &str {
        self.journal
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.booktitle.as_deref())
            .unwrap_or("")
    }
}

/// Loads all entries from a BibTeX file.
///
/// # Arguments
///
/// * `path` - Path to the `.bib` file
///
/// # Returns
///
/// The entries in the order they appear in the file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid BibTeX.
/// There is no per-entry recovery: one malformed entry fails the whole load.
pub fn load_bib(path: &Path) -> Result<Vec<BibEntry>, BibError> {
    let content = fs::read_to_string(path)?;
    parse_bib(&content)
}

/// Parses BibTeX source text into entries, preserving source order.
pub fn parse_bib(content: &str) -> Result<Vec<BibEntry>, BibError> {
    let bibliography =
        Bibliography::parse(content).map_err(|e| BibError::ParseError(e.to_string()))?;

    Ok(bibliography.iter().map(convert_entry).collect())
}

/// Converts a parsed `biblatex` entry into our fixed-schema record.
fn convert_entry(entry: &Entry) -> BibEntry {
    let mut out = BibEntry {
        key: entry.key.clone(),
        ..BibEntry::default()
    };

    for (name, chunks) in &entry.fields {
        let value = render_chunks(chunks);
        match name.as_str() {
            "title" => out.title = Some(value),
            "author" => out.author = Some(value),
            "year" => out.year = Some(value),
            "month" => out.month = Some(value),
            "journal" => out.journal = Some(value),
            "booktitle" => out.booktitle = Some(value),
            "volume" => out.volume = Some(value),
            "number" => out.number = Some(value),
            "pages" => out.pages = Some(value),
            "url" => out.url = Some(value),
            "abstract" => out.abstract_text = Some(value),
            _ => {
                out.extra.insert(name.clone(), value);
            }
        }
    }

    out
}

/// Flattens a BibTeX field value into a single string.
fn render_chunks(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|spanned| match &spanned.v {
            Chunk::Normal(s) => s.as_str(),
            Chunk::Verbatim(s) => s.as_str(),
            Chunk::Math(s) => s.as_str(),
        })
        .collect()
}
