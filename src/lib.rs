//! bib2tsv: converts a BibTeX bibliography into a TSV publication table.
//!
//! This library provides functionality to:
//! - Load BibTeX entries via the biblatex parser
//! - Derive display fields (normalized date, sentence-cased title,
//!   APA citation, URL slug) with pure string transforms
//! - Assemble and write tab-separated output rows

pub mod authors;
pub mod bib;
pub mod citation;
pub mod format;
pub mod table;

pub use authors::{format_authors_apa, Highlight};
pub use bib::{load_bib, parse_bib, BibEntry};
pub use citation::assemble_citation;
pub use format::{make_slug, normalize_date, sentence_case};
pub use table::{build_row, write_table, Row};
