//! CLI for bib2tsv - Convert a BibTeX bibliography into a TSV publication table.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use bib2tsv::{build_row, load_bib, write_table, Highlight, Row};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Convert a BibTeX bibliography into a TSV publication table
#[derive(Parser)]
#[command(name = "bib2tsv")]
#[command(version)]
#[command(after_help = "\
Examples:
  bib2tsv
  bib2tsv refs.bib -o site/_data/citations.tsv
  bib2tsv refs.bib --highlight \"Curie, M.\"
  bib2tsv refs.bib --no-highlight

Each entry's citation is echoed to stdout for review; the table itself
goes to the output file. The slides_url column is always left empty for
manual post-editing.")]
struct Cli {
    /// Input BibTeX file
    #[arg(default_value = "publications.bib")]
    input: PathBuf,

    /// Output TSV file (overwritten each run)
    #[arg(short, long, default_value = "citations.tsv")]
    output: PathBuf,

    /// Author to bold-italicize wherever they appear, in "Last, F." form
    #[arg(long, default_value = "Halls, D.")]
    highlight: String,

    /// Disable the author highlight entirely
    #[arg(long)]
    no_highlight: bool,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — bibliography file not found / invalid
    BibFile(String),
    /// Exit 11 — invalid --highlight value
    Highlight(String),
    /// Exit 12 — cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::BibFile(_) => 10,
            AppError::Highlight(_) => 11,
            AppError::OutputFile(_) => 12,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BibFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must be plain-text BibTeX (@type{{key, field = value, ...}})",
                    msg
                )
            }
            AppError::Highlight(msg) => {
                write!(
                    f,
                    "{}\n  hint: pass the author as \"Last, F.\" (e.g. --highlight \"Halls, D.\")",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let highlight = if cli.no_highlight {
        None
    } else {
        Some(Highlight::parse(&cli.highlight).map_err(|e| AppError::Highlight(e.to_string()))?)
    };

    let count = convert(&cli.input, &cli.output, highlight.as_ref())?;

    eprintln!("converted {} entr(ies), wrote {}", count, cli.output.display());
    Ok(())
}

/// Runs the whole pipeline: load, transform, write. Returns the number of
/// rows written. Echoes each entry's citation to stdout as it is processed.
fn convert(
    input: &Path,
    output: &Path,
    highlight: Option<&Highlight>,
) -> Result<usize, AppError> {
    // 1. Load the bibliography (fatal on a missing or malformed file)
    let entries = load_bib(input)
        .map_err(|e| AppError::BibFile(format!("'{}': {}", input.display(), e)))?;

    // 2. Derive one row per entry, in source order
    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            let row = build_row(entry, highlight);
            println!("{}", row.citation);
            row
        })
        .collect();

    // 3. Write the table
    write_table(output, &rows)
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", output.display(), e)))?;

    Ok(rows.len())
}
