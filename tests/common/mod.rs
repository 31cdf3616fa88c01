//! Shared test fixtures and helpers for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// The reference entry from the conversion contract: every derived field
/// has a known expected value.
pub const SAMPLE_BIB: &str = r#"@article{halls2021deep,
  title = {Deep Learning for {NLP}},
  author = {Halls, D.},
  year = {2021},
  month = {mar},
  journal = {AI Review},
  volume = {5},
  pages = {1-10},
  url = {http://x.com},
}"#;

/// The citation SAMPLE_BIB must produce under the default highlight.
pub const SAMPLE_CITATION: &str =
    "***Halls, D.*** (2021). Deep learning for nlp. *AI Review*, 5, 1-10. http://x.com";

/// Creates a temporary file with the given content and extension.
pub fn create_temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
