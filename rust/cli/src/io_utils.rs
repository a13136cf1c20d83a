//! File helpers.

use std::path::Path;

/// Reads a UTF-8 text file, dropping a leading byte order mark if an editor
/// added one.
///
/// ```rust,no_run
/// # use holdem_cli::io_utils::read_text;
/// let toml = read_text("holdem.toml").unwrap();
/// ```
pub fn read_text(path: impl AsRef<Path>) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
