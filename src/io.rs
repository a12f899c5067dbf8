//! Reading source text and reading/writing the encoded artifact.

use crate::error::{HuffmanError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// How line separators of a source file reach the text handed to the tree
/// builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Lines are concatenated without their separators. `\n`, `\r\n` and a
    /// lone `\r` all end a line.
    #[default]
    Strip,
    /// The file is taken verbatim, separators included.
    Preserve,
}

impl LineMode {
    /// Applies this mode to the raw contents of a file.
    pub fn apply(self, raw: &str) -> String {
        match self {
            LineMode::Strip => raw.chars().filter(|ch| !matches!(ch, '\n' | '\r')).collect(),
            LineMode::Preserve => raw.to_owned(),
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> HuffmanError + '_ {
    move |source| HuffmanError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads the text to encode from `path`.
#[instrument(level = "debug")]
pub fn read_text(path: &Path, mode: LineMode) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(io_error(path))?;
    let text = mode.apply(&raw);
    debug!(len = text.len(), "read source text");
    Ok(text)
}

/// Writes an encoded bit-string to `path`, replacing any existing file.
#[instrument(level = "debug", skip(bits), fields(bits = bits.len()))]
pub fn write_code(path: &Path, bits: &str) -> Result<()> {
    fs::write(path, bits).map_err(io_error(path))
}

/// Reads an encoded bit-string back from `path`.
///
/// Line separators are dropped so an artifact edited by hand still decodes.
#[instrument(level = "debug")]
pub fn read_code(path: &Path) -> Result<String> {
    read_text(path, LineMode::Strip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_line_mode_strip() {
        assert_eq!(LineMode::Strip.apply("ab\ncd\r\nef\n"), "abcdef");
    }

    #[test]
    fn test_line_mode_strip_lone_carriage_return() {
        assert_eq!(LineMode::Strip.apply("ab\rcd\r"), "abcd");
        assert_eq!(LineMode::Strip.apply("a\r\rb\n\nc"), "abc");
    }

    #[test]
    fn test_line_mode_preserve() {
        assert_eq!(LineMode::Preserve.apply("ab\ncd\n"), "ab\ncd\n");
    }

    #[test]
    fn test_read_text_strips_lines_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("text.txt");
        fs::write(&path, "to be\nor not\n").unwrap();

        assert_eq!(read_text(&path, LineMode::default()).unwrap(), "to beor not");
        assert_eq!(
            read_text(&path, LineMode::Preserve).unwrap(),
            "to be\nor not\n"
        );
    }

    #[test]
    fn test_code_roundtrip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("code.txt");

        write_code(&path, "0110").unwrap();
        assert_eq!(read_code(&path).unwrap(), "0110");
    }

    #[test]
    fn test_missing_file_propagates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_text(&path, LineMode::Strip).unwrap_err();
        match err {
            HuffmanError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
