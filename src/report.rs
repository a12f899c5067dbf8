use crate::codes::CodeEntry;
use crate::tree::HuffmanTree;
use std::borrow::Cow;
use std::fmt;

/// Human-readable name of a symbol, spelling out whitespace that would
/// otherwise print as a blank.
pub fn symbol_label(symbol: char) -> Cow<'static, str> {
    match symbol {
        ' ' => Cow::Borrowed("space"),
        '\n' => Cow::Borrowed("newline"),
        '\t' => Cow::Borrowed("tab"),
        '\r' => Cow::Borrowed("carriage return"),
        other if other.is_whitespace() || other.is_control() => {
            Cow::Owned(other.escape_unicode().to_string())
        }
        other => Cow::Owned(other.to_string()),
    }
}

/// Listing of every symbol with its frequency and code, one per line, in the
/// tree's left-first depth-first order.
#[derive(Debug, Clone)]
pub struct CodeListing {
    entries: Vec<CodeEntry>,
}

impl CodeListing {
    pub fn new(tree: &HuffmanTree) -> Self {
        Self {
            entries: tree.codes().collect(),
        }
    }

    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }
}

impl fmt::Display for CodeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|entry| symbol_label(entry.symbol).chars().count())
            .max()
            .unwrap_or(0);

        for entry in &self.entries {
            writeln!(
                f,
                "{:<width$} - {:>6}   {}",
                symbol_label(entry.symbol),
                entry.frequency,
                entry.code,
            )?;
        }
        Ok(())
    }
}
