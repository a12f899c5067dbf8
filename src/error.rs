use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by tree construction, encoding, decoding and file I/O.
#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    #[error("symbol {0:?} has no leaf in the tree")]
    SymbolNotFound(char),

    #[error("malformed code: {trailing} trailing bit(s) do not complete a symbol")]
    MalformedCode { trailing: usize },

    #[error("invalid bit {bit:?} at offset {offset}, expected '0' or '1'")]
    InvalidBit { bit: char, offset: usize },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
