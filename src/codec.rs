use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::node::Bit;
use crate::tree::HuffmanTree;
use tracing::{debug, instrument};

/// Encoder and decoder bound to one tree.
///
/// The code table is derived once on construction; encoding looks every
/// character up in it and decoding walks the tree directly.
///
/// ```
/// use huffman_rs::{Codec, HuffmanTree};
///
/// let tree = HuffmanTree::from_text("abracadabra")?;
/// let codec = Codec::new(&tree);
///
/// let bits = codec.encode("abracadabra")?;
/// assert_eq!(codec.decode(&bits)?, "abracadabra");
/// # Ok::<(), huffman_rs::HuffmanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Codec<'t> {
    tree: &'t HuffmanTree,
    table: CodeTable,
}

impl<'t> Codec<'t> {
    pub fn new(tree: &'t HuffmanTree) -> Self {
        Self {
            tree,
            table: CodeTable::new(tree),
        }
    }

    pub fn tree(&self) -> &'t HuffmanTree {
        self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Code of each character of `text`, in order.
    fn codes_of<'s>(&'s self, text: &'s str) -> impl Iterator<Item = Result<&'s str>> + 's {
        text.chars().map(move |symbol| self.table.lookup(symbol))
    }

    /// Encodes `text` as one string of `'0'`/`'1'` characters.
    ///
    /// # Errors
    ///
    /// [`HuffmanError::SymbolNotFound`] for the first character with no leaf.
    #[instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::new();
        for code in self.codes_of(text) {
            bits.push_str(code?);
        }
        debug!(bits = bits.len(), "encoded text");
        Ok(bits)
    }

    /// Encodes `text` as one code per character.
    ///
    /// Joining the result gives the output of [`encode`](Self::encode).
    pub fn encode_symbols(&self, text: &str) -> Result<Vec<String>> {
        self.codes_of(text)
            .map(|code| code.map(str::to_owned))
            .collect()
    }

    /// Decodes a bit-string produced by [`encode`](Self::encode).
    ///
    /// Walks the tree directly; see [`HuffmanTree::decode`].
    pub fn decode(&self, bits: &str) -> Result<String> {
        self.tree.decode(bits)
    }

    /// Returns size statistics for encoding `text`.
    pub fn stats(&self, text: &str) -> Result<EncodingStats> {
        let mut input_symbols = 0;
        let mut encoded_bits = 0;
        for code in self.codes_of(text) {
            input_symbols += 1;
            encoded_bits += code?.len();
        }

        Ok(EncodingStats {
            input_symbols,
            distinct_symbols: self.table.len(),
            encoded_bits,
        })
    }
}

fn parse_bit(ch: char, offset: usize) -> Result<Bit> {
    Bit::from_char(ch).ok_or(HuffmanError::InvalidBit { bit: ch, offset })
}

impl HuffmanTree {
    /// Encodes `text` with this tree's codes. See [`Codec::encode`].
    pub fn encode(&self, text: &str) -> Result<String> {
        Codec::new(self).encode(text)
    }

    /// Encodes `text` as one code per character. See [`Codec::encode_symbols`].
    pub fn encode_symbols(&self, text: &str) -> Result<Vec<String>> {
        Codec::new(self).encode_symbols(text)
    }

    /// Decodes a bit-string produced by [`encode`](Self::encode) by walking
    /// the tree.
    ///
    /// For a single-leaf tree every bit stands for one occurrence of its
    /// symbol, so the empty string decodes to the empty text.
    ///
    /// # Errors
    ///
    /// - [`HuffmanError::InvalidBit`] for a character other than `'0'`/`'1'`.
    /// - [`HuffmanError::MalformedCode`] if the input ends part way down a path.
    #[instrument(level = "debug", skip_all, fields(bits = bits.len()))]
    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut text = String::new();

        if let Some(symbol) = self.root().symbol() {
            for (offset, ch) in bits.chars().enumerate() {
                parse_bit(ch, offset)?;
                text.push(symbol);
            }
            return Ok(text);
        }

        let mut current = self.root;
        let mut trailing = 0;

        for (offset, ch) in bits.chars().enumerate() {
            let bit = parse_bit(ch, offset)?;
            current = self.nodes[current]
                .child(bit)
                .ok_or(HuffmanError::MalformedCode { trailing })?;
            trailing += 1;

            if let Some(symbol) = self.nodes[current].symbol() {
                text.push(symbol);
                current = self.root;
                trailing = 0;
            }
        }

        if trailing > 0 {
            return Err(HuffmanError::MalformedCode { trailing });
        }

        debug!(len = text.len(), "decoded text");
        Ok(text)
    }
}

/// Statistics about an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingStats {
    /// Number of characters encoded
    pub input_symbols: usize,
    /// Number of leaves in the tree
    pub distinct_symbols: usize,
    /// Length of the encoded bit-string
    pub encoded_bits: usize,
}

impl EncodingStats {
    /// Mean code length per input character.
    pub fn average_code_length(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.input_symbols as f64
        }
    }

    /// Encoded size as a percentage of an 8-bit-per-character encoding.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            (self.encoded_bits as f64 / (self.input_symbols * 8) as f64) * 100.0
        }
    }
}
