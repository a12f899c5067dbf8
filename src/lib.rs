//! # Huffman - Prefix-Code Trees
//!
//! Builds a Huffman tree from the character frequencies of a text, encodes the
//! text as a string of `'0'`/`'1'` characters and decodes it back.
//!
//! The pipeline has four stages:
//! 1. **Frequency counting**: one entry per distinct character
//! 2. **Tree building**: the two lightest nodes are merged until one root remains
//! 3. **Code derivation**: the root-to-leaf path of a symbol, left = `0`, right = `1`
//! 4. **Encoding and decoding**: code concatenation and a greedy tree walk
//!
//! ## Example
//!
//! ```
//! use huffman_rs::HuffmanTree;
//!
//! let tree = HuffmanTree::from_text("abracadabra")?;
//!
//! let bits = tree.encode("abracadabra")?;
//! assert_eq!(tree.decode(&bits)?, "abracadabra");
//!
//! for entry in tree.codes() {
//!     println!("{:?} x{} -> {}", entry.symbol, entry.frequency, entry.code);
//! }
//! # Ok::<(), huffman_rs::HuffmanError>(())
//! ```
//!
//! ## Tie-breaking
//!
//! Nodes of equal frequency leave the priority queue in insertion order.
//! Leaves are inserted in the order their symbol first appears in the text,
//! and every merged node after all nodes inserted before it. Code lengths do
//! not depend on this rule, but the exact code strings do.

mod codec;
mod codes;
mod error;
mod frequency;
pub mod io;
mod node;
pub mod report;
mod tree;


pub use codec::{Codec, EncodingStats};
pub use codes::{CodeEntry, CodeTable, Codes};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use node::{Node, NodeKey};
pub use tree::HuffmanTree;
