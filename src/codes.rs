use crate::error::{HuffmanError, Result};
use crate::node::{Bit, NodeKey};
use crate::tree::HuffmanTree;
use ahash::AHashMap as HashMap;
use std::iter::FusedIterator;

/// A symbol together with its code and frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: char,
    /// Root-to-leaf path, `'0'` for each left step and `'1'` for each right step
    pub code: String,
    pub frequency: usize,
}

/// Lazy depth-first walk over every leaf, left subtree first.
///
/// Each pending node carries the code accumulated on the way down to it.
pub struct Codes<'a> {
    tree: &'a HuffmanTree,
    stack: Vec<(NodeKey, String)>,
}

impl<'a> Codes<'a> {
    pub(crate) fn new(tree: &'a HuffmanTree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root, String::new())],
        }
    }
}

impl Iterator for Codes<'_> {
    type Item = CodeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, code)) = self.stack.pop() {
            let node = &self.tree.nodes[key];

            if let Some(symbol) = node.symbol() {
                return Some(CodeEntry {
                    symbol,
                    code,
                    frequency: node.frequency(),
                });
            }

            // Right is pushed first so the left subtree is visited first
            if let Some(right) = node.right() {
                let mut right_code = code.clone();
                right_code.push(Bit::One.as_char());
                self.stack.push((right, right_code));
            }
            if let Some(left) = node.left() {
                let mut left_code = code;
                left_code.push(Bit::Zero.as_char());
                self.stack.push((left, left_code));
            }
        }

        None
    }
}

impl FusedIterator for Codes<'_> {}

/// Symbol to code lookup collected from a full walk of the tree.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<char, String>,
}

impl CodeTable {
    pub fn new(tree: &HuffmanTree) -> Self {
        tree.codes().collect()
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Like [`get`](Self::get), failing with [`HuffmanError::SymbolNotFound`].
    pub fn lookup(&self, symbol: char) -> Result<&str> {
        self.get(symbol).ok_or(HuffmanError::SymbolNotFound(symbol))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries sorted by symbol.
    pub fn sorted(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<(char, &str)> = self
            .codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
            .collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries
    }
}

impl FromIterator<CodeEntry> for CodeTable {
    fn from_iter<I: IntoIterator<Item = CodeEntry>>(iter: I) -> Self {
        Self {
            codes: iter
                .into_iter()
                .map(|entry| (entry.symbol, entry.code))
                .collect(),
        }
    }
}

impl HuffmanTree {
    /// Returns an iterator over every (symbol, code, frequency) in the tree.
    pub fn codes(&self) -> Codes<'_> {
        Codes::new(self)
    }

    /// Returns the code of `symbol`.
    ///
    /// The root of a single-leaf tree has the empty code.
    ///
    /// # Errors
    ///
    /// [`HuffmanError::SymbolNotFound`] if no leaf holds `symbol`.
    pub fn code_for(&self, symbol: char) -> Result<String> {
        let mut path = String::new();
        if self.search(self.root, symbol, &mut path) {
            Ok(path)
        } else {
            Err(HuffmanError::SymbolNotFound(symbol))
        }
    }

    /// Depth-first search for the leaf holding `symbol`, leaving its path in
    /// `path` when found.
    fn search(&self, key: NodeKey, symbol: char, path: &mut String) -> bool {
        let node = &self.nodes[key];
        if node.is_leaf() {
            return node.symbol() == Some(symbol);
        }

        for (bit, child) in [(Bit::Zero, node.left()), (Bit::One, node.right())] {
            let Some(child) = child else {
                continue;
            };
            path.push(bit.as_char());
            if self.search(child, symbol, path) {
                return true;
            }
            path.pop();
        }

        false
    }
}
