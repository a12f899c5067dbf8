use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::node::{Node, NodeKey};
use slotmap::SlotMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, instrument, trace};

/// An immutable Huffman tree.
///
/// Nodes are stored in an arena and reference their children by key; each
/// non-root node has exactly one parent.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    /// Storage for all nodes using generational indices
    pub(crate) nodes: SlotMap<NodeKey, Node>,

    /// Key of the root node
    pub(crate) root: NodeKey,
}

/// Heap entry ordering nodes by ascending frequency, then by insertion
/// sequence. `BinaryHeap` is a max-heap, so the comparison is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    frequency: usize,
    sequence: u64,
    key: NodeKey,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl HuffmanTree {
    /// Builds the tree for a frequency table.
    ///
    /// Leaves enter the queue in the table's first-occurrence order. The two
    /// lightest nodes are merged repeatedly, the first one popped becoming the
    /// left child. Ties in frequency go to the node inserted earlier, and each
    /// merged node is inserted after every node already queued.
    ///
    /// A table with a single symbol yields a tree whose root is that leaf.
    ///
    /// # Errors
    ///
    /// [`HuffmanError::EmptyInput`] if the table has no symbols.
    #[instrument(level = "debug", skip(table), fields(symbols = table.len()))]
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut nodes = SlotMap::with_capacity(2 * table.len() - 1);
        let mut queue = BinaryHeap::with_capacity(table.len());
        let mut sequence = 0u64;

        for (symbol, frequency) in table.iter() {
            let key = nodes.insert(Node::leaf(symbol, frequency));
            queue.push(QueueEntry {
                frequency,
                sequence,
                key,
            });
            sequence += 1;
        }

        let root = loop {
            let Some(left) = queue.pop() else {
                return Err(HuffmanError::EmptyInput);
            };
            let Some(right) = queue.pop() else {
                break left.key;
            };

            let frequency = left.frequency + right.frequency;
            let key = nodes.insert(Node::internal(frequency, left.key, right.key));
            trace!(
                frequency,
                left = left.frequency,
                right = right.frequency,
                "merged nodes"
            );

            queue.push(QueueEntry {
                frequency,
                sequence,
                key,
            });
            sequence += 1;
        };

        let tree = Self { nodes, root };
        debug!(
            nodes = tree.node_count(),
            weight = tree.weight(),
            depth = tree.depth(),
            "built huffman tree"
        );
        Ok(tree)
    }

    /// Counts the symbols of `text` and builds the tree for them.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::build(&FrequencyTable::from_text(text))
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    pub fn root_key(&self) -> NodeKey {
        self.root
    }

    /// Looks up a node by key; `None` for keys from another tree.
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_leaf()).count()
    }

    /// Total number of nodes, leaves and internal nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Frequency of the root, i.e. the length of the source text.
    pub fn weight(&self) -> usize {
        self.root().frequency()
    }

    /// Length of the longest root-to-leaf path. 0 for a single-leaf tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];

        while let Some((key, depth)) = stack.pop() {
            let node = &self.nodes[key];
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }

        deepest
    }
}

impl TryFrom<&str> for HuffmanTree {
    type Error = HuffmanError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_text(text)
    }
}
