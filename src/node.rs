use slotmap::DefaultKey;

/// Arena key of a node inside a [`HuffmanTree`](crate::HuffmanTree).
pub type NodeKey = DefaultKey;

/// A node of the Huffman tree.
///
/// Leaves carry a symbol and no children. Internal nodes carry no symbol and
/// exactly two children, whose frequencies sum to the node's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    frequency: usize,
    symbol: Option<char>,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl Node {
    pub(crate) fn leaf(symbol: char, frequency: usize) -> Self {
        Self {
            frequency,
            symbol: Some(symbol),
            left: None,
            right: None,
        }
    }

    pub(crate) fn internal(frequency: usize, left: NodeKey, right: NodeKey) -> Self {
        Self {
            frequency,
            symbol: None,
            left: Some(left),
            right: Some(right),
        }
    }

    /// Total weight of the subtree rooted here.
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// The symbol held by a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub fn left(&self) -> Option<NodeKey> {
        self.left
    }

    pub fn right(&self) -> Option<NodeKey> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Child reached by following `bit` (`'0'` left, `'1'` right).
    pub(crate) fn child(&self, bit: Bit) -> Option<NodeKey> {
        match bit {
            Bit::Zero => self.left,
            Bit::One => self.right,
        }
    }
}

/// One step of a root-to-leaf path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bit {
    Zero,
    One,
}

impl Bit {
    pub(crate) fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub(crate) fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_leaf_creation() {
        let node = Node::leaf('x', 3);
        assert!(node.is_leaf());
        assert_eq!(node.symbol(), Some('x'));
        assert_eq!(node.frequency(), 3);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
    }

    #[test]
    fn test_internal_creation() {
        let mut arena = SlotMap::new();
        let a = arena.insert(Node::leaf('a', 2));
        let b = arena.insert(Node::leaf('b', 1));
        let parent = Node::internal(3, b, a);

        assert!(!parent.is_leaf());
        assert_eq!(parent.symbol(), None);
        assert_eq!(parent.child(Bit::Zero), Some(b));
        assert_eq!(parent.child(Bit::One), Some(a));
    }

    #[test]
    fn test_bit_chars() {
        assert_eq!(Bit::from_char('0'), Some(Bit::Zero));
        assert_eq!(Bit::from_char('1'), Some(Bit::One));
        assert_eq!(Bit::from_char('2'), None);
        assert_eq!(Bit::One.as_char(), '1');
    }
}
