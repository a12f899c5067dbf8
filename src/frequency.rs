use ahash::AHashMap as HashMap;

/// Occurrence counts of every distinct symbol in a text.
///
/// Entries keep the order in which each symbol was first seen, which is the
/// order leaves enter the tree builder.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Symbol to position in `entries`
    index: HashMap<char, usize>,

    /// (symbol, count) in first-occurrence order
    entries: Vec<(char, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every character of `text`, whitespace included.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Records one more occurrence of `symbol`.
    pub fn push(&mut self, symbol: char) {
        let next = self.entries.len();
        let pos = *self.index.entry(symbol).or_insert(next);
        if pos == next {
            self.entries.push((symbol, 1));
        } else {
            self.entries[pos].1 += 1;
        }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `symbol`, or 0 if it never occurred.
    pub fn frequency(&self, symbol: char) -> usize {
        self.index
            .get(&symbol)
            .map_or(0, |&pos| self.entries[pos].1)
    }

    /// Sum of all counts, i.e. the length of the text in characters.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries sorted by symbol.
    pub fn sorted(&self) -> Vec<(char, usize)> {
        let mut entries = self.entries.clone();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

impl Extend<char> for FrequencyTable {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for symbol in iter {
            self.push(symbol);
        }
    }
}
