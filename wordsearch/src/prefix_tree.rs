use std::collections::BTreeMap;

use log::{debug, log_enabled, warn, Level};

use crate::{Error, Result};

/// Prefix tree of words, one letter per edge.
///
/// Every node knows the letters spelled from the root (`prefix`), whether
/// that prefix was inserted as a complete word, and how many words were
/// inserted into its subtree. A word may also be the prefix of other words,
/// so word nodes can have children.
///
/// ```text
///      ROOT
///     /    \
///     B     T
///     |     |
///     A     R
///     |    / \
///     T    E  Y
///          |
///          E
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrefixTree {
    prefix: String,
    is_word: bool,
    word_count: usize,
    children: BTreeMap<char, PrefixTree>,
}

impl PrefixTree {
    pub fn new() -> Self {
        PrefixTree::default()
    }

    fn with_prefix(prefix: &str) -> Self {
        PrefixTree {
            prefix: prefix.to_owned(),
            ..Default::default()
        }
    }

    /// Adds a word, creating nodes along its path as needed. Inserting the same
    /// word twice counts it twice in `len` but marks a single word node.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            warn!("Ignoring empty word");
            return;
        }

        let mut node = self;
        node.word_count += 1;
        for (idx, letter) in word.char_indices() {
            let end = idx + letter.len_utf8();
            node = node
                .children
                .entry(letter)
                .or_insert_with(|| PrefixTree::with_prefix(&word[..end]));
            node.word_count += 1;
        }
        node.is_word = true;
    }

    /// Follows `prefix` down from this node.
    pub fn descend(&self, prefix: &str) -> Result<&PrefixTree> {
        prefix
            .chars()
            .try_fold(self, |node, letter| node.child(letter))
            .ok_or_else(|| Error::PrefixNotFound(prefix.to_owned()))
    }

    pub fn get(&self, prefix: &str) -> Option<&PrefixTree> {
        self.descend(prefix).ok()
    }

    pub fn child(&self, letter: char) -> Option<&PrefixTree> {
        self.children.get(&letter)
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &PrefixTree)> {
        self.children.iter().map(|(&letter, child)| (letter, child))
    }

    /// True if some stored word starts with `prefix`, the word itself included.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_ok()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.get(word).is_some_and(|node| node.is_word)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Number of insertions into this subtree, duplicates included.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Word nodes of this subtree, depth first, children in letter order.
    pub fn iter(&self) -> Words<'_> {
        Words { stack: vec![self] }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut tree = PrefixTree::new();
        iter.into_iter().for_each(|word| tree.insert(word.as_ref()));
        if log_enabled!(Level::Debug) {
            debug!(
                "Built prefix tree from {} words ({} distinct)",
                tree.len(),
                tree.iter().count()
            );
        }
        tree
    }
}

impl<'a> IntoIterator for &'a PrefixTree {
    type Item = &'a PrefixTree;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Words<'a> {
    stack: Vec<&'a PrefixTree>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a PrefixTree;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values().rev());
            if node.is_word {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> PrefixTree {
        ["BAT", "TREE", "TRY", "TRYST", "BATS"].into_iter().collect()
    }

    fn words(tree: &PrefixTree) -> Vec<&str> {
        tree.iter().map(|node| node.prefix()).collect()
    }

    mod insert {
        use super::*;

        #[test]
        fn test_counts() {
            let tree = tree();
            assert_eq!(tree.len(), 5);
            assert_eq!(tree.get("T").unwrap().len(), 3);
            assert_eq!(tree.get("TRY").unwrap().len(), 2);
            assert_eq!(tree.get("TRYST").unwrap().len(), 1);
        }

        #[test]
        fn test_prefixes_match_depth() {
            let tree = tree();
            let node = tree.get("TRE").unwrap();
            assert_eq!(node.prefix(), "TRE");
            assert!(!node.is_word());
            assert_eq!(tree.prefix(), "");
        }

        #[test]
        fn test_duplicates() {
            let mut tree = tree();
            tree.insert("BAT");

            assert_eq!(tree.len(), 6);
            assert_eq!(tree.get("BAT").unwrap().len(), 3);
            assert_eq!(words(&tree).iter().filter(|&&w| w == "BAT").count(), 1);
        }

        #[test]
        fn test_empty_word_ignored() {
            let mut tree = PrefixTree::new();
            tree.insert("");
            assert!(tree.is_empty());
            assert!(!tree.is_word());
            assert_eq!(tree.iter().count(), 0);
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn test_descend() {
            let tree = tree();
            let node = tree.descend("TR").unwrap();
            assert_eq!(words(node), vec!["TREE", "TRY", "TRYST"]);

            assert_eq!(
                tree.descend("TRX").unwrap_err(),
                Error::PrefixNotFound("TRX".to_owned())
            );
            assert_eq!(tree.descend("").unwrap().len(), tree.len());
        }

        #[test]
        fn test_contains_prefix() {
            let tree = tree();
            assert!(tree.contains_prefix("B"));
            assert!(tree.contains_prefix("TRYST"));
            assert!(!tree.contains_prefix("TRYSTS"));
            assert!(!tree.contains_prefix("Z"));
            for word in ["BAT", "TREE", "TRY", "TRYST", "BATS"] {
                assert!(tree.contains_prefix(word));
            }
        }

        #[test]
        fn test_contains_word() {
            let tree = tree();
            assert!(tree.contains_word("TRY"));
            assert!(!tree.contains_word("TR"));
            assert!(!tree.contains_word("TRYSTS"));
        }

        #[test]
        fn test_child() {
            let tree = tree();
            let b = tree.child('B').unwrap();
            assert_eq!(b.prefix(), "B");
            assert!(b.child('A').is_some());
            assert!(b.child('E').is_none());
            assert_eq!(
                tree.children().map(|(letter, _)| letter).collect::<Vec<_>>(),
                vec!['B', 'T']
            );
        }
    }

    mod iterate {
        use super::*;

        #[test]
        fn test_depth_first_order() {
            let tree: PrefixTree = ["TRY", "BATS", "TREE", "BAT", "TRYST"].into_iter().collect();
            assert_eq!(words(&tree), vec!["BAT", "BATS", "TREE", "TRY", "TRYST"]);
        }

        #[test]
        fn test_restartable() {
            let tree = tree();
            assert_eq!(words(&tree), words(&tree));
            assert_eq!((&tree).into_iter().count(), 5);
        }

        #[test]
        fn test_early_stop() {
            let tree = tree();
            let first: Vec<&str> = tree.iter().take(2).map(|node| node.prefix()).collect();
            assert_eq!(first, vec!["BAT", "BATS"]);
        }

        #[test]
        fn test_subtree() {
            let tree = tree();
            assert_eq!(words(tree.get("TRY").unwrap()), vec!["TRY", "TRYST"]);
        }
    }
}
