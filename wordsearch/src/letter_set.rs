use std::fmt::Display;

/// Bit recording that a letter outside `A..=Z` was added.
const OTHER: u32 = 1 << 26;

/// Set of uppercase letters packed into a bitmask.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> Self {
        LetterSet(0)
    }

    fn bit(letter: char) -> u32 {
        if letter.is_ascii_uppercase() {
            1 << (letter as u32 - 'A' as u32)
        } else {
            OTHER
        }
    }

    pub fn add(&mut self, letter: char) {
        self.0 |= Self::bit(letter);
    }

    pub fn has(&self, letter: char) -> bool {
        let bit = Self::bit(letter);
        bit != OTHER && (self.0 & bit) > 0
    }

    pub fn remove(&mut self, letter: char) {
        self.0 &= !Self::bit(letter);
    }

    /// True if a letter outside `A..=Z` was ever added.
    pub fn has_other(&self) -> bool {
        (self.0 & OTHER) > 0
    }

    /// Number of letters from A to Z in the set.
    pub fn len(&self) -> usize {
        (self.0 & !OTHER).count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    pub fn intersection(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 & other.0)
    }

    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn values(&self) -> impl Iterator<Item = char> {
        let value = self.0;
        ('A'..='Z').filter(move |&c| value & Self::bit(c) > 0)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = LetterSet::new();
        iter.into_iter().for_each(|c| set.add(c));
        set
    }
}

impl From<&str> for LetterSet {
    fn from(word: &str) -> Self {
        word.chars().collect()
    }
}

impl Display for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: String = self.values().collect();
        f.write_str(&letters)?;
        if self.has_other() {
            f.write_str("?")?;
        }
        Ok(())
    }
}
