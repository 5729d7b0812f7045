use std::{fmt::Display, str::FromStr};

use log::debug;
use wordsearch::{LetterSet, PrefixTree};

use crate::{Error, Result};

/// Letters grouped onto the sides of a box. Consecutive letters of a word
/// must come from different sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBox {
    sides: Vec<Vec<char>>,
    letters: LetterSet,
}

impl LetterBox {
    /// Every side must be non-empty and no letter may appear twice, so each
    /// letter belongs to exactly one side.
    pub fn new(sides: Vec<Vec<char>>) -> Result<Self> {
        if sides.is_empty() {
            return Err(Error::InvalidGrouping("no sides".to_owned()));
        }

        let mut letters = LetterSet::new();
        for (idx, side) in sides.iter().enumerate() {
            if side.is_empty() {
                return Err(Error::InvalidGrouping(format!("side {} is empty", idx)));
            }
            for &letter in side {
                if !letter.is_ascii_uppercase() {
                    return Err(Error::InvalidGrouping(format!(
                        "{:?} is not a letter from A to Z",
                        letter
                    )));
                }
                if letters.has(letter) {
                    return Err(Error::InvalidGrouping(format!(
                        "{} appears more than once",
                        letter
                    )));
                }
                letters.add(letter);
            }
        }

        debug!("Letter box with {} sides covering {}", sides.len(), letters);
        Ok(LetterBox { sides, letters })
    }

    pub fn sides(&self) -> &[Vec<char>] {
        &self.sides
    }

    /// The target alphabet: every letter on every side.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    pub fn side_of(&self, letter: char) -> Option<usize> {
        self.sides.iter().position(|side| side.contains(&letter))
    }

    /// The side of `letter`, unless it is on no side or on the `exclude` side.
    pub fn check_letter(&self, letter: char, exclude: Option<usize>) -> Option<usize> {
        self.side_of(letter).filter(|&side| Some(side) != exclude)
    }

    /// True if the words together use exactly the letters of the box.
    pub fn check_coverage<S: AsRef<str>>(&self, words: &[S]) -> bool {
        words
            .iter()
            .flat_map(|word| word.as_ref().chars())
            .collect::<LetterSet>()
            == self.letters
    }

    /// Lazily walks `tree`, yielding every word whose consecutive letters sit on
    /// different sides. A word is yielded even when longer words extend it.
    pub fn words<'t>(&self, tree: &'t PrefixTree) -> BoxWords<'_, 't> {
        BoxWords {
            letter_box: self,
            stack: vec![(tree, None)],
        }
    }

    /// All words of `tree` that can be spelled on this box, in no particular order.
    pub fn find_words(&self, tree: &PrefixTree) -> Vec<String> {
        let words: Vec<String> = self.words(tree).map(str::to_owned).collect();
        debug!("Found {} words that fit the box", words.len());
        words
    }
}

impl FromStr for LetterBox {
    type Err = Error;

    /// Parses sides separated by dashes, e.g. `ABC-DEF-GHI-JKL`.
    fn from_str(s: &str) -> Result<Self> {
        let sides = s
            .trim()
            .split('-')
            .map(|side| side.trim().chars().map(|c| c.to_ascii_uppercase()).collect())
            .collect();
        LetterBox::new(sides)
    }
}

impl Display for LetterBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sides = self
            .sides
            .iter()
            .map(|side| side.iter().collect::<String>())
            .collect::<Vec<String>>()
            .join("-");
        f.write_str(&sides)
    }
}

pub struct BoxWords<'b, 't> {
    letter_box: &'b LetterBox,
    stack: Vec<(&'t PrefixTree, Option<usize>)>,
}

impl<'b, 't> Iterator for BoxWords<'b, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, exclude)) = self.stack.pop() {
            let letter_box = self.letter_box;
            self.stack.extend(node.children().rev().filter_map(|(letter, child)| {
                letter_box
                    .check_letter(letter, exclude)
                    .map(|side| (child, Some(side)))
            }));
            if node.is_word() {
                return Some(node.prefix());
            }
        }
        None
    }
}
