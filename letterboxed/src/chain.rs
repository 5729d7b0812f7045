use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use wordsearch::{LetterSet, Limits};

use crate::{LetterBox, Result};

struct Entry {
    word: String,
    letters: LetterSet,
    last: char,
}

/// Finds chains of words that use every letter of a box. Each word must start
/// with the last letter of the word before it and no word repeats in a chain.
///
/// The search is combinatorial in the number of words raised to the chain
/// length, so shrink the word list with [`LetterBox::find_words`] first.
pub struct ChainSolver {
    entries: Vec<Entry>,
    all: Vec<usize>,
    by_start: HashMap<char, Vec<usize>>,
    target: LetterSet,
    max_length: usize,
}

impl ChainSolver {
    /// Solutions come out in the order of `words`, so sort them beforehand
    /// (longest first finds the short chains soonest) for a stable output.
    /// A `max_length` of zero yields no solutions. Repeated words are kept
    /// once, at their first position.
    pub fn new<I, S>(letter_box: &LetterBox, words: I, max_length: usize, limits: &Limits) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        limits.check_chain_length(max_length)?;

        let mut seen = HashSet::new();
        let entries: Vec<Entry> = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| seen.insert(word.clone()))
            .filter_map(|word: String| {
                let last = word.chars().next_back()?;
                Some(Entry {
                    letters: LetterSet::from(word.as_str()),
                    word,
                    last,
                })
            })
            .collect();

        let mut by_start: HashMap<char, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            if let Some(first) = entry.word.chars().next() {
                by_start.entry(first).or_default().push(idx);
            }
        }

        debug!(
            "Chain solver over {} words, up to {} words per chain",
            entries.len(),
            max_length
        );

        Ok(ChainSolver {
            all: (0..entries.len()).collect(),
            entries,
            by_start,
            target: letter_box.letters(),
            max_length,
        })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn candidates(&self, start: Option<char>) -> &[usize] {
        match start {
            None => &self.all,
            Some(letter) => self.by_start.get(&letter).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    /// Lazily yields every solution of one up to `max_length` words.
    pub fn solutions(&self) -> Solutions<'_> {
        let stack = if self.max_length == 0 {
            vec![]
        } else {
            vec![Frame::new(None)]
        };
        Solutions {
            solver: self,
            chain: vec![],
            covered: vec![LetterSet::new()],
            stack,
        }
    }
}

/// One position in the chain: the words that may fill it and how far through
/// them the search is. Candidates are first checked as solutions, then
/// extended one word deeper.
struct Frame {
    start: Option<char>,
    pos: usize,
    extending: bool,
    solved: HashSet<usize>,
}

impl Frame {
    fn new(start: Option<char>) -> Self {
        Frame {
            start,
            pos: 0,
            extending: false,
            solved: HashSet::new(),
        }
    }
}

pub struct Solutions<'a> {
    solver: &'a ChainSolver,
    chain: Vec<usize>,
    // letters used by the chain, one entry per prefix of it
    covered: Vec<LetterSet>,
    stack: Vec<Frame>,
}

impl<'a> Solutions<'a> {
    fn words(&self) -> Vec<&'a str> {
        self.chain
            .iter()
            .map(|&idx| self.solver.entries[idx].word.as_str())
            .collect()
    }
}

impl<'a> Iterator for Solutions<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        let solver = self.solver;
        loop {
            let depth = self.chain.len();
            let frame = self.stack.last_mut()?;
            let candidates = solver.candidates(frame.start);

            if frame.pos >= candidates.len() {
                if frame.extending || depth + 1 >= solver.max_length {
                    self.stack.pop();
                    if self.chain.pop().is_some() {
                        self.covered.pop();
                    }
                } else {
                    frame.extending = true;
                    frame.pos = 0;
                }
                continue;
            }

            let idx = candidates[frame.pos];
            frame.pos += 1;
            if self.chain.contains(&idx) {
                continue;
            }

            let entry = &solver.entries[idx];
            let covered = self.covered[depth].union(&entry.letters);

            if !frame.extending {
                if covered == solver.target {
                    frame.solved.insert(idx);
                    let mut solution = self.words();
                    solution.push(&entry.word);
                    trace!("Solution: {:?}", solution);
                    return Some(solution);
                }
            } else if !frame.solved.contains(&idx) {
                self.chain.push(idx);
                self.covered.push(covered);
                self.stack.push(Frame::new(Some(entry.last)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn solve(letters: &str, words: &[&str], max_length: usize) -> Vec<Vec<String>> {
        let letter_box: LetterBox = letters.parse().unwrap();
        let solver = ChainSolver::new(&letter_box, words.iter().copied(), max_length, &Limits::default())
            .unwrap();
        solver
            .solutions()
            .map(|chain| chain.into_iter().map(str::to_owned).collect())
            .collect()
    }

    const WORDS: [&str; 4] = ["CHAMPION", "NERDS", "NODE", "ECHO"];

    #[test]
    fn test_two_word_solution() {
        assert_eq!(
            solve("CMO-HPE-AID-NRS", &WORDS, 2),
            vec![vec!["CHAMPION", "NERDS"]]
        );
    }

    #[test]
    fn test_solved_chains_not_extended() {
        assert_eq!(
            solve("CMO-HPE-AID-NRS", &WORDS, 4),
            vec![vec!["CHAMPION", "NERDS"]]
        );
    }

    #[test]
    fn test_single_word_solutions() {
        assert!(solve("CMO-HPE-AID-NRS", &WORDS, 1).is_empty());
        assert_eq!(
            solve("CHA-MPI-ON", &["CHAMPION", "CHAMP", "NOPE"], 1),
            vec![vec!["CHAMPION"]]
        );
    }

    #[test]
    fn test_zero_length() {
        assert!(solve("CMO-HPE-AID-NRS", &WORDS, 0).is_empty());
    }

    #[test]
    fn test_three_word_solution() {
        assert_eq!(solve("AB-CD-EF", &["ACE", "EBF", "FD"], 2), Vec::<Vec<String>>::new());
        assert_eq!(
            solve("AB-CD-EF", &["ACE", "EBF", "FD"], 3),
            vec![vec!["ACE", "EBF", "FD"]]
        );
    }

    #[test]
    fn test_no_repeated_words() {
        let solutions = solve("A-B-C", &["AB", "BA", "AC"], 5);
        assert_eq!(solutions, vec![vec!["AB", "BA", "AC"], vec!["BA", "AC"]]);

        for chain in &solutions {
            let unique: HashSet<&String> = chain.iter().collect();
            assert_eq!(unique.len(), chain.len());
        }
    }

    #[test]
    fn test_duplicate_words() {
        let solutions = solve("A-B-C", &["ABA", "ABA", "AC"], 3);
        assert_eq!(solutions, vec![vec!["ABA", "AC"]]);

        for chain in &solutions {
            let unique: HashSet<&String> = chain.iter().collect();
            assert_eq!(unique.len(), chain.len());
        }
    }

    #[test]
    fn test_cycles_terminate() {
        assert!(solve("A-B-C", &["AB", "BA"], 6).is_empty());
    }

    #[test]
    fn test_solutions_are_linked_and_covering() {
        let letter_box: LetterBox = "CMO-HPE-AID-NRS".parse().unwrap();
        let tree: wordsearch::PrefixTree = include_str!("../../lists/easy.txt")
            .lines()
            .map(|line| line.trim().to_uppercase())
            .collect();
        let mut words = letter_box.find_words(&tree);
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let solver = ChainSolver::new(&letter_box, words, 2, &Limits::default()).unwrap();
        let solutions: Vec<Vec<&str>> = solver.solutions().collect();

        assert!(solutions.contains(&vec!["CHAMPION", "NERDS"]));
        for chain in &solutions {
            assert!(letter_box.check_coverage(chain));
            assert!(chain.windows(2).all(|pair| pair[0].ends_with(&pair[1][..1])));
        }
    }

    #[test]
    fn test_deterministic() {
        let letter_box: LetterBox = "CMO-HPE-AID-NRS".parse().unwrap();
        let tree: wordsearch::PrefixTree = include_str!("../../lists/easy.txt")
            .lines()
            .map(|line| line.trim().to_uppercase())
            .collect();
        let mut words = letter_box.find_words(&tree);
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let solver = ChainSolver::new(&letter_box, words, 3, &Limits::default()).unwrap();
        let first: Vec<Vec<&str>> = solver.solutions().collect();
        let second: Vec<Vec<&str>> = solver.solutions().collect();

        assert!(!first.is_empty());
        assert_eq!(
            first.iter().collect::<HashSet<_>>(),
            second.iter().collect::<HashSet<_>>()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_early_stop() {
        let letter_box: LetterBox = "A-B-C".parse().unwrap();
        let solver =
            ChainSolver::new(&letter_box, ["AB", "BA", "AC"], 5, &Limits::default()).unwrap();
        assert_eq!(solver.solutions().next(), Some(vec!["AB", "BA", "AC"]));
    }

    #[test]
    fn test_excessive_length() {
        let letter_box: LetterBox = "A-B-C".parse().unwrap();
        let limits = Limits {
            max_chain_length: 3,
            ..Default::default()
        };
        assert!(matches!(
            ChainSolver::new(&letter_box, ["AB"], 4, &limits),
            Err(Error::Search(wordsearch::Error::ExcessiveSearchBound { .. }))
        ));
    }
}
