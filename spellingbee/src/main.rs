use std::str::FromStr;

use log::{debug, info};
use wordsearch::{parse_var, LetterSet};

const MIN_WORD_LENGTH: usize = 4;

/// The first letter must appear in every word; the rest may.
#[derive(Debug, PartialEq, Eq)]
struct LetterBank {
    required: LetterSet,
    allowed: LetterSet,
}

impl FromStr for LetterBank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s.trim().to_uppercase();
        let center = letters
            .chars()
            .next()
            .ok_or("No letters given".to_owned())?;
        let required: LetterSet = [center].into_iter().collect();
        let allowed = LetterSet::from(letters.as_str());

        if allowed.has_other() {
            return Err(format!("Unsupported letters in {}", s.trim()));
        }

        Ok(LetterBank { required, allowed })
    }
}

impl LetterBank {
    fn matches(&self, word: &str) -> bool {
        let letters = LetterSet::from(word);

        word.chars().count() >= MIN_WORD_LENGTH
            && self.required.is_subset(&letters)
            && letters.is_subset(&self.allowed)
    }
}

struct SpellingBeeSolver<'a> {
    letters: LetterBank,
    word_bank: Vec<&'a str>,
}

impl<'a> SpellingBeeSolver<'a> {
    fn new(letters: LetterBank, word_bank: Vec<&'a str>) -> Self {
        SpellingBeeSolver { letters, word_bank }
    }

    /// Matching words, longest first.
    fn solve(&self) -> Vec<&'a str> {
        let mut solution: Vec<&'a str> = self
            .word_bank
            .iter()
            .filter(|word| self.letters.matches(word))
            .copied()
            .collect();
        solution.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        debug!("{} words match", solution.len());
        solution
    }
}

/// Trimmed, uppercased words of a newline separated list.
fn load_word_bank(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let lookup = |key: &'static str| dotenv::var(key).ok();
    let show = parse_var(&lookup, "SPELLINGBEE_SHOW", 20)?;

    let word_bank = load_word_bank(include_str!("../../lists/easy.txt"));
    let letters: LetterBank = include_str!("letters.txt").parse()?;
    info!("Letters: {} (required {})", letters.allowed, letters.required);

    let solver = SpellingBeeSolver::new(letters, word_bank.iter().map(String::as_str).collect());
    let solution = solver.solve();

    println!("Solutions: {:?}", solution.iter().take(show).collect::<Vec<_>>());

    Ok(())
}
