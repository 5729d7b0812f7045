use letterboxed::{ChainSolver, LetterBox};
use log::info;
use wordsearch::{parse_var, Limits, PrefixTree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let lookup = |key: &'static str| dotenv::var(key).ok();
    let limits = Limits::from_env()?;
    let chain_length = parse_var(&lookup, "LETTERBOXED_CHAIN_LENGTH", 2)?;
    let min_word_length = parse_var(&lookup, "LETTERBOXED_MIN_WORD_LENGTH", 3)?;
    let box_words_only = lookup("LETTERBOXED_BOX_WORDS").is_some();

    let mut word_bank: Vec<String> = include_str!("../../lists/easy.txt")
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| word.chars().count() >= min_word_length)
        .collect();
    word_bank.sort();
    let tree: PrefixTree = word_bank.iter().collect();

    let letter_box: LetterBox = include_str!("letters.txt").parse()?;
    info!("Solving {}", letter_box);

    let mut box_words = letter_box.find_words(&tree);
    box_words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    if box_words_only {
        for word in &box_words {
            println!("{}", word);
        }
        return Ok(());
    }

    let solver = ChainSolver::new(&letter_box, box_words, chain_length, &limits)?;
    let mut count = 0;
    for solution in solver.solutions() {
        println!("{}", solution.join(" "));
        count += 1;
    }
    info!("Found {} solutions", count);

    Ok(())
}
