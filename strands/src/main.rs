use log::info;
use strands::Grid;
use wordsearch::{parse_var, Limits, PrefixTree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let lookup = |key: &'static str| dotenv::var(key).ok();
    let limits = Limits::from_env()?;
    let min_word_length = parse_var(&lookup, "STRANDS_MIN_WORD_LENGTH", 4)?;
    let show = parse_var(&lookup, "STRANDS_SHOW", 10)?;
    let show_progress = lookup("STRANDS_PROGRESS").is_some();

    let tree: PrefixTree = include_str!("../../lists/easy.txt")
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| word.chars().count() >= min_word_length)
        .collect();

    let grid: Grid = include_str!("puzzle.txt").parse()?;
    info!("Solving grid:\n{}", grid);

    let solutions = grid.solve(&tree, &limits, show_progress)?;

    let mut words: Vec<&String> = solutions.keys().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    for word in words.into_iter().take(show) {
        let paths = &solutions[word];
        if let Some(start) = paths.first().and_then(|path| path.first()) {
            println!("{} {} ({} paths)", word, start, paths.len());
        }
    }

    Ok(())
}
