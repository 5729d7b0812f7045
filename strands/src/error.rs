use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    #[error(transparent)]
    Search(#[from] wordsearch::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
