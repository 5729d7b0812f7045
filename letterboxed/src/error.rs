use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid letter grouping: {0}")]
    InvalidGrouping(String),

    #[error(transparent)]
    Search(#[from] wordsearch::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
