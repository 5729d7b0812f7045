use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no stored word starts with {0:?}")]
    PrefixNotFound(String),

    #[error("{bound} of {value} exceeds the configured ceiling of {limit}")]
    ExcessiveSearchBound {
        bound: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
