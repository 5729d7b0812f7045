use log::debug;

use crate::{Error, Result};

pub const MAX_CHAIN_LENGTH_VAR: &str = "PUZZLE_MAX_CHAIN_LENGTH";
pub const MAX_GRID_ROWS_VAR: &str = "PUZZLE_MAX_GRID_ROWS";
pub const MAX_GRID_COLS_VAR: &str = "PUZZLE_MAX_GRID_COLS";

/// Ceilings on the combinatorial searches. Chain search grows with the
/// branching factor raised to the chain length and grid search with the
/// number of cells, so both are checked before a search starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_chain_length: usize,
    pub max_grid_rows: usize,
    pub max_grid_cols: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_chain_length: 6,
            max_grid_rows: 16,
            max_grid_cols: 16,
        }
    }
}

impl Limits {
    /// Reads overrides from the process environment, including a `.env` file
    /// in the working directory.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Limits::default();
        let limits = Limits {
            max_chain_length: parse_var(&lookup, MAX_CHAIN_LENGTH_VAR, defaults.max_chain_length)?,
            max_grid_rows: parse_var(&lookup, MAX_GRID_ROWS_VAR, defaults.max_grid_rows)?,
            max_grid_cols: parse_var(&lookup, MAX_GRID_COLS_VAR, defaults.max_grid_cols)?,
        };
        debug!("Search limits: {:?}", limits);
        Ok(limits)
    }

    pub fn check_chain_length(&self, max_length: usize) -> Result<()> {
        check("chain length", max_length, self.max_chain_length)
    }

    pub fn check_grid(&self, rows: usize, cols: usize) -> Result<()> {
        check("grid rows", rows, self.max_grid_rows)?;
        check("grid columns", cols, self.max_grid_cols)
    }
}

fn check(bound: &'static str, value: usize, limit: usize) -> Result<()> {
    if value > limit {
        return Err(Error::ExcessiveSearchBound {
            bound,
            value,
            limit,
        });
    }
    Ok(())
}

/// Parses an optional numeric variable, falling back to `default` when unset.
pub fn parse_var<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig { key, value }),
    }
}
