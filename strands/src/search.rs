use std::{collections::HashMap, ops::Range};

use indicatif::ProgressBar;
use log::{debug, trace};
use rayon::prelude::*;
use wordsearch::{Limits, PrefixTree};

use crate::{grid::DIRECTIONS, Coord, Grid, Result};

/// A word and the cells that spell it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordPath {
    pub word: String,
    pub path: Vec<Coord>,
}

/// Every path found for each word.
pub type Solutions = HashMap<String, Vec<Vec<Coord>>>;

struct Frame<'t> {
    // trie node for the letters along the path, last cell included
    node: &'t PrefixTree,
    direction: usize,
}

/// Lazy depth-first search for words spelled along simple paths of the grid.
///
/// Start cells are tried in row-major order and neighbors in row-major order
/// around the current cell. A branch is dropped as soon as its letters stop
/// being a prefix of some word, and a path keeps growing after it spells a
/// word so longer words through the same cells are found too.
pub struct PathSearch<'g, 't> {
    grid: &'g Grid,
    root: &'t PrefixTree,
    starts: Range<usize>,
    path: Vec<Coord>,
    visited: Vec<bool>,
    stack: Vec<Frame<'t>>,
}

impl<'g, 't> PathSearch<'g, 't> {
    fn new(grid: &'g Grid, root: &'t PrefixTree, starts: Range<usize>) -> Self {
        PathSearch {
            grid,
            root,
            starts,
            path: vec![],
            visited: vec![false; grid.len()],
            stack: vec![],
        }
    }

    fn enter(&mut self, coord: Coord, node: &'t PrefixTree) -> Option<WordPath> {
        self.path.push(coord);
        self.visited[self.grid.index_of(coord)] = true;
        self.stack.push(Frame { node, direction: 0 });

        node.is_word().then(|| WordPath {
            word: node.prefix().to_owned(),
            path: self.path.clone(),
        })
    }

    fn leave(&mut self) {
        self.stack.pop();
        if let Some(coord) = self.path.pop() {
            let idx = self.grid.index_of(coord);
            self.visited[idx] = false;
        }
    }
}

impl<'g, 't> Iterator for PathSearch<'g, 't> {
    type Item = WordPath;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        loop {
            let Some(frame) = self.stack.last_mut() else {
                let coord = grid.coord_of(self.starts.next()?);
                if let Some(child) = self.root.child(grid[coord]) {
                    if let Some(found) = self.enter(coord, child) {
                        return Some(found);
                    }
                }
                continue;
            };

            if frame.direction >= DIRECTIONS.len() {
                self.leave();
                continue;
            }

            let direction = frame.direction;
            frame.direction += 1;
            let node = frame.node;

            let Some(current) = self.path.last().copied() else {
                continue;
            };
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            if self.visited[grid.index_of(next)] {
                continue;
            }
            if let Some(child) = node.child(grid[next]) {
                if let Some(found) = self.enter(next, child) {
                    return Some(found);
                }
            }
        }
    }
}

impl Grid {
    /// Lazily yields every word of `tree` spelled by a path that never
    /// revisits a cell, one item per path.
    pub fn words<'g, 't>(&'g self, tree: &'t PrefixTree, limits: &Limits) -> Result<PathSearch<'g, 't>> {
        limits.check_grid(self.rows(), self.cols())?;
        Ok(PathSearch::new(self, tree, 0..self.len()))
    }

    /// Collects every path for every word, searching start cells in parallel.
    /// Paths for each word are in the same order `words` yields them.
    pub fn solve(&self, tree: &PrefixTree, limits: &Limits, show_progress: bool) -> Result<Solutions> {
        limits.check_grid(self.rows(), self.cols())?;

        let progress_bar = if show_progress {
            ProgressBar::new(self.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        let found: Vec<Vec<WordPath>> = (0..self.len())
            .into_par_iter()
            .map(|start| {
                let found: Vec<WordPath> = PathSearch::new(self, tree, start..start + 1).collect();
                trace!("Found {} paths from {}", found.len(), self.coord_of(start));
                progress_bar.inc(1);
                found
            })
            .collect();
        progress_bar.finish_and_clear();

        let mut solutions = Solutions::new();
        for WordPath { word, path } in found.into_iter().flatten() {
            solutions.entry(word).or_default().push(path);
        }
        debug!("Found {} distinct words in the grid", solutions.len());
        Ok(solutions)
    }
}
