pub mod config;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod placement;
pub mod render;
pub mod rng;
pub mod word;

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

pub use config::{FillMode, Params};
pub use dictionary::Dictionary;
pub use error::{GenError, Result};
pub use grid::{Cell, Coord, Direction, Grid};
pub use word::Word;

use rng::{Rng, seed_from_str};

/// A finished puzzle: landscape grid anchored at (0, 0), fully filled, plus
/// the hidden words in placement order.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub seed: String,
    pub grid: Grid,
    pub words: Vec<Word>,
    /// Words dropped because no free run of cells was found.
    pub skipped: Vec<String>,
}

/// Serializable snapshot of a [`Puzzle`].
#[derive(Clone, Debug, Serialize)]
pub struct PuzzleDocument {
    pub seed: String,
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub words: Vec<Word>,
    pub skipped: Vec<String>,
}

impl Puzzle {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn document(&self) -> PuzzleDocument {
        PuzzleDocument {
            seed: self.seed.clone(),
            width: self.grid.width(),
            height: self.grid.height(),
            rows: self.grid.rows(),
            words: self.words.clone(),
            skipped: self.skipped.clone(),
        }
    }
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Generate with default parameters. `word_count` extra words are attempted
/// after the seed word; zero or less yields the seed word alone.
pub fn generate(word_count: i64, seed: &str, dictionary: &[String]) -> Result<Puzzle> {
    let dict = Dictionary::new(dictionary)?;
    generate_with(word_count, seed, &dict, &Params::default())
}

pub fn generate_with(word_count: i64, seed: &str, dict: &Dictionary, params: &Params) -> Result<Puzzle> {
    generate_timed(word_count, seed, dict, params).map(|(puzzle, _)| puzzle)
}

pub fn generate_timed(
    word_count: i64,
    seed: &str,
    dict: &Dictionary,
    params: &Params,
) -> Result<(Puzzle, Vec<Timing>)> {
    params.validate()?;
    let mut timings = Vec::new();
    let total_start = Instant::now();
    let seed_hash = seed_from_str(seed);

    // 1. Seed word + iterative placement
    let t = Instant::now();
    let mut rng = Rng::new(seed_hash);
    let layout = placement::place_words(word_count, dict, &mut rng, params);
    timings.push(Timing {
        name: "placement",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Filler
    let t = Instant::now();
    let mut grid = layout.grid;
    let filled = placement::fill::fill_empty(&mut grid, params.fill, seed_hash);
    timings.push(Timing {
        name: "fill",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 3. Normalize + landscape
    let t = Instant::now();
    let (grid, words) = placement::orient::orient(&grid, &layout.words);
    timings.push(Timing {
        name: "orient",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    log::info!(
        "seed={seed:?}: {}x{} grid, {} words, {} skipped, {filled} filler cells",
        grid.width(),
        grid.height(),
        words.len(),
        layout.skipped.len(),
    );

    let puzzle = Puzzle {
        seed: seed.to_string(),
        grid,
        words,
        skipped: layout.skipped,
    };
    Ok((puzzle, timings))
}

/// Independent puzzles for each seed, generated in parallel. Output order
/// matches `seeds`.
pub fn generate_batch<S>(seeds: &[S], word_count: i64, dict: &Dictionary, params: &Params) -> Result<Vec<Puzzle>>
where
    S: AsRef<str> + Sync,
{
    params.validate()?;
    seeds
        .par_iter()
        .map(|seed| generate_with(word_count, seed.as_ref(), dict, params))
        .collect()
}
