pub mod attach;
pub mod fill;
pub mod free;
pub mod insert;
pub mod orient;

use crate::config::Params;
use crate::dictionary::Dictionary;
use crate::error::GenError;
use crate::grid::{Coord, Direction, Grid};
use crate::rng::Rng;
use crate::word::Word;

/// Outcome of the placement phase, before fill and orientation.
#[derive(Clone, Debug)]
pub struct Layout {
    pub grid: Grid,
    pub words: Vec<Word>,
    /// Words abandoned after running out of probes.
    pub skipped: Vec<String>,
}

/// Place the seed word through the origin, then `word_count` more words,
/// each either hooked onto an existing letter or dropped into the interior.
///
/// Draw order per extra word: word, attach roll, then the anchor draws of
/// whichever strategy runs.
pub fn place_words(word_count: i64, dict: &Dictionary, rng: &mut Rng, params: &Params) -> Layout {
    let mut grid = Grid::new();
    let mut words = Vec::new();
    let mut skipped = Vec::new();

    let first = dict.pick(rng);
    let first_dir = Direction::ALL[rng.index(Direction::ALL.len())];
    // Nothing to collide with yet, so no cap.
    if let Ok(word) = insert::insert_word(&mut grid, first, first_dir, Coord::new(0, 0), None) {
        log::debug!("seed word {} {:?}", word.text, first_dir);
        words.push(word);
    }

    for _ in 0..word_count.max(0) {
        let text = dict.pick(rng);
        let attach = rng.chance(params.attach_chance);

        let hooked = if attach {
            attach::attach_anchor(&grid, text.len(), rng)
        } else {
            None
        };
        let (anchor, dir) = match hooked {
            Some(found) => found,
            None => free::free_anchor(&grid, rng, params),
        };

        match insert::insert_word(&mut grid, text, dir, anchor, Some(params.max_probes)) {
            Ok(word) => {
                log::debug!(
                    "placed {} {:?} from ({}, {}){}",
                    word.text,
                    dir,
                    anchor.x,
                    anchor.y,
                    if hooked.is_some() { " attached" } else { "" }
                );
                words.push(word);
            }
            Err(GenError::PlacementExhausted { word, probes }) => {
                log::warn!("skipping '{word}': no room after {probes} probes");
                skipped.push(word);
            }
            Err(e) => log::warn!("skipping '{text}': {e}"),
        }
    }

    Layout {
        grid,
        words,
        skipped,
    }
}
