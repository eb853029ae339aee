use crate::error::{GenError, Result};
use crate::grid::{Coord, Direction, Grid};
use crate::word::Word;

/// Write `text` into the grid starting at `start`, one letter per step in
/// `dir`.
///
/// An occupied cell (any character, even the same letter) is skipped and the
/// same letter is retried one step further on, so the word slides past
/// obstructions. Only successful coordinates are recorded. Each skipped cell
/// counts as a probe; after `max_probes` of them the word is abandoned with
/// `PlacementExhausted`. Letters already written stay in the grid.
pub fn insert_word(
    grid: &mut Grid,
    text: &str,
    dir: Direction,
    start: Coord,
    max_probes: Option<usize>,
) -> Result<Word> {
    let mut coords = Vec::with_capacity(text.len());
    let mut at = start;
    let mut probes = 0usize;

    for ch in text.chars() {
        loop {
            let here = at;
            at = at.step(dir);
            if grid.add_char(here.x, here.y, ch, Some(dir)) {
                coords.push(here);
                break;
            }
            probes += 1;
            if max_probes.is_some_and(|cap| probes >= cap) {
                return Err(GenError::PlacementExhausted {
                    word: text.to_string(),
                    probes,
                });
            }
        }
    }

    Ok(Word::new(text, coords))
}
