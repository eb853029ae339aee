use crate::grid::Grid;
use crate::word::Word;

/// Move the grid and word paths to a (0, 0) origin, then turn the result a
/// quarter when it is taller than wide so the output is always landscape.
pub fn orient(grid: &Grid, words: &[Word]) -> (Grid, Vec<Word>) {
    let normalized = grid.normalize();
    let words = grid.normalize_words(words);

    if normalized.height() <= normalized.width() {
        return (normalized, words);
    }

    let width = normalized.width();
    log::debug!(
        "rotating {}x{} grid to landscape",
        width,
        normalized.height()
    );
    let rotated = normalized.rotate_quarter();
    let words = words.iter().map(|w| w.rotated(width)).collect();
    (rotated, words)
}
