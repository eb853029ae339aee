use crate::grid::{Coord, Direction, Grid};
use crate::rng::Rng;

/// Anchor and direction for a word hooked onto an existing letter.
///
/// Picks a random occupied cell. A tagged cell steers the new word onto the
/// crossing axis; an untagged one allows any direction. The anchor is then
/// jittered across the word's axis by up to half its length so the word
/// tends to run through existing letters instead of starting on one.
/// Returns `None` on an empty grid.
pub fn attach_anchor(grid: &Grid, word_len: usize, rng: &mut Rng) -> Option<(Coord, Direction)> {
    if grid.is_empty() {
        return None;
    }
    let point = grid.coord_at(rng.index(grid.len()))?;
    let cell = grid.get_cell(point.x, point.y)?;

    let dir = match cell.direction {
        Some(existing) => existing.perpendicular()[rng.index(2)],
        None => Direction::ALL[rng.index(Direction::ALL.len())],
    };

    let fuzz = (word_len / 2) as i32;
    let offset = rng.range_i32(-fuzz, fuzz);
    let anchor = if dir.is_horizontal() {
        Coord::new(point.x, point.y + offset)
    } else {
        Coord::new(point.x + offset, point.y)
    };

    Some((anchor, dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_anchor() {
        let mut rng = Rng::new(1);
        assert!(attach_anchor(&Grid::new(), 4, &mut rng).is_none());
    }

    #[test]
    fn tagged_cells_force_crossing_direction() {
        let mut g = Grid::new();
        g.add_char(0, 0, 'A', Some(Direction::Right));
        let mut rng = Rng::new(42);
        for _ in 0..200 {
            let (anchor, dir) = attach_anchor(&g, 6, &mut rng).unwrap();
            assert!(!dir.is_horizontal());
            assert_eq!(anchor.y, 0);
            assert!((-3..=3).contains(&anchor.x));
        }
    }

    #[test]
    fn fuzz_moves_across_the_word_axis() {
        let mut g = Grid::new();
        g.add_char(10, 10, 'A', Some(Direction::Up));
        let mut rng = Rng::new(7);
        let mut offsets = std::collections::HashSet::new();
        for _ in 0..200 {
            let (anchor, dir) = attach_anchor(&g, 5, &mut rng).unwrap();
            assert!(dir.is_horizontal());
            assert_eq!(anchor.x, 10);
            offsets.insert(anchor.y - 10);
        }
        assert_eq!(offsets.len(), 5);
    }

    #[test]
    fn single_letter_words_are_not_fuzzed() {
        let mut g = Grid::new();
        g.add_char(3, 4, 'A', Some(Direction::Down));
        let mut rng = Rng::new(3);
        for _ in 0..50 {
            let (anchor, _) = attach_anchor(&g, 1, &mut rng).unwrap();
            assert_eq!(anchor, Coord::new(3, 4));
        }
    }

    #[test]
    fn untagged_cells_allow_any_direction() {
        let mut g = Grid::new();
        g.add_char(0, 0, 'A', None);
        let mut rng = Rng::new(11);
        let mut horizontal = false;
        let mut vertical = false;
        for _ in 0..100 {
            let (_, dir) = attach_anchor(&g, 3, &mut rng).unwrap();
            if dir.is_horizontal() {
                horizontal = true;
            } else {
                vertical = true;
            }
        }
        assert!(horizontal && vertical);
    }
}
