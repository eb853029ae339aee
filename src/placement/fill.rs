use rand::Rng as _;

use crate::config::FillMode;
use crate::grid::Grid;
use crate::rng::{Rng, derive};

const SALT_FILL: u64 = 0x6F11_E700_CAFE_0001;
const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Give every empty cell inside the bounding box a random A-Z letter.
/// Filler cells carry no direction. Returns the number of cells filled.
pub fn fill_empty(grid: &mut Grid, mode: FillMode, seed: u64) -> usize {
    match mode {
        FillMode::Seeded => {
            let mut rng = Rng::new(derive(seed, SALT_FILL));
            fill_with(grid, || ALPHABET[rng.index(ALPHABET.len())] as char)
        }
        FillMode::Ambient => {
            let mut rng = rand::rng();
            fill_with(grid, || ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        }
    }
}

fn fill_with(grid: &mut Grid, mut letter: impl FnMut() -> char) -> usize {
    let Some(b) = grid.bounds() else {
        return 0;
    };
    let mut filled = 0;
    for y in b.min_y..=b.max_y {
        for x in b.min_x..=b.max_x {
            if !grid.is_occupied(x, y) {
                grid.add_char(x, y, letter(), None);
                filled += 1;
            }
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn corners() -> Grid {
        let mut g = Grid::new();
        g.add_char(-2, -1, 'Q', Some(Direction::Right));
        g.add_char(3, 2, 'Z', Some(Direction::Down));
        g
    }

    #[test]
    fn fills_every_gap_in_bounds() {
        let mut g = corners();
        let filled = fill_empty(&mut g, FillMode::Seeded, 1);
        assert_eq!(filled, 6 * 4 - 2);
        assert_eq!(g.width(), 6);
        assert_eq!(g.height(), 4);
        for y in -1..=2 {
            for x in -2..=3 {
                let ch = g.get_char(x, y).unwrap();
                assert!(ch.is_ascii_uppercase());
            }
        }
        assert_eq!(g.get_char(-2, -1), Some('Q'));
        assert_eq!(g.get_cell(0, 0).unwrap().direction, None);
    }

    #[test]
    fn seeded_fill_is_reproducible() {
        let mut a = corners();
        let mut b = corners();
        fill_empty(&mut a, FillMode::Seeded, 99);
        fill_empty(&mut b, FillMode::Seeded, 99);
        assert_eq!(a.rows(), b.rows());
    }

    #[test]
    fn ambient_fill_still_covers_grid() {
        let mut g = corners();
        fill_empty(&mut g, FillMode::Ambient, 0);
        assert_eq!(g.len(), 24);
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut g = Grid::new();
        assert_eq!(fill_empty(&mut g, FillMode::Seeded, 0), 0);
        assert!(g.is_empty());
    }
}
